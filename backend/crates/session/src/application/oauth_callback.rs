//! OAuth Callback Use Case
//!
//! One-shot completion of the OAuth handshake: no retries, no timeout of
//! its own. Failures are logged and turned into a login redirect carrying
//! an error marker; the raw error never reaches the user.

use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::domain::credential::CredentialStore;
use crate::domain::decision::login_error;
use crate::domain::exchange::{OAuthCallbackParams, OAuthExchange};

/// Error marker for a failed exchange
pub const OAUTH_FAILED: &str = "oauth_failed";

/// OAuth callback use case
pub struct OAuthCallbackUseCase<E>
where
    E: OAuthExchange,
{
    exchange: Arc<E>,
    config: Arc<SessionConfig>,
}

impl<E> OAuthCallbackUseCase<E>
where
    E: OAuthExchange,
{
    pub fn new(exchange: Arc<E>, config: Arc<SessionConfig>) -> Self {
        Self { exchange, config }
    }

    /// Complete the exchange and return where to navigate next
    pub async fn execute<S>(&self, params: &OAuthCallbackParams, store: &mut S) -> String
    where
        S: CredentialStore + ?Sized,
    {
        match self.exchange.handle_callback(params).await {
            Ok(Some(tokens)) => {
                tokens.persist(store);
                tracing::info!("OAuth exchange completed");
                self.config.root_path.clone()
            }
            Ok(None) => {
                tracing::info!("OAuth callback carried no usable response");
                self.config.login_path.clone()
            }
            Err(e) => {
                e.log();
                login_error(&self.config.login_path, OAUTH_FAILED)
            }
        }
    }
}
