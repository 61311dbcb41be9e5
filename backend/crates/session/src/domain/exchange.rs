//! OAuth Exchange
//!
//! The identity backend performs the actual OAuth handshake. This crate
//! only forwards what the provider sent to the callback URL.

use serde::Deserialize;

use crate::domain::credential::TokenPair;
use crate::error::SessionResult;

/// Parameters the provider appends to the callback URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OAuthCallbackParams {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl OAuthCallbackParams {
    /// Whether the provider sent anything the exchange can act on
    pub fn is_recognizable(&self) -> bool {
        self.code.as_deref().is_some_and(|c| !c.is_empty()) || self.error.is_some()
    }
}

/// Collaborator that completes the OAuth handshake
///
/// - `Ok(Some(tokens))`: exchange succeeded
/// - `Ok(None)`: nothing usable came back
/// - `Err(_)`: the exchange failed
#[trait_variant::make(OAuthExchange: Send)]
pub trait LocalOAuthExchange {
    async fn handle_callback(&self, params: &OAuthCallbackParams) -> SessionResult<Option<TokenPair>>;
}
