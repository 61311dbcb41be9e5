//! Route Gate Use Case
//!
//! Runs before any page code on every navigation. Presence-only: a
//! non-empty access token counts as authenticated here; whether it is
//! still fresh is the freshness check's concern.

use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::domain::credential::{CredentialKey, CredentialStore};
use crate::domain::decision::{GateDecision, decide};

/// Route gate use case
pub struct RouteGateUseCase {
    config: Arc<SessionConfig>,
}

impl RouteGateUseCase {
    pub fn new(config: Arc<SessionConfig>) -> Self {
        Self { config }
    }

    /// Decide whether `path` may proceed given the store's contents
    pub fn evaluate<S>(&self, path: &str, store: &S) -> GateDecision
    where
        S: CredentialStore + ?Sized,
    {
        let classification = self.config.routes.classify(path);
        let has_credential = store.contains(CredentialKey::AccessToken);

        let decision = decide(
            classification,
            path,
            has_credential,
            &self.config.login_path,
            &self.config.root_path,
        );

        tracing::debug!(
            path,
            public = classification.public,
            auth_only = classification.auth_only,
            has_credential,
            decision = %decision,
            "Route gate evaluated"
        );

        decision
    }
}
