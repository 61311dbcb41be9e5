//! Sign Out Use Case
//!
//! Unconditionally deletes both credentials. Any confirmation step is the
//! caller's responsibility.

use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::domain::credential::CredentialStore;

/// Sign out use case
pub struct SignOutUseCase {
    config: Arc<SessionConfig>,
}

impl SignOutUseCase {
    pub fn new(config: Arc<SessionConfig>) -> Self {
        Self { config }
    }

    /// Clear the session and return where to navigate next
    ///
    /// `redirect` defaults to the login route. Anything other than a
    /// same-origin path also falls back to the login route.
    pub fn execute<S>(&self, store: &mut S, redirect: Option<&str>) -> String
    where
        S: CredentialStore + ?Sized,
    {
        store.clear();

        let target = match redirect {
            Some(path) if is_local_path(path) => path.to_string(),
            Some(path) => {
                tracing::warn!(redirect = %path, "Ignoring non-local sign-out redirect");
                self.config.login_path.clone()
            }
            None => self.config.login_path.clone(),
        };

        tracing::info!(destination = %target, "User signed out");
        target
    }
}

/// `/path` but not `//host` or anything with a backslash
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credential::CredentialKey;
    use crate::infra::memory::MemoryCredentialStore;

    fn signed_in_store() -> MemoryCredentialStore {
        let mut store = MemoryCredentialStore::default();
        store.set(CredentialKey::AccessToken, "a.b.c");
        store.set(CredentialKey::RefreshToken, "r");
        store
    }

    fn use_case() -> SignOutUseCase {
        SignOutUseCase::new(Arc::new(SessionConfig::default()))
    }

    #[test]
    fn test_sign_out_defaults_to_login() {
        let mut store = signed_in_store();

        assert_eq!(use_case().execute(&mut store, None), "/login");
        assert!(!store.contains(CredentialKey::AccessToken));
        assert!(!store.contains(CredentialKey::RefreshToken));
    }

    #[test]
    fn test_sign_out_custom_target() {
        let mut store = signed_in_store();

        assert_eq!(use_case().execute(&mut store, Some("/lock")), "/lock");
        assert!(store.is_empty());
    }

    #[test]
    fn test_sign_out_rejects_external_target() {
        let mut store = signed_in_store();

        assert_eq!(
            use_case().execute(&mut store, Some("https://evil.example")),
            "/login"
        );
        assert_eq!(use_case().execute(&mut store, Some("//evil.example")), "/login");
        assert!(store.is_empty());
    }

    #[test]
    fn test_sign_out_without_session() {
        let mut store = MemoryCredentialStore::default();
        assert_eq!(use_case().execute(&mut store, None), "/login");
    }

    #[test]
    fn test_is_local_path() {
        assert!(is_local_path("/"));
        assert!(is_local_path("/settings?tab=webhooks"));
        assert!(!is_local_path("settings"));
        assert!(!is_local_path("//cdn.example"));
        assert!(!is_local_path("/\\evil.example"));
    }
}
