//! Cookie-backed credential store
//!
//! Reads come from the request's cookies; writes become `Set-Cookie`
//! headers with the configured attributes.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::cookie::CookieJar;

use crate::application::config::SessionConfig;
use crate::domain::credential::{CredentialKey, CredentialStore};

/// Credential store over one request's cookie jar
#[derive(Debug, Clone)]
pub struct CookieCredentialStore {
    jar: CookieJar,
    config: Arc<SessionConfig>,
}

impl CookieCredentialStore {
    pub fn new(jar: CookieJar, config: Arc<SessionConfig>) -> Self {
        Self { jar, config }
    }

    /// Build from request headers
    pub fn from_headers(headers: &HeaderMap, config: Arc<SessionConfig>) -> Self {
        Self::new(CookieJar::from_headers(headers), config)
    }

    /// Underlying jar (pending `Set-Cookie` writes)
    pub fn jar(&self) -> &CookieJar {
        &self.jar
    }
}

impl CredentialStore for CookieCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        self.jar
            .get(&self.config.cookie_for(key).name)
            .map(str::to_string)
    }

    fn set(&mut self, key: CredentialKey, value: &str) {
        self.jar.set(self.config.cookie_for(key), value);
    }

    fn delete(&mut self, key: CredentialKey) {
        self.jar.remove(self.config.cookie_for(key));
    }
}
