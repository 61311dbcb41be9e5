//! Application Configuration
//!
//! Configuration for the session gate.

use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

use crate::domain::credential::CredentialKey;
use crate::domain::route::{LOGIN_PATH, ROOT_PATH, RouteTable};

/// Credential cookie lifetime (180 days)
pub const CREDENTIAL_MAX_AGE_SECS: i64 = 180 * 24 * 3600;

/// Default freshness buffer
pub const DEFAULT_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Session gate configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Public / auth-only route table
    pub routes: RouteTable,
    /// Login route (redirect target for unauthenticated requests)
    pub login_path: String,
    /// Application root (redirect target after login)
    pub root_path: String,
    /// Access token cookie
    pub access_cookie: CookieConfig,
    /// Refresh token cookie
    pub refresh_cookie: CookieConfig,
    /// Tokens expiring within this window count as expired
    pub expiry_buffer: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            routes: RouteTable::default(),
            login_path: LOGIN_PATH.to_string(),
            root_path: ROOT_PATH.to_string(),
            access_cookie: credential_cookie(CredentialKey::AccessToken),
            refresh_cookie: credential_cookie(CredentialKey::RefreshToken),
            expiry_buffer: DEFAULT_EXPIRY_BUFFER,
        }
    }
}

impl SessionConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self::default().with_secure_cookies(false)
    }

    /// Set the `Secure` flag on both credential cookies
    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.access_cookie.secure = secure;
        self.refresh_cookie.secure = secure;
        self
    }

    /// Replace the freshness buffer
    pub fn with_expiry_buffer(mut self, buffer: Duration) -> Self {
        self.expiry_buffer = buffer;
        self
    }

    /// Cookie attributes for a credential
    pub fn cookie_for(&self, key: CredentialKey) -> &CookieConfig {
        match key {
            CredentialKey::AccessToken => &self.access_cookie,
            CredentialKey::RefreshToken => &self.refresh_cookie,
        }
    }

    /// Freshness buffer in whole seconds
    pub fn expiry_buffer_secs(&self) -> i64 {
        buffer_secs(self.expiry_buffer)
    }
}

/// Whole seconds of a buffer, saturating at `i64::MAX`
pub fn buffer_secs(buffer: Duration) -> i64 {
    i64::try_from(buffer.as_secs()).unwrap_or(i64::MAX)
}

/// Credential cookies must be readable by in-browser script, so no HttpOnly
fn credential_cookie(key: CredentialKey) -> CookieConfig {
    CookieConfig {
        name: key.to_string(),
        secure: true,
        http_only: false,
        same_site: SameSite::Lax,
        path: "/".to_string(),
        max_age_secs: Some(CREDENTIAL_MAX_AGE_SECS),
    }
}
