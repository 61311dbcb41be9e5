//! Credential Store
//!
//! The gate and the freshness check never touch cookies directly; they go
//! through this capability so they can run against a real cookie jar or an
//! in-memory map.

use derive_more::Display;

/// Keys held in the credential store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CredentialKey {
    #[display("access_token")]
    AccessToken,
    #[display("refresh_token")]
    RefreshToken,
}

impl CredentialKey {
    pub const ALL: [CredentialKey; 2] = [CredentialKey::AccessToken, CredentialKey::RefreshToken];
}

/// Key/value credential storage
///
/// Single writer per navigation; the last write wins.
pub trait CredentialStore {
    /// Current value; empty values are reported as absent
    fn get(&self, key: CredentialKey) -> Option<String>;

    /// Store a value
    fn set(&mut self, key: CredentialKey, value: &str);

    /// Remove a value
    fn delete(&mut self, key: CredentialKey);

    /// Whether a non-empty value is stored
    fn contains(&self, key: CredentialKey) -> bool {
        self.get(key).is_some()
    }

    /// Remove every credential
    fn clear(&mut self) {
        for key in CredentialKey::ALL {
            self.delete(key);
        }
    }
}

/// Tokens produced by a successful login or OAuth exchange
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
        }
    }

    /// Write both tokens; a missing refresh token leaves the old one untouched
    pub fn persist<S: CredentialStore + ?Sized>(&self, store: &mut S) {
        store.set(CredentialKey::AccessToken, &self.access_token);
        if let Some(refresh) = &self.refresh_token {
            store.set(CredentialKey::RefreshToken, refresh);
        }
    }
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
