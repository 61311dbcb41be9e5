//! Check Session Use Case
//!
//! Token freshness: decodes the access token's claims and decides whether
//! the session is still usable. Every failure is fail-closed.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::{DEFAULT_EXPIRY_BUFFER, SessionConfig, buffer_secs};
use crate::domain::claims::{TokenClaims, decode_token};
use crate::domain::credential::{CredentialKey, CredentialStore};
use crate::error::{SessionError, SessionResult};

/// Whether `token` should be treated as expired at `now` (Unix seconds)
///
/// Malformed tokens and tokens without `exp` are expired.
pub fn is_token_expired(token: &str, buffer_secs: i64, now: i64) -> bool {
    match decode_token(token) {
        Ok(claims) => claims.is_expired_at(now, buffer_secs),
        Err(e) => {
            e.log();
            true
        }
    }
}

/// [`is_token_expired`] against the wall clock
pub fn is_token_expired_now(token: &str, buffer_secs: i64) -> bool {
    is_token_expired(token, buffer_secs, Utc::now().timestamp())
}

/// [`is_token_expired_now`] with the default 60 s buffer
pub fn is_token_expired_default(token: &str) -> bool {
    is_token_expired_now(token, buffer_secs(DEFAULT_EXPIRY_BUFFER))
}

fn to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis((secs * 1000.0) as i64)
}

/// Snapshot of the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub issued_at: Option<DateTime<Utc>>,
}

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<SessionConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<SessionConfig>) -> Self {
        Self { config }
    }

    /// Claims of the stored access token
    pub fn claims<S>(&self, store: &S) -> SessionResult<TokenClaims>
    where
        S: CredentialStore + ?Sized,
    {
        let token = store
            .get(CredentialKey::AccessToken)
            .ok_or(SessionError::MissingCredential)?;
        decode_token(&token)
    }

    /// A session is valid only if a token is present and fresh
    pub fn is_valid<S>(&self, store: &S) -> bool
    where
        S: CredentialStore + ?Sized,
    {
        self.is_valid_at(store, Utc::now().timestamp())
    }

    /// [`Self::is_valid`] at an explicit time
    pub fn is_valid_at<S>(&self, store: &S, now: i64) -> bool
    where
        S: CredentialStore + ?Sized,
    {
        store
            .get(CredentialKey::AccessToken)
            .is_some_and(|token| !is_token_expired(&token, self.config.expiry_buffer_secs(), now))
    }

    /// Current session status
    pub fn status<S>(&self, store: &S) -> SessionStatus
    where
        S: CredentialStore + ?Sized,
    {
        self.status_at(store, Utc::now().timestamp())
    }

    /// [`Self::status`] at an explicit time
    pub fn status_at<S>(&self, store: &S, now: i64) -> SessionStatus
    where
        S: CredentialStore + ?Sized,
    {
        match self.claims(store) {
            Ok(claims) => SessionStatus {
                authenticated: !claims.is_expired_at(now, self.config.expiry_buffer_secs()),
                expires_at: claims.exp.and_then(to_datetime),
                issued_at: claims.iat.and_then(to_datetime),
            },
            Err(_) => SessionStatus::default(),
        }
    }

    /// Delete both tokens if the stored access token is malformed or expired
    ///
    /// Returns whether anything was cleared. An absent token is left alone.
    pub fn clear_if_stale<S>(&self, store: &mut S) -> bool
    where
        S: CredentialStore + ?Sized,
    {
        self.clear_if_stale_at(store, Utc::now().timestamp())
    }

    /// [`Self::clear_if_stale`] at an explicit time
    pub fn clear_if_stale_at<S>(&self, store: &mut S, now: i64) -> bool
    where
        S: CredentialStore + ?Sized,
    {
        if !store.contains(CredentialKey::AccessToken) || self.is_valid_at(store, now) {
            return false;
        }

        store.clear();
        tracing::info!("Cleared stale session credentials");
        true
    }
}
