//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::SessionStatus;

/// Query for GET|POST /auth/logout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignOutQuery {
    /// Where to go after signing out (defaults to the login route)
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Response for GET /auth/session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub issued_at: Option<DateTime<Utc>>,
}

impl From<SessionStatus> for SessionStatusResponse {
    fn from(status: SessionStatus) -> Self {
        Self {
            authenticated: status.authenticated,
            expires_at: status.expires_at,
            issued_at: status.issued_at,
        }
    }
}
