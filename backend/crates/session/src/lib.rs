//! Session Gate for the Helpdesk Console
//!
//! Clean Architecture structure:
//! - `domain/` - Route classification, gate decisions, token claims, collaborator traits
//! - `application/` - Use cases (route gate, freshness check, sign-out, OAuth callback)
//! - `infra/` - Credential stores and the identity backend client
//! - `presentation/` - Middleware, HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Route gate evaluated before any page is served
//! - Client-readable `access_token` / `refresh_token` cookies
//! - Fail-closed JWT expiry check with a configurable buffer
//! - OAuth callback completion with error-marked login fallback
//!
//! ## Security Model
//! - Token signatures are never verified here; the gate is a navigation
//!   convenience, not a security boundary
//! - The identity backend re-validates the access token on every API call
//! - Sign-out redirects are restricted to same-origin paths

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use infra::http_exchange::HttpOAuthExchange;
pub use presentation::router::{oauth_router, session_api_router, with_session_gate};

pub mod config {
    pub use crate::application::config::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
