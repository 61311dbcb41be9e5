//! Domain Layer
//!
//! Route classification, gate decisions, token claims and the
//! collaborator traits.

pub mod claims;
pub mod credential;
pub mod decision;
pub mod exchange;
pub mod route;

// Re-exports
pub use claims::{TokenClaims, decode_token};
pub use credential::{CredentialKey, CredentialStore, TokenPair};
pub use decision::{GateDecision, decide};
pub use exchange::{OAuthCallbackParams, OAuthExchange};
pub use route::{RouteClassification, RouteTable};
