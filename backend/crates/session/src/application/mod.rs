//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod oauth_callback;
pub mod route_gate;
pub mod sign_out;

// Re-exports
pub use check_session::{
    CheckSessionUseCase, SessionStatus, is_token_expired, is_token_expired_default, is_token_expired_now,
};
pub use config::SessionConfig;
pub use oauth_callback::{OAUTH_FAILED, OAuthCallbackUseCase};
pub use route_gate::RouteGateUseCase;
pub use sign_out::SignOutUseCase;
