//! Presentation Layer
//!
//! HTTP handlers, DTOs, routers, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::{SessionApiState, SessionAppState};
pub use middleware::{SessionGateState, check_session_freshness, require_session};
pub use router::{oauth_router, session_api_router, with_session_gate};
