//! Session Routers

use std::sync::Arc;

use axum::{Router, middleware, routing::get};

use crate::application::config::SessionConfig;
use crate::domain::exchange::OAuthExchange;
use crate::domain::route::OAUTH_CALLBACK_PATH;
use crate::presentation::handlers::{self, SessionApiState, SessionAppState};
use crate::presentation::middleware::{SessionGateState, check_session_freshness, require_session};

/// OAuth callback page route
///
/// The callback path is public, so this router can sit behind the gate.
pub fn oauth_router<E>(exchange: E, config: Arc<SessionConfig>) -> Router
where
    E: OAuthExchange + Clone + Send + Sync + 'static,
{
    let state = SessionAppState {
        exchange: Arc::new(exchange),
        config,
    };

    Router::new()
        .route(OAUTH_CALLBACK_PATH, get(handlers::oauth_callback::<E>))
        .with_state(state)
}

/// Session endpoints (`/auth/logout`, `/auth/session`)
///
/// Not page navigations; mount outside the gate so that signing out works
/// without a credential.
pub fn session_api_router(config: Arc<SessionConfig>) -> Router {
    let state = SessionApiState { config };

    Router::new()
        .route(
            "/auth/logout",
            get(handlers::sign_out).post(handlers::sign_out),
        )
        .route("/auth/session", get(handlers::session_status))
        .with_state(state)
}

/// Wrap every route of `router` with the freshness check and the route gate
///
/// The gate is outermost: it decides before the freshness check or any
/// page handler runs.
pub fn with_session_gate(router: Router, config: Arc<SessionConfig>) -> Router {
    let state = SessionGateState { config };

    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            check_session_freshness,
        ))
        .layer(middleware::from_fn_with_state(state, require_session))
}
