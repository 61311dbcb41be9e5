//! Session Middleware
//!
//! `require_session` is the route gate; `check_session_freshness` decodes
//! the token for downstream handlers and clears stale credentials.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::config::SessionConfig;
use crate::application::{CheckSessionUseCase, RouteGateUseCase};
use crate::domain::decision::GateDecision;
use crate::infra::cookie_store::CookieCredentialStore;

/// Middleware state
#[derive(Clone)]
pub struct SessionGateState {
    pub config: Arc<SessionConfig>,
}

/// Route gate: allow, or redirect before any page code runs
///
/// Presence-only; an expired but present token still passes.
pub async fn require_session(
    State(state): State<SessionGateState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let store = CookieCredentialStore::from_headers(req.headers(), state.config.clone());
    let use_case = RouteGateUseCase::new(state.config.clone());

    let decision = use_case.evaluate(req.uri().path(), &store);

    match decision {
        GateDecision::Allow => next.run(req).await,
        GateDecision::RedirectTo(target) => Redirect::temporary(&target).into_response(),
    }
}

/// Freshness check: stores [`crate::application::SessionStatus`] in request
/// extensions and expires both cookies on the response when the token is stale
///
/// Credentials the inner handler writes (a completed OAuth exchange) are
/// never followed by a deletion.
pub async fn check_session_freshness(
    State(state): State<SessionGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let mut store = CookieCredentialStore::from_headers(req.headers(), state.config.clone());
    let use_case = CheckSessionUseCase::new(state.config.clone());

    let status = use_case.status(&store);
    let cleared = use_case.clear_if_stale(&mut store);

    req.extensions_mut().insert(status);

    let mut response = next.run(req).await;
    if cleared {
        store.jar().apply_unset_to(response.headers_mut());
    }
    response
}
