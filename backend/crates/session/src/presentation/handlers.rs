//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State, rejection::QueryRejection};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::config::SessionConfig;
use crate::application::{CheckSessionUseCase, OAUTH_FAILED, OAuthCallbackUseCase, SignOutUseCase};
use crate::domain::decision::login_error;
use crate::domain::exchange::{OAuthCallbackParams, OAuthExchange};
use crate::infra::cookie_store::CookieCredentialStore;
use crate::presentation::dto::{SessionStatusResponse, SignOutQuery};

/// Shared state for session handlers
#[derive(Clone)]
pub struct SessionAppState<E>
where
    E: OAuthExchange + Clone + Send + Sync + 'static,
{
    pub exchange: Arc<E>,
    pub config: Arc<SessionConfig>,
}

/// Shared state for handlers that need no exchange
#[derive(Clone)]
pub struct SessionApiState {
    pub config: Arc<SessionConfig>,
}

// ============================================================================
// OAuth Callback
// ============================================================================

/// GET /auth/callback
pub async fn oauth_callback<E>(
    State(state): State<SessionAppState<E>>,
    headers: HeaderMap,
    params: Result<Query<OAuthCallbackParams>, QueryRejection>,
) -> Response
where
    E: OAuthExchange + Clone + Send + Sync + 'static,
{
    let Query(params) = match params {
        Ok(params) => params,
        Err(e) => {
            tracing::error!(error = %e, "Unreadable OAuth callback parameters");
            return Redirect::to(&login_error(&state.config.login_path, OAUTH_FAILED))
                .into_response();
        }
    };

    let mut store = CookieCredentialStore::from_headers(&headers, state.config.clone());
    let use_case = OAuthCallbackUseCase::new(state.exchange.clone(), state.config.clone());

    let target = use_case.execute(&params, &mut store).await;

    redirect_with_cookies(&store, &target)
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET|POST /auth/logout
pub async fn sign_out(
    State(state): State<SessionApiState>,
    headers: HeaderMap,
    query: Result<Query<SignOutQuery>, QueryRejection>,
) -> Response {
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let mut store = CookieCredentialStore::from_headers(&headers, state.config.clone());
    let use_case = SignOutUseCase::new(state.config.clone());

    let target = use_case.execute(&mut store, query.redirect.as_deref());

    redirect_with_cookies(&store, &target)
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /auth/session
pub async fn session_status(
    State(state): State<SessionApiState>,
    headers: HeaderMap,
) -> Response {
    let mut store = CookieCredentialStore::from_headers(&headers, state.config.clone());
    let use_case = CheckSessionUseCase::new(state.config.clone());

    let status = use_case.status(&store);
    use_case.clear_if_stale(&mut store);

    let mut response = Json(SessionStatusResponse::from(status)).into_response();
    store.jar().apply_to(response.headers_mut());
    response
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 303 to `target`, carrying the store's pending cookie writes
fn redirect_with_cookies(store: &CookieCredentialStore, target: &str) -> Response {
    let mut response = Redirect::to(target).into_response();
    store.jar().apply_to(response.headers_mut());
    response
}
