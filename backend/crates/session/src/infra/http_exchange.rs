//! HTTP OAuth Exchange
//!
//! Forwards the provider's callback parameters to the identity backend,
//! which performs the code exchange and answers with the session tokens.

use serde::{Deserialize, Serialize};

use crate::domain::credential::TokenPair;
use crate::domain::exchange::{OAuthCallbackParams, OAuthExchange};
use crate::error::{SessionError, SessionResult};

/// Backend path that completes the OAuth code exchange
const EXCHANGE_PATH: &str = "/auth/oauth/callback";

#[derive(Debug, Serialize)]
struct ExchangeRequest<'a> {
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ExchangeResponse {
    #[serde(default, alias = "accessToken")]
    access_token: Option<String>,
    #[serde(default, alias = "refreshToken")]
    refresh_token: Option<String>,
}

/// Identity backend client
#[derive(Debug, Clone)]
pub struct HttpOAuthExchange {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOAuthExchange {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create with a preconfigured `reqwest` client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), EXCHANGE_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl OAuthExchange for HttpOAuthExchange {
    async fn handle_callback(&self, params: &OAuthCallbackParams) -> SessionResult<Option<TokenPair>> {
        if let Some(error) = &params.error {
            let reason = params.error_description.as_deref().unwrap_or(error);
            return Err(SessionError::ProviderDenied(reason.to_string()));
        }

        let Some(code) = params.code.as_deref().filter(|c| !c.is_empty()) else {
            return Ok(None);
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ExchangeRequest {
                code,
                state: params.state.as_deref(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::ExchangeRejected(status));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let tokens: ExchangeResponse = serde_json::from_slice(&body)
            .map_err(|e| SessionError::Internal(format!("Unreadable exchange response: {e}")))?;

        Ok(tokens
            .access_token
            .filter(|token| !token.is_empty())
            .map(|access| TokenPair::new(access, tokens.refresh_token.filter(|r| !r.is_empty()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{Json, Router, routing::post};
    use serde_json::{Value, json};

    /// Serve `app` on an ephemeral port and return its base URL
    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn params(code: Option<&str>) -> OAuthCallbackParams {
        OAuthCallbackParams {
            code: code.map(str::to_string),
            state: Some("xyz".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            HttpOAuthExchange::new("https://api.example.com/").endpoint(),
            "https://api.example.com/auth/oauth/callback"
        );
    }

    #[tokio::test]
    async fn test_no_code_is_no_usable_response() {
        // Unroutable: no request is made without a code
        let exchange = HttpOAuthExchange::new("http://127.0.0.1:9");
        assert!(exchange.handle_callback(&params(None)).await.unwrap().is_none());
        assert!(exchange.handle_callback(&params(Some(""))).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_provider_error() {
        let exchange = HttpOAuthExchange::new("http://127.0.0.1:9");
        let params = OAuthCallbackParams {
            error: Some("access_denied".to_string()),
            ..Default::default()
        };

        let result = exchange.handle_callback(&params).await;
        assert!(matches!(result, Err(SessionError::ProviderDenied(reason)) if reason == "access_denied"));
    }

    #[tokio::test]
    async fn test_successful_exchange() {
        let app = Router::new().route(
            EXCHANGE_PATH,
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["code"], "abc");
                assert_eq!(body["state"], "xyz");
                Json(json!({"accessToken": "h.p.s", "refreshToken": "r"}))
            }),
        );
        let exchange = HttpOAuthExchange::new(&spawn_backend(app).await);

        let tokens = exchange.handle_callback(&params(Some("abc"))).await.unwrap().unwrap();
        assert_eq!(tokens.access_token, "h.p.s");
        assert_eq!(tokens.refresh_token.as_deref(), Some("r"));
    }

    #[tokio::test]
    async fn test_empty_token_is_no_usable_response() {
        let app = Router::new().route(
            EXCHANGE_PATH,
            post(|| async { Json(json!({"access_token": ""})) }),
        );
        let exchange = HttpOAuthExchange::new(&spawn_backend(app).await);

        assert!(exchange.handle_callback(&params(Some("abc"))).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejected_exchange() {
        let app = Router::new().route(EXCHANGE_PATH, post(|| async { StatusCode::UNAUTHORIZED }));
        let exchange = HttpOAuthExchange::new(&spawn_backend(app).await);

        let result = exchange.handle_callback(&params(Some("abc"))).await;
        assert!(matches!(
            result,
            Err(SessionError::ExchangeRejected(StatusCode::UNAUTHORIZED))
        ));
    }
}
