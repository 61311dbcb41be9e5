//! Console Edge Server Entry Point
//!
//! Serves the built helpdesk console behind the session gate.
//! Uses `anyhow` for startup errors only; request-time auth failures are
//! resolved into redirects inside the `session` crate.

mod config;

use std::sync::Arc;

use axum::Router;
use session::{HttpOAuthExchange, oauth_router, session_api_router, with_session_gate};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ConsoleConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console=info,session=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConsoleConfig::from_env()?;
    let session_config = Arc::new(config.session.clone());

    let exchange = HttpOAuthExchange::new(&config.auth_api_url);
    tracing::info!(endpoint = exchange.endpoint(), "OAuth exchange configured");

    // Page navigations: gated
    let pages = Router::new()
        .merge(oauth_router(exchange, session_config.clone()))
        .fallback_service(ServeDir::new(&config.console_dir).append_index_html_on_directories(true));

    // Static assets and session endpoints: outside the gate
    let app = with_session_gate(pages, session_config.clone())
        .nest_service("/assets", ServeDir::new(config.console_dir.join("assets")))
        .merge(session_api_router(session_config))
        .layer(TraceLayer::new_for_http());

    tracing::info!(
        console_dir = %config.console_dir.display(),
        secure_cookies = config.session.access_cookie.secure,
        "Console routes configured"
    );

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
