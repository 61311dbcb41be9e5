//! Console Server Configuration
//!
//! Read once at startup from the environment (`.env` is loaded first).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use platform::config::{env_bool, env_or, env_required, env_secs};
use session::SessionConfig;
use session::config::DEFAULT_EXPIRY_BUFFER;

/// Edge server configuration
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Listen address
    pub bind_addr: SocketAddr,
    /// Directory holding the built console pages
    pub console_dir: PathBuf,
    /// Identity backend base URL
    pub auth_api_url: String,
    /// Session gate configuration
    pub session: SessionConfig,
}

impl ConsoleConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env_or("BIND_ADDR", "0.0.0.0:3000")
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address")?;

        let session = SessionConfig::default()
            .with_secure_cookies(env_bool("COOKIE_SECURE", true))
            .with_expiry_buffer(env_secs("SESSION_EXPIRY_BUFFER_SECS", DEFAULT_EXPIRY_BUFFER));

        Ok(Self {
            bind_addr,
            console_dir: PathBuf::from(env_or("CONSOLE_DIR", "./dist")),
            auth_api_url: env_required("AUTH_API_URL")?,
            session,
        })
    }
}
