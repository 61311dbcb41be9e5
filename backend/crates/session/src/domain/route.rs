//! Route Classification
//!
//! Every path is classified from a static table before any page code runs.
//! The table is data; the gate never special-cases paths in code.

/// Login route (public, auth-only)
pub const LOGIN_PATH: &str = "/login";
/// Session-lock route (public)
pub const LOCK_PATH: &str = "/lock";
/// OAuth provider redirect target (public)
pub const OAUTH_CALLBACK_PATH: &str = "/auth/callback";
/// Application root
pub const ROOT_PATH: &str = "/";

/// Classification of a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteClassification {
    /// Reachable without authentication
    pub public: bool,
    /// Only meaningful before authentication (e.g. login)
    pub auth_only: bool,
}

impl RouteClassification {
    pub fn is_protected(&self) -> bool {
        !self.public
    }
}

/// Static route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    /// Path prefixes reachable without a credential
    pub public_prefixes: Vec<String>,
    /// Exact paths that authenticated users are sent away from
    pub auth_routes: Vec<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            public_prefixes: vec![
                LOGIN_PATH.to_string(),
                LOCK_PATH.to_string(),
                OAUTH_CALLBACK_PATH.to_string(),
            ],
            auth_routes: vec![LOGIN_PATH.to_string()],
        }
    }
}

impl RouteTable {
    /// Classify a request path
    pub fn classify(&self, path: &str) -> RouteClassification {
        RouteClassification {
            public: self
                .public_prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str())),
            auth_only: self.auth_routes.iter().any(|route| route == path),
        }
    }
}
