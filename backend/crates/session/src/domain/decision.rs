//! Gate Decision
//!
//! Pure mapping from (route classification, credential presence) to
//! allow/redirect.

use derive_more::Display;

use crate::domain::route::RouteClassification;

/// Query parameter carrying the originally requested path
pub const REDIRECT_PARAM: &str = "redirect";
/// Query parameter carrying an error marker for the login page
pub const ERROR_PARAM: &str = "error";

/// Outcome of the route gate
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GateDecision {
    /// Pass the request through unmodified
    #[display("allow")]
    Allow,
    /// Redirect to the given target
    #[display("redirect to {_0}")]
    RedirectTo(String),
}

impl GateDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, GateDecision::Allow)
    }
}

/// Decide the fate of a navigation
///
/// Evaluated in order:
/// 1. public path → allow, except an auth-only path with a credential
/// 2. no credential → login, preserving the requested path
/// 3. credential on an auth-only path → application root
/// 4. otherwise → allow
pub fn decide(
    classification: RouteClassification,
    path: &str,
    has_credential: bool,
    login_path: &str,
    root_path: &str,
) -> GateDecision {
    let auth_redirect = has_credential && classification.auth_only;

    if classification.public && !auth_redirect {
        return GateDecision::Allow;
    }

    if !has_credential {
        return GateDecision::RedirectTo(login_redirect(login_path, path));
    }

    if auth_redirect {
        return GateDecision::RedirectTo(root_path.to_string());
    }

    GateDecision::Allow
}

/// Login URL that returns the user to `original_path` after sign-in
pub fn login_redirect(login_path: &str, original_path: &str) -> String {
    format!(
        "{}?{}={}",
        login_path,
        REDIRECT_PARAM,
        urlencoding::encode(original_path)
    )
}

/// Login URL carrying an error marker
pub fn login_error(login_path: &str, error: &str) -> String {
    format!("{}?{}={}", login_path, ERROR_PARAM, urlencoding::encode(error))
}
