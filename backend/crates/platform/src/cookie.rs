//! Cookie Management Infrastructure
//!
//! `Set-Cookie` rendering, `Cookie` header parsing and a request-scoped jar
//! that collects cookie writes until the response is built.

use std::collections::{HashMap, HashSet};

use axum::http::{HeaderMap, HeaderValue, header};

/// Expiry date sent alongside `Max-Age=0` for clients that ignore Max-Age
const EPOCH_EXPIRES: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: false,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Config with default attributes under the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);
        cookie.push_str(&format!("; Path={}", self.path));

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }
        self.push_flags(&mut cookie);

        cookie
    }

    /// Build Set-Cookie header for deletion (expired)
    ///
    /// Path, Secure and SameSite must match the original write or the
    /// browser keeps the old cookie.
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!(
            "{}=; Path={}; Max-Age=0; Expires={}",
            self.name, self.path, EPOCH_EXPIRES
        );
        self.push_flags(&mut cookie);
        cookie
    }

    fn push_flags(&self, cookie: &mut String) {
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
    }
}

/// Parse every `Cookie` header into name/value pairs
///
/// The first occurrence of a name wins, matching how browsers order the
/// most specific cookie first.
pub fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    for raw in headers.get_all(header::COOKIE) {
        let Ok(raw) = raw.to_str() else {
            continue;
        };
        for pair in raw.split(';') {
            if let Some((key, value)) = pair.trim().split_once('=') {
                cookies
                    .entry(key.trim().to_string())
                    .or_insert_with(|| value.trim().to_string());
            }
        }
    }

    cookies
}

/// Names of the cookies written by a response's `Set-Cookie` headers
pub fn set_cookie_names(headers: &HeaderMap) -> HashSet<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|raw| raw.to_str().ok())
        .filter_map(|raw| raw.split_once('='))
        .map(|(name, _)| name.trim().to_string())
        .collect()
}

/// Extract a cookie value from headers
///
/// An empty value is reported as absent.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    parse_cookies(headers)
        .remove(name)
        .filter(|value| !value.is_empty())
}

/// Request-scoped cookie jar
///
/// Reads come from the request's `Cookie` headers, overlaid with any writes
/// made while handling the request. Writes are kept as pending `Set-Cookie`
/// values until the response is assembled.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    values: HashMap<String, String>,
    /// (cookie name, rendered `Set-Cookie` value)
    pending: Vec<(String, String)>,
}

impl CookieJar {
    /// Build a jar from the incoming request headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            values: parse_cookies(headers),
            pending: Vec::new(),
        }
    }

    /// Current value of a cookie; empty values count as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Write a cookie using the given attributes
    pub fn set(&mut self, config: &CookieConfig, value: &str) {
        self.values.insert(config.name.clone(), value.to_string());
        self.pending
            .push((config.name.clone(), config.build_set_cookie(value)));
    }

    /// Expire a cookie using the given attributes
    pub fn remove(&mut self, config: &CookieConfig) {
        self.values.remove(&config.name);
        self.pending
            .push((config.name.clone(), config.build_delete_cookie()));
    }

    /// Whether any write is waiting to be sent
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Pending writes as `Set-Cookie` header values, in write order
    pub fn set_cookie_headers(&self) -> Vec<HeaderValue> {
        self.pending
            .iter()
            .filter_map(|(_, cookie)| match HeaderValue::from_str(cookie) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping cookie with invalid header characters");
                    None
                }
            })
            .collect()
    }

    /// Append pending writes to a response's headers
    pub fn apply_to(&self, headers: &mut HeaderMap) {
        for value in self.set_cookie_headers() {
            headers.append(header::SET_COOKIE, value);
        }
    }

    /// Append pending writes for cookies the response does not already set
    ///
    /// For writes made before an inner handler ran: the handler's own
    /// `Set-Cookie` for the same name is newer and must stay last.
    pub fn apply_unset_to(&self, headers: &mut HeaderMap) {
        let already_set = set_cookie_names(headers);

        for (name, cookie) in &self.pending {
            if already_set.contains(name) {
                tracing::debug!(cookie = %name, "Response already sets cookie, skipping pending write");
                continue;
            }
            match HeaderValue::from_str(cookie) {
                Ok(value) => {
                    headers.append(header::SET_COOKIE, value);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping cookie with invalid header characters");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(raw: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(raw));
        headers
    }

    #[test]
    fn test_cookie_config_build() {
        let config = CookieConfig {
            name: "access_token".to_string(),
            secure: true,
            http_only: false,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: Some(15_552_000),
        };

        let cookie = config.build_set_cookie("abc");
        assert!(cookie.starts_with("access_token=abc"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=15552000"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_http_only_flag() {
        let config = CookieConfig {
            http_only: true,
            ..CookieConfig::named("sid")
        };
        assert!(config.build_set_cookie("x").contains("HttpOnly"));
    }

    #[test]
    fn test_delete_cookie_keeps_scope() {
        let config = CookieConfig {
            path: "/app".to_string(),
            same_site: SameSite::Strict,
            ..CookieConfig::named("refresh_token")
        };

        let cookie = config.build_delete_cookie();
        assert!(cookie.starts_with("refresh_token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Path=/app"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains(EPOCH_EXPIRES));
    }

    #[test]
    fn test_extract_cookie() {
        let headers = headers_with_cookie("foo=bar; access_token=abc.def.ghi; other=xyz");

        assert_eq!(
            extract_cookie(&headers, "access_token"),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_empty_value_is_absent() {
        let headers = headers_with_cookie("access_token=; foo=bar");
        assert_eq!(extract_cookie(&headers, "access_token"), None);
    }

    #[test]
    fn test_parse_cookies_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::COOKIE, HeaderValue::from_static("b=2; a=3"));

        let cookies = parse_cookies(&headers);
        assert_eq!(cookies.get("a").map(String::as_str), Some("1"));
        assert_eq!(cookies.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_jar_last_write_wins() {
        let headers = headers_with_cookie("access_token=old");
        let mut jar = CookieJar::from_headers(&headers);
        let config = CookieConfig::named("access_token");

        assert_eq!(jar.get("access_token"), Some("old"));
        assert!(!jar.has_pending());

        jar.set(&config, "new");
        assert_eq!(jar.get("access_token"), Some("new"));

        jar.remove(&config);
        assert_eq!(jar.get("access_token"), None);

        let written = jar.set_cookie_headers();
        assert_eq!(written.len(), 2);
        assert!(written[0].to_str().unwrap().starts_with("access_token=new"));
        assert!(written[1].to_str().unwrap().contains("Max-Age=0"));
    }

    #[test]
    fn test_jar_apply_to_appends() {
        let mut jar = CookieJar::default();
        jar.set(&CookieConfig::named("a"), "1");
        jar.set(&CookieConfig::named("b"), "2");

        let mut headers = HeaderMap::new();
        jar.apply_to(&mut headers);
        assert_eq!(headers.get_all(header::SET_COOKIE).iter().count(), 2);
    }

    #[test]
    fn test_apply_unset_keeps_newer_writes() {
        let headers = headers_with_cookie("access_token=stale; refresh_token=old");
        let mut jar = CookieJar::from_headers(&headers);
        jar.remove(&CookieConfig::named("access_token"));
        jar.remove(&CookieConfig::named("refresh_token"));

        let mut response = HeaderMap::new();
        response.append(
            header::SET_COOKIE,
            HeaderValue::from_static("access_token=fresh; Path=/"),
        );
        jar.apply_unset_to(&mut response);

        let written: Vec<&str> = response
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0], "access_token=fresh; Path=/");
        assert!(written[1].starts_with("refresh_token=;"));
    }

    #[test]
    fn test_set_cookie_names() {
        let mut headers = HeaderMap::new();
        headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1; Path=/"));
        headers.append(header::SET_COOKIE, HeaderValue::from_static("b=; Max-Age=0"));

        let names = set_cookie_names(&headers);
        assert!(names.contains("a"));
        assert!(names.contains("b"));
        assert_eq!(names.len(), 2);
    }
}
