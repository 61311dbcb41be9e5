//! Session Token Claims
//!
//! Access tokens are JWTs issued by the identity backend. Only the payload
//! is read here; the signature is never verified on this side, so nothing
//! decoded from a token is a security boundary. The backend re-validates
//! every token it receives.

use serde::Deserialize;

use crate::error::{SessionError, SessionResult};

/// Claims read from a token payload. Unknown claims are ignored.
///
/// `exp` and `iat` are NumericDate values: Unix seconds, possibly
/// fractional. A non-numeric value fails the whole decode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct TokenClaims {
    /// Expiry (Unix seconds)
    #[serde(default)]
    pub exp: Option<f64>,
    /// Issued at (Unix seconds)
    #[serde(default)]
    pub iat: Option<f64>,
}

impl TokenClaims {
    /// Whether the token should be treated as expired at `now`
    ///
    /// Expired once `now >= exp - buffer_secs`. A token without `exp`
    /// is always expired.
    pub fn is_expired_at(&self, now: i64, buffer_secs: i64) -> bool {
        match self.exp {
            Some(exp) => now as f64 >= exp - buffer_secs as f64,
            None => true,
        }
    }
}

/// Decode the payload of a `header.payload.signature` token
pub fn decode_token(token: &str) -> SessionResult<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(SessionError::MalformedToken(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    let payload = platform::encoding::decode_base64url_lenient(segments[1])
        .map_err(|e| SessionError::MalformedToken(format!("payload is not base64: {e}")))?;

    serde_json::from_slice(&payload)
        .map_err(|e| SessionError::MalformedToken(format!("payload is not a claim set: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::encoding::encode_base64url;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            encode_base64url(br#"{"alg":"HS256","typ":"JWT"}"#),
            encode_base64url(payload.as_bytes())
        )
    }

    #[test]
    fn test_decode_claims() {
        let token = token_with_payload(r#"{"sub":"agent-7","exp":1700003600,"iat":1700000000,"role":"admin"}"#);
        let claims = decode_token(&token).unwrap();

        assert_eq!(claims.exp, Some(1_700_003_600.0));
        assert_eq!(claims.iat, Some(1_700_000_000.0));
    }

    #[test]
    fn test_decode_without_exp() {
        let claims = decode_token(&token_with_payload(r#"{"sub":"x"}"#)).unwrap();
        assert_eq!(claims, TokenClaims::default());
    }

    #[test]
    fn test_wrong_segment_count() {
        assert!(matches!(
            decode_token("only.two"),
            Err(SessionError::MalformedToken(_))
        ));
        assert!(matches!(
            decode_token("a.b.c.d"),
            Err(SessionError::MalformedToken(_))
        ));
        assert!(matches!(decode_token(""), Err(SessionError::MalformedToken(_))));
    }

    #[test]
    fn test_undecodable_payload() {
        assert!(decode_token("a.!!!.c").is_err());
        assert!(decode_token(&token_with_payload("not json")).is_err());
        assert!(decode_token(&token_with_payload("[1,2]")).is_err());
    }

    #[test]
    fn test_expiry_with_buffer() {
        let claims = TokenClaims {
            exp: Some(1_000.0),
            iat: None,
        };

        assert!(!claims.is_expired_at(939, 60));
        assert!(claims.is_expired_at(940, 60));
        assert!(claims.is_expired_at(1_000, 0));
        assert!(!claims.is_expired_at(999, 0));
    }

    #[test]
    fn test_fractional_exp() {
        let claims = decode_token(&token_with_payload(r#"{"exp":1750003600.5,"iat":1750000000.25}"#)).unwrap();

        assert_eq!(claims.exp, Some(1_750_003_600.5));
        assert!(!claims.is_expired_at(1_750_003_540, 60));
        assert!(claims.is_expired_at(1_750_003_541, 60));
    }

    #[test]
    fn test_non_numeric_exp_fails_decode() {
        assert!(decode_token(&token_with_payload(r#"{"exp":"1750003600"}"#)).is_err());
        assert!(decode_token(&token_with_payload(r#"{"exp":true}"#)).is_err());
    }

    #[test]
    fn test_missing_exp_is_expired() {
        assert!(TokenClaims::default().is_expired_at(0, 0));
    }
}
