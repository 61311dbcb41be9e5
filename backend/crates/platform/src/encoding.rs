//! Encoding Utilities
//!
//! Base64 helpers for JWT-style segments.

use base64::{
    Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose},
};

/// Standard alphabet, padding optional, trailing bits tolerated (browser `atob` behaviour)
const FORGIVING_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a base64url segment
///
/// The URL-safe alphabet is translated back to standard Base64
/// (`-` → `+`, `_` → `/`) before decoding. Missing `=` padding is accepted.
pub fn decode_base64url_lenient(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let standard: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    FORGIVING_STANDARD.decode(standard)
}

/// Encode bytes as unpadded base64url
pub fn encode_base64url(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
