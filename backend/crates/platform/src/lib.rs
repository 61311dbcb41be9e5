//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie management (Set-Cookie rendering, request-scoped jar)
//! - Base64url decoding for JWT-style segments
//! - Environment configuration helpers

pub mod config;
pub mod cookie;
pub mod encoding;
