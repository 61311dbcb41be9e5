//! Infrastructure Layer
//!
//! Credential store implementations and the identity backend client.

pub mod cookie_store;
pub mod http_exchange;
pub mod memory;

pub use cookie_store::CookieCredentialStore;
pub use http_exchange::HttpOAuthExchange;
pub use memory::MemoryCredentialStore;
