//! Platform Utilities
//!
//! Cross-cutting infrastructure shared by every module:
//! - `client` - client identification from HTTP headers (IP, User-Agent)
//! - `password` - Argon2id password hashing and verification
//! - `token` - signed bearer access tokens (JWT, HS256)

pub mod client;
pub mod password;
pub mod token;
