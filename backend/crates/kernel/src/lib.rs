//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by every module:
//! - Unified error type and classification ([`error`])
//! - The uniform response envelope ([`response`])
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod response;
