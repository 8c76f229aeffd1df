//! Infrastructure Layer
//!
//! PostgreSQL persistence and the Google OAuth integration.

pub mod google;
pub mod postgres;
