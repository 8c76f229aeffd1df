//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity and repository trait
//! - `application/` - Config, the `UserService` contract and its implementation
//! - `infra/` - PostgreSQL repository, Google OAuth integration
//! - `presentation/` - HTTP handlers, DTOs, bearer-auth middleware, router
//!
//! ## Features
//! - Registration with email uniqueness and Argon2id password hashing
//! - Login issuing signed JWT bearer tokens
//! - Profile lookup for the authenticated principal only
//! - Google OAuth authorization URL issuance
//!
//! ## Response contract
//! Every response is the uniform envelope `{ data | error, message }`;
//! failures are classified exactly once through `kernel`'s `ErrorKind`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::UserConfig;
pub use application::service::UserService;
pub use error::{UserError, UserResult};
pub use infra::google::GoogleOauth;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

pub mod dto {
    pub use crate::presentation::dto::*;
}
