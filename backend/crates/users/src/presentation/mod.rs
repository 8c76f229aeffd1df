//! Presentation Layer
//!
//! HTTP handlers, DTOs, bearer-auth middleware, and the router.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::UserAppState;
pub use middleware::{AuthUser, BearerAuthState, require_bearer_auth};
pub use router::{users_router, users_router_generic};
