//! Application Layer
//!
//! The `UserService` contract, its implementation, and module config.

pub mod config;
pub mod service;
pub mod user_service;

pub use config::UserConfig;
pub use service::{
    LoginInput, LoginOutput, OauthProvider, OauthUrlOutput, ProfileInput, ProfileOutput,
    RegisterInput, RegisterOutput, UserService,
};
pub use user_service::UserServiceImpl;
