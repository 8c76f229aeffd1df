//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::User;
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    async fn create(&self, user: &User) -> UserResult<()>;

    /// Find a user by id
    async fn find_by_id(&self, user_id: Uuid) -> UserResult<Option<User>>;

    /// Find a user by normalized email
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Check whether a normalized email is already registered
    async fn exists_by_email(&self, email: &str) -> UserResult<bool>;
}
