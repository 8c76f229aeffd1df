//! User Entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user account.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: Uuid,
    /// Normalized (trimmed, lowercased) email, unique per account
    pub email: String,
    pub full_name: String,
    /// Argon2id hash in PHC string format
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and timestamps.
    pub fn new(email: String, full_name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            user_id: Uuid::new_v4(),
            email,
            full_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_unique_ids() {
        let a = User::new("a@example.com".into(), "A".into(), "hash".into());
        let b = User::new("b@example.com".into(), "B".into(), "hash".into());

        assert_ne!(a.user_id, b.user_id);
        assert_eq!(a.created_at, a.updated_at);
    }
}
