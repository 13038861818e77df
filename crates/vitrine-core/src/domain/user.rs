//! User entity.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing an account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Display name.
    pub full_name: String,

    /// Login email (unique, matched case-insensitively).
    pub email: String,

    /// Hashed credential (never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Profile picture URL.
    pub avatar_url: String,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with the given details.
    #[must_use]
    pub fn new(full_name: String, email: String, password_hash: String, avatar_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            full_name,
            email,
            password_hash,
            avatar_url,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "$argon2id$secret".to_string(),
            "https://avatar.example/1.png".to_string(),
        );
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(json.contains("test@example.com"));
    }
}
