//! Auth request/response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use vitrine_core::{User, UserId};

/// Account registration request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// Display name.
    #[validate(length(min = 3, message = "Full name must be at least 3 characters"))]
    pub full_name: String,

    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public view of a user. Never carries the credential hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at,
        }
    }
}

/// An authenticated session: the user plus the token to set as a cookie.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: UserResponse,
    pub token: String,
}

/// Simple message payload (logout, health).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
