//! # Vitrine Security
//!
//! Session token issuing/verification (JWT, HS256) and password
//! hashing (Argon2id).

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenProvider};
pub use password::PasswordHasher;
