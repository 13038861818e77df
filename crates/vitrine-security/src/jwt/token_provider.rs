//! Session token issuing and verification.

use crate::jwt::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use vitrine_core::{UserId, VitrineError, VitrineResult};

/// Issues and verifies HS256 session tokens.
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl TokenProvider {
    /// Creates a provider from the security configuration.
    #[must_use]
    pub fn new(config: &vitrine_config::SecurityConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl: Duration::days(config.token_ttl_days),
        }
    }

    /// Issues a token for the given user.
    pub fn issue(&self, user_id: UserId) -> VitrineResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| VitrineError::internal(format!("Failed to sign token: {e}")))
    }

    /// Verifies a token and returns its claims.
    pub fn verify(&self, token: &str) -> VitrineResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => VitrineError::TokenExpired,
                _ => VitrineError::InvalidToken(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_config::SecurityConfig;

    fn provider() -> TokenProvider {
        TokenProvider::new(&SecurityConfig {
            jwt_secret: "test-secret".to_string(),
            ..SecurityConfig::default()
        })
    }

    #[test]
    fn test_issue_and_verify() {
        let provider = provider();
        let user_id = UserId::new();

        let token = provider.issue(user_id).unwrap();
        let claims = provider.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let provider = provider();
        let err = provider.verify("not-a-token").unwrap_err();
        assert!(matches!(err, VitrineError::InvalidToken(_)));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let provider = provider();
        let other = TokenProvider::new(&SecurityConfig {
            jwt_secret: "other-secret".to_string(),
            ..SecurityConfig::default()
        });

        let token = provider.issue(UserId::new()).unwrap();
        let err = other.verify(&token).unwrap_err();
        assert!(matches!(err, VitrineError::InvalidToken(_)));
    }

    #[test]
    fn test_expired_token() {
        let config = SecurityConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_days: -1,
            ..SecurityConfig::default()
        };
        let provider = TokenProvider::new(&config);

        let token = provider.issue(UserId::new()).unwrap();
        let err = provider.verify(&token).unwrap_err();
        assert!(matches!(err, VitrineError::TokenExpired));
    }
}
