//! Auth service: signup, login, and session resolution.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::{AuthSession, LoginRequest, SignupRequest, UserResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use vitrine_core::{User, UserId, ValidateExt, VitrineError, VitrineResult};
use vitrine_repository::UserRepository;
use vitrine_security::{PasswordHasher, TokenProvider};

/// How long a resolved user stays cached.
const USER_TTL_SECS: u64 = 3600;

/// Auth operations.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Registers a new account and opens a session.
    async fn signup(&self, request: SignupRequest) -> VitrineResult<AuthSession>;

    /// Verifies credentials and opens a session.
    async fn login(&self, request: LoginRequest) -> VitrineResult<AuthSession>;

    /// Resolves a session token (from the cookie) to its user.
    ///
    /// Walks the full chain: token presence, signature and expiry,
    /// then user existence. A valid token whose subject has since been
    /// deleted yields [`VitrineError::UserNotFound`], distinct from
    /// [`VitrineError::InvalidToken`].
    async fn resolve_session(&self, token: Option<&str>) -> VitrineResult<UserResponse>;
}

/// Default [`AuthService`] implementation.
pub struct AuthServiceImpl<R: UserRepository> {
    repo: Arc<R>,
    cache: Arc<dyn CacheInterface>,
    tokens: TokenProvider,
    hasher: PasswordHasher,
}

impl<R: UserRepository> AuthServiceImpl<R> {
    #[must_use]
    pub fn new(repo: Arc<R>, cache: Arc<dyn CacheInterface>, tokens: TokenProvider) -> Self {
        Self {
            repo,
            cache,
            tokens,
            hasher: PasswordHasher::new(),
        }
    }

    fn random_avatar_url() -> String {
        let n = rand::random::<u32>() % 100 + 1;
        format!("https://avatar.iran.liara.run/public/{n}.png")
    }

    fn open_session(&self, user: &User) -> VitrineResult<AuthSession> {
        let token = self.tokens.issue(user.id)?;
        Ok(AuthSession {
            user: UserResponse::from(user),
            token,
        })
    }
}

#[async_trait]
impl<R: UserRepository> AuthService for AuthServiceImpl<R> {
    async fn signup(&self, request: SignupRequest) -> VitrineResult<AuthSession> {
        request.validate_request()?;

        if self.repo.exists_by_email(&request.email).await? {
            return Err(VitrineError::conflict(
                "An account with this email already exists",
            ));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(
            request.full_name,
            request.email,
            password_hash,
            Self::random_avatar_url(),
        );
        self.repo.save(&user).await?;

        debug!(user_id = %user.id, "Account created");
        self.open_session(&user)
    }

    async fn login(&self, request: LoginRequest) -> VitrineResult<AuthSession> {
        request.validate_request()?;

        // Same error for unknown email and wrong password, so login
        // cannot be used to probe which emails have accounts.
        let user = self
            .repo
            .find_by_email(&request.email)
            .await?
            .ok_or(VitrineError::InvalidCredentials)?;

        if !self.hasher.verify(&request.password, &user.password_hash)? {
            return Err(VitrineError::InvalidCredentials);
        }

        self.open_session(&user)
    }

    async fn resolve_session(&self, token: Option<&str>) -> VitrineResult<UserResponse> {
        let token = token.ok_or(VitrineError::MissingToken)?;
        let claims = self.tokens.verify(token)?;
        let user_id = UserId::parse(&claims.sub)
            .map_err(|_| VitrineError::InvalidToken("Malformed subject".to_string()))?;

        let key = cache_keys::user_by_id(user_id);
        if self.cache.is_enabled() {
            match self.cache.get_json::<UserResponse>(&key).await {
                Ok(Some(user)) => return Ok(user),
                Ok(None) => {}
                Err(e) => warn!(error = %e, "User cache read failed; resolving from store"),
            }
        }

        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(VitrineError::UserNotFound)?;
        let response = UserResponse::from(&user);

        if self.cache.is_enabled() {
            if let Err(e) = self.cache.set_json(&key, &response, USER_TTL_SECS).await {
                warn!(error = %e, "Failed to cache resolved user");
            }
        }

        Ok(response)
    }
}
