//! Session cookie extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use vitrine_service::dto::UserResponse;

use crate::responses::AppError;
use crate::state::AppState;

/// The authenticated user, resolved from the session cookie.
///
/// Rejection runs the full session chain in the auth service, so the
/// handler only ever sees a live user: missing cookie, bad or expired
/// token, and a deleted subject each map to their own 401 code.
pub struct CurrentUser(pub UserResponse);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(&state.cookie.name).map(|c| c.value().to_string());

        let user = state.auth_service.resolve_session(token.as_deref()).await?;
        Ok(Self(user))
    }
}
