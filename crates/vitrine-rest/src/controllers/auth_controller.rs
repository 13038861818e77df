//! Auth endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use vitrine_service::dto::{
    AuthSession, LoginRequest, MessageResponse, SignupRequest, UserResponse,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::responses::ApiResult;
use crate::state::{AppState, CookieSettings};

/// Builds the session cookie carrying the token.
fn session_cookie(settings: &CookieSettings, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(settings.name.clone(), token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_secure(settings.secure);
    cookie.set_max_age(time::Duration::days(settings.ttl_days));
    cookie
}

/// Builds a removal cookie matching the session cookie's path.
fn removal_cookie(settings: &CookieSettings) -> Cookie<'static> {
    let mut cookie = Cookie::from(settings.name.clone());
    cookie.set_path("/");
    cookie
}

fn with_session(
    jar: CookieJar,
    settings: &CookieSettings,
    session: AuthSession,
) -> (CookieJar, Json<UserResponse>) {
    let jar = jar.add(session_cookie(settings, session.token));
    (jar, Json(session.user))
}

/// Register a new account and open a session.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Validation failure"),
    ),
    tag = "auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<(StatusCode, (CookieJar, Json<UserResponse>))> {
    let session = state.auth_service.signup(request).await?;
    Ok((
        StatusCode::CREATED,
        with_session(jar, &state.cookie, session),
    ))
}

/// Verify credentials and open a session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = UserResponse),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<UserResponse>)> {
    let session = state.auth_service.login(request).await?;
    Ok(with_session(jar, &state.cookie, session))
}

/// Clear the session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 401, description = "No live session"),
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    _user: CurrentUser,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(removal_cookie(&state.cookie));
    (jar, Json(MessageResponse::new("Logged out")))
}

/// Return the current user for a live session.
#[utoipa::path(
    get,
    path = "/api/auth/check",
    responses(
        (status = 200, description = "Session is live", body = UserResponse),
        (status = 401, description = "No live session"),
    ),
    tag = "auth"
)]
pub async fn check(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user)
}
