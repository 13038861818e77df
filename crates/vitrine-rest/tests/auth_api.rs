//! Auth endpoint tests.

mod common;

use axum::http::{header, StatusCode};
use common::{
    get, get_with_cookie, json_request, json_request_with_cookie, response_json, test_app,
};
use serde_json::json;
use tower::ServiceExt;

fn signup_body() -> serde_json::Value {
    json!({
        "full_name": "Jordan Doe",
        "email": "jordan@example.com",
        "password": "secret-password"
    })
}

#[tokio::test]
async fn signup_sets_strict_httponly_cookie() {
    let app = test_app();

    let response = app
        .router
        .oneshot(json_request("POST", "/api/auth/signup", &signup_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("jwt="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));

    let body = response_json(response).await;
    assert_eq!(body["email"], "jordan@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn signup_duplicate_email_is_conflict() {
    let app = test_app();
    app.auth.seed_session("Jordan Doe", "jordan@example.com");

    let response = app
        .router
        .oneshot(json_request("POST", "/api/auth/signup", &signup_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(response_json(response).await["code"], "CONFLICT");
}

#[tokio::test]
async fn signup_field_violations_are_unprocessable() {
    let app = test_app();
    let body = json!({
        "full_name": "Jo",
        "email": "not-an-email",
        "password": "123"
    });

    let response = app
        .router
        .oneshot(json_request("POST", "/api/auth/signup", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"].as_array().unwrap().len() >= 3);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = test_app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/auth/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_with_wrong_credentials_is_unauthorized() {
    let app = test_app();
    app.auth.seed_session("Jordan Doe", "jordan@example.com");

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({ "email": "jordan@example.com", "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response_json(response).await["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn login_returns_user_and_cookie() {
    let app = test_app();
    app.auth.seed_session("Jordan Doe", "jordan@example.com");

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({ "email": "jordan@example.com", "password": "password" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));
    assert_eq!(response_json(response).await["full_name"], "Jordan Doe");
}

#[tokio::test]
async fn check_without_cookie_is_unauthorized() {
    let app = test_app();

    let response = app.router.oneshot(get("/api/auth/check")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response_json(response).await["code"],
        "AUTHENTICATION_REQUIRED"
    );
}

#[tokio::test]
async fn check_with_unknown_token_is_unauthorized() {
    let app = test_app();

    let response = app
        .router
        .oneshot(get_with_cookie("/api/auth/check", "garbage"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response_json(response).await["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn check_with_live_session_returns_user() {
    let app = test_app();
    let (user, token) = app.auth.seed_session("Jordan Doe", "jordan@example.com");

    let response = app
        .router
        .oneshot(get_with_cookie("/api/auth/check", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["id"], user.id.to_string());
}

#[tokio::test]
async fn logout_requires_session() {
    let app = test_app();

    let response = app
        .router
        .oneshot(json_request("POST", "/api/auth/logout", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_cookie() {
    let app = test_app();
    let (_, token) = app.auth.seed_session("Jordan Doe", "jordan@example.com");

    let response = app
        .router
        .oneshot(json_request_with_cookie(
            "POST",
            "/api/auth/logout",
            &token,
            &json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("jwt="));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app();
    let response = app.router.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["status"], "ok");
}
