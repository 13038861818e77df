//! Shared test fixtures: in-memory services behind the real router.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use vitrine_core::{
    Category, ListingParams, ListingQuery, Product, ProductId, User, UserId, ValidateExt,
    VitrineError, VitrineResult,
};
use vitrine_rest::{build_router, AppState, CookieSettings};
use vitrine_service::dto::{
    AuthSession, CreateProductRequest, ListingSource, LoginRequest, ProductListResponse,
    ProductResponse, SignupRequest, UpdateProductRequest, UserResponse,
};
use vitrine_service::{AuthService, ProductService};

pub const COOKIE_NAME: &str = "jwt";

#[derive(Default)]
pub struct StubAuthService {
    next_token: AtomicUsize,
    sessions: Mutex<HashMap<String, UserResponse>>,
    accounts: Mutex<HashMap<String, (String, UserResponse)>>,
}

impl StubAuthService {
    fn issue(&self, user: &UserResponse) -> String {
        let token = format!("token-{}", self.next_token.fetch_add(1, Ordering::SeqCst));
        self.sessions
            .lock()
            .unwrap()
            .insert(token.clone(), user.clone());
        token
    }

    /// Registers an account directly and returns a live session for it.
    pub fn seed_session(&self, full_name: &str, email: &str) -> (UserResponse, String) {
        let user = User::new(
            full_name.to_string(),
            email.to_string(),
            "$argon2id$hash".to_string(),
            "https://avatar.iran.liara.run/public/1.png".to_string(),
        );
        let response = UserResponse::from(&user);
        self.accounts.lock().unwrap().insert(
            email.to_lowercase(),
            ("password".to_string(), response.clone()),
        );
        let token = self.issue(&response);
        (response, token)
    }
}

#[async_trait]
impl AuthService for StubAuthService {
    async fn signup(&self, request: SignupRequest) -> VitrineResult<AuthSession> {
        let key = request.email.to_lowercase();
        if self.accounts.lock().unwrap().contains_key(&key) {
            return Err(VitrineError::conflict(
                "An account with this email already exists",
            ));
        }
        let user = User::new(
            request.full_name,
            request.email,
            "$argon2id$hash".to_string(),
            "https://avatar.iran.liara.run/public/1.png".to_string(),
        );
        let response = UserResponse::from(&user);
        self.accounts
            .lock()
            .unwrap()
            .insert(key, (request.password, response.clone()));
        let token = self.issue(&response);
        Ok(AuthSession {
            user: response,
            token,
        })
    }

    async fn login(&self, request: LoginRequest) -> VitrineResult<AuthSession> {
        let accounts = self.accounts.lock().unwrap();
        let (password, user) = accounts
            .get(&request.email.to_lowercase())
            .ok_or(VitrineError::InvalidCredentials)?;
        if *password != request.password {
            return Err(VitrineError::InvalidCredentials);
        }
        let user = user.clone();
        drop(accounts);
        let token = self.issue(&user);
        Ok(AuthSession { user, token })
    }

    async fn resolve_session(&self, token: Option<&str>) -> VitrineResult<UserResponse> {
        let token = token.ok_or(VitrineError::MissingToken)?;
        self.sessions
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| VitrineError::InvalidToken("Unknown token".to_string()))
    }
}

/// Product service with real semantics over in-memory state; listings
/// report `cache` once warmed and fall back to `store` after any write.
#[derive(Default)]
pub struct StubProductService {
    products: Mutex<HashMap<ProductId, Product>>,
    warmed: Mutex<bool>,
}

impl StubProductService {
    fn listing(&self) -> Vec<ProductResponse> {
        let mut products: Vec<Product> = self.products.lock().unwrap().values().cloned().collect();
        products.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        products.iter().map(ProductResponse::from).collect()
    }

    fn mark_dirty(&self) {
        *self.warmed.lock().unwrap() = false;
    }
}

#[async_trait]
impl ProductService for StubProductService {
    async fn list_products(&self, params: &ListingParams) -> VitrineResult<ProductListResponse> {
        ListingQuery::normalize(params)?;
        let mut warmed = self.warmed.lock().unwrap();
        let source = if *warmed {
            ListingSource::Cache
        } else {
            *warmed = true;
            ListingSource::Store
        };
        Ok(ProductListResponse {
            source,
            products: self.listing(),
        })
    }

    async fn my_products(&self, owner: UserId) -> VitrineResult<Vec<ProductResponse>> {
        Ok(self
            .listing()
            .into_iter()
            .filter(|p| p.created_by == owner)
            .collect())
    }

    async fn create_product(
        &self,
        owner: UserId,
        request: CreateProductRequest,
    ) -> VitrineResult<ProductResponse> {
        let category = request
            .category
            .parse::<Category>()
            .map_err(|e| VitrineError::validation(e.to_string()))?;
        let product = Product::new(
            request.name,
            request.price,
            request.description,
            category,
            None,
            owner,
        );
        self.products
            .lock()
            .unwrap()
            .insert(product.id, product.clone());
        self.mark_dirty();
        Ok(ProductResponse::from(&product))
    }

    async fn edit_product(
        &self,
        owner: UserId,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> VitrineResult<ProductResponse> {
        let mut products = self.products.lock().unwrap();
        let product = products
            .get_mut(&id)
            .ok_or_else(|| VitrineError::not_found("product", id))?;
        if !product.is_owned_by(owner) {
            return Err(VitrineError::forbidden("You do not own this product"));
        }

        // Payload rules run only once ownership is settled.
        request.validate_request()?;
        let category = request
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()
            .map_err(|e| VitrineError::validation(e.to_string()))?;
        product.apply_edit(request.price, request.description, category, None);
        let response = ProductResponse::from(&*product);
        drop(products);
        self.mark_dirty();
        Ok(response)
    }

    async fn delete_product(&self, owner: UserId, id: ProductId) -> VitrineResult<()> {
        let mut products = self.products.lock().unwrap();
        let product = products
            .get(&id)
            .ok_or_else(|| VitrineError::not_found("product", id))?;
        if !product.is_owned_by(owner) {
            return Err(VitrineError::forbidden("You do not own this product"));
        }
        products.remove(&id);
        drop(products);
        self.mark_dirty();
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub auth: Arc<StubAuthService>,
    pub products: Arc<StubProductService>,
}

pub fn test_app() -> TestApp {
    let auth = Arc::new(StubAuthService::default());
    let products = Arc::new(StubProductService::default());
    let state = AppState::new(
        products.clone(),
        auth.clone(),
        CookieSettings {
            name: COOKIE_NAME.to_string(),
            secure: false,
            ttl_days: 7,
        },
    );
    TestApp {
        router: build_router(state, &["http://localhost:5173".to_string()]),
        auth,
        products,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, format!("{COOKIE_NAME}={token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request_with_cookie(
    method: &str,
    uri: &str,
    token: &str,
    body: &serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, format!("{COOKIE_NAME}={token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
