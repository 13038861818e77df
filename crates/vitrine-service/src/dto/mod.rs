//! Request/response data transfer objects.

mod auth_dto;
mod product_dto;

pub use auth_dto::{AuthSession, LoginRequest, MessageResponse, SignupRequest, UserResponse};
pub use product_dto::{
    CreateProductRequest, ListingSource, ProductListResponse, ProductResponse, UpdateProductRequest,
};
