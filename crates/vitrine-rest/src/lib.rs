//! # Vitrine REST
//!
//! The HTTP surface: routing, cookie/session extractors, request
//! validation, error mapping, and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::{AppState, CookieSettings};
