//! HTTP handlers.

pub mod auth_controller;
pub mod health_controller;
pub mod product_controller;
