//! # Vitrine Repository
//!
//! Postgres persistence: connection pool, migrations, and the
//! user/product repositories.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::DatabasePool;
pub use postgres::{PostgresProductRepository, PostgresUserRepository};
pub use traits::{ProductRepository, UserRepository};
