//! Connection pool management

mod sqlite;

pub use sqlite::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig};

pub use sqlx::SqlitePool;
