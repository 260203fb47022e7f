//! FitGen DB - Database abstractions
//!
//! SQLx/SQLite persistence layer for the account service.
//!
//! # Example
//!
//! ```rust,ignore
//! use fitgen_db::{create_pool, migrate, seed_plans, Repositories};
//!
//! let pool = create_pool("sqlite://fitgen.db").await?;
//! migrate(&pool).await?;
//! seed_plans(&pool).await?;
//! let repos = Repositories::new(pool);
//!
//! let user = repos.users.find_by_email("user@example.com").await?;
//! ```

pub mod error;
pub mod models;
pub mod pool;
pub mod repo;
pub mod schema;
pub mod sqlite;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pool::{create_pool, DbPool};
pub use repo::*;
pub use schema::{migrate, seed_plans};
pub use sqlite::{
    Repositories, SqlitePlanRepository, SqliteSubscriptionRepository, SqliteUserRepository,
};
