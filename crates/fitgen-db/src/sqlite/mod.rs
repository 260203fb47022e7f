//! SQLite repository implementations

mod plan;
mod subscription;
mod user;

pub use plan::SqlitePlanRepository;
pub use subscription::SqliteSubscriptionRepository;
pub use user::SqliteUserRepository;

use crate::pool::DbPool;

/// All repositories bundled for convenient construction
#[derive(Clone)]
pub struct Repositories {
    /// User repository
    pub users: SqliteUserRepository,
    /// Plan repository
    pub plans: SqlitePlanRepository,
    /// Subscription repository
    pub subscriptions: SqliteSubscriptionRepository,
}

impl Repositories {
    /// Create repositories sharing one pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: SqliteUserRepository::new(pool.clone()),
            plans: SqlitePlanRepository::new(pool.clone()),
            subscriptions: SqliteSubscriptionRepository::new(pool),
        }
    }
}
