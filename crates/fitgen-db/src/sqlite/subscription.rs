//! SQLite user subscription repository implementation

use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::{SubscriptionRow, SubscriptionWithPlanRow};
use crate::pool::DbPool;
use crate::repo::{CreateSubscription, SubscriptionRepository};

/// SQLite subscription repository
#[derive(Clone)]
pub struct SqliteSubscriptionRepository {
    pool: DbPool,
}

impl SqliteSubscriptionRepository {
    /// Create a new subscription repository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SqliteSubscriptionRepository {
    async fn create(&self, sub: CreateSubscription) -> DbResult<SubscriptionRow> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            r#"
            INSERT INTO user_subscriptions (user_id, plan_id, start_date, end_date, status)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, plan_id, start_date, end_date, status
            "#,
        )
        .bind(sub.user_id)
        .bind(sub.plan_id)
        .bind(sub.start_date)
        .bind(sub.end_date)
        .bind(&sub.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_current_by_user_id(
        &self,
        user_id: i64,
    ) -> DbResult<Option<SubscriptionWithPlanRow>> {
        // Prior rows are never deactivated; "current" is the most recently
        // started active row, with id as a tiebreaker for equal starts.
        let row = sqlx::query_as::<_, SubscriptionWithPlanRow>(
            r#"
            SELECT us.id, us.plan_id, p.name, p.duration_months, p.price, p.description,
                   us.start_date, us.end_date, us.status
            FROM user_subscriptions us
            JOIN subscription_plans p ON p.id = us.plan_id
            WHERE us.user_id = ? AND us.status = 'active'
            ORDER BY us.start_date DESC, us.id DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
