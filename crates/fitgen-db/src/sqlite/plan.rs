//! SQLite subscription plan repository implementation

use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::PlanRow;
use crate::pool::DbPool;
use crate::repo::PlanRepository;

/// SQLite plan repository
#[derive(Clone)]
pub struct SqlitePlanRepository {
    pool: DbPool,
}

impl SqlitePlanRepository {
    /// Create a new plan repository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for SqlitePlanRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<PlanRow>> {
        let plan = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT id, name, duration_months, price, description
            FROM subscription_plans
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    async fn find_by_name(&self, name: &str) -> DbResult<Option<PlanRow>> {
        let plan = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT id, name, duration_months, price, description
            FROM subscription_plans
            WHERE name = ?
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    async fn list(&self) -> DbResult<Vec<PlanRow>> {
        // Deduplicate by name at the query level. The unique index makes
        // duplicates impossible by construction, but the catalog returned
        // to callers must stay unique even if seeding ever raced.
        let plans = sqlx::query_as::<_, PlanRow>(
            r#"
            SELECT id, name, duration_months, price, description
            FROM subscription_plans
            WHERE id IN (
                SELECT MIN(id) FROM subscription_plans GROUP BY name
            )
            ORDER BY price ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }
}
