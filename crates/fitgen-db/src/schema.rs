//! Schema migration and catalog seeding
//!
//! Both routines are idempotent: the service runs them unconditionally at
//! every startup.

use crate::error::DbResult;
use crate::pool::DbPool;

/// Schema statements, applied in order
const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS subscription_plans (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        duration_months INTEGER NOT NULL CHECK (duration_months >= 1),
        price INTEGER NOT NULL CHECK (price >= 0),
        description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_subscriptions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        plan_id INTEGER NOT NULL REFERENCES subscription_plans(id),
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'active'
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_user_subscriptions_user_status
        ON user_subscriptions (user_id, status)
    "#,
];

/// Seeded plan catalog: (name, duration_months, price, description)
///
/// Prices are integers in the smallest currency unit.
const PLAN_CATALOG: &[(&str, i64, i64, &str)] = &[
    (
        "Free Trial",
        1,
        0,
        "One month of full access, on the house",
    ),
    (
        "Monthly",
        1,
        499,
        "Unlimited workout plans and recipes, billed monthly",
    ),
    (
        "Quarterly",
        3,
        1299,
        "Three months of unlimited access at a discount",
    ),
    (
        "Yearly",
        12,
        4499,
        "A full year of unlimited access, best value",
    ),
];

/// Apply the schema
pub async fn migrate(pool: &DbPool) -> DbResult<()> {
    for statement in MIGRATIONS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Seed the plan catalog
///
/// Relies on the unique index on `name`: repeated runs insert nothing.
pub async fn seed_plans(pool: &DbPool) -> DbResult<()> {
    for (name, duration_months, price, description) in PLAN_CATALOG {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO subscription_plans (name, duration_months, price, description)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(duration_months)
        .bind(price)
        .bind(description)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!(plan = name, "Seeded subscription plan");
        }
    }
    Ok(())
}
