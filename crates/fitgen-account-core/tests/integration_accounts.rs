//! Account service integration tests
//!
//! Exercise the full service against a per-test in-memory SQLite database.

use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use sqlx::sqlite::SqlitePoolOptions;

use fitgen_account_core::{AccountConfig, AccountError, AccountService, NewAccount};
use fitgen_db::{
    migrate, seed_plans, DbPool, PlanRepository, Repositories, SqlitePlanRepository,
    SqliteSubscriptionRepository, SqliteUserRepository,
};
use fitgen_types::{PlanId, SubscriptionStatus, UserId};

type Service =
    AccountService<SqliteUserRepository, SqlitePlanRepository, SqliteSubscriptionRepository>;

const SECRET: &str = "integration-test-signing-secret";

async fn service_with_config(config: AccountConfig) -> (Service, Repositories, DbPool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    migrate(&pool).await.expect("migrate");
    seed_plans(&pool).await.expect("seed");

    let repos = Repositories::new(pool.clone());
    let svc = AccountService::new(
        config,
        Arc::new(repos.users.clone()),
        Arc::new(repos.plans.clone()),
        Arc::new(repos.subscriptions.clone()),
    );
    (svc, repos, pool)
}

async fn service() -> (Service, Repositories, DbPool) {
    service_with_config(AccountConfig::new(SECRET).with_token_ttl(Duration::from_secs(3600))).await
}

fn alice() -> NewAccount {
    NewAccount {
        username: "alice".to_string(),
        email: "alice@x.com".to_string(),
        password: "pw123456".to_string(),
    }
}

#[tokio::test]
async fn register_login_current_subscription_flow() {
    let (svc, _repos, _pool) = service().await;

    svc.register(alice()).await.expect("register");

    // Login by email (email takes precedence over username lookup)
    let outcome = svc.login("alice@x.com", "pw123456").await.expect("login");
    assert_eq!(outcome.user.username, "alice");
    assert_eq!(outcome.user.email, "alice@x.com");

    // The token round-trips through verification
    let claims = svc.verify_token(&outcome.token).expect("verify");
    assert_eq!(claims.username, "alice");
    let user_id = claims.user_id().expect("user id");

    // Registration granted the trial plan
    let current = svc
        .current_subscription(user_id)
        .await
        .expect("query")
        .expect("trial assigned at registration");
    assert_eq!(current.name, "Free Trial");
    assert_eq!(current.price, 0);
    assert_eq!(current.status, SubscriptionStatus::Active);

    // End date is start advanced by one calendar month
    let expected_end = current
        .start_date
        .checked_add_months(chrono::Months::new(1))
        .expect("no overflow");
    assert_eq!(current.end_date, expected_end);
}

#[tokio::test]
async fn registration_survives_trial_assignment_failure() {
    // Point trial assignment at a plan that does not exist; the insert
    // fails but registration must still commit.
    let (svc, _repos, _pool) =
        service_with_config(AccountConfig::new(SECRET).with_trial_plan("No Such Plan")).await;

    svc.register(alice()).await.expect("register must succeed");

    // The account is fully usable, just without a subscription
    let outcome = svc.login("alice@x.com", "pw123456").await.expect("login");
    let user_id = svc
        .verify_token(&outcome.token)
        .expect("verify")
        .user_id()
        .expect("user id");

    let current = svc.current_subscription(user_id).await.expect("query");
    assert!(current.is_none());
}

#[tokio::test]
async fn login_by_username_also_works() {
    let (svc, _repos, _pool) = service().await;
    svc.register(alice()).await.expect("register");

    let outcome = svc.login("alice", "pw123456").await.expect("login");
    assert_eq!(outcome.user.email, "alice@x.com");
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let (svc, _repos, _pool) = service().await;
    svc.register(alice()).await.expect("first register");

    let mut dup = alice();
    dup.email = "other@x.com".to_string();
    let err = svc.register(dup).await.expect_err("must conflict");
    assert!(matches!(err, AccountError::Conflict(_)));
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let (svc, _repos, _pool) = service().await;
    svc.register(alice()).await.expect("first register");

    let mut dup = alice();
    dup.username = "alice2".to_string();
    let err = svc.register(dup).await.expect_err("must conflict");
    assert!(matches!(err, AccountError::Conflict(_)));
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (svc, _repos, _pool) = service().await;
    svc.register(alice()).await.expect("register");

    let wrong_password = svc
        .login("alice@x.com", "not-the-password")
        .await
        .expect_err("wrong password");
    let unknown_user = svc
        .login("nobody@x.com", "pw123456")
        .await
        .expect_err("unknown identifier");

    // Same variant and same message for both failure causes
    assert!(matches!(wrong_password, AccountError::InvalidCredentials));
    assert!(matches!(unknown_user, AccountError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
}

#[tokio::test]
async fn register_does_not_return_a_token() {
    let (svc, _repos, _pool) = service().await;

    // register yields only a success signal; a token requires login
    svc.register(alice()).await.expect("register");
    let err = svc.verify_token("").expect_err("empty token is invalid");
    assert!(matches!(err, AccountError::InvalidToken));
}

#[tokio::test]
async fn subscribe_to_yearly_plan_ends_twelve_months_out() {
    let (svc, repos, _pool) = service().await;
    svc.register(alice()).await.expect("register");
    let outcome = svc.login("alice@x.com", "pw123456").await.expect("login");
    let user_id = svc
        .verify_token(&outcome.token)
        .expect("verify")
        .user_id()
        .expect("user id");

    let yearly = repos
        .plans
        .find_by_name("Yearly")
        .await
        .expect("query")
        .expect("seeded");

    let sub_id = svc
        .subscribe(user_id, PlanId(yearly.id))
        .await
        .expect("subscribe");

    let current = svc
        .current_subscription(user_id)
        .await
        .expect("query")
        .expect("subscribed");
    assert_eq!(current.id, sub_id);
    assert_eq!(current.name, "Yearly");
    assert_eq!(current.duration_months, 12);

    // Exactly twelve calendar months after the start
    assert_eq!(current.end_date.year(), current.start_date.year() + 1);
    assert_eq!(current.end_date.month(), current.start_date.month());
}

#[tokio::test]
async fn subscribe_to_unknown_plan_is_not_found() {
    let (svc, _repos, _pool) = service().await;
    svc.register(alice()).await.expect("register");
    let outcome = svc.login("alice@x.com", "pw123456").await.expect("login");
    let user_id = svc
        .verify_token(&outcome.token)
        .expect("verify")
        .user_id()
        .expect("user id");

    let err = svc
        .subscribe(user_id, PlanId(9999))
        .await
        .expect_err("unknown plan");
    assert!(matches!(err, AccountError::PlanNotFound));
}

#[tokio::test]
async fn newer_subscription_becomes_current_without_touching_old_rows() {
    let (svc, repos, _pool) = service().await;
    svc.register(alice()).await.expect("register");
    let outcome = svc.login("alice@x.com", "pw123456").await.expect("login");
    let user_id = svc
        .verify_token(&outcome.token)
        .expect("verify")
        .user_id()
        .expect("user id");

    let monthly = repos
        .plans
        .find_by_name("Monthly")
        .await
        .expect("query")
        .expect("seeded");

    let sub_id = svc
        .subscribe(user_id, PlanId(monthly.id))
        .await
        .expect("subscribe");

    // The paid plan supersedes the trial at read time
    let current = svc
        .current_subscription(user_id)
        .await
        .expect("query")
        .expect("subscribed");
    assert_eq!(current.id, sub_id);
    assert_eq!(current.name, "Monthly");
}

#[tokio::test]
async fn current_subscription_for_user_without_rows_is_none() {
    let (svc, _repos, _pool) = service().await;
    let current = svc
        .current_subscription(UserId(12345))
        .await
        .expect("query");
    assert!(current.is_none());
}

#[tokio::test]
async fn list_plans_is_deduplicated_after_double_seed() {
    let (svc, _repos, pool) = service().await;

    // Run the seed routine a second time
    seed_plans(&pool).await.expect("re-seed");

    let plans = svc.list_plans().await.expect("list");
    assert_eq!(plans.len(), 4);
    let mut names: Vec<_> = plans.iter().map(|p| p.name.clone()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), plans.len());
}
