//! Account service - ties together credentials, tokens, and subscriptions

use chrono::Utc;
use std::sync::Arc;

use fitgen_db::{
    CreateSubscription, CreateUser, PlanRepository, SubscriptionRepository, UserRepository,
};
use fitgen_types::{Plan, PlanId, SubscriptionId, SubscriptionStatus, SubscriptionWithPlan, User, UserId};

use crate::{password, period, AccountConfig, AccountError, TokenClaims, TokenIssuer};

/// Registration input
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Requested username
    pub username: String,
    /// Email address
    pub email: String,
    /// Plaintext password (hashed before storage, never stored)
    pub password: String,
}

/// Successful login result
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed session token
    pub token: String,
    /// Public user summary
    pub user: User,
}

/// Account and subscription service
///
/// Owns user records, credential verification, session-token issuance and
/// verification, the plan catalog, and per-user subscriptions. Storage is
/// injected through the repository traits.
pub struct AccountService<U, P, S>
where
    U: UserRepository,
    P: PlanRepository,
    S: SubscriptionRepository,
{
    config: AccountConfig,
    tokens: TokenIssuer,
    users: Arc<U>,
    plans: Arc<P>,
    subscriptions: Arc<S>,
}

impl<U, P, S> AccountService<U, P, S>
where
    U: UserRepository,
    P: PlanRepository,
    S: SubscriptionRepository,
{
    /// Create a new account service
    pub fn new(config: AccountConfig, users: Arc<U>, plans: Arc<P>, subscriptions: Arc<S>) -> Self {
        let tokens = TokenIssuer::new(config.token_secret.as_bytes(), config.token_ttl);
        Self {
            tokens,
            users,
            plans,
            subscriptions,
            config,
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a new user
    ///
    /// Hashes the password, inserts the user, and best-effort assigns the
    /// seeded trial plan. Trial-assignment failure is logged but does not
    /// fail the registration. The caller must log in separately; no token
    /// is issued here.
    pub async fn register(&self, account: NewAccount) -> Result<(), AccountError> {
        let account = validate_registration(account)?;

        let password = account.password;
        let password_hash = tokio::task::spawn_blocking(move || password::hash(&password))
            .await
            .map_err(|e| AccountError::Internal(format!("hashing task failed: {e}")))??;

        // Duplicate username/email is resolved by the storage layer's
        // unique indexes, never by check-then-insert.
        let user = self
            .users
            .create(CreateUser {
                username: account.username,
                email: account.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        if let Err(e) = self.assign_trial(user.id).await {
            tracing::warn!(user_id = user.id, error = %e, "Trial assignment failed");
        }

        Ok(())
    }

    /// Assign the seeded trial plan to a freshly registered user
    async fn assign_trial(&self, user_id: i64) -> Result<(), AccountError> {
        let plan = self
            .plans
            .find_by_name(&self.config.trial_plan)
            .await?
            .ok_or(AccountError::PlanNotFound)?;

        self.create_subscription(user_id, &plan).await?;
        tracing::info!(user_id, plan = %plan.name, "Trial subscription assigned");
        Ok(())
    }

    // =========================================================================
    // Login and tokens
    // =========================================================================

    /// Verify credentials and issue a session token
    ///
    /// The identifier is matched against the email column first, then the
    /// username column. Unknown identifiers and wrong passwords produce
    /// the identical error.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<LoginOutcome, AccountError> {
        let identifier = identifier.trim();
        if identifier.is_empty() || password.is_empty() {
            return Err(AccountError::Validation(
                "identifier and password are required".to_string(),
            ));
        }

        let user = match self.users.find_by_email(identifier).await? {
            Some(user) => Some(user),
            None => self.users.find_by_username(identifier).await?,
        };

        let Some(user) = user else {
            return Err(AccountError::InvalidCredentials);
        };

        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || password::verify(&password, &stored_hash))
            .await
            .map_err(|e| AccountError::Internal(format!("verification task failed: {e}")))??;

        if !valid {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.tokens.issue(UserId(user.id), &user.username)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginOutcome {
            token,
            user: user.into_user(),
        })
    }

    /// Verify a session token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AccountError> {
        self.tokens.verify(token)
    }

    // =========================================================================
    // Plans and subscriptions
    // =========================================================================

    /// List the seeded plan catalog
    pub async fn list_plans(&self) -> Result<Vec<Plan>, AccountError> {
        let plans = self.plans.list().await?;
        Ok(plans.into_iter().map(|p| p.into_plan()).collect())
    }

    /// Subscribe a user to a plan
    ///
    /// Inserts a new subscription row; prior rows are left untouched and
    /// "current" is resolved at read time.
    pub async fn subscribe(
        &self,
        user_id: UserId,
        plan_id: PlanId,
    ) -> Result<SubscriptionId, AccountError> {
        let plan = self
            .plans
            .find_by_id(plan_id.0)
            .await?
            .ok_or(AccountError::PlanNotFound)?;

        let row = self.create_subscription(user_id.0, &plan).await?;
        tracing::info!(user_id = user_id.0, plan = %plan.name, subscription_id = row.id, "Subscription created");
        Ok(SubscriptionId(row.id))
    }

    /// Get the user's current subscription, joined with plan details
    ///
    /// `None` means the user has no active subscription; that is not an
    /// error.
    pub async fn current_subscription(
        &self,
        user_id: UserId,
    ) -> Result<Option<SubscriptionWithPlan>, AccountError> {
        let row = self
            .subscriptions
            .find_current_by_user_id(user_id.0)
            .await?;
        Ok(row.map(|r| r.into_domain()))
    }

    /// Insert a subscription row for a plan, starting now
    async fn create_subscription(
        &self,
        user_id: i64,
        plan: &fitgen_db::PlanRow,
    ) -> Result<fitgen_db::SubscriptionRow, AccountError> {
        let months = u32::try_from(plan.duration_months)
            .map_err(|_| AccountError::Internal("invalid plan duration".to_string()))?;

        let start_date = Utc::now();
        let end_date = period::add_calendar_months(start_date, months)
            .ok_or_else(|| AccountError::Internal("subscription end date overflow".to_string()))?;

        let row = self
            .subscriptions
            .create(CreateSubscription {
                user_id,
                plan_id: plan.id,
                start_date,
                end_date,
                status: SubscriptionStatus::Active.to_string(),
            })
            .await?;

        Ok(row)
    }
}

impl<U, P, S> std::fmt::Debug for AccountService<U, P, S>
where
    U: UserRepository,
    P: PlanRepository,
    S: SubscriptionRepository,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Validate and normalize registration input
fn validate_registration(account: NewAccount) -> Result<NewAccount, AccountError> {
    let username = account.username.trim().to_string();
    let email = account.email.trim().to_string();

    if username.is_empty() || email.is_empty() || account.password.is_empty() {
        return Err(AccountError::Validation(
            "username, email, and password are required".to_string(),
        ));
    }

    Ok(NewAccount {
        username,
        email,
        password: account.password,
    })
}
