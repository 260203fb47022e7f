//! Application state

use std::sync::Arc;

use fitgen_account_core::AccountService;
use fitgen_db::{
    Repositories, SqlitePlanRepository, SqliteSubscriptionRepository, SqliteUserRepository,
};

use crate::config::Config;

/// Type alias for the account service with concrete repository types
pub type AccountServiceImpl =
    AccountService<SqliteUserRepository, SqlitePlanRepository, SqliteSubscriptionRepository>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Account service for credentials, tokens, and subscriptions
    pub account: Arc<AccountServiceImpl>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(repos: Repositories, config: Config) -> Self {
        let account = AccountService::new(
            config.account.clone(),
            Arc::new(repos.users),
            Arc::new(repos.plans),
            Arc::new(repos.subscriptions),
        );

        Self {
            account: Arc::new(account),
            config: Arc::new(config),
        }
    }

    /// Get request timeout from config
    pub fn request_timeout(&self) -> std::time::Duration {
        self.config.request_timeout
    }
}
