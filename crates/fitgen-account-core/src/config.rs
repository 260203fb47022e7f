//! Account service configuration

use std::time::Duration;

/// Name of the seeded plan granted automatically at registration
pub const DEFAULT_TRIAL_PLAN: &str = "Free Trial";

/// Default session token lifetime
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Account service configuration
#[derive(Clone)]
pub struct AccountConfig {
    /// Token signing secret
    pub token_secret: String,
    /// Session token lifetime
    pub token_ttl: Duration,
    /// Name of the trial plan assigned at registration
    pub trial_plan: String,
}

impl AccountConfig {
    /// Create a configuration with the default token lifetime and trial plan
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
            trial_plan: DEFAULT_TRIAL_PLAN.to_string(),
        }
    }

    /// Override the token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Override the trial plan name
    pub fn with_trial_plan(mut self, name: impl Into<String>) -> Self {
        self.trial_plan = name.into();
        self
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("token_ttl", &self.token_ttl)
            .field("trial_plan", &self.trial_plan)
            .finish_non_exhaustive()
    }
}
