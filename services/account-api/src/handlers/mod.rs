//! HTTP handlers

pub mod auth;
pub mod health;
pub mod subscription;

pub use auth::{login, profile, register};
pub use health::{health, ready};
pub use subscription::{current_subscription, list_plans, subscribe};
