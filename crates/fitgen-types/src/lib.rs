//! FitGen Types - Shared domain types
//!
//! This crate contains domain types used across the FitGen backend:
//! - User identity
//! - Subscription plans and pricing
//! - User subscriptions

pub mod plan;
pub mod subscription;
pub mod user;

pub use plan::*;
pub use subscription::*;
pub use user::*;
