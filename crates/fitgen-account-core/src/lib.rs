//! FitGen Account Core - Account and subscription business logic
//!
//! Core functionality for the account service: password hashing, session
//! token issuance and verification, subscription period arithmetic, and
//! the service facade tying them to injected storage.

pub mod config;
pub mod error;
pub mod password;
pub mod period;
pub mod service;
pub mod token;

pub use config::*;
pub use error::*;
pub use service::*;
pub use token::{TokenClaims, TokenIssuer};
