//! Shared types for the Samovar back-office
//!
//! Common types used by the server and any future client crates:
//! error codes, API response envelope, domain models, time helpers.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
