//! Authentication
//!
//! JWT token service, Argon2 password hashing and the axum middleware that
//! gates `/api` routes.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth, require_roles};
