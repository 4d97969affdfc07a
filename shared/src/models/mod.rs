//! Domain models
//!
//! Row types shared between the server and clients. Timestamps are Unix
//! milliseconds (`i64`), money amounts are `f64`. JSON serialization is
//! camelCase; database columns stay snake_case.

pub mod menu_item;
pub mod order;
pub mod password_reset;
pub mod payment;
pub mod shift;
pub mod user;

pub use menu_item::MenuItem;
pub use order::{Order, OrderItem, OrderStatus};
pub use password_reset::PasswordResetToken;
pub use payment::{Payment, PaymentType};
pub use shift::{Shift, ShiftStaff};
pub use user::{StaffMember, User, UserCreate, UserProfile, UserRole, UserUpdate};
