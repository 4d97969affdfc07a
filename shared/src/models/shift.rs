//! Shift Models (work shifts and staffing)

use serde::{Deserialize, Serialize};

/// Work shift
///
/// `end_time > start_time` is enforced by a CHECK constraint. Shifts are
/// used both for staffing status ("on shift now") and for salary
/// computation (shift count × base rate).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Shift {
    pub id: i64,
    pub start_time: i64,
    pub end_time: i64,
}

/// Assignment of a user to a shift
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ShiftStaff {
    pub id: i64,
    pub shift_id: i64,
    pub user_id: String,
}
