//! Shift Repository
//!
//! Shifts are written by the POS; the back office only reads them, for the
//! staffing status column and the salary report.

use super::RepoResult;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::utils::time::DateRange;

/// A shift worked by one employee (salary report input row)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeShift {
    pub user_id: String,
    pub start_time: i64,
    pub end_time: i64,
}

/// IDs of users assigned to a shift that starts inside `[day_start,
/// day_end)` — the "on shift now" status of the staff listing.
pub async fn find_on_shift_user_ids(
    pool: &SqlitePool,
    day_start: i64,
    day_end: i64,
) -> RepoResult<Vec<String>> {
    let ids: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT ss.user_id
         FROM shift_staff ss
         JOIN shifts s ON s.id = ss.shift_id
         WHERE s.start_time >= ? AND s.start_time < ?",
    )
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Per-employee shifts overlapping the range.
///
/// The aggregation engine applies the strict containment filter
/// (`start_time >= range.start && end_time <= range.end`); the query only
/// bounds the working set.
pub async fn find_employee_shifts_overlapping(
    pool: &SqlitePool,
    range: DateRange,
) -> RepoResult<Vec<EmployeeShift>> {
    let shifts = sqlx::query_as::<_, EmployeeShift>(
        "SELECT ss.user_id, s.start_time, s.end_time
         FROM shift_staff ss
         JOIN shifts s ON s.id = ss.shift_id
         WHERE s.start_time < ? AND s.end_time > ?
         ORDER BY s.start_time, ss.user_id",
    )
    .bind(range.end)
    .bind(range.start)
    .fetch_all(pool)
    .await?;
    Ok(shifts)
}
