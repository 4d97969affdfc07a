//! 时间工具函数 — 报表时间范围
//!
//! 所有日期→时间戳转换统一在 API handler 层完成，
//! repository 层只接收 `i64` Unix millis。
//!
//! Dates are bucketed in UTC, the same representation the dashboard has
//! always used; there is no business-timezone normalization.

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 日期开始 (00:00:00 UTC) → Unix millis
pub fn day_start_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
        .timestamp_millis()
}

/// 日期结束 → 次日 00:00:00 UTC 的 Unix millis
///
/// 返回次日零点时间戳，调用方使用 `< end` (不含) 语义，
/// 因此 end 日期本身是包含的。
pub fn day_end_millis(date: NaiveDate) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day)
}

/// A report date range: `[start, end)` in Unix millis
///
/// Built from inclusive calendar dates; `end` is the exclusive
/// next-day-midnight bound of the inclusive end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: i64,
    pub end: i64,
}

impl DateRange {
    /// Parse an inclusive `[start_date, end_date]` pair of `YYYY-MM-DD`
    /// strings into a millisecond range.
    ///
    /// Rejects ranges where the end date precedes the start date.
    pub fn parse(start_date: &str, end_date: &str) -> AppResult<Self> {
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;
        if end < start {
            return Err(AppError::validation(format!(
                "endDate {} precedes startDate {}",
                end_date, start_date
            )));
        }
        Ok(Self {
            start: day_start_millis(start),
            end: day_end_millis(end),
        })
    }

    /// Whether a timestamp falls inside the range
    pub fn contains(&self, millis: i64) -> bool {
        millis >= self.start && millis < self.end
    }
}
