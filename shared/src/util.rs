//! Small shared utilities

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a Unix-millisecond timestamp as its UTC calendar date
/// (`YYYY-MM-DD`).
///
/// Reports group orders by this value; there is no business-timezone
/// normalization, matching how the dashboard has always bucketed days.
pub fn millis_to_date_string(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_to_date_string() {
        // 2024-03-15T18:30:00Z
        assert_eq!(millis_to_date_string(1_710_527_400_000), "2024-03-15");
        // Epoch
        assert_eq!(millis_to_date_string(0), "1970-01-01");
    }

    #[test]
    fn test_midnight_boundary() {
        // 2024-03-15T23:59:59.999Z stays on the 15th...
        assert_eq!(millis_to_date_string(1_710_547_199_999), "2024-03-15");
        // ...and one millisecond later it is the 16th
        assert_eq!(millis_to_date_string(1_710_547_200_000), "2024-03-16");
    }
}
