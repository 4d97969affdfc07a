//! Revenue report
//!
//! Daily revenue of PAID orders plus range totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::util::millis_to_date_string;

use crate::db::repository::order::PaidOrder;

/// Revenue of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    pub date: String,
    pub revenue: f64,
}

/// Range totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStats {
    pub total_revenue: f64,
    /// Total revenue divided by the number of distinct days with sales
    pub average_revenue: f64,
    /// Highest single-day revenue
    pub max_revenue: f64,
}

/// Full revenue report payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    pub daily_data: Vec<DailyRevenue>,
    pub stats: RevenueStats,
}

/// Build the revenue report from PAID orders inside the requested range.
///
/// Orders are grouped by the UTC calendar date of `paid_at`. Days come out
/// sorted ascending. An empty order set yields all-zero stats — in
/// particular `max_revenue` is 0, not the result of a max over nothing.
pub fn build_revenue_report(orders: &[PaidOrder]) -> RevenueReport {
    let mut daily: BTreeMap<String, f64> = BTreeMap::new();
    for order in orders {
        *daily
            .entry(millis_to_date_string(order.paid_at))
            .or_insert(0.0) += order.total_price;
    }

    let total_revenue: f64 = orders.iter().map(|o| o.total_price).sum();
    let average_revenue = if daily.is_empty() {
        0.0
    } else {
        total_revenue / daily.len() as f64
    };
    let max_revenue = daily.values().copied().fold(0.0_f64, f64::max);

    RevenueReport {
        daily_data: daily
            .into_iter()
            .map(|(date, revenue)| DailyRevenue { date, revenue })
            .collect(),
        stats: RevenueStats {
            total_revenue,
            average_revenue,
            max_revenue,
        },
    }
}
