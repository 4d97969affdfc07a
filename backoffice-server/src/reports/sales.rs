//! Sales report
//!
//! Daily sales and profit, plus the best-selling menu items of the range.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use shared::util::millis_to_date_string;

use crate::db::repository::order::{PaidOrder, SoldItem};

/// How many top-selling items the report returns
pub const TOP_ITEMS_LIMIT: usize = 5;

/// Sales and profit of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: String,
    /// Sum of order totals paid that day
    pub sales: f64,
    /// Sum of (sale price − cost price) × quantity over that day's items
    pub profit: f64,
}

/// Aggregated sales of one menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellingItem {
    pub name: String,
    /// Units sold
    pub sales: i64,
    /// Revenue contributed (price at sale × quantity)
    pub revenue: f64,
}

/// Range totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStats {
    pub total_sales: f64,
    /// Total sales divided by the number of orders
    pub average_check: f64,
    pub total_profit: f64,
}

/// Full sales report payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub daily_data: Vec<DailySales>,
    pub top_selling_items: Vec<TopSellingItem>,
    pub stats: SalesStats,
}

/// Build the sales report from PAID orders and their items.
///
/// `orders` drive the per-day sales figures and the check average; `items`
/// (already joined with their menu item) drive profit and the top-seller
/// list. Items are expected in chronological order: ties in the top-seller
/// ranking keep the first-encountered item first (stable sort).
pub fn build_sales_report(orders: &[PaidOrder], items: &[SoldItem]) -> SalesReport {
    // Per-day sales from order totals
    let mut daily: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for order in orders {
        let entry = daily
            .entry(millis_to_date_string(order.paid_at))
            .or_insert((0.0, 0.0));
        entry.0 += order.total_price;
    }

    // Per-day profit and per-item aggregation in one pass
    let mut top_items: Vec<TopSellingItem> = Vec::new();
    let mut item_index: HashMap<i64, usize> = HashMap::new();
    for item in items {
        let profit = (item.price - item.cost_price) * item.quantity as f64;
        let entry = daily
            .entry(millis_to_date_string(item.paid_at))
            .or_insert((0.0, 0.0));
        entry.1 += profit;

        let idx = *item_index.entry(item.menu_item_id).or_insert_with(|| {
            top_items.push(TopSellingItem {
                name: item.name.clone(),
                sales: 0,
                revenue: 0.0,
            });
            top_items.len() - 1
        });
        top_items[idx].sales += item.quantity;
        top_items[idx].revenue += item.price * item.quantity as f64;
    }

    // Stable sort keeps first-encountered order on equal revenue
    top_items.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(Ordering::Equal)
    });
    top_items.truncate(TOP_ITEMS_LIMIT);

    let total_sales: f64 = orders.iter().map(|o| o.total_price).sum();
    let average_check = if orders.is_empty() {
        0.0
    } else {
        total_sales / orders.len() as f64
    };
    let total_profit: f64 = items
        .iter()
        .map(|i| (i.price - i.cost_price) * i.quantity as f64)
        .sum();

    SalesReport {
        daily_data: daily
            .into_iter()
            .map(|(date, (sales, profit))| DailySales {
                date,
                sales,
                profit,
            })
            .collect(),
        top_selling_items: top_items,
        stats: SalesStats {
            total_sales,
            average_check,
            total_profit,
        },
    }
}
