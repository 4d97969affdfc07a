//! Order Repository
//!
//! Read-only queries feeding the aggregation engine. Rows are fetched in
//! chronological order so report output is deterministic for identical
//! underlying data.

use super::RepoResult;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::utils::time::DateRange;

/// A PAID order inside a report range
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PaidOrder {
    pub id: i64,
    pub total_price: f64,
    pub paid_at: i64,
}

/// An order item of a PAID order, joined with its menu item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SoldItem {
    pub order_id: i64,
    /// Payment time of the owning order
    pub paid_at: i64,
    pub menu_item_id: i64,
    /// Menu item name at query time
    pub name: String,
    pub quantity: i64,
    /// Price at the time of sale
    pub price: f64,
    /// Menu item cost price (profit margin input)
    pub cost_price: f64,
}

/// PAID orders with `paid_at` inside the range (revenue and sales input)
pub async fn find_paid_in_range(pool: &SqlitePool, range: DateRange) -> RepoResult<Vec<PaidOrder>> {
    let orders = sqlx::query_as::<_, PaidOrder>(
        "SELECT id, total_price, paid_at FROM orders
         WHERE status = 'PAID' AND paid_at >= ? AND paid_at < ?
         ORDER BY paid_at, id",
    )
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Order items of PAID orders inside the range, eagerly joined with their
/// menu item (sales report input)
pub async fn find_sold_items_in_range(
    pool: &SqlitePool,
    range: DateRange,
) -> RepoResult<Vec<SoldItem>> {
    let items = sqlx::query_as::<_, SoldItem>(
        "SELECT
            oi.order_id,
            o.paid_at,
            oi.menu_item_id,
            m.name,
            oi.quantity,
            oi.price,
            m.cost_price
         FROM order_items oi
         JOIN orders o ON o.id = oi.order_id
         JOIN menu_items m ON m.id = oi.menu_item_id
         WHERE o.status = 'PAID' AND o.paid_at >= ? AND o.paid_at < ?
         ORDER BY o.paid_at, oi.id",
    )
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await?;
    Ok(items)
}
