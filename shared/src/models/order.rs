//! Order and OrderItem Models

use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// An order is created OPEN by a waiter, then transitions to PAID (setting
/// `paid_at` and attaching a payment) or CANCELLED. PAID/CANCELLED orders
/// are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "UPPERCASE"))]
pub enum OrderStatus {
    Open,
    Paid,
    Cancelled,
}

/// Order record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub table_number: String,
    /// Waiter who opened the order
    pub waiter_id: String,
    /// Cashier who settled the order, if any
    pub cashier_id: Option<String>,
    /// Shift during which the order was opened
    pub shift_id: Option<i64>,
    pub status: OrderStatus,
    /// Sum of the items' price × quantity at payment time
    pub total_price: f64,
    pub created_at: i64,
    /// Payment time (Unix millis), null while OPEN
    pub paid_at: Option<i64>,
}

/// Order line item
///
/// `price` is the price at the time of sale, decoupled from the menu item's
/// current price for historical accuracy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i64,
    pub price: f64,
}
