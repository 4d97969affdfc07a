//! Payment Model

use serde::{Deserialize, Serialize};

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "UPPERCASE"))]
pub enum PaymentType {
    Cash,
    Card,
    Qr,
    Other,
}

/// Payment record attached to an order
///
/// `amount` is expected to equal the order's `total_price`, but this is not
/// enforced anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub amount: f64,
    pub payment_type: PaymentType,
    /// Cashier who took the payment
    pub paid_by_id: Option<String>,
    pub paid_at: i64,
}
