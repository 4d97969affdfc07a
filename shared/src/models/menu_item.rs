//! MenuItem Model

use serde::{Deserialize, Serialize};

/// Menu item
///
/// `cost_price` is used to compute the profit margin per sold item in the
/// sales report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub cost_price: f64,
    pub image_url: Option<String>,
    pub is_active: bool,
    /// User who created the item
    pub created_by: Option<String>,
    pub created_at: i64,
}
