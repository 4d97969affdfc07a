//! Report Handlers
//!
//! Thin glue: validate the date range, fetch rows through the repository,
//! hand them to the aggregation engine, serialize the payload.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::db::repository::{order, shift, user};
use crate::reports::{
    RevenueReport, SalaryReport, SalesReport, build_revenue_report, build_salary_report,
    build_sales_report,
};
use crate::server::ServerState;
use crate::utils::time::DateRange;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

impl ReportQuery {
    /// Reject missing or malformed bounds before any aggregation runs
    fn range(&self) -> AppResult<DateRange> {
        let (Some(start), Some(end)) = (self.start_date.as_deref(), self.end_date.as_deref())
        else {
            return Err(AppError::validation("Необходимо указать startDate и endDate"));
        };
        DateRange::parse(start, end)
    }
}

/// GET /api/reports/revenue - daily revenue over the range
pub async fn revenue(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<RevenueReport>> {
    let range = query.range()?;

    tracing::debug!(start = range.start, end = range.end, "Building revenue report");

    let orders = order::find_paid_in_range(&state.pool, range).await?;
    Ok(Json(build_revenue_report(&orders)))
}

/// GET /api/reports/sales - daily sales/profit and top-selling items
pub async fn sales(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<SalesReport>> {
    let range = query.range()?;

    tracing::debug!(start = range.start, end = range.end, "Building sales report");

    let orders = order::find_paid_in_range(&state.pool, range).await?;
    let items = order::find_sold_items_in_range(&state.pool, range).await?;
    Ok(Json(build_sales_report(&orders, &items)))
}

/// GET /api/reports/salary - per-employee and per-position salaries
pub async fn salary(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<SalaryReport>> {
    let range = query.range()?;

    tracing::debug!(start = range.start, end = range.end, "Building salary report");

    let employees = user::find_active(&state.pool).await?;
    let shifts = shift::find_employee_shifts_overlapping(&state.pool, range).await?;
    Ok(Json(build_salary_report(
        &employees,
        &shifts,
        range,
        state.config.salary_base_rate,
    )))
}
