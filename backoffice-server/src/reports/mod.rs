//! Aggregation engine
//!
//! Pure functions that turn already-fetched rows plus a date range into
//! report payloads. No I/O happens here: handlers fetch rows through
//! [`crate::db::repository`] and pass them in, which keeps every report
//! computation deterministic and unit-testable.
//!
//! All three builders share the same guarantees:
//! - empty input produces zero-valued stats and empty sequences, never
//!   NaN or infinities;
//! - identical inputs produce identical output (grouping is ordered), so
//!   repeated report requests over unchanged data serialize byte-identically.

pub mod revenue;
pub mod salary;
pub mod sales;

pub use revenue::{RevenueReport, build_revenue_report};
pub use salary::{SalaryReport, build_salary_report};
pub use sales::{SalesReport, build_sales_report};
