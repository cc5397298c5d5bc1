//! Spending summaries - dashboard totals and report rollups.

mod spending_model;
mod spending_service;

#[cfg(test)]
mod spending_service_tests;

pub use spending_model::{CategorySpending, MonthlyTotals};
pub use spending_service::{monthly_totals, spending_by_category};
