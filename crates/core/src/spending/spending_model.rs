//! Spending summary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dashboard totals for one month of expenses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub total_expenses: Decimal,
    pub total_income: Decimal,
    pub net_savings: Decimal,
}

/// One bar of the spending-by-category report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: String,
    pub amount: Decimal,
}
