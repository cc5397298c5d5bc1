//! Pure spending aggregations over expense snapshots.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::expenses::Expense;

use super::{CategorySpending, MonthlyTotals};

/// Dashboard totals for a set of expenses already filtered to the month of
/// interest. With no expenses, net savings equals income. Pure function;
/// all amounts share one implicit currency.
pub fn monthly_totals(expenses: &[Expense], income: Decimal) -> MonthlyTotals {
    let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();
    MonthlyTotals {
        total_expenses,
        total_income: income,
        net_savings: income - total_expenses,
    }
}

/// Per-category expense totals for the report chart, rounded to display
/// precision, in first-seen category order.
pub fn spending_by_category(expenses: &[Expense]) -> Vec<CategorySpending> {
    let mut rollup: Vec<CategorySpending> = Vec::new();
    for expense in expenses {
        match rollup.iter_mut().find(|c| c.category == expense.category) {
            Some(entry) => entry.amount += expense.amount,
            None => rollup.push(CategorySpending {
                category: expense.category.clone(),
                amount: expense.amount,
            }),
        }
    }
    for entry in &mut rollup {
        entry.amount = entry.amount.round_dp(DISPLAY_DECIMAL_PRECISION);
    }
    rollup
}
