//! Budgets module - per-category budgets and spend-vs-budget aggregation.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

#[cfg(test)]
mod budgets_service_tests;

pub use budgets_model::{Budget, BudgetView, NewBudget, UpsertAction};
pub use budgets_service::{attach_spending, resolve_upsert, BudgetService};
pub use budgets_traits::{BudgetServiceTrait, BudgetsCallback};
