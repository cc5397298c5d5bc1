//! Service traits for expenses.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::errors::Result;
use crate::store::SubscriptionHandle;

use super::{Expense, NewExpense};

/// Callback receiving the owner's expenses on every change.
pub type ExpensesCallback = Arc<dyn Fn(Vec<Expense>) + Send + Sync>;

#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    /// Subscribes to all of the owner's expenses. With no owner, delivers
    /// one empty snapshot and a no-op handle.
    fn subscribe_expenses(
        &self,
        owner_id: Option<&str>,
        on_change: ExpensesCallback,
    ) -> Result<SubscriptionHandle>;

    /// Subscribes to the owner's expenses within the civil month
    /// containing `now` (inclusive bounds).
    fn subscribe_month_expenses(
        &self,
        owner_id: Option<&str>,
        now: DateTime<Utc>,
        on_change: ExpensesCallback,
    ) -> Result<SubscriptionHandle>;

    /// Subscribes to the owner's most recent expenses, newest first,
    /// limited to [`RECENT_EXPENSES_LIMIT`](crate::constants::RECENT_EXPENSES_LIMIT).
    fn subscribe_recent_expenses(
        &self,
        owner_id: Option<&str>,
        on_change: ExpensesCallback,
    ) -> Result<SubscriptionHandle>;

    /// Validates and records a new expense; returns the store-assigned id.
    async fn add_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<String>;

    /// Requests deletion. Fire-and-forget: the removal is observed through
    /// the next snapshot, never applied optimistically.
    async fn delete_expense(&self, id: &str) -> Result<()>;
}
