//! Service traits for budgets.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;
use crate::store::SubscriptionHandle;

use super::{Budget, NewBudget};

/// Callback receiving the owner's budgets on every change.
pub type BudgetsCallback = Arc<dyn Fn(Vec<Budget>) + Send + Sync>;

#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Subscribes to the owner's budgets. With no owner, delivers one empty
    /// snapshot and a no-op handle.
    fn subscribe_budgets(
        &self,
        owner_id: Option<&str>,
        on_change: BudgetsCallback,
    ) -> Result<SubscriptionHandle>;

    /// Sets the budget for a category: updates the existing budget's amount
    /// when the category already has one, inserts a new record otherwise.
    /// `existing` is the owner's current budget snapshot.
    async fn set_budget(
        &self,
        existing: &[Budget],
        owner_id: &str,
        new_budget: NewBudget,
    ) -> Result<()>;
}
