//! Service traits for the category registry.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::Result;
use crate::store::SubscriptionHandle;

use super::UserCategory;

/// Callback receiving the owner's user-defined categories on every change.
pub type CategoriesCallback = Arc<dyn Fn(Vec<UserCategory>) + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Subscribes to the owner's user-defined categories. With no owner,
    /// delivers one empty snapshot and a no-op handle.
    fn subscribe_categories(
        &self,
        owner_id: Option<&str>,
        on_change: CategoriesCallback,
    ) -> Result<SubscriptionHandle>;

    /// Adds a user-defined category. The name is trimmed; empty names and
    /// names already present among the defaults or `existing` are rejected.
    async fn add_category(
        &self,
        existing: &[UserCategory],
        owner_id: &str,
        name: &str,
    ) -> Result<String>;

    /// Hard-deletes a user-defined category. Does not cascade to expenses
    /// or budgets that reference the name.
    async fn delete_category(&self, id: &str) -> Result<()>;
}
