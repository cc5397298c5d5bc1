//! Service traits for user profiles.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::Result;
use crate::store::SubscriptionHandle;

use super::UserProfile;

/// Callback receiving the owner's profile on every change.
pub type ProfileCallback = Arc<dyn Fn(UserProfile) + Send + Sync>;

#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    /// Subscribes to the owner's profile document. An absent document (or
    /// no owner) reads as the default profile with zero income.
    fn subscribe_profile(
        &self,
        owner_id: Option<&str>,
        on_change: ProfileCallback,
    ) -> Result<SubscriptionHandle>;

    /// Merge-upserts the owner's monthly income. Negative amounts are
    /// rejected; zero clears the income.
    async fn set_monthly_income(&self, owner_id: &str, amount: Decimal) -> Result<()>;
}
