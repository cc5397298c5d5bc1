//! Profile service implementation.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::{json, Map};
use std::sync::Arc;

use crate::constants::USER_PROFILES_COLLECTION;
use crate::errors::{Result, ValidationError};
use crate::store::{Query, Snapshot, StoreAdapterTrait, SubscriptionHandle, OWNER_FIELD};

use super::{ProfileCallback, ProfileServiceTrait, UserProfile};

pub struct ProfileService {
    store: Arc<dyn StoreAdapterTrait>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn StoreAdapterTrait>) -> Self {
        ProfileService { store }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    fn subscribe_profile(
        &self,
        owner_id: Option<&str>,
        on_change: ProfileCallback,
    ) -> Result<SubscriptionHandle> {
        let Some(owner_id) = owner_id else {
            on_change(UserProfile::default());
            return Ok(SubscriptionHandle::noop());
        };

        let callback = on_change.clone();
        let owner = owner_id.to_string();
        self.store.subscribe(
            USER_PROFILES_COLLECTION,
            Query::for_owner(owner_id),
            Arc::new(move |snapshot: Snapshot| {
                let profile = snapshot
                    .iter()
                    .find(|doc| doc.id == owner)
                    .map(UserProfile::from_document)
                    .unwrap_or_default();
                callback(profile);
            }),
        )
    }

    async fn set_monthly_income(&self, owner_id: &str, amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount.into());
        }

        // Profile documents are keyed by the owner's uid; merge semantics
        // leave any other profile fields untouched.
        let mut fields = Map::new();
        fields.insert(OWNER_FIELD.to_string(), json!(owner_id));
        fields.insert("monthlyIncome".to_string(), json!(amount.to_string()));
        self.store
            .upsert(USER_PROFILES_COLLECTION, owner_id, fields)
            .await
    }
}
