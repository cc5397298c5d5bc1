//! Category registry service implementation.

use async_trait::async_trait;
use log::error;
use std::sync::Arc;

use crate::constants::USER_CATEGORIES_COLLECTION;
use crate::errors::{Result, ValidationError};
use crate::store::{Query, Snapshot, StoreAdapterTrait, SubscriptionHandle};

use super::categories_constants::DEFAULT_CATEGORIES;
use super::{CategoriesCallback, CategoryServiceTrait, NewUserCategory, UserCategory};

pub struct CategoryService {
    store: Arc<dyn StoreAdapterTrait>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn StoreAdapterTrait>) -> Self {
        CategoryService { store }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn subscribe_categories(
        &self,
        owner_id: Option<&str>,
        on_change: CategoriesCallback,
    ) -> Result<SubscriptionHandle> {
        let Some(owner_id) = owner_id else {
            on_change(Vec::new());
            return Ok(SubscriptionHandle::noop());
        };

        let callback = on_change.clone();
        self.store.subscribe(
            USER_CATEGORIES_COLLECTION,
            Query::for_owner(owner_id),
            Arc::new(move |snapshot: Snapshot| {
                let categories = snapshot
                    .iter()
                    .filter_map(|doc| match UserCategory::from_document(doc) {
                        Ok(category) => Some(category),
                        Err(e) => {
                            error!("Skipping malformed category document {}: {}", doc.id, e);
                            None
                        }
                    })
                    .collect();
                callback(categories);
            }),
        )
    }

    async fn add_category(
        &self,
        existing: &[UserCategory],
        owner_id: &str,
        name: &str,
    ) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::InvalidInput(
                "Category name must not be empty".to_string(),
            )
            .into());
        }
        if DEFAULT_CATEGORIES.contains(&name) {
            return Err(ValidationError::InvalidInput(format!(
                "'{}' is already a default category",
                name
            ))
            .into());
        }
        if existing.iter().any(|c| c.name == name) {
            return Err(ValidationError::InvalidInput(format!(
                "Category '{}' already exists",
                name
            ))
            .into());
        }

        let new_category = NewUserCategory {
            user_id: owner_id.to_string(),
            name: name.to_string(),
        };
        self.store
            .insert(USER_CATEGORIES_COLLECTION, new_category.to_fields())
            .await
    }

    async fn delete_category(&self, id: &str) -> Result<()> {
        self.store.delete(USER_CATEGORIES_COLLECTION, id).await
    }
}
