//! Expense service implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error};
use std::sync::Arc;

use crate::constants::{EXPENSES_COLLECTION, RECENT_EXPENSES_LIMIT};
use crate::errors::Result;
use crate::store::{Query, Snapshot, StoreAdapterTrait, SubscriptionHandle, DATE_FIELD};
use crate::utils::month_window;

use super::{Expense, ExpenseServiceTrait, ExpensesCallback, NewExpense};

pub struct ExpenseService {
    store: Arc<dyn StoreAdapterTrait>,
}

impl ExpenseService {
    pub fn new(store: Arc<dyn StoreAdapterTrait>) -> Self {
        ExpenseService { store }
    }

    /// Subscribes with the given query, mapping documents to expenses.
    /// Rows that fail coercion are logged and skipped so one malformed
    /// document cannot blank the whole view.
    fn subscribe_mapped(
        &self,
        owner_id: Option<&str>,
        build_query: impl FnOnce(&str) -> Query,
        on_change: ExpensesCallback,
    ) -> Result<SubscriptionHandle> {
        let Some(owner_id) = owner_id else {
            on_change(Vec::new());
            return Ok(SubscriptionHandle::noop());
        };

        let callback = on_change.clone();
        self.store.subscribe(
            EXPENSES_COLLECTION,
            build_query(owner_id),
            Arc::new(move |snapshot: Snapshot| {
                let expenses = snapshot
                    .iter()
                    .filter_map(|doc| match Expense::from_document(doc) {
                        Ok(expense) => Some(expense),
                        Err(e) => {
                            error!("Skipping malformed expense document {}: {}", doc.id, e);
                            None
                        }
                    })
                    .collect();
                callback(expenses);
            }),
        )
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn subscribe_expenses(
        &self,
        owner_id: Option<&str>,
        on_change: ExpensesCallback,
    ) -> Result<SubscriptionHandle> {
        self.subscribe_mapped(owner_id, |owner| Query::for_owner(owner), on_change)
    }

    fn subscribe_month_expenses(
        &self,
        owner_id: Option<&str>,
        now: DateTime<Utc>,
        on_change: ExpensesCallback,
    ) -> Result<SubscriptionHandle> {
        let (start, end) = month_window(now);
        self.subscribe_mapped(
            owner_id,
            |owner| Query::for_owner(owner).between(start, end),
            on_change,
        )
    }

    fn subscribe_recent_expenses(
        &self,
        owner_id: Option<&str>,
        on_change: ExpensesCallback,
    ) -> Result<SubscriptionHandle> {
        self.subscribe_mapped(
            owner_id,
            |owner| {
                Query::for_owner(owner)
                    .order_by_desc(DATE_FIELD)
                    .limit(RECENT_EXPENSES_LIMIT)
            },
            on_change,
        )
    }

    async fn add_expense(&self, owner_id: &str, new_expense: NewExpense) -> Result<String> {
        new_expense.validate(Utc::now())?;
        let id = self
            .store
            .insert(EXPENSES_COLLECTION, new_expense.to_fields(owner_id))
            .await?;
        debug!("Recorded expense {} for owner {}", id, owner_id);
        Ok(id)
    }

    async fn delete_expense(&self, id: &str) -> Result<()> {
        self.store.delete(EXPENSES_COLLECTION, id).await
    }
}
