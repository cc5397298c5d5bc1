//! Budget service and spend-vs-budget aggregation.

use async_trait::async_trait;
use log::error;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Map};
use std::sync::Arc;

use crate::constants::BUDGETS_COLLECTION;
use crate::errors::{Result, ValidationError};
use crate::expenses::Expense;
use crate::store::{Query, Snapshot, StoreAdapterTrait, SubscriptionHandle};

use super::{Budget, BudgetServiceTrait, BudgetView, BudgetsCallback, NewBudget, UpsertAction};

/// Derives the spend-vs-budget view for each budget.
///
/// `spent` is the sum of expense amounts whose category equals the budget's
/// category by exact string equality. The result follows budget input
/// order; it is independent of expense ordering. Pure function over the
/// supplied snapshots.
///
/// A non-positive budget amount yields 0% progress rather than a division
/// by zero.
pub fn attach_spending(budgets: &[Budget], expenses: &[Expense]) -> Vec<BudgetView> {
    budgets
        .iter()
        .map(|budget| {
            let spent: Decimal = expenses
                .iter()
                .filter(|e| e.category == budget.category)
                .map(|e| e.amount)
                .sum();
            let remaining = budget.amount - spent;
            let progress_percent = if budget.amount > Decimal::ZERO {
                (spent / budget.amount * Decimal::ONE_HUNDRED)
                    .to_f64()
                    .unwrap_or(0.0)
            } else {
                0.0
            };

            BudgetView {
                id: budget.id.clone(),
                category: budget.category.clone(),
                amount: budget.amount,
                spent,
                remaining,
                progress_percent,
                is_over_budget: spent > budget.amount,
            }
        })
        .collect()
}

/// Resolves a budget submission against the owner's existing budgets:
/// the category acts as a natural key, so an existing budget is updated in
/// place and a new category gets an insert. Pure function.
pub fn resolve_upsert(existing: &[Budget], new_budget: &NewBudget) -> UpsertAction {
    match existing.iter().find(|b| b.category == new_budget.category) {
        Some(current) => UpsertAction::Update {
            id: current.id.clone(),
            amount: new_budget.amount,
        },
        None => UpsertAction::Insert(new_budget.clone()),
    }
}

pub struct BudgetService {
    store: Arc<dyn StoreAdapterTrait>,
}

impl BudgetService {
    pub fn new(store: Arc<dyn StoreAdapterTrait>) -> Self {
        BudgetService { store }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn subscribe_budgets(
        &self,
        owner_id: Option<&str>,
        on_change: BudgetsCallback,
    ) -> Result<SubscriptionHandle> {
        let Some(owner_id) = owner_id else {
            on_change(Vec::new());
            return Ok(SubscriptionHandle::noop());
        };

        let callback = on_change.clone();
        self.store.subscribe(
            BUDGETS_COLLECTION,
            Query::for_owner(owner_id),
            Arc::new(move |snapshot: Snapshot| {
                let budgets = snapshot
                    .iter()
                    .filter_map(|doc| match Budget::from_document(doc) {
                        Ok(budget) => Some(budget),
                        Err(e) => {
                            error!("Skipping malformed budget document {}: {}", doc.id, e);
                            None
                        }
                    })
                    .collect();
                callback(budgets);
            }),
        )
    }

    async fn set_budget(
        &self,
        existing: &[Budget],
        owner_id: &str,
        new_budget: NewBudget,
    ) -> Result<()> {
        if new_budget.category.is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        if new_budget.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount.into());
        }

        match resolve_upsert(existing, &new_budget) {
            UpsertAction::Update { id, amount } => {
                let mut fields = Map::new();
                fields.insert("amount".to_string(), json!(amount.to_string()));
                self.store.update(BUDGETS_COLLECTION, &id, fields).await
            }
            UpsertAction::Insert(budget) => {
                self.store
                    .insert(BUDGETS_COLLECTION, budget.to_fields(owner_id))
                    .await?;
                Ok(())
            }
        }
    }
}
