//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::errors::{Result, ValidationError};
use crate::store::{Document, OWNER_FIELD};

/// A per-category budget. The category string is a natural key per owner:
/// resubmitting a category updates the existing budget's amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub amount: Decimal,
}

impl Budget {
    pub fn from_document(doc: &Document) -> Result<Self> {
        let user_id = doc
            .get_str(OWNER_FIELD)
            .ok_or_else(|| ValidationError::MissingField(OWNER_FIELD.to_string()))?;
        let category = doc
            .get_str("category")
            .ok_or_else(|| ValidationError::MissingField("category".to_string()))?;
        let amount = doc
            .get_decimal("amount")
            .ok_or_else(|| ValidationError::MissingField("amount".to_string()))?;
        Ok(Budget {
            id: doc.id.clone(),
            user_id: user_id.to_string(),
            category: category.to_string(),
            amount,
        })
    }
}

/// Input model for setting a budget.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category: String,
    pub amount: Decimal,
}

impl NewBudget {
    pub fn to_fields(&self, owner_id: &str) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(OWNER_FIELD.to_string(), json!(owner_id));
        fields.insert("category".to_string(), json!(self.category));
        fields.insert("amount".to_string(), json!(self.amount.to_string()));
        fields
    }
}

/// Spend-vs-budget view for one budget.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetView {
    pub id: String,
    pub category: String,
    pub amount: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub progress_percent: f64,
    pub is_over_budget: bool,
}

/// Outcome of resolving a budget upsert against the owner's existing
/// budgets. Applying the action is a single store call, so no intermediate
/// state with two budgets for one category is ever visible.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertAction {
    /// The category already has a budget; update its amount in place.
    Update { id: String, amount: Decimal },
    /// First budget for this category; insert a new record.
    Insert(NewBudget),
}
