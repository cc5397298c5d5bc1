//! Expense domain models.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::errors::{Result, ValidationError};
use crate::store::{Document, DATE_FIELD, OWNER_FIELD};

/// Minimum number of characters in an expense description.
pub const MIN_DESCRIPTION_CHARS: usize = 2;

/// A recorded expense. Created by user action, never edited, hard-deleted
/// by explicit user action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Builds an expense from an opaque store document, coercing the stored
    /// amount and timestamp representations.
    pub fn from_document(doc: &Document) -> Result<Self> {
        let user_id = doc
            .get_str(OWNER_FIELD)
            .ok_or_else(|| ValidationError::MissingField(OWNER_FIELD.to_string()))?;
        let description = doc
            .get_str("description")
            .ok_or_else(|| ValidationError::MissingField("description".to_string()))?;
        let amount = doc
            .get_decimal("amount")
            .ok_or_else(|| ValidationError::MissingField("amount".to_string()))?;
        let category = doc
            .get_str("category")
            .ok_or_else(|| ValidationError::MissingField("category".to_string()))?;
        let date = doc
            .get_datetime(DATE_FIELD)
            .ok_or_else(|| ValidationError::MissingField(DATE_FIELD.to_string()))?;

        Ok(Expense {
            id: doc.id.clone(),
            user_id: user_id.to_string(),
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date,
        })
    }
}

/// Input model for recording a new expense.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl NewExpense {
    /// Entry-form validation, applied before anything reaches the store:
    /// description of at least two characters, strictly positive amount,
    /// non-empty category, date between 1900-01-01 and `now`.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<()> {
        if self.description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(ValidationError::InvalidInput(format!(
                "Description must be at least {} characters",
                MIN_DESCRIPTION_CHARS
            ))
            .into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        if self.category.is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        let min_date = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
        if self.date < min_date || self.date > now {
            return Err(ValidationError::InvalidInput(
                "Date must be between 1900-01-01 and now".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Document fields for insertion. Amounts are stored as strings to
    /// survive backends without exact decimal numbers; timestamps as
    /// RFC 3339 strings.
    pub fn to_fields(&self, owner_id: &str) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(OWNER_FIELD.to_string(), json!(owner_id));
        fields.insert("description".to_string(), json!(self.description));
        fields.insert("amount".to_string(), json!(self.amount.to_string()));
        fields.insert("category".to_string(), json!(self.category));
        fields.insert(DATE_FIELD.to_string(), json!(self.date.to_rfc3339()));
        fields
    }
}
