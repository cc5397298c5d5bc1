//! Category domain models.
//!
//! Category strings are soft references: expenses and budgets store the raw
//! name, compared by exact string equality. Renaming or deleting a category
//! does not cascade to existing rows; the registry only gates new entry.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::errors::{Result, ValidationError};
use crate::store::{Document, OWNER_FIELD};

use super::categories_constants::DEFAULT_CATEGORIES;

/// A user-defined category name. Unique per owner, no case normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserCategory {
    pub id: String,
    pub user_id: String,
    pub name: String,
}

impl UserCategory {
    pub fn from_document(doc: &Document) -> Result<Self> {
        let user_id = doc
            .get_str(OWNER_FIELD)
            .ok_or_else(|| ValidationError::MissingField(OWNER_FIELD.to_string()))?;
        let name = doc
            .get_str("name")
            .ok_or_else(|| ValidationError::MissingField("name".to_string()))?;
        Ok(UserCategory {
            id: doc.id.clone(),
            user_id: user_id.to_string(),
            name: name.to_string(),
        })
    }
}

/// Input model for creating a user-defined category.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewUserCategory {
    pub user_id: String,
    pub name: String,
}

impl NewUserCategory {
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(OWNER_FIELD.to_string(), json!(self.user_id));
        fields.insert("name".to_string(), json!(self.name));
        fields
    }
}

/// Full category set for an owner: fixed defaults followed by user-defined
/// names, in stored order.
pub fn all_categories(user_categories: &[UserCategory]) -> Vec<String> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|c| c.to_string())
        .chain(user_categories.iter().map(|c| c.name.clone()))
        .collect()
}
