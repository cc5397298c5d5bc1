//! Profile domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Document;

/// Per-user profile document, keyed by the owner's uid. Upserted with
/// merge semantics, independently of expenses and budgets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub monthly_income: Decimal,
}

impl UserProfile {
    /// An absent or incomplete profile document reads as zero income.
    pub fn from_document(doc: &Document) -> Self {
        UserProfile {
            monthly_income: doc.get_decimal("monthlyIncome").unwrap_or(Decimal::ZERO),
        }
    }
}
