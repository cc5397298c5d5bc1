//! Table state models.

use serde::{Deserialize, Serialize};

/// Columns of the expense table that can be sorted and filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpenseField {
    Description,
    Category,
    Date,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub field: ExpenseField,
    pub direction: SortDirection,
}

/// Per-column filter predicate.
///
/// `Text` matches rows whose rendered cell contains the value as a
/// case-sensitive substring. `Categories` matches rows whose category is a
/// member of the set; an empty set matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterValue {
    Text(String),
    Categories(Vec<String>),
}
