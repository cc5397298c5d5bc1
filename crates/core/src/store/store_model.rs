//! Opaque document and query types shared by every store adapter.

use chrono::{DateTime, TimeZone, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Document field carrying the owning user's identifier.
pub const OWNER_FIELD: &str = "userId";

/// Document field carrying an expense timestamp.
pub const DATE_FIELD: &str = "date";

/// Full current result set delivered by a store adapter on each change.
pub type Snapshot = Vec<Document>;

/// Epoch values at or above this magnitude are treated as milliseconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// An opaque record delivered by a store adapter.
///
/// Stores differ in how they represent numbers and timestamps, so the
/// typed getters coerce: amounts accept JSON numbers or numeric strings,
/// timestamps accept RFC 3339 strings or epoch second/millisecond numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Document {
            id: id.into(),
            fields,
        }
    }

    /// Returns a string field, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Returns a numeric field as a `Decimal`.
    ///
    /// Accepts JSON numbers and numeric strings.
    pub fn get_decimal(&self, field: &str) -> Option<Decimal> {
        match self.fields.get(field)? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Decimal::from(i))
                } else {
                    n.as_f64().and_then(Decimal::from_f64)
                }
            }
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Returns a timestamp field as a `DateTime<Utc>`.
    ///
    /// Accepts RFC 3339 strings and epoch second or millisecond numbers.
    pub fn get_datetime(&self, field: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(field)? {
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Value::Number(n) => {
                let raw = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
                if raw.abs() >= EPOCH_MILLIS_THRESHOLD {
                    Utc.timestamp_millis_opt(raw).single()
                } else {
                    Utc.timestamp_opt(raw, 0).single()
                }
            }
            _ => None,
        }
    }
}

/// Ordering applied by a query before its limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub descending: bool,
}

/// Declarative query evaluated by store adapters.
///
/// Covers the shapes the application actually issues: owner equality,
/// an inclusive date window, single-field ordering, and a result limit.
#[derive(Clone, Debug, Default)]
pub struct Query {
    pub owner_id: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub order_by: Option<SortOrder>,
    pub limit: Option<usize>,
}

impl Query {
    /// Query scoped to a single owner's documents.
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Query {
            owner_id: Some(owner_id.into()),
            ..Default::default()
        }
    }

    /// Restricts the date field to an inclusive window.
    pub fn between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    pub fn order_by_asc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(SortOrder {
            field: field.into(),
            descending: false,
        });
        self
    }

    pub fn order_by_desc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(SortOrder {
            field: field.into(),
            descending: true,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a single document satisfies the filter portion of the query.
    pub fn matches(&self, doc: &Document) -> bool {
        if let Some(ref owner) = self.owner_id {
            if doc.get_str(OWNER_FIELD) != Some(owner.as_str()) {
                return false;
            }
        }
        if self.date_from.is_some() || self.date_to.is_some() {
            let Some(date) = doc.get_datetime(DATE_FIELD) else {
                return false;
            };
            if let Some(from) = self.date_from {
                if date < from {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if date > to {
                    return false;
                }
            }
        }
        true
    }

    /// Evaluates the query against a document slice: filter, order, limit.
    ///
    /// Shared by adapters so every backend reports identical snapshots for
    /// identical data.
    pub fn apply(&self, docs: &[Document]) -> Snapshot {
        let mut result: Vec<Document> = docs
            .iter()
            .filter(|d| self.matches(d))
            .cloned()
            .collect();

        if let Some(ref order) = self.order_by {
            result.sort_by(|a, b| {
                let ord = compare_field(a, b, &order.field);
                if order.descending {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }

        if let Some(limit) = self.limit {
            result.truncate(limit);
        }

        result
    }
}

/// Compares one field of two documents.
///
/// The date field compares as a coerced timestamp; other fields compare as
/// decimals when both sides coerce, falling back to raw string order.
fn compare_field(a: &Document, b: &Document, field: &str) -> Ordering {
    if field == DATE_FIELD {
        if let (Some(da), Some(db)) = (a.get_datetime(field), b.get_datetime(field)) {
            return da.cmp(&db);
        }
    }
    if let (Some(na), Some(nb)) = (a.get_decimal(field), b.get_decimal(field)) {
        return na.cmp(&nb);
    }
    a.get_str(field).cmp(&b.get_str(field))
}
