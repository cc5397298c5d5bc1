//! Tests for document coercion and query evaluation.

#[cfg(test)]
mod tests {
    use crate::store::{Document, Query, DATE_FIELD, OWNER_FIELD};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use serde_json::{json, Map, Value};

    fn doc(id: &str, pairs: &[(&str, Value)]) -> Document {
        let mut fields = Map::new();
        for (k, v) in pairs {
            fields.insert(k.to_string(), v.clone());
        }
        Document::new(id, fields)
    }

    // ==================== Document coercion ====================

    #[test]
    fn test_get_decimal_from_number() {
        let d = doc("1", &[("amount", json!(75.5))]);
        assert_eq!(d.get_decimal("amount"), Some(dec!(75.5)));
    }

    #[test]
    fn test_get_decimal_from_integer() {
        let d = doc("1", &[("amount", json!(500))]);
        assert_eq!(d.get_decimal("amount"), Some(dec!(500)));
    }

    #[test]
    fn test_get_decimal_from_string() {
        let d = doc("1", &[("amount", json!("120.00"))]);
        assert_eq!(d.get_decimal("amount"), Some(dec!(120.00)));
    }

    #[test]
    fn test_get_decimal_rejects_non_numeric() {
        let d = doc("1", &[("amount", json!("not a number"))]);
        assert_eq!(d.get_decimal("amount"), None);
        assert_eq!(d.get_decimal("missing"), None);
    }

    #[test]
    fn test_get_datetime_from_rfc3339() {
        let d = doc("1", &[(DATE_FIELD, json!("2024-07-28T10:30:00Z"))]);
        let expected = Utc.with_ymd_and_hms(2024, 7, 28, 10, 30, 0).unwrap();
        assert_eq!(d.get_datetime(DATE_FIELD), Some(expected));
    }

    #[test]
    fn test_get_datetime_from_epoch_seconds() {
        let d = doc("1", &[(DATE_FIELD, json!(1_722_162_600))]);
        let expected = Utc.timestamp_opt(1_722_162_600, 0).unwrap();
        assert_eq!(d.get_datetime(DATE_FIELD), Some(expected));
    }

    #[test]
    fn test_get_datetime_from_epoch_millis() {
        let d = doc("1", &[(DATE_FIELD, json!(1_722_162_600_000i64))]);
        let expected = Utc.timestamp_millis_opt(1_722_162_600_000).unwrap();
        assert_eq!(d.get_datetime(DATE_FIELD), Some(expected));
    }

    #[test]
    fn test_get_datetime_rejects_garbage() {
        let d = doc("1", &[(DATE_FIELD, json!("yesterday-ish"))]);
        assert_eq!(d.get_datetime(DATE_FIELD), None);
    }

    // ==================== Query evaluation ====================

    fn expense_doc(id: &str, owner: &str, date: &str, amount: f64) -> Document {
        doc(
            id,
            &[
                (OWNER_FIELD, json!(owner)),
                (DATE_FIELD, json!(date)),
                ("amount", json!(amount)),
            ],
        )
    }

    #[test]
    fn test_query_filters_by_owner() {
        let docs = vec![
            expense_doc("1", "alice", "2024-07-01T00:00:00Z", 10.0),
            expense_doc("2", "bob", "2024-07-02T00:00:00Z", 20.0),
            expense_doc("3", "alice", "2024-07-03T00:00:00Z", 30.0),
        ];
        let result = Query::for_owner("alice").apply(&docs);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|d| d.get_str(OWNER_FIELD) == Some("alice")));
    }

    #[test]
    fn test_query_date_window_is_inclusive() {
        let from = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 7, 31, 23, 59, 59).unwrap();
        let docs = vec![
            expense_doc("edge-low", "alice", "2024-07-01T00:00:00Z", 1.0),
            expense_doc("inside", "alice", "2024-07-15T12:00:00Z", 2.0),
            expense_doc("edge-high", "alice", "2024-07-31T23:59:59Z", 3.0),
            expense_doc("before", "alice", "2024-06-30T23:59:59Z", 4.0),
            expense_doc("after", "alice", "2024-08-01T00:00:00Z", 5.0),
        ];
        let result = Query::for_owner("alice").between(from, to).apply(&docs);
        let ids: Vec<&str> = result.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["edge-low", "inside", "edge-high"]);
    }

    #[test]
    fn test_query_missing_date_excluded_from_window() {
        let from = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 7, 31, 0, 0, 0).unwrap();
        let docs = vec![doc("no-date", &[(OWNER_FIELD, json!("alice"))])];
        let result = Query::for_owner("alice").between(from, to).apply(&docs);
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_order_by_date_desc_with_limit() {
        let docs = vec![
            expense_doc("old", "alice", "2024-07-01T00:00:00Z", 1.0),
            expense_doc("newest", "alice", "2024-07-28T00:00:00Z", 2.0),
            expense_doc("mid", "alice", "2024-07-15T00:00:00Z", 3.0),
        ];
        let result = Query::for_owner("alice")
            .order_by_desc("date")
            .limit(2)
            .apply(&docs);
        let ids: Vec<&str> = result.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "mid"]);
    }

    #[test]
    fn test_query_order_by_amount_asc() {
        let docs = vec![
            expense_doc("b", "alice", "2024-07-01T00:00:00Z", 20.5),
            expense_doc("a", "alice", "2024-07-02T00:00:00Z", 20.4),
            expense_doc("c", "alice", "2024-07-03T00:00:00Z", 100.0),
        ];
        let result = Query::for_owner("alice").order_by_asc("amount").apply(&docs);
        let ids: Vec<&str> = result.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_default_query_matches_everything() {
        let docs = vec![
            expense_doc("1", "alice", "2024-07-01T00:00:00Z", 1.0),
            expense_doc("2", "bob", "2024-07-02T00:00:00Z", 2.0),
        ];
        assert_eq!(Query::default().apply(&docs).len(), 2);
    }
}
