//! Flatten nested records into comparable path→value maps

use indexmap::IndexMap;
use serde_json::Value;

/// Flatten an arbitrarily nested record into a flat map of path→string.
///
/// Traversal is depth-first: object members in document order, array
/// elements by index. Path segments are joined with `_` and array
/// indices appear as bare numbers, so `{"a": [{"b": 1}]}` yields the
/// path `a_0_b`. Scalar leaves are stringified losslessly (numbers as
/// decimal text, booleans as `true`/`false`, `null` as the empty
/// string). Empty objects and arrays contribute nothing.
pub fn flatten(record: &Value) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    flatten_into(record, String::new(), &mut out);
    out
}

fn flatten_into(value: &Value, path: String, out: &mut IndexMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(child, join_path(&path, key), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(child, join_path(&path, &index.to_string()), out);
            }
        }
        leaf => {
            out.insert(path, leaf_text(leaf));
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}_{segment}")
    }
}

/// String form of a scalar leaf. Callers guarantee `value` is not an
/// object or array.
pub(crate) fn leaf_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => unreachable!("containers are recursed, not stringified"),
    }
}

/// Convert one record into a single string of all its leaf values,
/// dropping the paths entirely.
///
/// Values are joined with a single space in traversal order. Any record
/// yields a valid (possibly empty) string.
pub fn entry_to_string(record: &Value) -> String {
    let flat = flatten(record);
    flat.values().map(String::as_str).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_object() {
        let record = json!({
            "company": "Acme",
            "openings": [{"title": "Welder", "count": 3}, {"title": "Fitter"}]
        });

        let flat = flatten(&record);
        let paths: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec!["company", "openings_0_title", "openings_0_count", "openings_1_title"]
        );
        assert_eq!(flat["openings_0_count"], "3");
    }

    #[test]
    fn test_flatten_preserves_document_order() {
        let record = json!({"z": 1, "a": 2, "m": 3});
        let flat = flatten(&record);
        let paths: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_flatten_scalar_stringification() {
        let record = json!({"n": 500, "f": 1.5, "t": true, "x": null});
        let flat = flatten(&record);
        assert_eq!(flat["n"], "500");
        assert_eq!(flat["f"], "1.5");
        assert_eq!(flat["t"], "true");
        assert_eq!(flat["x"], "");
    }

    #[test]
    fn test_flatten_totality() {
        // Every leaf appears exactly once, in traversal order.
        let record = json!([{"a": {"b": [1, 2]}}, "tail"]);
        let flat = flatten(&record);
        let values: Vec<&str> = flat.values().map(String::as_str).collect();
        assert_eq!(values, vec!["1", "2", "tail"]);
        assert_eq!(flat.len(), 3);
    }

    #[test]
    fn test_flatten_top_level_scalar() {
        let flat = flatten(&json!("only"));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[""], "only");
    }

    #[test]
    fn test_flatten_empty_containers() {
        assert!(flatten(&json!({})).is_empty());
        assert!(flatten(&json!([])).is_empty());
    }

    #[test]
    fn test_entry_to_string_joins_values() {
        let record = json!({"company": "Acme", "location": "Pune", "openings": 2});
        assert_eq!(entry_to_string(&record), "Acme Pune 2");
    }

    #[test]
    fn test_entry_to_string_empty_record() {
        assert_eq!(entry_to_string(&json!({})), "");
    }
}
