//! Consolidate one field's values across a sequence of records

use crate::fields::FieldSet;
use crate::normalize::normalize;
use indexmap::IndexMap;
use serde_json::Value;

/// Aggregate each named field across every record into one normalized
/// string per field.
///
/// For each field, every record is visited in order and looked up by
/// exact key; absent keys are skipped, as are values that normalize to
/// empty. Survivors join with a single space, preserving record order.
/// A field that collects nothing is omitted from the result entirely —
/// there is no empty-string entry.
///
/// Non-object records carry no fields and are skipped.
pub fn consolidate(records: &[Value], fields: &FieldSet) -> IndexMap<String, String> {
    let mut out = IndexMap::new();

    for field in fields.iter() {
        let mut collected: Vec<String> = Vec::new();

        for record in records {
            let raw = record.as_object().and_then(|obj| obj.get(field));
            if let Some(raw) = raw {
                let text = normalize(raw);
                if !text.is_empty() {
                    collected.push(text);
                }
            }
        }

        if !collected.is_empty() {
            out.insert(field.to_string(), collected.join(" "));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preserves_record_order() {
        let records = vec![json!({"f": "a"}), json!({"f": "b"})];
        let fields = FieldSet::new(["f"]);
        let consolidated = consolidate(&records, &fields);
        assert_eq!(consolidated["f"], "a b");
    }

    #[test]
    fn test_absent_field_is_omitted() {
        let records = vec![json!({"other": "x"}), json!({"other": "y"})];
        let fields = FieldSet::new(["f"]);
        let consolidated = consolidate(&records, &fields);
        assert!(!consolidated.contains_key("f"));
    }

    #[test]
    fn test_empty_values_are_omitted() {
        // A field whose every occurrence normalizes to empty yields no entry.
        let records = vec![json!({"f": ""}), json!({"f": null}), json!({"f": "   "})];
        let fields = FieldSet::new(["f"]);
        let consolidated = consolidate(&records, &fields);
        assert!(consolidated.is_empty());
    }

    #[test]
    fn test_mixed_presence() {
        let records = vec![
            json!({"Company name": "Acme Corp", "Location": "Pune"}),
            json!({"Company name": null}),
            json!({"Company name": "Acme Ltd."}),
        ];
        let fields = FieldSet::new(["Company name", "Location", "Age limit"]);
        let consolidated = consolidate(&records, &fields);

        assert_eq!(consolidated["Company name"], "acme corp acme ltd");
        assert_eq!(consolidated["Location"], "pune");
        assert!(!consolidated.contains_key("Age limit"));
        assert_eq!(consolidated.len(), 2);
    }

    #[test]
    fn test_non_object_records_are_skipped() {
        let records = vec![json!("just a string"), json!({"f": "kept"})];
        let fields = FieldSet::new(["f"]);
        let consolidated = consolidate(&records, &fields);
        assert_eq!(consolidated["f"], "kept");
    }

    #[test]
    fn test_nested_values_normalize() {
        let records = vec![json!({"Skills required": ["Welding", "Gas Cutting", null]})];
        let fields = FieldSet::new(["Skills required"]);
        let consolidated = consolidate(&records, &fields);
        assert_eq!(consolidated["Skills required"], "welding gas cutting");
    }
}
