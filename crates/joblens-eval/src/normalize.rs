//! Normalize raw field values into comparison strings
//!
//! Extraction output is noisy: the same salary may come back as
//! `"₹15,000 - ₹20,000/-"` from one model and `"Rs 15000 to 20000"`
//! from another. Normalization lowers both into a common token form so
//! the fuzzy matcher compares content, not formatting.

use serde_json::{Map, Value};

/// Normalize any scalar, array, or object into a comparison string.
///
/// - `null` becomes the empty string.
/// - Arrays normalize each element recursively; elements that normalize
///   to empty are dropped, the rest join with a single space.
/// - Objects serialize to canonical JSON (keys sorted at every level)
///   and then normalize as text.
/// - Everything else stringifies and normalizes as text.
///
/// Idempotent: re-normalizing normalized output is a no-op.
pub fn normalize(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(normalize)
                .filter(|s| !s.is_empty())
                .collect();
            parts.join(" ")
        }
        Value::Object(_) => normalize_text(&canonical_json(value)),
        Value::String(s) => normalize_text(s),
        Value::Bool(b) => normalize_text(&b.to_string()),
        Value::Number(n) => normalize_text(&n.to_string()),
    }
}

/// Normalize a text value into lower-cased, de-punctuated token form.
///
/// Steps, in order: lowercase; drop commas; turn `-` `|` `.` `:` into
/// spaces; substitute `₹`→`rs` and `$`→`usd`; drop every remaining
/// character that is not alphanumeric, underscore, or whitespace;
/// replace the substrings `senior`→`sr` and `junior`→`jr`; collapse
/// whitespace runs and trim.
///
/// The currency substitution runs before the punctuation strip so the
/// symbols survive long enough to be rewritten. The `senior`/`junior`
/// replacement is a plain substring replace, so `seniority` becomes
/// `srity`; this mirrors the scoring behavior the expected values were
/// recorded against.
pub fn normalize_text(input: &str) -> String {
    let mut text = input.to_lowercase();
    text = text.replace(',', "");
    for sep in ['-', '|', '.', ':'] {
        text = text.replace(sep, " ");
    }
    text = text.replace('₹', "rs");
    text = text.replace('$', "usd");
    text = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    text = text.replace("senior", "sr");
    text = text.replace("junior", "jr");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Serialize a value with object keys sorted lexicographically at every
/// nesting level.
///
/// Pretty-printed so that structural separators leave whitespace behind
/// once punctuation is stripped; compact form would weld adjacent
/// tokens together after the commas are removed.
fn canonical_json(value: &Value) -> String {
    fn sort_keys(value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                let mut sorted = Map::new();
                for (key, child) in entries {
                    sorted.insert(key.clone(), sort_keys(child));
                }
                Value::Object(sorted)
            }
            Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
            other => other.clone(),
        }
    }

    let sorted = sort_keys(value);
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| sorted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_null_is_empty() {
        assert_eq!(normalize(&Value::Null), "");
    }

    #[test]
    fn test_basic_cleanup() {
        assert_eq!(normalize_text("  B.Tech, M.Tech  "), "b tech m tech");
        assert_eq!(normalize_text("10:00-18:00"), "10 00 18 00");
        assert_eq!(normalize_text("online|offline"), "online offline");
    }

    #[test]
    fn test_currency_substitution() {
        // No currency symbol survives normalization.
        assert_eq!(normalize_text("₹500"), "rs500");
        assert_eq!(normalize_text("₹ 15,000 - ₹20,000"), "rs 15000 rs20000");
        assert_eq!(normalize_text("$80k"), "usd80k");
    }

    #[test]
    fn test_remaining_punctuation_removed() {
        assert_eq!(normalize_text("B.E./B.Tech (CS)!"), "b e b tech cs");
    }

    #[test]
    fn test_seniority_substring_replacement() {
        assert_eq!(normalize_text("Senior Engineer"), "sr engineer");
        assert_eq!(normalize_text("Junior Clerk"), "jr clerk");
        // Substring replace, not word-boundary-aware.
        assert_eq!(normalize_text("Seniority"), "srity");
    }

    #[test]
    fn test_array_drops_empty_elements() {
        let value = json!(["Welding", null, "", "Fitting"]);
        assert_eq!(normalize(&value), "welding fitting");
    }

    #[test]
    fn test_object_uses_sorted_keys() {
        let value = json!({"min": 15000, "max": 20000});
        // Canonical serialization sorts keys, so "max" precedes "min"
        // regardless of document order.
        assert_eq!(normalize(&value), "max 20000 min 15000");
    }

    #[test]
    fn test_number_and_bool_scalars() {
        assert_eq!(normalize(&json!(500)), "500");
        assert_eq!(normalize(&json!(true)), "true");
        // Float text contains a period, which splits into tokens.
        assert_eq!(normalize(&json!(1.5)), "1 5");
    }

    #[test]
    fn test_idempotence_examples() {
        for input in ["₹500", "Senior DevOps — Pune!!", "a,b.c:d|e", "  spaced   out  "] {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once, "not idempotent for {input:?}");
        }
    }

    proptest! {
        #[test]
        fn normalize_text_is_idempotent(s in ".*") {
            let once = normalize_text(&s);
            prop_assert_eq!(normalize_text(&once), once);
        }

        #[test]
        fn normalize_value_is_idempotent_for_strings(s in ".*") {
            let once = normalize(&Value::String(s));
            prop_assert_eq!(normalize(&Value::String(once.clone())), once);
        }
    }
}
