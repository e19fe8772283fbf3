use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

/// Set of dotted key paths found in a locale document.
pub type KeySet = BTreeSet<String>;

/// Flatten a nested locale document into dotted key paths.
///
/// - Object keys become `parent.child` segments
/// - Array elements become `parent.<index>` segments (zero-based)
/// - Every other value is a leaf and ends the path
///
/// Empty objects and arrays contribute no keys. A scalar at the document
/// root is stored under the empty path.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use locale_audit::core::flatten;
///
/// let flat = flatten(&json!({"Home": {"title": "Hi", "tags": ["a", "b"]}}));
/// assert_eq!(flat["Home.title"], json!("Hi"));
/// assert_eq!(flat["Home.tags.1"], json!("b"));
/// ```
pub fn flatten(document: &Value) -> BTreeMap<String, Value> {
    let mut result = BTreeMap::new();
    flatten_into(document, String::new(), &mut result);
    result
}

/// Key paths of `document`, without their values.
pub fn key_set(document: &Value) -> KeySet {
    flatten(document).into_keys().collect()
}

fn flatten_into(value: &Value, prefix: String, result: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_into(val, join_path(&prefix, key), result);
            }
        }
        Value::Array(arr) => {
            for (index, val) in arr.iter().enumerate() {
                flatten_into(val, join_path(&prefix, &index.to_string()), result);
            }
        }
        leaf => {
            result.insert(prefix, leaf.clone());
        }
    }
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}
