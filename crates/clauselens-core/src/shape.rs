//! Structural classification of raw upstream payloads.
//!
//! The pipeline has shipped three response layouts over time and none of them
//! carries a discriminant tag, so recognition is purely structural. The checks
//! run in a fixed order and the first match wins; a payload that could satisfy
//! a later check is still handled by the earlier one.

use indexmap::IndexMap;
use serde_json::Value;

/// One recognised payload layout.
#[derive(Debug, Clone, PartialEq)]
pub enum RawShape {
    /// Current pipeline format: a top-level `result` field holding a
    /// JSON-encoded string.
    StringResult(String),
    /// Older message-style format: JSON-encoded text at
    /// `output[0].content[0].text`.
    NestedContent(String),
    /// RPC transport format: keyed string entries, preserved in arrival order.
    MapEntries(IndexMap<String, String>),
}

/// Classify a payload, or return `None` when no layout matches.
pub fn classify(raw: &Value) -> Option<RawShape> {
    if let Some(embedded) = raw.get("result").and_then(Value::as_str) {
        return Some(RawShape::StringResult(embedded.to_string()));
    }
    if let Some(embedded) = nested_content_text(raw) {
        return Some(RawShape::NestedContent(embedded.to_string()));
    }
    if let Some(entries) = string_entries(raw) {
        return Some(RawShape::MapEntries(entries));
    }
    None
}

fn nested_content_text(raw: &Value) -> Option<&str> {
    raw.get("output")?
        .get(0)?
        .get("content")?
        .get(0)?
        .get("text")?
        .as_str()
}

/// An object qualifies as map entries only when every value is a string,
/// matching what the RPC transport can deliver.
fn string_entries(raw: &Value) -> Option<IndexMap<String, String>> {
    let obj = raw.as_object()?;
    let mut entries = IndexMap::with_capacity(obj.len());
    for (key, value) in obj {
        entries.insert(key.clone(), value.as_str()?.to_string());
    }
    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_result_shape() {
        let shape = classify(&json!({ "result": "{\"topic\":\"NDA\"}" }));
        assert_eq!(shape, Some(RawShape::StringResult("{\"topic\":\"NDA\"}".into())));
    }

    #[test]
    fn string_result_wins_over_nested_content() {
        // Both layouts present: the result field is checked first.
        let shape = classify(&json!({
            "result": "{}",
            "output": [{ "content": [{ "text": "{\"topic\":\"other\"}" }] }],
        }));
        assert_eq!(shape, Some(RawShape::StringResult("{}".into())));
    }

    #[test]
    fn non_string_result_field_is_not_shape_one() {
        assert_eq!(classify(&json!({ "result": 42 })), None);
    }

    #[test]
    fn nested_content_shape() {
        let shape = classify(&json!({
            "output": [{ "content": [{ "text": "{\"topic\":\"NDA\"}" }] }],
        }));
        assert_eq!(shape, Some(RawShape::NestedContent("{\"topic\":\"NDA\"}".into())));
    }

    #[test]
    fn nested_content_requires_the_exact_path() {
        assert_eq!(classify(&json!({ "output": [] })), None);
        assert_eq!(classify(&json!({ "output": [{ "content": [] }] })), None);
        assert_eq!(
            classify(&json!({ "output": [{ "content": [{ "text": 7 }] }] })),
            None
        );
    }

    #[test]
    fn all_string_object_is_map_entries() {
        let shape = classify(&json!({ "topic": "NDA", "summary": "short" }));
        let Some(RawShape::MapEntries(entries)) = shape else {
            panic!("expected map entries");
        };
        assert_eq!(entries.get("topic").map(String::as_str), Some("NDA"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn empty_object_is_empty_map_entries() {
        assert_eq!(classify(&json!({})), Some(RawShape::MapEntries(IndexMap::new())));
    }

    #[test]
    fn mixed_value_object_matches_nothing() {
        assert_eq!(classify(&json!({ "foo": 1 })), None);
        assert_eq!(classify(&json!({ "topic": "NDA", "count": 2 })), None);
    }

    #[test]
    fn non_object_payloads_match_nothing() {
        assert_eq!(classify(&json!([1, 2])), None);
        assert_eq!(classify(&json!("text")), None);
        assert_eq!(classify(&json!(null)), None);
    }
}
