//! Canonical analysis result shared by every transport.

use serde::Serialize;
use serde_json::{Map, Value};

/// The single normalised record produced from any upstream payload shape.
///
/// Constructed once per request and never mutated. Absent fields stay absent
/// here; fallback values are applied only at presentation time, so callers can
/// distinguish "the pipeline said nothing" from "the pipeline said N/A".
///
/// The `*_string` and `suggested_text` fields are legacy aliases emitted by
/// older pipeline versions. They are carried through untouched and resolved
/// against the primary fields during presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub differences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differences_string: Option<String>,
    pub risk_flags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_neutral_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_text: Option<String>,
    /// Score on a 0–100 scale. Passed through as received; out-of-range
    /// values are a presentation concern, not a normalisation one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fake_contract_score: Option<i64>,
    pub fake_contract_signals: Vec<String>,
}

impl AnalysisResult {
    /// Extract known fields from a result object, regardless of which payload
    /// shape produced it. Unknown keys are ignored; missing keys stay absent.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            topic: text_field(obj, "topic"),
            summary: text_field(obj, "summary"),
            differences: list_field(obj, "differences"),
            differences_string: text_field(obj, "differences_string"),
            risk_flags: list_field(obj, "risk_flags"),
            risk_analysis: text_field(obj, "risk_analysis"),
            suggested_neutral_text: text_field(obj, "suggested_neutral_text"),
            suggested_text: text_field(obj, "suggested_text"),
            fake_contract_score: score_field(obj, "fake_contract_score"),
            fake_contract_signals: list_field(obj, "fake_contract_signals"),
        }
    }

    /// As [`from_object`](Self::from_object), treating any non-object value as
    /// an empty result.
    pub fn from_value(value: &Value) -> Self {
        value.as_object().map(Self::from_object).unwrap_or_default()
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn list_field(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn score_field(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn extracts_all_primary_fields() {
        let result = AnalysisResult::from_object(&obj(json!({
            "topic": "NDA",
            "summary": "Two confidentiality clauses.",
            "differences": ["scope", "duration"],
            "risk_flags": ["unlimited liability"],
            "suggested_neutral_text": "Both parties shall...",
            "fake_contract_score": 12,
            "fake_contract_signals": ["boilerplate reuse"],
        })));
        assert_eq!(result.topic.as_deref(), Some("NDA"));
        assert_eq!(result.differences, vec!["scope", "duration"]);
        assert_eq!(result.risk_flags, vec!["unlimited liability"]);
        assert_eq!(result.fake_contract_score, Some(12));
        assert_eq!(result.fake_contract_signals, vec!["boilerplate reuse"]);
    }

    #[test]
    fn missing_fields_stay_absent() {
        let result = AnalysisResult::from_object(&obj(json!({ "topic": "NDA" })));
        assert!(result.summary.is_none());
        assert!(result.differences.is_empty());
        assert!(result.fake_contract_score.is_none());
    }

    #[test]
    fn alias_fields_are_carried_through() {
        let result = AnalysisResult::from_object(&obj(json!({
            "differences_string": "a\nb",
            "risk_analysis": "late fees",
            "suggested_text": "neutral wording",
        })));
        assert_eq!(result.differences_string.as_deref(), Some("a\nb"));
        assert_eq!(result.risk_analysis.as_deref(), Some("late fees"));
        assert_eq!(result.suggested_text.as_deref(), Some("neutral wording"));
        assert!(result.differences.is_empty());
    }

    #[test]
    fn score_accepts_numeric_strings() {
        let result = AnalysisResult::from_object(&obj(json!({ "fake_contract_score": "72" })));
        assert_eq!(result.fake_contract_score, Some(72));
    }

    #[test]
    fn score_outside_range_passes_through() {
        let result = AnalysisResult::from_object(&obj(json!({ "fake_contract_score": 140 })));
        assert_eq!(result.fake_contract_score, Some(140));
    }

    #[test]
    fn non_string_scalars_are_stringified() {
        let result = AnalysisResult::from_object(&obj(json!({ "topic": 7 })));
        assert_eq!(result.topic.as_deref(), Some("7"));
    }

    #[test]
    fn non_object_value_yields_empty_result() {
        assert_eq!(AnalysisResult::from_value(&json!(42)), AnalysisResult::default());
        assert_eq!(AnalysisResult::from_value(&json!("text")), AnalysisResult::default());
    }

    #[test]
    fn serialises_primary_names_and_keeps_empty_lists() {
        let result = AnalysisResult {
            topic: Some("NDA".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["topic"], "NDA");
        assert_eq!(json["differences"], json!([]));
        assert!(json.get("summary").is_none());
        assert!(json.get("differences_string").is_none());
    }
}
