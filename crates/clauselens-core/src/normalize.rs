//! Payload normalisation: raw upstream JSON in, canonical result out.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::result::AnalysisResult;
use crate::shape::{RawShape, classify};

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// No known payload layout matched.
    #[error("unrecognised upstream response format")]
    UnrecognizedFormat,
    /// A layout was positively identified but its embedded JSON failed to
    /// parse. Deliberately not retried against the other layouts.
    #[error("malformed embedded analysis JSON: {0}")]
    MalformedEmbeddedJson(#[from] serde_json::Error),
    /// The map-entry layout matched but carried nothing.
    #[error("upstream response contained no analysis data")]
    NoData,
}

/// Normalise a raw payload into the canonical result.
///
/// Classification order is load-bearing: a `result` string is parsed even if
/// the payload also carries the nested-content path, and a parse failure in
/// the first two layouts is fatal rather than a reason to try the next one.
pub fn normalize(raw: &Value) -> Result<AnalysisResult, NormalizeError> {
    match classify(raw) {
        Some(RawShape::StringResult(embedded)) | Some(RawShape::NestedContent(embedded)) => {
            let parsed: Value = serde_json::from_str(&embedded)?;
            Ok(AnalysisResult::from_value(&parsed))
        }
        Some(RawShape::MapEntries(entries)) => normalize_entries(&entries),
        None => Err(NormalizeError::UnrecognizedFormat),
    }
}

/// Normalise keyed string entries, the layout the RPC transport delivers.
///
/// When an `analysis` entry holds a JSON object, that object is the result.
/// A malformed or empty `analysis` entry is non-fatal here, unlike in the
/// other layouts: legacy producers wrote result fields directly as top-level
/// entries, so the raw entries are used as the result object instead.
pub fn normalize_entries(
    entries: &IndexMap<String, String>,
) -> Result<AnalysisResult, NormalizeError> {
    if entries.is_empty() {
        return Err(NormalizeError::NoData);
    }

    if let Some(embedded) = entries.get("analysis") {
        match serde_json::from_str::<Value>(embedded) {
            Ok(Value::Object(parsed)) if !parsed.is_empty() => {
                return Ok(AnalysisResult::from_object(&parsed));
            }
            Ok(_) => warn!("analysis entry is not a usable object, using raw entries"),
            Err(err) => warn!(error = %err, "analysis entry failed to parse, using raw entries"),
        }
    }

    let obj: Map<String, Value> = entries
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect();
    Ok(AnalysisResult::from_object(&obj))
}
