//! Presentation: resolve a canonical result (or failure) into display fields.
//!
//! This is the only place fallback values are applied. Alias resolution per
//! field runs primary name → alias → literal fallback, and empty strings are
//! treated as absent, matching the behaviour the browser UI always had.

use serde::Serialize;

use crate::normalize::NormalizeError;
use crate::result::AnalysisResult;

pub const FALLBACK_TEXT: &str = "N/A";
pub const NO_DIFFERENCES: &str = "No differences detected";
pub const NO_RISKS: &str = "No significant risks identified";
pub const NO_FAKE_SIGNALS: &str = "No fake contract signals detected";
pub const NO_RESPONSE_MSG: &str = "No valid response received from the server.";
pub const NO_DATA_MSG: &str = "No analysis data available.";

/// Display-ready view of one analyze exchange: either a full card or a single
/// error message. No partial rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DisplayRecord {
    Analysis(AnalysisCard),
    Error(String),
}

impl DisplayRecord {
    /// Error record for failures that happen before normalisation, such as
    /// upstream or transport errors. The message is shown as-is.
    pub fn failure(message: impl Into<String>) -> Self {
        DisplayRecord::Error(message.into())
    }
}

/// Every field resolved against its fallback; no `Option` left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisCard {
    pub topic: String,
    pub summary: String,
    pub differences: Vec<String>,
    pub risk_flags: Vec<String>,
    pub suggested_neutral_text: String,
    /// Rendered as `"<n> / 100"`, or the literal fallback when absent.
    pub fake_contract_score: String,
    pub fake_contract_signals: Vec<String>,
}

/// Map a normalisation outcome to its display record. Pure: no I/O, input
/// untouched.
pub fn present(outcome: &Result<AnalysisResult, NormalizeError>) -> DisplayRecord {
    match outcome {
        Ok(result) => DisplayRecord::Analysis(card(result)),
        Err(err) => DisplayRecord::Error(error_message(err)),
    }
}

/// The one user-facing message per normalisation failure kind.
pub fn error_message(err: &NormalizeError) -> String {
    match err {
        NormalizeError::UnrecognizedFormat => NO_RESPONSE_MSG.to_string(),
        NormalizeError::NoData => NO_DATA_MSG.to_string(),
        NormalizeError::MalformedEmbeddedJson(_) => err.to_string(),
    }
}

fn card(result: &AnalysisResult) -> AnalysisCard {
    AnalysisCard {
        topic: text_or_fallback(&result.topic),
        summary: text_or_fallback(&result.summary),
        differences: list_or_alias(&result.differences, &result.differences_string, NO_DIFFERENCES),
        risk_flags: list_or_alias(&result.risk_flags, &result.risk_analysis, NO_RISKS),
        suggested_neutral_text: non_empty(&result.suggested_neutral_text)
            .or_else(|| non_empty(&result.suggested_text))
            .unwrap_or(FALLBACK_TEXT)
            .to_string(),
        fake_contract_score: match result.fake_contract_score {
            Some(score) => format!("{score} / 100"),
            None => FALLBACK_TEXT.to_string(),
        },
        fake_contract_signals: if result.fake_contract_signals.is_empty() {
            vec![NO_FAKE_SIGNALS.to_string()]
        } else {
            result.fake_contract_signals.clone()
        },
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn text_or_fallback(field: &Option<String>) -> String {
    non_empty(field).unwrap_or(FALLBACK_TEXT).to_string()
}

/// Primary list if non-empty, else the newline-delimited alias, else a
/// single-item placeholder.
fn list_or_alias(primary: &[String], alias: &Option<String>, placeholder: &str) -> Vec<String> {
    if !primary.is_empty() {
        return primary.to_vec();
    }
    if let Some(text) = non_empty(alias) {
        let lines: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if !lines.is_empty() {
            return lines;
        }
    }
    vec![placeholder.to_string()]
}
