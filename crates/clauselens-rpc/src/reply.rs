//! Client side of the unary `Analyze` call.
//!
//! The transport itself is external; what arrives here is a completed call:
//! a status code, a status message, and the response message when the call
//! succeeded. This module folds that into the canonical result pipeline.

use clauselens_core::normalize::{NormalizeError, normalize_entries};
use clauselens_core::present::{self, NO_RESPONSE_MSG};
use clauselens_core::result::AnalysisResult;
use indexmap::IndexMap;
use thiserror::Error;

use crate::message::AnalyzeResponse;

pub const STATUS_OK: i32 = 0;

/// A finished unary call as the transport reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOutcome {
    pub status: i32,
    pub status_message: String,
    pub message: Option<AnalyzeResponse>,
}

#[derive(Debug, Error)]
pub enum ReplyError {
    /// The transport reported a non-zero status.
    #[error("Error: {message}")]
    Status { status: i32, message: String },
    /// Zero status but no usable response message.
    #[error("{NO_RESPONSE_MSG}")]
    MissingResponse,
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl ReplyError {
    /// The one user-facing message for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ReplyError::Normalize(err) => present::error_message(err),
            other => other.to_string(),
        }
    }
}

impl UnaryOutcome {
    /// Fold the outcome into a canonical result: non-zero status is an error,
    /// a missing response likewise, otherwise the map entries go through the
    /// normal map-shape normalisation.
    pub fn into_result(self) -> Result<AnalysisResult, ReplyError> {
        if self.status != STATUS_OK {
            return Err(ReplyError::Status {
                status: self.status,
                message: self.status_message,
            });
        }

        let entries: IndexMap<String, String> = self
            .message
            .and_then(|response| response.result)
            .ok_or(ReplyError::MissingResponse)?
            .data
            .into_iter()
            .collect();

        Ok(normalize_entries(&entries)?)
    }
}
