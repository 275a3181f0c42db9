//! Wire messages for the unary `Analyze` call.
//!
//! Hand-written prost derives rather than generated code: three messages do
//! not justify a protoc build step. Tags match the deployed proto definition,
//! so these stay wire-compatible with existing producers and consumers.

use std::collections::HashMap;

/// Request message: one string field carrying the clause text.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnalyzeRequest {
    #[prost(string, tag = "1")]
    pub user_input: String,
}

/// Keyed string entries holding the analysis, either as a JSON object under
/// the `analysis` key or as one entry per result field.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResultData {
    #[prost(map = "string, string", tag = "1")]
    pub data: HashMap<String, String>,
}

/// Response message wrapping the result entries.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnalyzeResponse {
    #[prost(message, optional, tag = "1")]
    pub result: Option<ResultData>,
}
