pub mod message;
pub mod reply;
pub mod service;

pub use message::{AnalyzeRequest, AnalyzeResponse, ResultData};
pub use reply::{ReplyError, STATUS_OK, UnaryOutcome};
pub use service::{RpcError, handle_analyze, respond};
