pub mod normalize;
pub mod present;
pub mod request;
pub mod result;
pub mod shape;

pub use normalize::{NormalizeError, normalize, normalize_entries};
pub use present::{AnalysisCard, DisplayRecord, present};
pub use request::{RequestError, clean_input};
pub use result::AnalysisResult;
pub use shape::{RawShape, classify};
