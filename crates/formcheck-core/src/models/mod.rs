pub mod analysis;

pub use analysis::{AnalysisResponse, ApiMessage};
