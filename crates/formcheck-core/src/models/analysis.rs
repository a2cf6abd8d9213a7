use serde::{Deserialize, Serialize};

/// Response for `POST /exercise-analysis`: the uploaded video was received
/// and measured. Matches the analysis endpoint's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub filename: String,
    pub size: u64,
}

/// Plain message body, used by the root route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
