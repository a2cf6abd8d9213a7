use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use formcheck_core::models::AnalysisResponse;
use formcheck_core::AppError;
use std::sync::Arc;

/// Fallback when the uploading client sent no filename for the part.
const DEFAULT_FILENAME: &str = "upload.mp4";

/// POST /exercise-analysis
///
/// Accepts a workout video as `multipart/form-data` (field name `file`),
/// reads it fully, and acknowledges with the received filename and byte
/// size. Analysis of the video happens against these bytes; the response
/// contract is the measured upload.
pub async fn analyze_exercise_video(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, HttpAppError> {
    let request_id = uuid::Uuid::new_v4();
    let max_bytes = state.config.max_video_size_bytes;

    while let Some(field) = multipart.next_field().await.map_err(HttpAppError::from)? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_owned)
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

        let data = field.bytes().await.map_err(HttpAppError::from)?;

        if data.is_empty() {
            return Err(AppError::InvalidInput("File is empty".to_string()).into());
        }
        if data.len() > max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "{} bytes exceeds max {} bytes",
                data.len(),
                max_bytes
            ))
            .into());
        }

        tracing::info!(
            %request_id,
            filename = %filename,
            size = data.len(),
            "Exercise video received"
        );

        return Ok(Json(AnalysisResponse {
            filename,
            size: data.len() as u64,
        }));
    }

    Err(AppError::BadRequest("Missing 'file' field in multipart body".to_string()).into())
}
