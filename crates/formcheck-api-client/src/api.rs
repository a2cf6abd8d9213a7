//! Domain methods for the Formcheck API client.
//!
//! `submit_exercise_analysis` is the core operation: one multipart POST to
//! the analysis endpoint, response body passed back to the caller, errors
//! re-raised. Response types come from `formcheck_core::models`.

use crate::{ApiClient, EXERCISE_ANALYSIS_PATH};
use anyhow::{Context, Result};
use formcheck_core::models::{AnalysisResponse, ApiMessage};

/// An encoded workout video ready for multipart transport.
///
/// The bytes are opaque to this crate: no size, format, or encoding
/// validation happens here. Whatever the recording UI produced is what goes
/// over the wire.
#[derive(Debug, Clone)]
pub struct VideoPayload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl VideoPayload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read a payload from a local file.
    pub fn from_file(file_path: &str) -> Result<Self> {
        let path = std::path::Path::new(file_path);
        if path
            .components()
            .any(|c| c == std::path::Component::ParentDir)
        {
            return Err(anyhow::anyhow!("Invalid input: {}", path.display()));
        }

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", file_path))?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("video.mp4");

        Ok(Self::new(filename, bytes))
    }

    fn into_form(self) -> reqwest::multipart::Form {
        reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(self.bytes).file_name(self.filename),
        )
    }
}

impl ApiClient {
    /// Submit an encoded workout video for exercise analysis.
    ///
    /// Resolves to the backend's response body. Transport errors and
    /// non-success statuses are logged and returned as `Err`; the caller
    /// decides how to recover.
    pub async fn submit_exercise_analysis(&self, payload: VideoPayload) -> Result<AnalysisResponse> {
        self.post_multipart(EXERCISE_ANALYSIS_PATH, payload.into_form())
            .await
    }

    /// Same submission, but the body is handed back as raw JSON for callers
    /// that do not want the typed response.
    pub async fn submit_exercise_analysis_raw(
        &self,
        payload: VideoPayload,
    ) -> Result<serde_json::Value> {
        self.post_multipart(EXERCISE_ANALYSIS_PATH, payload.into_form())
            .await
    }

    /// Submit a video from a local file path.
    pub async fn submit_video_file(&self, file_path: &str) -> Result<AnalysisResponse> {
        let payload = VideoPayload::from_file(file_path)?;
        self.submit_exercise_analysis(payload).await
    }

    /// Root endpoint; doubles as a reachability check.
    pub async fn ping(&self) -> Result<ApiMessage> {
        self.get("/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_file_rejects_parent_dir_components() {
        let result = VideoPayload::from_file("../secrets/video.mp4");
        assert!(result.is_err());
    }

    #[test]
    fn from_file_reads_bytes_and_filename() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kickback.mp4");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(b"not really a video").expect("write");

        let payload = VideoPayload::from_file(path.to_str().expect("utf8 path")).expect("payload");
        assert_eq!(payload.filename, "kickback.mp4");
        assert_eq!(payload.bytes, b"not really a video");
    }

    #[test]
    fn from_file_missing_file_is_an_error() {
        let result = VideoPayload::from_file("/nonexistent/video.mp4");
        assert!(result.is_err());
    }
}
