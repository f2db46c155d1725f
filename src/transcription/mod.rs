//! Transcription collaborator - posts audio to a remote speech-to-text
//! service and returns the SRT text it produces.
//!
//! The service is a black box: it receives one audio file and returns
//! subtitle text whose timeline starts at zero. Credentials are explicit
//! constructor input, never read from ambient process state here.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
pub const DEFAULT_MODEL: &str = "whisper-1";

#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    /// Optional language hint forwarded to the service
    pub language: Option<String>,
    /// Applied to each request; a timed-out chunk fails the run
    pub timeout: Duration,
}

#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("failed to read audio chunk {path}")]
    ChunkRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("transcription request failed")]
    Request(#[from] reqwest::Error),
    #[error("transcription service returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// JSON error envelope returned by the service on failure
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Blocking client for an OpenAI-compatible transcription endpoint
pub struct WhisperClient {
    http: reqwest::blocking::Client,
    config: TranscriberConfig,
}

impl WhisperClient {
    pub fn new(config: TranscriberConfig) -> Result<Self, TranscriptionError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TranscriptionError::Client)?;
        Ok(Self { http, config })
    }

    /// Send one audio file for transcription and return the raw SRT text.
    ///
    /// A silent chunk legitimately comes back with zero cues; that is the
    /// caller's concern, not an error here.
    pub fn transcribe_file(&self, path: &Path) -> Result<String, TranscriptionError> {
        let mut form = reqwest::blocking::multipart::Form::new()
            .file("file", path)
            .map_err(|source| TranscriptionError::ChunkRead {
                path: path.display().to_string(),
                source,
            })?
            .text("model", self.config.model.clone())
            .text("response_format", "srt");
        if let Some(language) = &self.config.language {
            form = form.text("language", language.clone());
        }

        debug!(
            path = %path.display(),
            url = %self.config.api_url,
            "sending transcription request"
        );
        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(TranscriptionError::Api { status, message });
        }

        Ok(response.text()?)
    }
}
