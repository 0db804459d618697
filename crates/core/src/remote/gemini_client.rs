use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use thiserror::Error;

use crate::remote::credentials::{AuthMethod, CredentialError};
use crate::remote::payload::{GenerateContentRequest, GenerateContentResponse};
use crate::shared::constants::GEMINI_API_BASE;
use crate::shared::mime::mime_type_for;

#[derive(Error, Debug)]
pub enum RemoteTranscribeError {
    #[error("audio file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    AudioRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP Error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("unexpected API response format: {0}")]
    MalformedResponse(String),
}

/// Blocking client for Gemini audio transcription.
///
/// One request per call: read the file, base64-encode it, POST the payload
/// to the endpoint matching the resolved auth path, extract the transcript.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
}

impl GeminiClient {
    pub fn new() -> Self {
        // No request timeout: transcribing long audio can exceed the
        // blocking client's 30s default, and nothing here retries.
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self { http }
    }

    pub fn transcribe(
        &self,
        audio_path: &Path,
        model: &str,
        auth: &AuthMethod,
    ) -> Result<String, RemoteTranscribeError> {
        if !audio_path.exists() {
            return Err(RemoteTranscribeError::FileNotFound(audio_path.to_path_buf()));
        }

        let audio = fs::read(audio_path).map_err(|e| RemoteTranscribeError::AudioRead {
            path: audio_path.to_path_buf(),
            source: e,
        })?;
        let mime_type = mime_type_for(audio_path);
        let encoded = base64::engine::general_purpose::STANDARD.encode(&audio);
        let payload = GenerateContentRequest::audio_transcription(mime_type, encoded);

        // endpoint is the key-free form, safe for errors and logs
        let (url, endpoint, bearer) = match auth {
            AuthMethod::ApiKey(key) => {
                let endpoint = api_key_endpoint(model);
                (format!("{endpoint}?key={key}"), endpoint, None)
            }
            AuthMethod::Vertex {
                access_token,
                project,
                region,
            } => {
                let endpoint = vertex_endpoint(region, project, model);
                (endpoint.clone(), endpoint, Some(access_token.as_str()))
            }
        };

        log::debug!(
            "POST {endpoint} ({} audio bytes, mime {mime_type})",
            audio.len()
        );

        let mut request = self.http.post(&url).json(&payload);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| RemoteTranscribeError::Transport {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RemoteTranscribeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| RemoteTranscribeError::MalformedResponse(e.to_string()))?;

        parsed
            .transcript_text()
            .map(str::to_string)
            .ok_or_else(|| {
                RemoteTranscribeError::MalformedResponse(
                    "missing candidates[0].content.parts[0].text".to_string(),
                )
            })
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Key-authenticated endpoint (the `?key=` query is appended separately).
pub fn api_key_endpoint(model: &str) -> String {
    format!("{GEMINI_API_BASE}/models/{model}:generateContent")
}

/// Vertex AI endpoint for ADC bearer-token auth.
pub fn vertex_endpoint(region: &str, project: &str, model: &str) -> String {
    format!(
        "https://{region}-aiplatform.googleapis.com/v1/projects/{project}/locations/{region}\
         /publishers/google/models/{model}:generateContent"
    )
}
