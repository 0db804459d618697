use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";
pub const DEFAULT_VERTEX_REGION: &str = "us-central1";

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Instruction sent alongside the audio so the model returns bare text.
pub const TRANSCRIBE_INSTRUCTION: &str =
    "Transcribe this audio file exactly. Return only the transcription text, no preamble.";

pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Env vars consulted for the GCP project id, in order.
pub const PROJECT_ENV_VARS: &[&str] = &[
    "GOOGLE_CLOUD_PROJECT",
    "CLOUDSDK_CORE_PROJECT",
    "GCLOUD_PROJECT",
];

/// Bound on each gcloud credential-helper subprocess call.
pub const GCLOUD_TIMEOUT: Duration = Duration::from_secs(10);

pub const WHISPER_SAMPLE_RATE: u32 = 16000;

pub const WHISPER_MODEL_BASE_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";
