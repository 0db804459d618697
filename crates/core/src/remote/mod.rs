pub mod credentials;
pub mod gcloud;
pub mod gemini_client;
pub mod payload;
