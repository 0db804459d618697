use serde::{Deserialize, Serialize};

use crate::shared::constants::TRANSCRIBE_INSTRUCTION;

/// Request body for the Gemini `generateContent` endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentRequest {
    /// A single-turn request: the fixed transcription instruction plus the
    /// base64-encoded audio as inline data.
    pub fn audio_transcription(mime_type: &str, base64_audio: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: TRANSCRIBE_INSTRUCTION.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: base64_audio,
                        },
                    },
                ],
            }],
        }
    }
}

/// Response body for `generateContent`; only the fields this tool reads.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextPart {
    #[serde(default)]
    pub text: String,
}

impl GenerateContentResponse {
    /// The transcript: first candidate's first text part.
    pub fn transcript_text(&self) -> Option<&str> {
        let part = self.candidates.first()?.content.parts.first()?;
        Some(part.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_shape() {
        let req = GenerateContentRequest::audio_transcription("audio/mpeg", "QUJD".to_string());
        let json = serde_json::to_value(&req).unwrap();

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], TRANSCRIBE_INSTRUCTION);
        assert_eq!(parts[1]["inline_data"]["mime_type"], "audio/mpeg");
        assert_eq!(parts[1]["inline_data"]["data"], "QUJD");
    }

    #[test]
    fn test_response_extracts_first_text_part() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hello world"}, {"text": "ignored"}]}}
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.transcript_text(), Some("hello world"));
    }

    #[test]
    fn test_response_without_candidates_yields_none() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.transcript_text(), None);
    }

    #[test]
    fn test_response_with_empty_parts_yields_none() {
        let body = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.transcript_text(), None);
    }

    #[test]
    fn test_response_tolerates_extra_fields() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "ok"}], "role": "model"},
                 "finishReason": "STOP"}
            ],
            "usageMetadata": {"promptTokenCount": 10}
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.transcript_text(), Some("ok"));
    }
}
