use serde::Serialize;

/// A transcribed word with timing and model confidence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranscriptWord {
    pub word: String,
    #[serde(rename = "start")]
    pub start_time: f64,
    #[serde(rename = "end")]
    pub end_time: f64,
    pub confidence: f32,
}

impl TranscriptWord {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// A contiguous stretch of speech, with word detail when word-level
/// timestamps were requested.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<TranscriptWord>>,
}

/// The full result of one transcription run.
///
/// Serializes to the `--json` output shape: `segments` is omitted when
/// empty, and each segment carries `words` only when they were collected.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transcript {
    pub text: String,
    pub language: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<TranscriptSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_word() -> TranscriptWord {
        TranscriptWord {
            word: "hello".to_string(),
            start_time: 1.0,
            end_time: 1.5,
            confidence: 0.95,
        }
    }

    #[test]
    fn test_word_duration() {
        let w = TranscriptWord {
            word: "test".to_string(),
            start_time: 2.0,
            end_time: 2.8,
            confidence: 0.9,
        };
        assert_relative_eq!(w.duration(), 0.8, epsilon = 0.001);
    }

    #[test]
    fn test_json_shape_with_words() {
        let t = Transcript {
            text: "hello".to_string(),
            language: "en".to_string(),
            segments: vec![TranscriptSegment {
                start: 1.0,
                end: 1.5,
                text: "hello".to_string(),
                words: Some(vec![sample_word()]),
            }],
        };
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["text"], "hello");
        assert_eq!(json["language"], "en");
        assert_eq!(json["segments"][0]["start"], 1.0);
        assert_eq!(json["segments"][0]["end"], 1.5);
        assert_eq!(json["segments"][0]["words"][0]["word"], "hello");
        assert_eq!(json["segments"][0]["words"][0]["start"], 1.0);
        assert_eq!(json["segments"][0]["words"][0]["end"], 1.5);
    }

    #[test]
    fn test_json_omits_words_when_absent() {
        let t = Transcript {
            text: "hello".to_string(),
            language: "auto".to_string(),
            segments: vec![TranscriptSegment {
                start: 0.0,
                end: 2.0,
                text: "hello".to_string(),
                words: None,
            }],
        };
        let json = serde_json::to_value(&t).unwrap();
        assert!(json["segments"][0].get("words").is_none());
    }

    #[test]
    fn test_json_omits_segments_when_empty() {
        let t = Transcript {
            text: "hello".to_string(),
            language: "en".to_string(),
            segments: Vec::new(),
        };
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.get("segments").is_none());
        assert_eq!(json["text"], "hello");
    }
}
