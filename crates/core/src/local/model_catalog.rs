use std::fmt;
use std::str::FromStr;

use crate::shared::constants::WHISPER_MODEL_BASE_URL;

/// Whisper model size selector, mapping to a GGML file on the
/// whisper.cpp model repository.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelSize {
    Tiny,
    TinyEn,
    #[default]
    Base,
    BaseEn,
    Small,
    SmallEn,
    Medium,
    MediumEn,
    LargeV3,
    Turbo,
}

impl ModelSize {
    pub const ALL: &'static [ModelSize] = &[
        ModelSize::Tiny,
        ModelSize::TinyEn,
        ModelSize::Base,
        ModelSize::BaseEn,
        ModelSize::Small,
        ModelSize::SmallEn,
        ModelSize::Medium,
        ModelSize::MediumEn,
        ModelSize::LargeV3,
        ModelSize::Turbo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::TinyEn => "tiny.en",
            ModelSize::Base => "base",
            ModelSize::BaseEn => "base.en",
            ModelSize::Small => "small",
            ModelSize::SmallEn => "small.en",
            ModelSize::Medium => "medium",
            ModelSize::MediumEn => "medium.en",
            ModelSize::LargeV3 => "large-v3",
            ModelSize::Turbo => "turbo",
        }
    }

    pub fn ggml_filename(self) -> &'static str {
        match self {
            ModelSize::Tiny => "ggml-tiny.bin",
            ModelSize::TinyEn => "ggml-tiny.en.bin",
            ModelSize::Base => "ggml-base.bin",
            ModelSize::BaseEn => "ggml-base.en.bin",
            ModelSize::Small => "ggml-small.bin",
            ModelSize::SmallEn => "ggml-small.en.bin",
            ModelSize::Medium => "ggml-medium.bin",
            ModelSize::MediumEn => "ggml-medium.en.bin",
            ModelSize::LargeV3 => "ggml-large-v3.bin",
            ModelSize::Turbo => "ggml-large-v3-turbo.bin",
        }
    }

    pub fn download_url(self) -> String {
        format!("{WHISPER_MODEL_BASE_URL}/{}", self.ggml_filename())
    }

    /// Comma-separated selector list for user-facing messages.
    pub fn valid_values() -> String {
        ModelSize::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelSize::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown model size '{s}', expected one of: {}",
                    ModelSize::valid_values()
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ModelSize::Tiny, "tiny", "ggml-tiny.bin")]
    #[case(ModelSize::TinyEn, "tiny.en", "ggml-tiny.en.bin")]
    #[case(ModelSize::Base, "base", "ggml-base.bin")]
    #[case(ModelSize::MediumEn, "medium.en", "ggml-medium.en.bin")]
    #[case(ModelSize::LargeV3, "large-v3", "ggml-large-v3.bin")]
    #[case(ModelSize::Turbo, "turbo", "ggml-large-v3-turbo.bin")]
    fn test_selector_and_filename(
        #[case] size: ModelSize,
        #[case] selector: &str,
        #[case] filename: &str,
    ) {
        assert_eq!(size.as_str(), selector);
        assert_eq!(size.ggml_filename(), filename);
    }

    #[test]
    fn test_parse_roundtrip_for_all() {
        for &size in ModelSize::ALL {
            assert_eq!(size.as_str().parse::<ModelSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_parse_unknown_lists_valid_values() {
        let err = "gigantic".parse::<ModelSize>().unwrap_err();
        assert!(err.contains("gigantic"));
        assert!(err.contains("tiny"));
        assert!(err.contains("turbo"));
    }

    #[test]
    fn test_default_is_base() {
        assert_eq!(ModelSize::default(), ModelSize::Base);
    }

    #[test]
    fn test_download_url_points_at_model_repo() {
        let url = ModelSize::BaseEn.download_url();
        assert_eq!(
            url,
            "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.en.bin"
        );
    }
}
