use std::path::{Path, PathBuf};

use thiserror::Error;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::local::audio_segment::AudioSegment;
use crate::transcript::{Transcript, TranscriptSegment, TranscriptWord};

#[derive(Error, Debug)]
pub enum LocalTranscribeError {
    #[error("whisper model not found at: {0}")]
    ModelNotFound(PathBuf),
    #[error("model path is not valid UTF-8: {0}")]
    InvalidModelPath(PathBuf),
    #[error("failed to load whisper model: {0}")]
    ModelLoad(#[source] whisper_rs::WhisperError),
    #[error("whisper inference failed: {0}")]
    Inference(#[source] whisper_rs::WhisperError),
}

/// Speech-to-text via whisper.cpp (whisper-rs), running fully in-process.
///
/// Token timestamps are always collected; word entries are attached to
/// segments only when the caller asked for them.
#[derive(Debug)]
pub struct WhisperTranscriber {
    model_path: PathBuf,
}

impl WhisperTranscriber {
    pub fn new(model_path: &Path) -> Result<Self, LocalTranscribeError> {
        if !model_path.exists() {
            return Err(LocalTranscribeError::ModelNotFound(model_path.to_path_buf()));
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn transcribe(
        &self,
        audio: &AudioSegment,
        language: Option<&str>,
        word_timestamps: bool,
    ) -> Result<Transcript, LocalTranscribeError> {
        let model_path = self
            .model_path
            .to_str()
            .ok_or_else(|| LocalTranscribeError::InvalidModelPath(self.model_path.clone()))?;

        let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
            .map_err(LocalTranscribeError::ModelLoad)?;

        let mut state = ctx
            .create_state()
            .map_err(LocalTranscribeError::ModelLoad)?;

        let language = language.unwrap_or("auto");

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some(language));
        params.set_translate(false);
        params.set_token_timestamps(true);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state
            .full(params, audio.samples())
            .map_err(LocalTranscribeError::Inference)?;

        let mut segments = Vec::new();
        let mut full_text = String::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let mut seg_text = String::new();
            let mut words = Vec::new();
            let mut seg_start = f64::MAX;
            let mut seg_end = 0.0f64;

            let n_tokens = segment.n_tokens();
            for tok_idx in 0..n_tokens {
                let token = match segment.get_token(tok_idx) {
                    Some(t) => t,
                    None => continue,
                };

                let text = match token.to_str() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                // Skip special tokens (start with [, like [_BEG_], [_SOT_], etc.)
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                    continue;
                }

                // Raw token text keeps the leading space used for joining
                seg_text.push_str(text);

                let token_data = token.token_data();

                // Token timestamps are in centiseconds (10ms units)
                let start_time = token_data.t0 as f64 / 100.0;
                let end_time = token_data.t1 as f64 / 100.0;

                // Skip timing entries for tokens with invalid timestamps
                if end_time <= start_time {
                    continue;
                }

                seg_start = seg_start.min(start_time);
                seg_end = seg_end.max(end_time);

                words.push(TranscriptWord {
                    word: trimmed.to_string(),
                    start_time,
                    end_time,
                    confidence: token.token_probability(),
                });
            }

            let text = seg_text.trim().to_string();
            if text.is_empty() {
                continue;
            }

            if !full_text.is_empty() {
                full_text.push(' ');
            }
            full_text.push_str(&text);

            segments.push(TranscriptSegment {
                start: if seg_start == f64::MAX { 0.0 } else { seg_start },
                end: seg_end,
                text,
                words: word_timestamps.then_some(words),
            });
        }

        Ok(Transcript {
            text: full_text,
            language: language.to_string(),
            segments,
        })
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
