pub mod audio_segment;
pub mod ffmpeg_decoder;
pub mod model_catalog;
pub mod whisper_transcriber;
