use std::path::PathBuf;
use std::process;

use clap::Parser;

use voxscribe_core::local::ffmpeg_decoder::FfmpegDecoder;
use voxscribe_core::local::model_catalog::ModelSize;
use voxscribe_core::local::whisper_transcriber::WhisperTranscriber;
use voxscribe_core::shared::constants::WHISPER_SAMPLE_RATE;
use voxscribe_core::shared::model_resolver;

/// Transcribe audio files with a local Whisper model (offline after the
/// first model download).
#[derive(Parser)]
#[command(name = "voxscribe-whisper")]
struct Cli {
    /// Audio file to transcribe.
    audio_file: PathBuf,

    /// Whisper model size (tiny, base, small, medium, large-v3, turbo, ...).
    #[arg(short, long, default_value = "base")]
    model: String,

    /// Language code (auto-detect if omitted).
    #[arg(short, long)]
    language: Option<String>,

    /// Include word-level timestamps.
    #[arg(short, long)]
    timestamps: bool,

    /// Output as JSON.
    #[arg(short = 'j', long)]
    json: bool,

    /// Suppress progress messages.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.audio_file.exists() {
        return Err(format!("Audio file not found: {}", cli.audio_file.display()).into());
    }

    let size: ModelSize = cli.model.parse()?;

    let progress = if cli.quiet {
        None
    } else {
        Some(Box::new(download_progress) as model_resolver::ProgressFn)
    };
    let model_path = model_resolver::resolve(
        size.ggml_filename(),
        &size.download_url(),
        None,
        progress,
    )?;

    if !cli.quiet {
        eprintln!();
        eprintln!("Loading model: {size}...");
    }
    let transcriber = WhisperTranscriber::new(&model_path)?;

    if !cli.quiet {
        eprintln!("Transcribing: {}...", cli.audio_file.display());
    }
    let audio = FfmpegDecoder::decode(&cli.audio_file, WHISPER_SAMPLE_RATE)?;
    log::info!("Decoded {:.2}s of audio", audio.duration());

    let mut transcript = transcriber.transcribe(&audio, cli.language.as_deref(), cli.timestamps)?;

    if cli.json {
        if !cli.timestamps {
            transcript.segments.clear();
        }
        println!("{}", serde_json::to_string_pretty(&transcript)?);
    } else {
        println!("{}", transcript.text);
        if cli.timestamps && !transcript.segments.is_empty() {
            eprintln!("\n--- Segments ---");
            for seg in &transcript.segments {
                eprintln!("  [{:.2}s - {:.2}s]: {}", seg.start, seg.end, seg.text);
            }
        }
    }

    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading whisper model... {pct}%");
    } else {
        eprint!("\rDownloading whisper model... {downloaded} bytes");
    }
}
