use std::path::PathBuf;
use std::process;

use clap::Parser;

use voxscribe_core::remote::credentials::{project_from_env, resolve_auth};
use voxscribe_core::remote::gcloud::GcloudCli;
use voxscribe_core::remote::gemini_client::GeminiClient;
use voxscribe_core::shared::constants::{
    API_KEY_ENV_VAR, DEFAULT_GEMINI_MODEL, DEFAULT_VERTEX_REGION,
};

/// Transcribe audio files using the Gemini API or Vertex AI.
#[derive(Parser)]
#[command(name = "voxscribe-gemini")]
struct Cli {
    /// Audio file to transcribe (ogg/opus, mp3, wav, m4a).
    audio_file: PathBuf,

    /// Gemini model to use.
    #[arg(short, long, default_value = DEFAULT_GEMINI_MODEL)]
    model: String,

    /// Force Vertex AI (uses Application Default Credentials).
    #[arg(short, long)]
    vertex: bool,

    /// GCP project id (defaults to env vars, then gcloud config).
    #[arg(short, long)]
    project: Option<String>,

    /// GCP region for Vertex AI.
    #[arg(short, long, default_value = DEFAULT_VERTEX_REGION)]
    region: String,
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

    let api_key = std::env::var(API_KEY_ENV_VAR)
        .ok()
        .filter(|k| !k.is_empty());
    let helper = GcloudCli::new();

    let auth = resolve_auth(
        api_key,
        cli.vertex,
        cli.project.or_else(project_from_env),
        &cli.region,
        &helper,
    )?;

    log::info!(
        "Transcribing {} with model {}",
        cli.audio_file.display(),
        cli.model
    );

    let client = GeminiClient::new();
    let text = client.transcribe(&cli.audio_file, &cli.model, &auth)?;
    println!("{text}");

    Ok(())
}
