//! Figurelab headless sequence generator.
//!
//! Loads the corpus for one style, generates a sequence by random walk,
//! and saves it as a JSON document.

use std::io::Write;
use std::sync::Mutex;

use figurelab_core::clock::SystemClock;
use figurelab_core::config::EngineConfig;
use figurelab_core::rng::SeededRng;
use figurelab_sequencing::application::command_handlers::{
    handle_generate_sequence, handle_save_sequence,
};
use figurelab_sequencing::domain::commands::GenerateSequence;
use figurelab_sequencing::domain::compatibility::incompatible_transitions;
use figurelab_store::json_corpus_provider::JsonCorpusProvider;
use figurelab_store::json_sequence_gateway::JsonSequenceGateway;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod settings;

use error::AppError;
use settings::Settings;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting Figurelab sequence generator");

    // Read configuration from environment.
    let engine = EngineConfig::from_env()?;
    let settings = Settings::from_lookup(|key| std::env::var(key).ok(), &engine)?;

    let provider = JsonCorpusProvider::new(&settings.corpus_path);
    let gateway = JsonSequenceGateway::new(&settings.sequences_dir);
    let rng = Mutex::new(match settings.seed {
        Some(seed) => SeededRng::from_seed(seed),
        None => SeededRng::from_entropy(),
    });

    let command = GenerateSequence {
        style: settings.style.clone(),
        target_length: settings.target_length,
        name: settings.name.clone(),
        description: settings.description.clone(),
    };
    let sequence = handle_generate_sequence(&command, &engine, &provider, &rng).await?;

    if sequence.is_empty() {
        warn!(style = %settings.style, "no clips available, nothing saved");
        return Ok(());
    }

    let breaks = incompatible_transitions(sequence.items());
    if !breaks.is_empty() {
        warn!(
            positions = ?breaks,
            "generated sequence contains incompatible transitions"
        );
    }

    let id = handle_save_sequence(&sequence, &SystemClock, &gateway).await?;
    info!(sequence_id = %id, clips = sequence.len(), "Generated sequence saved");

    writeln!(std::io::stdout(), "{id}")?;
    Ok(())
}
