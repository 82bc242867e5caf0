//! Generator settings read from the environment.

use std::path::PathBuf;

use figurelab_core::config::EngineConfig;

use crate::error::AppError;

const CORPUS_PATH_VAR: &str = "FIGURELAB_CORPUS_PATH";
const STYLE_VAR: &str = "FIGURELAB_STYLE";
const SEQUENCES_DIR_VAR: &str = "FIGURELAB_SEQUENCES_DIR";
const NAME_VAR: &str = "FIGURELAB_SEQUENCE_NAME";
const DESCRIPTION_VAR: &str = "FIGURELAB_SEQUENCE_DESCRIPTION";
const SEED_VAR: &str = "FIGURELAB_RNG_SEED";

/// Everything one generator run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub corpus_path: PathBuf,
    pub sequences_dir: PathBuf,
    pub style: String,
    pub name: String,
    pub description: String,
    pub target_length: usize,
    pub seed: Option<u64>,
}

impl Settings {
    /// Builds settings from a key lookup, falling back to `engine` for the
    /// sequence length.
    pub fn from_lookup<F>(lookup: F, engine: &EngineConfig) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let corpus_path = lookup(CORPUS_PATH_VAR)
            .map(PathBuf::from)
            .ok_or_else(|| AppError::Config(format!("{CORPUS_PATH_VAR} must be set")))?;
        let style = lookup(STYLE_VAR)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::Config(format!("{STYLE_VAR} must be set")))?;
        let sequences_dir = lookup(SEQUENCES_DIR_VAR)
            .map_or_else(|| PathBuf::from("./sequences"), PathBuf::from);
        let name = lookup(NAME_VAR).unwrap_or_else(|| format!("Generated {style} sequence"));
        let description = lookup(DESCRIPTION_VAR)
            .unwrap_or_else(|| format!("Random walk over the {style} corpus"));
        let seed = lookup(SEED_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| AppError::Config(format!("{SEED_VAR} must be a valid u64: {e}")))
            })
            .transpose()?;

        Ok(Self {
            corpus_path,
            sequences_dir,
            style,
            name,
            description,
            target_length: engine.default_sequence_length,
            seed,
        })
    }
}
