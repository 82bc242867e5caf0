//! Engine configuration.

use crate::error::DomainError;

/// Environment variable toggling duplicate clips in a sequence.
pub const ALLOW_DUPLICATES_VAR: &str = "FIGURELAB_ALLOW_DUPLICATES";
/// Environment variable toggling incompatible transitions on append.
pub const ALLOW_INCOMPATIBLE_VAR: &str = "FIGURELAB_ALLOW_INCOMPATIBLE";
/// Environment variable holding the default generated sequence length.
pub const SEQUENCE_LENGTH_VAR: &str = "FIGURELAB_SEQUENCE_LENGTH";

const DEFAULT_SEQUENCE_LENGTH: usize = 8;

/// Rules applied by a policy-checked append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendPolicy {
    /// Whether a clip already in the sequence may be appended again.
    pub allow_duplicates: bool,
    /// Whether a clip may follow one it is not compatible with.
    pub allow_incompatible: bool,
}

impl AppendPolicy {
    /// Permits everything; equivalent to an unconditional append.
    pub const PERMISSIVE: Self = Self {
        allow_duplicates: true,
        allow_incompatible: true,
    };

    /// Refuses duplicates and incompatible transitions.
    pub const STRICT: Self = Self {
        allow_duplicates: false,
        allow_incompatible: false,
    };
}

impl Default for AppendPolicy {
    fn default() -> Self {
        Self::PERMISSIVE
    }
}

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Whether sequences may repeat a clip.
    pub allow_duplicates: bool,
    /// Whether manual appends may ignore compatibility.
    pub allow_incompatible: bool,
    /// Length used when a caller asks for a generated sequence without one.
    pub default_sequence_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            allow_duplicates: true,
            allow_incompatible: true,
            default_sequence_length: DEFAULT_SEQUENCE_LENGTH,
        }
    }
}

impl EngineConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a variable is set to an
    /// unparseable value.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup. Unset keys keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a value is unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ALLOW_DUPLICATES_VAR) {
            config.allow_duplicates = parse_flag(ALLOW_DUPLICATES_VAR, &raw)?;
        }
        if let Some(raw) = lookup(ALLOW_INCOMPATIBLE_VAR) {
            config.allow_incompatible = parse_flag(ALLOW_INCOMPATIBLE_VAR, &raw)?;
        }
        if let Some(raw) = lookup(SEQUENCE_LENGTH_VAR) {
            config.default_sequence_length = raw.trim().parse().map_err(|e| {
                DomainError::Validation(format!("{SEQUENCE_LENGTH_VAR} must be a valid usize: {e}"))
            })?;
        }

        Ok(config)
    }

    /// Returns the append policy implied by this configuration.
    #[must_use]
    pub fn policy(&self) -> AppendPolicy {
        AppendPolicy {
            allow_duplicates: self.allow_duplicates,
            allow_incompatible: self.allow_incompatible,
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, DomainError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(DomainError::Validation(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}
