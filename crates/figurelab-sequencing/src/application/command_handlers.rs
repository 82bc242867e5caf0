//! Command handlers for the sequencing context.
//!
//! These functions orchestrate a builder session around the pure domain
//! code: fetch the corpus before editing, run the engine, and hand the
//! result to the persistence gateway afterwards.

use std::sync::Mutex;

use figurelab_core::clip::{Clip, ClipId};
use figurelab_core::clock::Clock;
use figurelab_core::config::{AppendPolicy, EngineConfig};
use figurelab_core::error::DomainError;
use figurelab_core::repository::{SequencePersistenceGateway, VideoCorpusProvider};
use figurelab_core::rng::DeterministicRng;
use tracing::{info, instrument};

use crate::application::serialization::to_persistable;
use crate::domain::candidates::{CandidateOptions, get_candidates};
use crate::domain::commands::GenerateSequence;
use crate::domain::compatibility::incompatible_transitions;
use crate::domain::generator::generate_into;
use crate::domain::sequence::{MetadataUpdate, Sequence};

/// A builder session: the working sequence, the corpus it draws from, and
/// the engine rules that apply while editing.
#[derive(Debug, Clone)]
pub struct SequenceSession {
    /// The sequence being edited.
    pub sequence: Sequence,
    /// Every clip of the session's style.
    pub corpus: Vec<Clip>,
    /// Rules checked by [`SequenceSession::append`].
    pub policy: AppendPolicy,
    /// Options used by [`SequenceSession::candidates`].
    pub options: CandidateOptions,
}

impl SequenceSession {
    /// Clips that may be appended next under the session's options.
    #[must_use]
    pub fn candidates(&self) -> Vec<&Clip> {
        self.candidates_with(self.options)
    }

    /// Clips that may be appended next under explicit options, e.g. a
    /// picker toggled to show the whole corpus.
    #[must_use]
    pub fn candidates_with(&self, opts: CandidateOptions) -> Vec<&Clip> {
        get_candidates(&self.corpus, &self.sequence, opts)
    }

    /// Appends the corpus clip with `id` under the session's policy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the corpus has no such clip, or
    /// the policy violation reported by [`Sequence::try_append`].
    pub fn append(&mut self, id: &ClipId) -> Result<(), DomainError> {
        let clip = self
            .corpus
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("clip {id}")))?;
        self.sequence.try_append(clip, &self.policy)
    }

    /// Replaces the working items with a generated run and returns how many
    /// generated clips were dropped.
    ///
    /// When the policy refuses incompatible transitions, the run is cut
    /// after the last clip reached through compatible steps.
    pub fn generate(&mut self, target_length: usize, rng: &mut dyn DeterministicRng) -> usize {
        generate_into(&mut self.sequence, &self.corpus, target_length, rng);
        if self.policy.allow_incompatible {
            return 0;
        }

        let Some(&first_break) = incompatible_transitions(self.sequence.items()).first() else {
            return 0;
        };
        let mut items = self.sequence.items().to_vec();
        let kept = first_break + 1;
        let dropped = items.len() - kept;
        items.truncate(kept);
        self.sequence.replace_items(items);
        dropped
    }
}

/// Opens a builder session for `style` with an empty sequence, taking its
/// append policy and candidate options from `config`.
///
/// # Errors
///
/// Returns `DomainError` if the corpus cannot be fetched.
#[instrument(skip(config, provider))]
pub async fn open_session(
    style: &str,
    config: &EngineConfig,
    provider: &dyn VideoCorpusProvider,
) -> Result<SequenceSession, DomainError> {
    let corpus = provider.list_by_style(style).await?;
    if corpus.is_empty() {
        info!("no clips available for style");
    }
    Ok(SequenceSession {
        sequence: Sequence::new(style),
        corpus,
        policy: config.policy(),
        options: CandidateOptions::from_config(config),
    })
}

/// Handles the `GenerateSequence` command: fetches the corpus and returns a
/// named sequence built by the random generator.
///
/// The `Mutex` is locked only around the synchronous generator call to
/// avoid holding a `MutexGuard` across await points.
///
/// # Errors
///
/// Returns `DomainError` if the corpus cannot be fetched or the RNG mutex is
/// poisoned.
#[instrument(
    skip(command, config, provider, rng),
    fields(style = %command.style, target_length = command.target_length)
)]
pub async fn handle_generate_sequence(
    command: &GenerateSequence,
    config: &EngineConfig,
    provider: &dyn VideoCorpusProvider,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<Sequence, DomainError> {
    let mut session = open_session(&command.style, config, provider).await?;

    session.sequence.set_metadata(MetadataUpdate {
        name: Some(command.name.clone()),
        description: Some(command.description.clone()),
    });

    let dropped = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        session.generate(command.target_length, &mut *rng_guard)
    };
    if dropped > 0 {
        info!(dropped, "generated run cut at first incompatible transition");
    }

    info!(generated = session.sequence.len(), "sequence generated");
    Ok(session.sequence)
}

/// Checks that a sequence is ready to be saved.
///
/// # Errors
///
/// Returns `DomainError::MissingMetadata` if the name or description is
/// blank or the sequence has no items.
pub fn validate_for_save(sequence: &Sequence) -> Result<(), DomainError> {
    if sequence.name().trim().is_empty() {
        return Err(DomainError::MissingMetadata("name is required".to_owned()));
    }
    if sequence.description().trim().is_empty() {
        return Err(DomainError::MissingMetadata(
            "description is required".to_owned(),
        ));
    }
    if sequence.is_empty() {
        return Err(DomainError::MissingMetadata(
            "sequence has no clips".to_owned(),
        ));
    }
    Ok(())
}

/// Validates and persists a sequence, returning the gateway-assigned id.
///
/// # Errors
///
/// Returns `DomainError::MissingMetadata` if validation fails, or the
/// gateway's error if saving fails.
#[instrument(
    skip(sequence, clock, gateway),
    fields(style = %sequence.style(), clips = sequence.len())
)]
pub async fn handle_save_sequence(
    sequence: &Sequence,
    clock: &dyn Clock,
    gateway: &dyn SequencePersistenceGateway,
) -> Result<String, DomainError> {
    validate_for_save(sequence)?;

    let record = to_persistable(sequence, clock);
    let id = gateway.save(&record).await?;

    info!(sequence_id = %id, "sequence saved");
    Ok(id)
}

/// Deletes a saved sequence.
///
/// # Errors
///
/// Returns the gateway's error, including `DomainError::NotFound`.
#[instrument(skip(gateway))]
pub async fn handle_delete_sequence(
    id: &str,
    gateway: &dyn SequencePersistenceGateway,
) -> Result<(), DomainError> {
    gateway.delete(id).await?;
    info!("sequence deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figurelab_test_support::{
        FailingCorpusProvider, FailingSequenceGateway, FixedClock, InMemoryCorpusProvider,
        MockRng, RecordingSequenceGateway, SequenceRng, clip,
    };

    fn fixed_clock() -> FixedClock {
        FixedClock::default()
    }

    fn salsa(id: &str, initial: &[&str], last: &[&str]) -> Clip {
        let mut c = clip(id, initial, last);
        c.style = "salsa".to_owned();
        c
    }

    fn provider() -> InMemoryCorpusProvider {
        let mut bachata = clip("X", &["x"], &["x"]);
        bachata.style = "bachata".to_owned();
        InMemoryCorpusProvider::new(vec![
            salsa("A", &[], &["x"]),
            bachata,
            salsa("B", &["x"], &["y"]),
            salsa("C", &["z"], &[]),
        ])
    }

    fn ready_sequence() -> Sequence {
        let mut sequence = Sequence::new("salsa");
        sequence.set_metadata(MetadataUpdate {
            name: Some("Basics".to_owned()),
            description: Some("Beginner set".to_owned()),
        });
        sequence.append(salsa("A", &[], &["x"]));
        sequence.append(salsa("B", &["x"], &["y"]));
        sequence
    }

    fn strict() -> EngineConfig {
        EngineConfig {
            allow_duplicates: false,
            allow_incompatible: false,
            ..EngineConfig::default()
        }
    }

    fn generate_command(style: &str, target_length: usize) -> GenerateSequence {
        GenerateSequence {
            style: style.to_owned(),
            target_length,
            name: "Random".to_owned(),
            description: "Generated".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_open_session_loads_style_corpus() {
        let session = open_session("salsa", &EngineConfig::default(), &provider())
            .await
            .unwrap();

        assert!(session.sequence.is_empty());
        assert_eq!(session.sequence.style(), "salsa");
        assert_eq!(session.corpus.len(), 3);
        assert_eq!(session.candidates().len(), 3);
        assert_eq!(session.policy, AppendPolicy::PERMISSIVE);
    }

    #[tokio::test]
    async fn test_open_session_takes_rules_from_config() {
        let session = open_session("salsa", &strict(), &provider()).await.unwrap();

        assert_eq!(session.policy, AppendPolicy::STRICT);
        assert!(session.options.exclude_used);
        assert!(!session.options.include_all);
    }

    #[tokio::test]
    async fn test_open_session_with_failing_provider() {
        let result = open_session("salsa", &EngineConfig::default(), &FailingCorpusProvider).await;
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[tokio::test]
    async fn test_session_candidates_follow_last_clip() {
        let mut session = open_session("salsa", &EngineConfig::default(), &provider())
            .await
            .unwrap();
        session.append(&ClipId::new("A")).unwrap();

        let candidates = session.candidates();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, ClipId::new("B"));
        assert_eq!(
            session
                .candidates_with(CandidateOptions {
                    include_all: true,
                    exclude_used: false,
                })
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn test_session_append_enforces_strict_policy() {
        let mut session = open_session("salsa", &strict(), &provider()).await.unwrap();
        session.append(&ClipId::new("A")).unwrap();

        assert!(matches!(
            session.append(&ClipId::new("A")),
            Err(DomainError::DuplicateClip(_))
        ));
        assert!(matches!(
            session.append(&ClipId::new("C")),
            Err(DomainError::IncompatibleTransition { .. })
        ));
        assert!(matches!(
            session.append(&ClipId::new("nope")),
            Err(DomainError::NotFound(_))
        ));
        session.append(&ClipId::new("B")).unwrap();
        assert_eq!(
            session.sequence.clip_ids(),
            vec![ClipId::new("A"), ClipId::new("B")]
        );
    }

    #[tokio::test]
    async fn test_session_append_permits_everything_by_default() {
        let mut session = open_session("salsa", &EngineConfig::default(), &provider())
            .await
            .unwrap();

        session.append(&ClipId::new("A")).unwrap();
        session.append(&ClipId::new("A")).unwrap();
        session.append(&ClipId::new("C")).unwrap();

        assert_eq!(session.sequence.len(), 3);
    }

    #[tokio::test]
    async fn test_handle_generate_sequence_names_and_fills() {
        let rng: Mutex<SequenceRng> = Mutex::new(SequenceRng::new(vec![0, 0, 0]));
        let command = generate_command("salsa", 3);

        let sequence =
            handle_generate_sequence(&command, &EngineConfig::default(), &provider(), &rng)
                .await
                .unwrap();

        assert_eq!(sequence.name(), "Random");
        assert_eq!(sequence.description(), "Generated");
        assert_eq!(
            sequence.clip_ids(),
            vec![ClipId::new("A"), ClipId::new("B"), ClipId::new("C")]
        );
    }

    #[tokio::test]
    async fn test_handle_generate_sequence_cuts_run_under_strict_policy() {
        // A -> B is compatible; B -> C is only reached by the fallback step.
        let rng: Mutex<SequenceRng> = Mutex::new(SequenceRng::new(vec![0, 0, 0]));
        let command = generate_command("salsa", 3);

        let sequence = handle_generate_sequence(&command, &strict(), &provider(), &rng)
            .await
            .unwrap();

        assert_eq!(
            sequence.clip_ids(),
            vec![ClipId::new("A"), ClipId::new("B")]
        );
        assert!(incompatible_transitions(sequence.items()).is_empty());
    }

    #[tokio::test]
    async fn test_handle_generate_sequence_on_empty_style() {
        let rng: Mutex<MockRng> = Mutex::new(MockRng);
        let command = generate_command("tango", 5);

        let sequence = handle_generate_sequence(&command, &strict(), &provider(), &rng)
            .await
            .unwrap();

        assert!(sequence.is_empty());
    }

    #[test]
    fn test_validate_for_save_requires_name_description_and_items() {
        assert!(validate_for_save(&ready_sequence()).is_ok());

        let mut unnamed = ready_sequence();
        unnamed.set_metadata(MetadataUpdate {
            name: Some("   ".to_owned()),
            description: None,
        });
        assert!(matches!(
            validate_for_save(&unnamed),
            Err(DomainError::MissingMetadata(_))
        ));

        let mut undescribed = ready_sequence();
        undescribed.set_metadata(MetadataUpdate {
            name: None,
            description: Some(String::new()),
        });
        assert!(matches!(
            validate_for_save(&undescribed),
            Err(DomainError::MissingMetadata(_))
        ));

        let mut empty = ready_sequence();
        empty.remove_at(1).unwrap();
        empty.remove_at(0).unwrap();
        assert!(matches!(
            validate_for_save(&empty),
            Err(DomainError::MissingMetadata(_))
        ));
    }

    #[tokio::test]
    async fn test_handle_save_sequence_persists_record() {
        let gateway = RecordingSequenceGateway::new();

        let id = handle_save_sequence(&ready_sequence(), &fixed_clock(), &gateway)
            .await
            .unwrap();

        assert_eq!(id, "seq-1");
        let saved = gateway.saved_records();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].record.name, "Basics");
        assert_eq!(
            saved[0].record.videos,
            vec![ClipId::new("A"), ClipId::new("B")]
        );
        assert_eq!(saved[0].record.created_at, fixed_clock().0);
    }

    #[tokio::test]
    async fn test_handle_save_sequence_refuses_incomplete_draft() {
        let gateway = RecordingSequenceGateway::new();
        let draft = Sequence::new("salsa");

        let result = handle_save_sequence(&draft, &fixed_clock(), &gateway).await;

        assert!(matches!(result, Err(DomainError::MissingMetadata(_))));
        assert!(gateway.saved_records().is_empty());
    }

    #[tokio::test]
    async fn test_handle_save_sequence_propagates_gateway_error() {
        let result =
            handle_save_sequence(&ready_sequence(), &fixed_clock(), &FailingSequenceGateway).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[tokio::test]
    async fn test_handle_delete_sequence() {
        let gateway = RecordingSequenceGateway::new();
        let id = handle_save_sequence(&ready_sequence(), &fixed_clock(), &gateway)
            .await
            .unwrap();

        handle_delete_sequence(&id, &gateway).await.unwrap();

        assert!(gateway.saved_records().is_empty());
        assert_eq!(gateway.deleted_ids(), vec![id]);
    }

    #[tokio::test]
    async fn test_handle_delete_missing_sequence() {
        let gateway = RecordingSequenceGateway::new();

        let result = handle_delete_sequence("nope", &gateway).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }
}
