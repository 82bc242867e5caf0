//! Conversion between the working `Sequence` and its persisted record.

use std::collections::HashMap;

use figurelab_core::clip::{Clip, ClipId};
use figurelab_core::clock::Clock;
use figurelab_core::error::DomainError;
use figurelab_core::repository::SequenceRecord;
use tracing::warn;

use crate::domain::sequence::Sequence;

/// A sequence rebuilt from a persisted record.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSequence {
    /// The rebuilt sequence, minus any clips that could not be resolved.
    pub sequence: Sequence,
    /// One `DomainError::UnresolvedClipReference` per skipped entry, in
    /// record order.
    pub skipped: Vec<DomainError>,
}

impl LoadedSequence {
    /// Returns `true` if every stored clip id resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Shapes `sequence` into its persisted document, stamped with `clock.now()`.
#[must_use]
pub fn to_persistable(sequence: &Sequence, clock: &dyn Clock) -> SequenceRecord {
    SequenceRecord {
        name: sequence.name().to_owned(),
        description: sequence.description().to_owned(),
        style: sequence.style().to_owned(),
        videos: sequence.clip_ids(),
        created_at: clock.now(),
    }
}

/// Rebuilds a sequence from `record`, resolving each clip id through
/// `lookup`.
///
/// Ids that do not resolve (the clip was deleted upstream) are skipped and
/// reported in [`LoadedSequence::skipped`]; the rest of the sequence still
/// loads in order.
pub fn from_persistable<F>(record: &SequenceRecord, mut lookup: F) -> LoadedSequence
where
    F: FnMut(&ClipId) -> Option<Clip>,
{
    let mut items = Vec::with_capacity(record.videos.len());
    let mut skipped = Vec::new();

    for id in &record.videos {
        match lookup(id) {
            Some(clip) => items.push(clip),
            None => {
                warn!(clip_id = %id, sequence = %record.name, "skipping unresolved clip reference");
                skipped.push(DomainError::UnresolvedClipReference(id.clone()));
            }
        }
    }

    LoadedSequence {
        sequence: Sequence::from_parts(
            record.style.clone(),
            record.name.clone(),
            record.description.clone(),
            items,
        ),
        skipped,
    }
}

/// Builds a lookup over an in-memory corpus for [`from_persistable`].
pub fn corpus_lookup(corpus: &[Clip]) -> impl FnMut(&ClipId) -> Option<Clip> + '_ {
    let index: HashMap<&ClipId, &Clip> = corpus.iter().map(|c| (&c.id, c)).collect();
    move |id| index.get(id).map(|c| (*c).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use figurelab_test_support::{FixedClock, clip};

    use crate::domain::sequence::MetadataUpdate;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn corpus() -> Vec<Clip> {
        vec![
            clip("A", &[], &["x"]),
            clip("B", &["x"], &["y"]),
            clip("C", &["z"], &[]),
        ]
    }

    fn named_sequence(items: &[&Clip]) -> Sequence {
        let mut sequence = Sequence::new("salsa");
        sequence.set_metadata(MetadataUpdate {
            name: Some("Social set".to_owned()),
            description: Some("Three figures".to_owned()),
        });
        for clip in items {
            sequence.append((*clip).clone());
        }
        sequence
    }

    #[test]
    fn test_to_persistable_shapes_record() {
        let corpus = corpus();
        let sequence = named_sequence(&[&corpus[0], &corpus[1], &corpus[0]]);

        let record = to_persistable(&sequence, &fixed_clock());

        assert_eq!(record.name, "Social set");
        assert_eq!(record.description, "Three figures");
        assert_eq!(record.style, "salsa");
        assert_eq!(
            record.videos,
            vec![ClipId::new("A"), ClipId::new("B"), ClipId::new("A")]
        );
        assert_eq!(record.created_at, fixed_clock().0);
    }

    #[test]
    fn test_record_wire_shape() {
        let corpus = corpus();
        let record = to_persistable(&named_sequence(&[&corpus[2]]), &fixed_clock());

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["videos"], serde_json::json!(["C"]));
        assert_eq!(json["createdAt"], "2026-01-15T10:00:00Z");
        assert_eq!(json["style"], "salsa");
    }

    #[test]
    fn test_round_trip_preserves_order_and_duplicates() {
        let corpus = corpus();
        let sequence = named_sequence(&[&corpus[1], &corpus[0], &corpus[1], &corpus[2]]);

        let record = to_persistable(&sequence, &fixed_clock());
        let loaded = from_persistable(&record, corpus_lookup(&corpus));

        assert!(loaded.is_complete());
        assert_eq!(loaded.sequence.clip_ids(), sequence.clip_ids());
        assert_eq!(loaded.sequence, sequence);
    }

    #[test]
    fn test_unresolved_ids_are_skipped_not_fatal() {
        let corpus = corpus();
        let record = SequenceRecord {
            name: "Old".to_owned(),
            description: "Has a deleted clip".to_owned(),
            style: "salsa".to_owned(),
            videos: vec![ClipId::new("A"), ClipId::new("gone"), ClipId::new("B")],
            created_at: fixed_clock().0,
        };

        let loaded = from_persistable(&record, corpus_lookup(&corpus));

        assert!(!loaded.is_complete());
        assert_eq!(
            loaded.sequence.clip_ids(),
            vec![ClipId::new("A"), ClipId::new("B")]
        );
        assert_eq!(
            loaded.skipped,
            vec![DomainError::UnresolvedClipReference(ClipId::new("gone"))]
        );
        assert_eq!(loaded.sequence.name(), "Old");
    }

    #[test]
    fn test_all_unresolved_yields_empty_sequence() {
        let record = SequenceRecord {
            name: "n".to_owned(),
            description: "d".to_owned(),
            style: "salsa".to_owned(),
            videos: vec![ClipId::new("x"), ClipId::new("y")],
            created_at: fixed_clock().0,
        };

        let loaded = from_persistable(&record, |_| None);

        assert!(loaded.sequence.is_empty());
        assert_eq!(loaded.skipped.len(), 2);
    }
}
