//! Shared test mocks and utilities for the Figurelab engine.

mod clock;
mod corpus;
mod fixtures;
mod gateway;
mod preferences;
mod rng;

pub use clock::FixedClock;
pub use corpus::{FailingCorpusProvider, InMemoryCorpusProvider};
pub use fixtures::clip;
pub use gateway::{FailingSequenceGateway, RecordingSequenceGateway};
pub use preferences::InMemoryPreferenceStore;
pub use rng::{MockRng, SequenceRng};
