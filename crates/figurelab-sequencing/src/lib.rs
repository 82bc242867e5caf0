//! Figurelab — sequence compatibility engine.
//!
//! Decides which clips may follow one another, holds the working sequence
//! a user is editing, generates sequences by a constrained random walk over
//! the corpus, and shapes sequences into the persisted document form.

pub mod application;
pub mod domain;
