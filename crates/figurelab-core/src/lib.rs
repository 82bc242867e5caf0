//! Figurelab Core — shared domain abstractions.
//!
//! This crate defines the clip model, the error taxonomy, determinism
//! seams (clock and RNG) and the narrow ports through which the engine
//! talks to the outside world. It contains no infrastructure code.

pub mod clip;
pub mod clock;
pub mod config;
pub mod error;
pub mod preferences;
pub mod repository;
pub mod rng;
pub mod tags;
