//! Domain layer for the sequencing context.

pub mod candidates;
pub mod commands;
pub mod compatibility;
pub mod generator;
pub mod sequence;
