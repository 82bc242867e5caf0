//! Application layer for the sequencing context.

pub mod command_handlers;
pub mod query_handlers;
pub mod serialization;
