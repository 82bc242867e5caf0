//! Application layer for the catalog context.

pub mod preference_handlers;
