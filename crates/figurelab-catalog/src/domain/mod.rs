//! Domain layer for the catalog context.

pub mod filters;
pub mod taxonomy;
