//! Figurelab — catalog browsing support.
//!
//! Holds the data-driven tag vocabulary (style → category → tags) and the
//! per-page filters a user applies while browsing clips. Neither affects
//! sequence compatibility.

pub mod application;
pub mod domain;
