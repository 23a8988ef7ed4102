//! Scored text search for the governance portal's proposal listings.
//!
//! Ranks free-text entities (proposal titles, descriptions, author names)
//! against a user query using substring and token-overlap heuristics, with
//! integer arithmetic throughout (no floating-point) and `<mark>`-wrapped
//! highlighting of substring matches. Pure functions only: entries in,
//! ranked entries out. No network or persistence.

pub mod highlight;
pub mod normalization;
pub mod ranking;
pub mod scoring;
pub mod types;
