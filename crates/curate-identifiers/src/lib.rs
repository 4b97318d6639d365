//! Persistent identifier classification and normalization
//!
//! This crate provides the pure core used by metadata curation tools:
//! - `detect`: which of the supported schemes a string belongs to
//! - `classify`: the same, plus the name of the deciding rule
//! - `normalize`: a canonical form for equality comparison
//!
//! All functions are total, side-effect free and never perform I/O. The
//! compiled pattern table is process-wide immutable state built on first use.

pub mod classifier;
pub mod kind;
pub mod normalizer;
mod rules;

pub use classifier::{classify, detect, rule_names, Classification, FALLBACK_TIER};
pub use kind::{IdentifierType, ParseIdentifierTypeError};
pub use normalizer::normalize;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
