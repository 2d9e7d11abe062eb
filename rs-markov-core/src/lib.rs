//! Word-level n-gram text generation library.
//!
//! This crate provides the two halves of a simple Markov text generator:
//! - An n-gram collector turning a token stream into occurrence counts
//! - A transition table indexing those counts by context
//! - A bounded random walk over the table producing text
//! - Small utilities for token sources, model files and progress output
//!
//! Typical flow:
//! corpus -> [`model::collector::NGramCollector`] -> [`model::ngram_counts::NGramCounts`]
//! -> serialized file -> [`model::transition_table::TransitionTable`]
//! -> [`model::generator::TextGenerator`] -> text.

/// Error type shared by every component.
pub mod error;

/// Explicit per-component configuration.
pub mod config;

/// Core n-gram models and generation logic.
pub mod model;

/// Progress reporting collaborators (console or silent).
pub mod progress;

/// Token sources and text sinks (files or standard streams).
pub mod io;

pub use error::{MarkovError, Result};
