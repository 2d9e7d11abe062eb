//! Top-level module for the word-level Markov generator.
//!
//! This module provides:
//! - Serializable n-gram occurrence counts (`NGramCounts`)
//! - A sliding-window collector producing them (`NGramCollector`)
//! - Context-indexed transitions (`Transition`, `TransitionTable`)
//! - A bounded random walk over a table (`TextGenerator`)

/// Sliding-window n-gram collection over a token stream.
pub mod collector;

/// Bounded random walk producing a token sequence.
pub mod generator;

/// Interchange form of a model: n-gram key to occurrence count.
pub mod ngram_counts;

/// Single observed step from a context to a following token.
pub mod transition;

/// Transitions indexed by context for generation-time lookup.
pub mod transition_table;

/// Separator between the tokens of an n-gram key or a context.
pub const SEPARATOR: char = ' ';

/// Joins tokens with [`SEPARATOR`]; an empty input yields the empty context.
pub(crate) fn join_tokens<'a, I>(tokens: I) -> String
where
	I: IntoIterator<Item = &'a str>,
{
	let mut key = String::new();
	for (i, token) in tokens.into_iter().enumerate() {
		if i > 0 {
			key.push(SEPARATOR);
		}
		key.push_str(token);
	}
	key
}
