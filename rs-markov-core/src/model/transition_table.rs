use std::collections::HashMap;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::join_tokens;
use super::ngram_counts::NGramCounts;
use super::transition::Transition;
use crate::error::{MarkovError, Result};

/// Transitions of a Markov chain indexed by their context.
///
/// Conceptually, each key is a node of the chain and its transitions are the
/// outgoing edges observed in the corpus.
///
/// ## Responsibilities:
/// - Split every n-gram key into a context and a following token
/// - Provide O(1) average lookup of the transitions leaving a context
/// - Pick one transition uniformly at random
///
/// ## Invariants
/// - Every transition stored under key `k` has `context() == k`
/// - The table is never mutated after construction
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
	/// Outgoing transitions indexed by context.
	/// Example: { "the" => ["the" -> "cat" (3), "the" -> "mat" (1)] }
	transitions: HashMap<String, Vec<Transition>>,
}

impl TransitionTable {
	/// Builds the table from collected counts.
	///
	/// Transitions are appended in the iteration order of `counts`.
	///
	/// # Errors
	/// Returns `InvalidInput` if a key holds no token.
	pub fn build(counts: &NGramCounts) -> Result<Self> {
		Self::from_pairs(counts.iter())
	}

	/// Builds the table from raw `(n-gram key, count)` pairs.
	///
	/// # Behavior
	/// - The last token of a key becomes the transition token.
	/// - The remaining tokens, joined by a space, form the context
	///   (empty for unigram keys).
	/// - Counts are kept as weights; nothing is normalized or deduplicated.
	///
	/// # Errors
	/// Returns `InvalidInput` if a key is empty or only whitespace.
	pub fn from_pairs<I, K>(pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, usize)>,
		K: AsRef<str>,
	{
		let mut transitions: HashMap<String, Vec<Transition>> = HashMap::new();

		for (key, count) in pairs {
			let (context, token) = Self::split_key(key.as_ref())?;
			transitions
				.entry(context.clone())
				.or_default()
				.push(Transition::new(context, token, count));
		}

		let table = Self { transitions };
		debug!(
			"Built transition table: {} contexts, {} transitions.",
			table.len(),
			table.transition_count()
		);
		Ok(table)
	}

	/// Splits an n-gram key into its context and its last token.
	fn split_key(key: &str) -> Result<(String, String)> {
		let tokens: Vec<&str> = key.split_whitespace().collect();
		let Some((token, context)) = tokens.split_last() else {
			return Err(MarkovError::InvalidInput(format!("n-gram key '{}' has no token", key)));
		};
		Ok((join_tokens(context.iter().copied()), (*token).to_owned()))
	}

	/// Returns the transitions leaving `context`.
	///
	/// An unseen context yields an empty slice, not an error.
	pub fn transitions(&self, context: &str) -> &[Transition] {
		self.transitions.get(context).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Picks a transition leaving `context` uniformly at random.
	///
	/// Weights are not taken into account.
	/// Returns `None` if the context has no transitions.
	pub fn choose<R: Rng + ?Sized>(&self, context: &str, rng: &mut R) -> Option<&Transition> {
		self.transitions(context).choose(rng)
	}

	/// Picks one observed context uniformly at random.
	///
	/// Contexts are sorted first so that a seeded `rng` always gives the same answer.
	pub fn random_context<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let mut contexts: Vec<&str> = self.contexts().collect();
		contexts.sort_unstable();
		contexts.choose(rng).copied()
	}

	/// Iterates over the known contexts, in no particular order.
	pub fn contexts(&self) -> impl Iterator<Item = &str> {
		self.transitions.keys().map(String::as_str)
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Total number of transitions over all contexts.
	pub fn transition_count(&self) -> usize {
		self.transitions.values().map(Vec::len).sum()
	}

	/// Sum of the weights of all transitions.
	pub fn total_weight(&self) -> usize {
		self.transitions.values().flatten().map(Transition::weight).sum()
	}
}
