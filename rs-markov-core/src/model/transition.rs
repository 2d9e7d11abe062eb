use std::fmt;

/// One observed step of the Markov chain.
///
/// Links a context (the preceding tokens joined by a space, empty for
/// unigram models) to the token that followed it, weighted by how many
/// times the pair was seen in the corpus.
///
/// Transitions are immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
	context: String,
	token: String,
	weight: usize,
}

impl Transition {
	pub fn new(context: impl Into<String>, token: impl Into<String>, weight: usize) -> Self {
		Self {
			context: context.into(),
			token: token.into(),
			weight,
		}
	}

	/// Context the transition starts from.
	pub fn context(&self) -> &str {
		&self.context
	}

	/// Token emitted when the transition is taken.
	pub fn token(&self) -> &str {
		&self.token
	}

	/// Occurrence count of the underlying n-gram.
	pub fn weight(&self) -> usize {
		self.weight
	}
}

impl fmt::Display for Transition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "'{}' -> '{}' ({})", self.context, self.token, self.weight)
	}
}
