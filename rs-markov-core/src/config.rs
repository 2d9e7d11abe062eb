use crate::error::{MarkovError, Result};

/// Default n-gram size used by both components.
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Default number of generation steps.
pub const DEFAULT_LENGTH: usize = 200;

/// Settings of an n-gram collection run.
///
/// # Invariants
/// - `ngram_size` is at least 1 once [`CollectorConfig::validate`] succeeded
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectorConfig {
	/// Number of tokens per collected n-gram.
	pub ngram_size: usize,

	/// Suppresses console progress output.
	pub quiet: bool,
}

impl Default for CollectorConfig {
	fn default() -> Self {
		Self { ngram_size: DEFAULT_NGRAM_SIZE, quiet: false }
	}
}

impl CollectorConfig {
	/// Creates a configuration for n-grams of size `ngram_size`.
	pub fn new(ngram_size: usize) -> Self {
		Self { ngram_size, ..Self::default() }
	}

	/// Checks the configuration before any I/O happens.
	///
	/// # Errors
	/// Returns [`MarkovError::InvalidConfiguration`] if `ngram_size` is 0.
	pub fn validate(&self) -> Result<()> {
		if self.ngram_size == 0 {
			return Err(MarkovError::InvalidConfiguration("ngramsize must be positive".to_owned()));
		}
		Ok(())
	}
}

/// Settings of a generation run.
///
/// `ngram_size` bounds the context window: the generator looks back at
/// no more than the last `ngram_size` emitted tokens. With a model of
/// `k`-grams, contexts hold `k - 1` tokens, so a window of `k` tokens stops
/// matching once it is full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// Maximum number of tokens in the context window.
	pub ngram_size: usize,

	/// Number of generation steps (upper bound on emitted tokens).
	pub length: usize,

	/// Suppresses console progress output.
	pub quiet: bool,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self { ngram_size: DEFAULT_NGRAM_SIZE, length: DEFAULT_LENGTH, quiet: false }
	}
}

impl GeneratorConfig {
	/// Creates a configuration walking `length` steps with a window of `ngram_size` tokens.
	pub fn new(ngram_size: usize, length: usize) -> Self {
		Self { ngram_size, length, ..Self::default() }
	}

	/// Checks the configuration before any I/O happens.
	///
	/// # Errors
	/// Returns [`MarkovError::InvalidConfiguration`] if `ngram_size` or `length` is 0.
	pub fn validate(&self) -> Result<()> {
		if self.ngram_size == 0 {
			return Err(MarkovError::InvalidConfiguration("ngramsize must be positive".to_owned()));
		}
		if self.length == 0 {
			return Err(MarkovError::InvalidConfiguration("length must be positive".to_owned()));
		}
		Ok(())
	}
}
