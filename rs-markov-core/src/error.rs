use thiserror::Error;

/// Errors raised while collecting n-grams or generating text.
///
/// A context without any outgoing transition is not an error: the generator
/// logs it and keeps walking.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// A non-positive n-gram size or length was supplied.
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// Data handed to table construction is not a valid key/count sequence.
	#[error("Invalid input: {0}")]
	InvalidInput(String),

	/// The token source, the model file or the text sink failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// Counts could not be encoded.
	#[error("Serialization error: {0}")]
	Serialization(#[from] postcard::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MarkovError>;
