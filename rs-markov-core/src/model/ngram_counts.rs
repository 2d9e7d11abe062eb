use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, Result};
use crate::io;

/// Occurrence counts of the n-grams found in a corpus.
///
/// This is the interchange form of a model: the collector fills it, it is
/// written to disk once, and the generator reads it back to build a
/// [`TransitionTable`](super::transition_table::TransitionTable).
///
/// # Invariants
/// - Keys are `ngram_size` tokens joined by a single space
/// - Every count is >= 1
///
/// # Notes
/// - Keys are kept sorted so that encoding, and any table built from the
///   counts, does not depend on hashing order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NGramCounts {
	/// Number of tokens per n-gram key (0 if unknown).
	ngram_size: usize,

	/// Mapping from n-gram key to its number of occurrences.
	counts: BTreeMap<String, usize>,
}

impl NGramCounts {
	/// Creates empty counts for n-grams of size `ngram_size`.
	pub fn new(ngram_size: usize) -> Self {
		Self { ngram_size, counts: BTreeMap::new() }
	}

	/// Size of the n-grams these counts were collected with.
	pub fn ngram_size(&self) -> usize {
		self.ngram_size
	}

	/// Records one occurrence of `key`.
	///
	/// - If the key already exists, its count is increased.
	/// - Otherwise, it is created with a count of 1.
	pub fn add(&mut self, key: String) {
		*self.counts.entry(key).or_insert(0) += 1;
	}

	/// Sets the count of `key`, replacing any previous value.
	pub fn insert(&mut self, key: impl Into<String>, count: usize) {
		self.counts.insert(key.into(), count);
	}

	/// Count recorded for `key`, 0 if it was never seen.
	pub fn get(&self, key: &str) -> usize {
		self.counts.get(key).copied().unwrap_or(0)
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts, i.e. the number of n-gram occurrences.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Iterates over `(key, count)` pairs in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Encodes the counts with `postcard`.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		Ok(postcard::to_stdvec(self)?)
	}

	/// Decodes counts produced by [`NGramCounts::to_bytes`].
	///
	/// # Errors
	/// Returns [`MarkovError::InvalidInput`] if `bytes` is not an encoded model.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		postcard::from_bytes(bytes).map_err(|e| MarkovError::InvalidInput(format!("Cannot decode model: {e}")))
	}

	/// Writes the encoded counts to `path` (`-` for standard output).
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let bytes = self.to_bytes()?;
		io::write_bytes(path, &bytes)?;
		Ok(())
	}

	/// Reads counts previously written by [`NGramCounts::save`] (`-` for standard input).
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let bytes = io::read_bytes(path)?;
		Self::from_bytes(&bytes)
	}
}

impl<K: Into<String>> FromIterator<(K, usize)> for NGramCounts {
	/// Collects `(key, count)` pairs; the n-gram size is taken from the first key.
	fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
		let mut counts = Self::default();
		for (key, count) in iter {
			let key = key.into();
			if counts.ngram_size == 0 {
				counts.ngram_size = key.split_whitespace().count();
			}
			counts.insert(key, count);
		}
		counts
	}
}
