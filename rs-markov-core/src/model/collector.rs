use std::collections::VecDeque;
use std::io::Write;

use log::info;

use super::join_tokens;
use super::ngram_counts::NGramCounts;
use crate::config::CollectorConfig;
use crate::error::Result;
use crate::progress::{Progress, SilentProgress, progress_for};

/// Collects fixed-size n-grams from a token stream.
///
/// # Responsibilities
/// - Slide a window of exactly `n` tokens over the stream
/// - Count every full window as one occurrence of its n-gram
/// - Notify a progress observer once per emitted n-gram
///
/// # Notes
/// - Nothing is emitted before `n` tokens have been seen.
/// - No shorter n-gram is emitted at the end of the stream.
#[derive(Clone, Debug)]
pub struct NGramCollector {
	config: CollectorConfig,
}

impl NGramCollector {
	/// Creates a collector.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if the n-gram size is 0.
	pub fn new(config: CollectorConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self { config })
	}

	/// Size of the collected n-grams.
	pub fn ngram_size(&self) -> usize {
		self.config.ngram_size
	}

	/// Counts the n-grams of `tokens`.
	///
	/// `progress` only observes the run; it has no effect on the counts.
	pub fn collect<I>(&self, tokens: I, progress: &mut dyn Progress) -> NGramCounts
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let n = self.config.ngram_size;
		let mut counts = NGramCounts::new(n);
		let mut window: VecDeque<I::Item> = VecDeque::with_capacity(n);
		let mut collected = 0usize;

		for token in tokens {
			window.push_back(token);
			if window.len() == n {
				counts.add(join_tokens(window.iter().map(|token| token.as_ref())));
				window.pop_front();

				collected += 1;
				progress.ngram_collected(n, collected);
			}
		}
		progress.finish();

		info!("Collected {} {}-grams.", collected, n);
		counts
	}

	/// Counts the n-grams of `tokens`, reporting progress on `out` unless
	/// the configuration is quiet.
	pub fn collect_reporting<I, W>(&self, tokens: I, out: W) -> NGramCounts
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
		W: Write,
	{
		let mut progress = progress_for(self.config.quiet, out);
		self.collect(tokens, progress.as_mut())
	}
}

/// Counts the `n`-grams of `tokens` without progress output.
///
/// # Errors
/// Returns `InvalidConfiguration` if `n` is 0.
pub fn collect<I>(tokens: I, n: usize) -> Result<NGramCounts>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let collector = NGramCollector::new(CollectorConfig::new(n))?;
	Ok(collector.collect(tokens, &mut SilentProgress))
}
