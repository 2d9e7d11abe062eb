use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Write};

use log::{debug, info, warn};
use rand::Rng;
use rand::rngs::ThreadRng;

use super::join_tokens;
use super::transition_table::TransitionTable;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::progress::{Progress, progress_for};

/// Strategy used to fill the context window before the first step.
///
/// # Variants
/// - `Empty`: start from the empty (start-of-sequence) context.
/// - `Custom(String)`: seed the window with the last tokens of the given text.
/// - `Random`: seed the window with a context picked at random from the table.
///
/// Seed tokens are never part of the generated output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StartContext {
	#[default]
	Empty,
	Custom(String),
	Random,
}

/// Tokens produced by one generation run.
///
/// Besides the emitted tokens, it records how many steps were attempted and
/// how many of them found no transition for their context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedSequence {
	tokens: Vec<String>,
	attempts: usize,
	stalled: usize,
}

impl GeneratedSequence {
	/// Emitted tokens, in order.
	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Number of step attempts (always the configured length).
	pub fn attempts(&self) -> usize {
		self.attempts
	}

	/// Number of steps that emitted nothing.
	pub fn stalled(&self) -> usize {
		self.stalled
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn into_tokens(self) -> Vec<String> {
		self.tokens
	}

	/// Writes the tokens joined by a single space, in one call.
	///
	/// No trailing newline is added.
	pub fn write<W: Write>(&self, sink: &mut W) -> io::Result<()> {
		sink.write_all(self.to_string().as_bytes())
	}
}

impl fmt::Display for GeneratedSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&join_tokens(self.tokens.iter().map(String::as_str)))
	}
}

/// Random walk over a [`TransitionTable`].
///
/// # Responsibilities
/// - Keep a window of at most `n` emitted tokens as current context
/// - Attempt exactly `length` steps, each picking a transition uniformly
/// - Leave the window untouched when a context has no transition
///
/// # Notes
/// - A context without transitions stays current: every remaining step
///   looks it up again, so the run may emit fewer than `length` tokens.
/// - The oldest token leaves the window only once it holds more than `n`
///   tokens. A model of `n`-grams has contexts of `n - 1` tokens, so walking
///   it with the same `n` stalls as soon as the window is full.
/// - The random source can be injected with [`TextGenerator::with_rng`]
///   to make runs reproducible.
#[derive(Debug)]
pub struct TextGenerator<R = ThreadRng> {
	table: TransitionTable,
	config: GeneratorConfig,
	start: StartContext,
	rng: R,
}

impl TextGenerator<ThreadRng> {
	/// Creates a generator driven by the thread-local random source.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if the n-gram size or the length is 0.
	pub fn new(table: TransitionTable, config: GeneratorConfig) -> Result<Self> {
		Self::with_rng(table, config, rand::rng())
	}
}

impl<R: Rng> TextGenerator<R> {
	/// Creates a generator driven by `rng`.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if the n-gram size or the length is 0.
	pub fn with_rng(table: TransitionTable, config: GeneratorConfig, rng: R) -> Result<Self> {
		config.validate()?;
		Ok(Self {
			table,
			config,
			start: StartContext::Empty,
			rng,
		})
	}

	/// Sets how the context window is filled before the first step.
	pub fn with_start(mut self, start: StartContext) -> Self {
		self.start = start;
		self
	}

	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Starts a new walk of `length` steps.
	///
	/// Tokens are produced lazily; dropping the iterator early ends the run.
	pub fn walk(&mut self) -> Walk<'_, R> {
		let capacity = self.config.ngram_size;
		let window = seed_window(&self.start, &self.table, &mut self.rng, capacity);
		Walk {
			table: &self.table,
			rng: &mut self.rng,
			window,
			capacity,
			length: self.config.length,
			attempts: 0,
			stalled: 0,
		}
	}

	/// Runs a full walk and collects its tokens.
	///
	/// `progress` is told once about the number of generated tokens.
	pub fn generate(&mut self, progress: &mut dyn Progress) -> GeneratedSequence {
		let mut walk = self.walk();
		let tokens: Vec<String> = walk.by_ref().collect();
		let sequence = GeneratedSequence {
			tokens,
			attempts: walk.attempts(),
			stalled: walk.stalled(),
		};

		progress.tokens_generated(sequence.len());
		progress.finish();

		if sequence.stalled > 0 {
			debug!("{} of {} steps found no transition.", sequence.stalled, sequence.attempts);
		}
		info!("Generated {} tokens.", sequence.len());
		sequence
	}

	/// Runs a full walk, reporting progress on `out` unless the configuration is quiet.
	pub fn generate_reporting<W: Write>(&mut self, out: W) -> GeneratedSequence {
		let mut progress = progress_for(self.config.quiet, out);
		self.generate(progress.as_mut())
	}
}

/// Builds the initial context window according to `start`.
fn seed_window<R: Rng + ?Sized>(
	start: &StartContext,
	table: &TransitionTable,
	rng: &mut R,
	capacity: usize,
) -> VecDeque<String> {
	let seed = match start {
		StartContext::Empty => return VecDeque::new(),
		StartContext::Custom(text) => text.as_str(),
		StartContext::Random => table.random_context(rng).unwrap_or_default(),
	};

	let tokens: Vec<&str> = seed.split_whitespace().collect();
	let skip = tokens.len().saturating_sub(capacity);
	tokens[skip..].iter().map(|t| (*t).to_owned()).collect()
}

/// One generation run, yielding emitted tokens.
///
/// The walk performs at most `length` step attempts; steps that find no
/// transition emit nothing but still count.
#[derive(Debug)]
pub struct Walk<'a, R> {
	table: &'a TransitionTable,
	rng: &'a mut R,
	window: VecDeque<String>,
	capacity: usize,
	length: usize,
	attempts: usize,
	stalled: usize,
}

impl<R> Walk<'_, R> {
	/// Number of steps attempted so far.
	pub fn attempts(&self) -> usize {
		self.attempts
	}

	/// Number of steps that found no transition so far.
	pub fn stalled(&self) -> usize {
		self.stalled
	}

	/// Current context label.
	pub fn context(&self) -> String {
		join_tokens(self.window.iter().map(String::as_str))
	}
}

impl<R: Rng> Iterator for Walk<'_, R> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		while self.attempts < self.length {
			self.attempts += 1;

			let ilabel = self.context();
			match self.table.choose(&ilabel, &mut *self.rng) {
				Some(transition) => {
					let token = transition.token().to_owned();
					self.window.push_back(token.clone());
					if self.window.len() > self.capacity {
						self.window.pop_front();
					}
					return Some(token);
				}
				None => {
					self.stalled += 1;
					warn!("No active tokens for '{}'", ilabel);
				}
			}
		}
		None
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, Some(self.length - self.attempts))
	}
}
