//! Command line interface.
//!
//! ## Available Commands
//!
//! - `parse` - Collect n-grams from text files or stdin into a model file
//! - `generate` - Generate text from a model file

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use rs_markov_core::config::{DEFAULT_LENGTH, DEFAULT_NGRAM_SIZE};
use std::path::PathBuf;

pub use commands::*;

/// Word-level Markov text generator.
#[derive(Parser, Debug)]
#[command(name = "rs-markov")]
#[command(version, about, long_about = None)]
pub struct Cli {
	/// Suppress progress output
	#[arg(short, long, global = true)]
	pub quiet: bool,

	/// Log level to use
	#[arg(short, long, global = true, value_enum, ignore_case = true, default_value_t = LogLevel::Warning)]
	pub loglevel: LogLevel,

	#[command(subcommand)]
	pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Parse text corpora into an n-gram model
	Parse {
		/// The input files, set to '-' for stdin
		#[arg(short, long = "infile", required = true, num_args = 1..)]
		infiles: Vec<PathBuf>,

		/// The model destination, defaults to the first input with a `.bin` extension
		#[arg(short, long)]
		outfile: Option<PathBuf>,

		/// The n-gram size to parse
		#[arg(short, long, default_value_t = DEFAULT_NGRAM_SIZE)]
		ngramsize: usize,
	},

	/// Generate text from an n-gram model
	Generate {
		/// The model file, set to '-' for stdin
		#[arg(short, long)]
		infile: PathBuf,

		/// The output destination, set to '-' for stdout
		#[arg(short, long)]
		outfile: PathBuf,

		/// Maximum number of tokens in the context window, defaults to the model's n-gram size minus one
		#[arg(short, long)]
		ngramsize: Option<usize>,

		/// The number of tokens to generate
		#[arg(short = 't', long, default_value_t = DEFAULT_LENGTH)]
		length: usize,

		/// Seed of the random source, for reproducible output
		#[arg(long)]
		seed: Option<u64>,

		/// Text whose last tokens form the first context
		#[arg(long, conflicts_with = "random_start")]
		start: Option<String>,

		/// Start from a random context of the model
		#[arg(long)]
		random_start: bool,
	},
}

/// Log levels accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
	Debug,
	Info,
	Warning,
	Error,
	Critical,
}

impl From<LogLevel> for LevelFilter {
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Debug => LevelFilter::Debug,
			LogLevel::Info => LevelFilter::Info,
			LogLevel::Warning => LevelFilter::Warn,
			// `log` has no level above error
			LogLevel::Error | LogLevel::Critical => LevelFilter::Error,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_defaults() {
		let cli = Cli::try_parse_from(["rs-markov", "parse", "-i", "corpus.txt"]).unwrap();
		assert!(!cli.quiet);
		assert_eq!(cli.loglevel, LogLevel::Warning);
		match cli.command {
			Commands::Parse { infiles, outfile, ngramsize } => {
				assert_eq!(infiles, vec![PathBuf::from("corpus.txt")]);
				assert!(outfile.is_none());
				assert_eq!(ngramsize, 2);
			}
			Commands::Generate { .. } => panic!("expected parse"),
		}
	}

	#[test]
	fn generate_options() {
		let cli = Cli::try_parse_from([
			"rs-markov", "generate", "-i", "m.bin", "-o", "-", "-t", "50", "--seed", "7", "-l", "INFO", "-q",
		])
		.unwrap();
		assert!(cli.quiet);
		assert_eq!(cli.loglevel, LogLevel::Info);
		match cli.command {
			Commands::Generate { length, seed, ngramsize, .. } => {
				assert_eq!(length, 50);
				assert_eq!(seed, Some(7));
				assert_eq!(ngramsize, None);
			}
			Commands::Parse { .. } => panic!("expected generate"),
		}
	}

	#[test]
	fn start_conflicts_with_random_start() {
		let result = Cli::try_parse_from([
			"rs-markov", "generate", "-i", "m.bin", "-o", "-", "--start", "the", "--random-start",
		]);
		assert!(result.is_err());
	}

	#[test]
	fn critical_maps_to_error() {
		assert_eq!(LevelFilter::from(LogLevel::Critical), LevelFilter::Error);
	}
}
