use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rs_markov_core::config::{CollectorConfig, GeneratorConfig};
use rs_markov_core::io;
use rs_markov_core::model::collector::NGramCollector;
use rs_markov_core::model::generator::{GeneratedSequence, StartContext, TextGenerator};
use rs_markov_core::model::ngram_counts::NGramCounts;
use rs_markov_core::model::transition_table::TransitionTable;

use super::{Cli, Commands};

/// Runs the selected command.
pub fn execute(cli: Cli) -> Result<(), Box<dyn Error>> {
	match cli.command {
		Commands::Parse { infiles, outfile, ngramsize } => {
			let config = CollectorConfig { ngram_size: ngramsize, quiet: cli.quiet };
			let outfile = match outfile {
				Some(path) => path,
				None => io::build_output_path(&infiles[0], "bin")?,
			};
			cmd_parse(&infiles, &outfile, config, progress_output(&outfile))
		}
		Commands::Generate { infile, outfile, ngramsize, length, seed, start, random_start } => {
			let start = match (start, random_start) {
				(Some(text), _) => StartContext::Custom(text),
				(None, true) => StartContext::Random,
				(None, false) => StartContext::Empty,
			};
			let sequence = cmd_generate(&infile, ngramsize, length, cli.quiet, seed, start, progress_output(&outfile))?;

			let mut out = io::create_output(&outfile)?;
			sequence.write(&mut out)?;
			out.flush()?;
			Ok(())
		}
	}
}

/// Where progress goes: standard error when the result itself is written to
/// standard output, standard output otherwise.
fn progress_output(outfile: &Path) -> Box<dyn Write> {
	if io::is_stdio(outfile) {
		Box::new(std::io::stderr())
	} else {
		Box::new(std::io::stdout())
	}
}

/// Collects n-grams from `infiles` and writes the model to `outfile`.
///
/// Progress is reported on `progress_out` unless `config` is quiet.
pub fn cmd_parse<W: Write>(
	infiles: &[PathBuf],
	outfile: &Path,
	config: CollectorConfig,
	progress_out: W,
) -> Result<(), Box<dyn Error>> {
	// Fail on a bad configuration before touching any file
	let collector = NGramCollector::new(config)?;

	for infile in infiles {
		if io::is_stdio(infile) {
			info!("Parse {}-grams from stdin.", collector.ngram_size());
		} else {
			info!("Parse {}-grams from file '{}'.", collector.ngram_size(), infile.display());
		}
	}

	let tokens = io::read_tokens(infiles)?;
	let counts = collector.collect_reporting(&tokens, progress_out);
	counts.save(outfile)?;

	info!("Wrote {} distinct {}-grams to '{}'.", counts.len(), counts.ngram_size(), outfile.display());
	Ok(())
}

/// Context window matching a model of `k`-grams, whose contexts hold `k - 1` tokens.
fn window_for_model(model_ngram_size: usize) -> usize {
	model_ngram_size.saturating_sub(1).max(1)
}

/// Loads the model in `infile` and runs one generation.
///
/// When `ngramsize` is `None`, the window is sized after the model so that
/// it matches the model's contexts.
pub fn cmd_generate<W: Write>(
	infile: &Path,
	ngramsize: Option<usize>,
	length: usize,
	quiet: bool,
	seed: Option<u64>,
	start: StartContext,
	progress_out: W,
) -> Result<GeneratedSequence, Box<dyn Error>> {
	let mut config = GeneratorConfig {
		ngram_size: ngramsize.unwrap_or(1),
		length,
		quiet,
	};
	config.validate()?;

	if io::is_stdio(infile) {
		info!("Generate {} tokens from stdin.", length);
	} else {
		info!("Generate {} tokens from file '{}'.", length, infile.display());
	}

	let counts = NGramCounts::load(infile)?;
	if ngramsize.is_none() {
		config.ngram_size = window_for_model(counts.ngram_size());
	}
	let table = TransitionTable::build(&counts)?;

	let sequence = match seed {
		Some(seed) => run(table, config, start, StdRng::seed_from_u64(seed), progress_out)?,
		None => run(table, config, start, rand::rng(), progress_out)?,
	};
	Ok(sequence)
}

fn run<R: Rng, W: Write>(
	table: TransitionTable,
	config: GeneratorConfig,
	start: StartContext,
	rng: R,
	progress_out: W,
) -> Result<GeneratedSequence, Box<dyn Error>> {
	let mut generator = TextGenerator::with_rng(table, config, rng)?.with_start(start);
	Ok(generator.generate_reporting(progress_out))
}
