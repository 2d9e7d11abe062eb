//! `rs-markov`: build a word n-gram model from a corpus and generate text from it.
//!
//! ```bash
//! # Collect bigrams from a corpus (writes corpus.bin)
//! rs-markov parse -i corpus.txt -n 2
//!
//! # Generate 200 tokens
//! rs-markov generate -i corpus.bin -o story.txt -t 200 --random-start
//! ```

mod cli;

use clap::Parser;

fn main() {
	let cli = cli::Cli::parse();

	// RUST_LOG, when set, refines the level given on the command line
	env_logger::Builder::new()
		.filter_level(cli.loglevel.into())
		.parse_default_env()
		.init();

	if let Err(e) = cli::execute(cli) {
		log::error!("Error: {}", e);
		std::process::exit(1);
	}
}
