//! Property-based tests for collection, table construction and generation.

use proptest::collection::vec;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::config::GeneratorConfig;
use rs_markov_core::model::collector::collect;
use rs_markov_core::model::generator::{StartContext, TextGenerator};
use rs_markov_core::model::ngram_counts::NGramCounts;
use rs_markov_core::model::transition_table::TransitionTable;
use rs_markov_core::progress::SilentProgress;
use std::collections::BTreeMap;

fn token_stream() -> impl Strategy<Value = Vec<String>> {
	vec(prop::sample::select(vec!["a", "b", "c", "d", "e"]), 0..60)
		.prop_map(|v| v.into_iter().map(str::to_owned).collect())
}

proptest! {
	/// A stream of `t` tokens yields `max(0, t - n + 1)` n-grams.
	#[test]
	fn emitted_ngram_count(tokens in token_stream(), n in 1usize..6) {
		let counts = collect(&tokens, n).expect("collect");
		prop_assert_eq!(counts.total(), (tokens.len() + 1).saturating_sub(n));
	}

	/// Every key holds exactly `n` tokens.
	#[test]
	fn keys_have_n_tokens(tokens in token_stream(), n in 1usize..6) {
		let counts = collect(&tokens, n).expect("collect");
		for (key, count) in counts.iter() {
			prop_assert_eq!(key.split(' ').count(), n);
			prop_assert!(count >= 1);
		}
	}

	/// The table keeps every occurrence as weight.
	#[test]
	fn table_weight_matches_counts(tokens in token_stream(), n in 1usize..5) {
		let counts = collect(&tokens, n).expect("collect");
		let table = TransitionTable::build(&counts).expect("build");

		prop_assert_eq!(table.total_weight(), counts.total());
		prop_assert_eq!(table.transition_count(), counts.len());
		for context in table.contexts() {
			for transition in table.transitions(context) {
				prop_assert_eq!(transition.context(), context);
			}
		}
	}

	/// Building twice from the same counts gives the same table.
	#[test]
	fn table_build_is_idempotent(tokens in token_stream(), n in 1usize..5) {
		let counts = collect(&tokens, n).expect("collect");
		let first = TransitionTable::build(&counts).expect("build");
		let second = TransitionTable::build(&counts).expect("build");
		prop_assert_eq!(first, second);
	}

	/// Encoding then decoding keeps the mapping.
	#[test]
	fn counts_survive_encoding(tokens in token_stream(), n in 1usize..4) {
		let counts = collect(&tokens, n).expect("collect");
		let decoded = NGramCounts::from_bytes(&counts.to_bytes().expect("encode")).expect("decode");
		prop_assert_eq!(decoded, counts);
	}

	/// A walk never emits more than `length` tokens and always attempts exactly `length` steps.
	#[test]
	fn generation_is_bounded(tokens in token_stream(), n in 1usize..4, length in 1usize..80, seed in any::<u64>()) {
		let counts = collect(&tokens, n).expect("collect");
		let table = TransitionTable::build(&counts).expect("build");
		let mut generator = TextGenerator::with_rng(table, GeneratorConfig::new(n, length), StdRng::seed_from_u64(seed))
			.expect("generator")
			.with_start(StartContext::Random);

		let sequence = generator.generate(&mut SilentProgress);
		prop_assert!(sequence.len() <= length);
		prop_assert_eq!(sequence.attempts(), length);
		prop_assert_eq!(sequence.len() + sequence.stalled(), length);
	}

	/// The context window never holds more than `n` tokens.
	#[test]
	fn window_never_exceeds_n(tokens in token_stream(), k in 1usize..4, n in 1usize..4, length in 1usize..40, seed in any::<u64>()) {
		let counts = collect(&tokens, k).expect("collect");
		let table = TransitionTable::build(&counts).expect("build");
		let mut generator = TextGenerator::with_rng(table, GeneratorConfig::new(n, length), StdRng::seed_from_u64(seed))
			.expect("generator")
			.with_start(StartContext::Random);

		let mut walk = generator.walk();
		prop_assert!(walk.context().split_whitespace().count() <= n);
		while walk.next().is_some() {
			prop_assert!(walk.context().split_whitespace().count() <= n);
		}
		prop_assert_eq!(walk.attempts(), length);
	}

	/// Walking a `k`-gram model with a window of `k` tokens emits at most one
	/// token: a full window never matches a `k - 1` token context.
	#[test]
	fn window_of_model_size_stalls_after_one_token(tokens in token_stream(), k in 1usize..4, length in 1usize..40, seed in any::<u64>()) {
		let counts = collect(&tokens, k).expect("collect");
		let table = TransitionTable::build(&counts).expect("build");
		let mut generator = TextGenerator::with_rng(table, GeneratorConfig::new(k, length), StdRng::seed_from_u64(seed))
			.expect("generator")
			.with_start(StartContext::Random);

		let sequence = generator.generate(&mut SilentProgress);
		prop_assert!(sequence.len() <= 1);
		prop_assert_eq!(sequence.attempts(), length);
	}

	/// Generated bigrams were all observed in the corpus.
	#[test]
	fn generated_bigrams_were_observed(tokens in token_stream(), length in 1usize..80, seed in any::<u64>()) {
		let counts = collect(&tokens, 2).expect("collect");
		let table = TransitionTable::build(&counts).expect("build");
		let mut generator = TextGenerator::with_rng(table, GeneratorConfig::new(1, length), StdRng::seed_from_u64(seed))
			.expect("generator")
			.with_start(StartContext::Random);

		let sequence = generator.generate(&mut SilentProgress);
		for pair in sequence.tokens().windows(2) {
			let bigram = format!("{} {}", pair[0], pair[1]);
			prop_assert!(counts.get(&bigram) >= 1);
		}
	}

	/// A chain where every context has a successor fills the whole length.
	#[test]
	fn cyclic_chain_fills_length(cycle in vec(prop::sample::select(vec!["a", "b", "c"]), 1..5), length in 1usize..50) {
		// Repeating the cycle makes every bigram context reachable again;
		// a one-token window always matches a bigram context
		let corpus: Vec<&str> = cycle.iter().copied().cycle().take(cycle.len() * 4 + 1).collect();
		let counts = collect(&corpus, 2).expect("collect");
		let table = TransitionTable::build(&counts).expect("build");
		let mut generator = TextGenerator::with_rng(table, GeneratorConfig::new(1, length), StdRng::seed_from_u64(0))
			.expect("generator")
			.with_start(StartContext::Custom(cycle[0].to_owned()));

		let sequence = generator.generate(&mut SilentProgress);
		prop_assert_eq!(sequence.len(), length);
	}
}

#[test]
fn unordered_counts_give_same_contexts() {
	let forward: BTreeMap<&str, usize> = [("a b", 2), ("b a", 2), ("b c", 1)].into_iter().collect();
	let backward: Vec<(&str, usize)> = forward.iter().rev().map(|(k, v)| (*k, *v)).collect();

	let first = TransitionTable::from_pairs(forward).expect("build");
	let second = TransitionTable::from_pairs(backward).expect("build");

	let mut contexts: Vec<&str> = first.contexts().collect();
	contexts.sort_unstable();
	let mut other: Vec<&str> = second.contexts().collect();
	other.sort_unstable();
	assert_eq!(contexts, other);

	for context in contexts {
		let mut left: Vec<_> = first.transitions(context).to_vec();
		let mut right: Vec<_> = second.transitions(context).to_vec();
		left.sort_by(|a, b| a.token().cmp(b.token()));
		right.sort_by(|a, b| a.token().cmp(b.token()));
		assert_eq!(left, right);
	}
}
