//! End-to-end search tests with instrumented generators.
//!
//! Which worker wins is nondeterministic, so these only assert that *a*
//! valid match came back.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chain_vanity::crypto::{Bech32Generator, HexGenerator};
use chain_vanity::{
    find_match, Candidate, ChainRegistry, MatchCriteria, Matcher, PatternMode, Scheme,
    SearchError, Searcher, WalletError, WalletGenerator,
};

/// Counts calls and yields a matching address only on call number `winner`.
struct ScriptedGenerator {
    calls: AtomicU64,
    winner: u64,
    delay: Duration,
}

impl ScriptedGenerator {
    fn new(winner: u64, delay: Duration) -> Self {
        Self {
            calls: AtomicU64::new(0),
            winner,
            delay,
        }
    }

    fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WalletGenerator for ScriptedGenerator {
    fn generate(&self) -> Result<Candidate, WalletError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        thread::sleep(self.delay);
        let address = if n == self.winner { "x1acdc" } else { "x1zzzz" };
        Ok(Candidate {
            address: address.to_string(),
            public_key: n.to_be_bytes().to_vec(),
            private_key: vec![0u8; 32],
        })
    }
}

/// Fails once `fail_after` calls have been made.
struct FaultyGenerator {
    calls: AtomicU64,
    fail_after: u64,
}

impl WalletGenerator for FaultyGenerator {
    fn generate(&self) -> Result<Candidate, WalletError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n > self.fail_after {
            return Err(WalletError::KeyGeneration("entropy exhausted".into()));
        }
        Ok(Candidate {
            address: "x1zzzz".into(),
            public_key: vec![],
            private_key: vec![],
        })
    }
}

fn x1_matcher(mode: PatternMode, search: &str) -> Matcher {
    Matcher::new(
        MatchCriteria::new(mode, search, 0, 0, "x1"),
        Scheme::Bech32.capability(),
    )
}

#[test]
fn test_returns_the_scripted_match() {
    let generator = Arc::new(ScriptedGenerator::new(50, Duration::ZERO));
    let matcher = x1_matcher(PatternMode::StartsWith, "ac");

    let candidate = find_match(&matcher, generator.clone(), 4).unwrap();
    assert_eq!(candidate.address, "x1acdc");
    assert!(matcher.matches(&candidate.address));
    assert!(generator.calls() >= 50);
}

#[test]
fn test_no_generation_after_return() {
    let workers = 4;
    let generator = Arc::new(ScriptedGenerator::new(20, Duration::from_millis(2)));
    let matcher = x1_matcher(PatternMode::Contains, "cd");

    find_match(&matcher, generator.clone(), workers).unwrap();
    let at_return = generator.calls();

    thread::sleep(Duration::from_millis(50));
    assert!(generator.calls() <= at_return + workers as u64);
    assert_eq!(generator.calls(), at_return);
}

#[test]
fn test_first_match_wins_when_every_candidate_matches() {
    let generator = Arc::new(ScriptedGenerator::new(0, Duration::ZERO));
    let searcher = Searcher::new(x1_matcher(PatternMode::Contains, ""), generator, 8);

    let candidate = searcher.find_match().unwrap();
    assert_eq!(candidate.address, "x1zzzz");
    assert!(searcher.stats().total_matches() >= 1);
    assert_eq!(searcher.stats().searches_completed(), 1);
}

#[test]
fn test_sequential_searches() {
    let generator = Arc::new(ScriptedGenerator::new(0, Duration::ZERO));
    let searcher = Searcher::new(x1_matcher(PatternMode::EndsWith, "zz"), generator, 2);

    for _ in 0..3 {
        assert!(searcher.find_match().is_ok());
    }
    assert_eq!(searcher.stats().searches_completed(), 3);
}

#[test]
fn test_generator_fault_is_fatal() {
    let generator = Arc::new(FaultyGenerator {
        calls: AtomicU64::new(0),
        fail_after: 100,
    });
    let matcher = x1_matcher(PatternMode::StartsWith, "q");

    let err = find_match(&matcher, generator.clone(), 3).unwrap_err();
    assert!(matches!(
        err,
        SearchError::Wallet(WalletError::KeyGeneration(_))
    ));

    let at_return = generator.calls.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(20));
    assert_eq!(generator.calls.load(Ordering::SeqCst), at_return);
}

#[test]
fn test_real_bech32_search() {
    let registry = ChainRegistry::builtin();
    let chain = registry.get("cosmos").unwrap();
    let matcher = Matcher::new(
        MatchCriteria::new(PatternMode::StartsWith, "Q", 0, 1, chain.full_prefix.clone()),
        chain.capability(),
    );
    let generator = Arc::new(Bech32Generator::new(&chain.address_prefix).unwrap());

    let candidate = find_match(&matcher, generator, 2).unwrap();
    assert!(candidate.address.starts_with("cosmos1q"));
    assert!(matcher.matches(&candidate.address));
    assert_eq!(candidate.private_key.len(), 32);
}

#[test]
fn test_real_hex_search() {
    let matcher = Matcher::new(
        MatchCriteria::new(PatternMode::EndsWith, "0", 0, 0, "0x"),
        Scheme::Hex.capability(),
    );

    let candidate = find_match(&matcher, Arc::new(HexGenerator::new()), 2).unwrap();
    assert!(candidate.address.starts_with("0x"));
    assert!(candidate.address.ends_with('0'));
    assert_eq!(candidate.public_key.len(), 65);
}

#[test]
fn test_regex_search() {
    let generator = Arc::new(ScriptedGenerator::new(7, Duration::ZERO));
    let matcher = x1_matcher(PatternMode::Regex, "^a[c-d]+c$");

    let candidate = find_match(&matcher, generator, 2).unwrap();
    assert_eq!(candidate.address, "x1acdc");
}
