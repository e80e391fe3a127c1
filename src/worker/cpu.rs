//! CPU worker running the generate-match loop.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crossbeam_channel::Sender;
use tracing::{debug, error};

use crate::crypto::{Candidate, WalletError, WalletGenerator};
use crate::matcher::Matcher;

/// Keys are tallied locally and published in chunks of this size.
const STATS_FLUSH_INTERVAL: u64 = 1024;

/// Counters shared by every worker of a searcher.
#[derive(Debug, Default)]
pub struct SearchStats {
    /// Total keys generated
    pub keys_generated: AtomicU64,
    /// Matches found, including redundant ones that were discarded
    pub matches_found: AtomicU64,
    /// Searches that returned a candidate
    pub searches_completed: AtomicU64,
}

impl SearchStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys generated so far.
    pub fn total_keys(&self) -> u64 {
        self.keys_generated.load(Ordering::Relaxed)
    }

    /// Returns the number of matching candidates seen, winners included.
    pub fn total_matches(&self) -> u64 {
        self.matches_found.load(Ordering::Relaxed)
    }

    /// Returns the number of searches that returned a candidate.
    pub fn searches_completed(&self) -> u64 {
        self.searches_completed.load(Ordering::Relaxed)
    }
}

/// What a worker hands to the coordinator.
pub(crate) type Outcome = Result<Candidate, WalletError>;

/// A worker that generates and tests candidates until cancelled.
pub(crate) struct CpuWorker<'a> {
    id: usize,
    matcher: &'a Matcher,
    generator: &'a dyn WalletGenerator,
    result_tx: Sender<Outcome>,
    cancel: &'a AtomicBool,
    stats: &'a SearchStats,
}

impl<'a> CpuWorker<'a> {
    pub(crate) fn new(
        id: usize,
        matcher: &'a Matcher,
        generator: &'a dyn WalletGenerator,
        result_tx: Sender<Outcome>,
        cancel: &'a AtomicBool,
        stats: &'a SearchStats,
    ) -> Self {
        Self {
            id,
            matcher,
            generator,
            result_tx,
            cancel,
            stats,
        }
    }

    /// Runs the worker loop.
    ///
    /// The cancel flag is checked before every generation, so a worker does
    /// at most one more generate+match cycle after cancellation. A match is
    /// offered to the coordinator without blocking; if the slot is taken or
    /// nobody is listening it is dropped. A generator fault is offered the
    /// same way and ends the worker.
    pub(crate) fn run(&self) {
        debug!(worker = self.id, "worker started");
        let mut pending = 0u64;

        while !self.cancel.load(Ordering::Relaxed) {
            let outcome = self.generator.generate();
            pending += 1;

            match outcome {
                Ok(candidate) => {
                    if self.matcher.matches(&candidate.address) {
                        self.stats.matches_found.fetch_add(1, Ordering::Relaxed);
                        debug!(worker = self.id, address = %candidate.address, "match found");
                        let _ = self.result_tx.try_send(Ok(candidate));
                    }
                }
                Err(e) => {
                    error!(worker = self.id, error = %e, "wallet generation failed");
                    let _ = self.result_tx.try_send(Err(e));
                    break;
                }
            }

            if pending == STATS_FLUSH_INTERVAL {
                self.stats.keys_generated.fetch_add(pending, Ordering::Relaxed);
                pending = 0;
            }
        }

        self.stats.keys_generated.fetch_add(pending, Ordering::Relaxed);
        debug!(worker = self.id, "worker stopped");
    }
}
