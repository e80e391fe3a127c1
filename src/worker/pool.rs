//! Search coordination across a pool of workers.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use tracing::{info, warn};

use crate::crypto::{Candidate, WalletError, WalletGenerator};
use crate::matcher::Matcher;

use super::cpu::{CpuWorker, Outcome, SearchStats};

/// How often the coordinator wakes up to check for interruption.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that end a search without a match.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("at least one worker is required")]
    NoWorkers,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("wallet generation failed: {0}")]
    Wallet(#[from] WalletError),

    #[error("search interrupted")]
    Interrupted,

    #[error("all workers exited without a result")]
    WorkersExited,
}

/// Runs the brute-force search for one chain and criteria.
///
/// Each call to [`Searcher::find_match`] is an independent search; the
/// statistics accumulate across calls.
pub struct Searcher {
    matcher: Matcher,
    generator: Arc<dyn WalletGenerator>,
    num_workers: usize,
    report_interval: Duration,
    interrupt: Option<Arc<AtomicBool>>,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher running `num_workers` threads per search.
    pub fn new(matcher: Matcher, generator: Arc<dyn WalletGenerator>, num_workers: usize) -> Self {
        Self {
            matcher,
            generator,
            num_workers,
            report_interval: Duration::from_secs(5),
            interrupt: None,
            stats: SearchStats::new(),
        }
    }

    /// Sets how often progress is logged while a search runs.
    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    /// Installs an external stop flag (e.g. set from a Ctrl-C handler).
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Searches until some worker finds a matching candidate.
    ///
    /// Blocks until a match is found, a generator fails or the interrupt
    /// flag is raised. There is no attempt limit: criteria that no address
    /// can satisfy keep this running until interrupted. Every worker has
    /// stopped by the time this returns.
    pub fn find_match(&self) -> Result<Candidate, SearchError> {
        if self.num_workers == 0 {
            return Err(SearchError::NoWorkers);
        }
        if self.is_interrupted() {
            return Err(SearchError::Interrupted);
        }

        let (result_tx, result_rx) = bounded::<Outcome>(1);
        let cancel = AtomicBool::new(false);
        let started = Instant::now();
        let keys_before = self.stats.total_keys();

        info!(
            workers = self.num_workers,
            mode = %self.matcher.pattern().mode(),
            search = self.matcher.pattern().search(),
            "starting search"
        );

        let outcome = thread::scope(|scope| {
            for id in 0..self.num_workers {
                let worker = CpuWorker::new(
                    id,
                    &self.matcher,
                    self.generator.as_ref(),
                    result_tx.clone(),
                    &cancel,
                    &self.stats,
                );

                let spawned = thread::Builder::new()
                    .name(format!("vanity-worker-{}", id))
                    .spawn_scoped(scope, move || worker.run());

                if let Err(e) = spawned {
                    cancel.store(true, Ordering::Relaxed);
                    return Err(SearchError::Spawn(e));
                }
            }
            // Only workers hold senders now, so a disconnect means they all exited.
            drop(result_tx);

            let outcome = self.wait_for_outcome(&result_rx, started, keys_before);
            cancel.store(true, Ordering::Relaxed);
            outcome
        });

        let keys = self.stats.total_keys() - keys_before;
        match &outcome {
            Ok(candidate) => {
                self.stats.searches_completed.fetch_add(1, Ordering::Relaxed);
                info!(
                    address = %candidate.address,
                    keys,
                    elapsed_secs = started.elapsed().as_secs_f64(),
                    "search finished"
                );
            }
            Err(e) => warn!(error = %e, keys, "search stopped without a match"),
        }

        outcome
    }

    fn wait_for_outcome(
        &self,
        result_rx: &Receiver<Outcome>,
        started: Instant,
        keys_before: u64,
    ) -> Result<Candidate, SearchError> {
        let mut last_report = Instant::now();

        loop {
            match result_rx.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(candidate)) => return Ok(candidate),
                Ok(Err(e)) => return Err(SearchError::Wallet(e)),
                Err(RecvTimeoutError::Disconnected) => return Err(SearchError::WorkersExited),
                Err(RecvTimeoutError::Timeout) => {
                    if self.is_interrupted() {
                        return Err(SearchError::Interrupted);
                    }
                    if last_report.elapsed() >= self.report_interval {
                        self.report_progress(started, keys_before);
                        last_report = Instant::now();
                    }
                }
            }
        }
    }

    fn report_progress(&self, started: Instant, keys_before: u64) {
        let keys = self.stats.total_keys() - keys_before;
        let elapsed = started.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 { keys as f64 / elapsed } else { 0.0 };

        info!(
            keys,
            keys_per_second = rate as u64,
            elapsed_secs = elapsed as u64,
            "searching"
        );
    }

    /// Returns true if the external stop flag has been raised.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Returns the statistics accumulated over every search so far.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Runs a single search with default settings.
pub fn find_match(
    matcher: &Matcher,
    generator: Arc<dyn WalletGenerator>,
    num_workers: usize,
) -> Result<Candidate, SearchError> {
    Searcher::new(matcher.clone(), generator, num_workers).find_match()
}
