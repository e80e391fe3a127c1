//! Parallel search for a matching candidate.
//!
//! This module provides:
//! - Multi-threaded CPU workers running the generate-match loop
//! - First-match-wins coordination with cooperative cancellation
//! - Progress tracking and reporting

mod cpu;
mod pool;

pub use cpu::SearchStats;
pub use pool::{find_match, SearchError, Searcher};
