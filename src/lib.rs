//! # chain_vanity
//!
//! Multi-chain vanity address generator.
//!
//! ## Architecture
//!
//! - `chain`: Chain descriptors and the per-scheme capability table
//! - `crypto`: Key generation and address derivation
//! - `matcher`: Character-class and pattern matching of addresses
//! - `worker`: Parallel first-match-wins search
//! - `config`: Runtime configuration

pub mod chain;
pub mod config;
pub mod crypto;
pub mod logging;
pub mod matcher;
pub mod worker;

pub use chain::{Chain, ChainRegistry, Scheme, SchemeCapability};
pub use config::{Config, ConfigError, SearchPlan};
pub use crypto::{Candidate, WalletError, WalletGenerator};
pub use matcher::{MatchCriteria, Matcher, PatternMode};
pub use worker::{find_match, SearchError, SearchStats, Searcher};
