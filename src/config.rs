//! Runtime configuration for the vanity address generator.

use std::time::Duration;

use clap::Parser;
use tracing::warn;

use crate::chain::{Chain, ChainRegistry};
use crate::matcher::{MatchCriteria, Pattern, PatternMode};

/// Multi-chain vanity address generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of matching accounts to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub accounts_number: usize,

    /// Matcher mode: contains, starts-with, ends-with or regex
    #[arg(short, long, default_value = "contains")]
    pub mode: String,

    /// Search string (case insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Chain to generate addresses for
    #[arg(short, long)]
    pub chain: String,

    /// Minimum number of letters the address must contain
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub letters: i64,

    /// Minimum number of digits the address must contain
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub digits: i64,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

/// A fully validated search request.
#[derive(Debug, Clone)]
pub struct SearchPlan {
    pub chain: Chain,
    pub criteria: MatchCriteria,
    /// Number of sequential searches to run
    pub accounts: usize,
    pub workers: usize,
    pub report_interval: Duration,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration against the known chains.
    pub fn resolve(&self, registry: &ChainRegistry) -> Result<SearchPlan, ConfigError> {
        let mode: PatternMode = self.mode.parse().map_err(ConfigError::InvalidMode)?;

        let chain = registry
            .get(&self.chain)
            .ok_or_else(|| ConfigError::UnknownChain {
                name: self.chain.clone(),
                available: registry.names().join(", "),
            })?
            .clone();

        if self.accounts_number == 0 {
            return Err(ConfigError::InvalidAccounts);
        }

        let workers = self.worker_count();
        if workers == 0 {
            return Err(ConfigError::InvalidWorkers);
        }

        let criteria = MatchCriteria::new(
            mode,
            &self.search,
            self.letters,
            self.digits,
            chain.full_prefix.clone(),
        );

        let errs = criteria.validate(chain.capability());
        if !errs.is_empty() {
            return Err(ConfigError::InvalidCriteria(errs));
        }

        if !Pattern::new(mode, criteria.search.clone()).is_well_formed() {
            warn!(
                search = %criteria.search,
                "regex does not compile; no address will ever match"
            );
        }

        Ok(SearchPlan {
            chain,
            criteria,
            accounts: self.accounts_number,
            workers,
            report_interval: Duration::from_secs(self.report_interval),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    InvalidMode(String),

    #[error("Invalid chain {name:?}. Must be one of the available chains: {available}")]
    UnknownChain { name: String, available: String },

    #[error("Number of accounts must be at least 1")]
    InvalidAccounts,

    #[error("Number of workers must be at least 1")]
    InvalidWorkers,

    #[error("{}", .0.join("\n"))]
    InvalidCriteria(Vec<String>),
}

impl ConfigError {
    /// Returns the error as one message per line of output.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ConfigError::InvalidCriteria(errs) => errs.clone(),
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Scheme;

    fn make_test_config(chain: &str, search: &str) -> Config {
        Config {
            accounts_number: 1,
            mode: "contains".into(),
            search: search.into(),
            chain: chain.into(),
            letters: 0,
            digits: 0,
            workers: Some(2),
            report_interval: 5,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config() {
        let mut config = make_test_config("celestia", "QQQ");
        config.mode = "starts-with".into();
        config.letters = 3;

        let plan = config.resolve(&ChainRegistry::builtin()).unwrap();
        assert_eq!(plan.chain.scheme, Scheme::Bech32);
        assert_eq!(plan.criteria.search, "qqq");
        assert_eq!(plan.criteria.mode, PatternMode::StartsWith);
        assert_eq!(plan.criteria.address_prefix, "celestia1");
        assert_eq!(plan.criteria.required_letters, 3);
        assert_eq!(plan.workers, 2);
        assert_eq!(plan.report_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_mode() {
        let mut config = make_test_config("cosmos", "");
        config.mode = "prefix".into();
        assert!(matches!(
            config.resolve(&ChainRegistry::builtin()),
            Err(ConfigError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_unknown_chain() {
        let config = make_test_config("bitcoin", "");
        let err = config.resolve(&ChainRegistry::builtin()).unwrap_err();
        assert!(err.to_string().contains("celestia, cosmos, dydx, berachain"));
    }

    #[test]
    fn test_invalid_criteria_lists_every_error() {
        let mut config = make_test_config("cosmos", "bio");
        config.letters = -1;
        match config.resolve(&ChainRegistry::builtin()) {
            Err(ConfigError::InvalidCriteria(errs)) => {
                assert_eq!(errs.len(), 2);
                assert!(errs[0].contains("bech32 incompatible"));
                assert!(errs[1].contains("negative amount"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_error_messages_one_per_violation() {
        let mut config = make_test_config("cosmos", &"b".repeat(40));
        config.letters = -1;
        config.digits = 40;
        let err = config.resolve(&ChainRegistry::builtin()).unwrap_err();
        let messages = err.messages();
        assert_eq!(messages.len(), 4);
        assert!(messages.iter().all(|m| !m.contains('\n')));

        let err = make_test_config("bitcoin", "").resolve(&ChainRegistry::builtin()).unwrap_err();
        assert_eq!(err.messages(), vec![err.to_string()]);
    }

    #[test]
    fn test_hex_chain_uses_hex_alphabet() {
        let config = make_test_config("berachain", "xyz");
        assert!(config.resolve(&ChainRegistry::builtin()).is_err());

        let config = make_test_config("berachain", "BEEF");
        let plan = config.resolve(&ChainRegistry::builtin()).unwrap();
        assert_eq!(plan.criteria.address_prefix, "0x");
    }

    #[test]
    fn test_zero_accounts_rejected() {
        let mut config = make_test_config("dydx", "");
        config.accounts_number = 0;
        assert!(matches!(
            config.resolve(&ChainRegistry::builtin()),
            Err(ConfigError::InvalidAccounts)
        ));
    }

    #[test]
    fn test_cli_parsing() {
        let config = Config::try_parse_from([
            "chain_vanity", "-c", "cosmos", "-m", "ends-with", "-s", "acd", "-l", "-1", "-d", "2",
        ])
        .unwrap();
        assert_eq!(config.letters, -1);
        assert_eq!(config.digits, 2);
        assert_eq!(config.accounts_number, 1);
        assert!(Config::try_parse_from(["chain_vanity"]).is_err());
    }
}
