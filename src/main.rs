//! Vanity Address Generator CLI
//!
//! Usage:
//!   chain_vanity -c cosmos -m starts-with -s acdc        # cosmos1acdc...
//!   chain_vanity -c berachain -m ends-with -s beef -n 3  # three 0x...beef addresses
//!   chain_vanity -c celestia -d 10 -l 20                 # digit and letter minimums

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use chain_vanity::logging::init_logging;
use chain_vanity::{Candidate, ChainRegistry, Config, Matcher, SearchError, Searcher};

fn main() {
    let config = Config::parse();
    init_logging(config.verbose);

    let registry = ChainRegistry::builtin();
    let plan = match config.resolve(&registry) {
        Ok(plan) => plan,
        Err(e) => {
            for message in e.messages() {
                eprintln!("ERROR: {}", message);
            }
            process::exit(1);
        }
    };

    debug!(
        chain = %plan.chain.name,
        prefix = %plan.chain.address_prefix,
        scheme = %plan.chain.scheme,
        mode = %plan.criteria.mode,
        search = %plan.criteria.search,
        accounts = plan.accounts,
        workers = plan.workers,
        "settings"
    );

    let capability = plan.chain.capability();
    let generator = match capability.generator(&plan.chain) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    let interrupt = Arc::new(AtomicBool::new(false));
    ctrlc_handler(interrupt.clone());

    let searcher = Searcher::new(Matcher::new(plan.criteria, capability), generator, plan.workers)
        .with_report_interval(plan.report_interval)
        .with_interrupt(interrupt);

    for i in 0..plan.accounts {
        match searcher.find_match() {
            Ok(candidate) => print_result(&candidate, i + 1, plan.accounts),
            Err(SearchError::Interrupted) => {
                eprintln!("\nStopped by user.");
                break;
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                process::exit(1);
            }
        }
    }

    let stats = searcher.stats();
    debug!(
        keys = stats.total_keys(),
        matches = stats.total_matches(),
        searches = stats.searches_completed(),
        "done"
    );
}

fn print_result(candidate: &Candidate, index: usize, total: usize) {
    println!("\nFound a new matching wallet ({} out of {}):", index, total);
    println!("Private key:\t{}", hex::encode(&candidate.private_key));
    println!("Public key:\t{}", hex::encode(&candidate.public_key));
    println!("Address:\t{}", candidate.address);
}

fn ctrlc_handler(stop_flag: Arc<AtomicBool>) {
    ctrlc::set_handler(move || {
        stop_flag.store(true, Ordering::Relaxed);
    })
    .expect("Error setting Ctrl-C handler");
}
