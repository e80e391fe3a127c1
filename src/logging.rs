//! Log subscriber setup for the binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise logs at `info`, or `debug` when
/// `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
