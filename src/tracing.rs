use std::io;
use tracing::Level;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{filter, fmt, prelude::*, EnvFilter};

/// Installs the global subscriber used by tools and hosts embedding halfcast.
///
/// Fails if another global subscriber is already set.
pub fn start_halfcast_tracing_subscriber() -> Result<(), TryInitError> {
    // Get the stdout logging filter level from the RUST_LOG environment variable
    //   - INFO messages are logged by default
    //   - RUST_LOG=halfcast=trace shows per-call conversion events
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Anything below WARN goes to stdout, WARN and above to stderr
    let stdout_log = fmt::layer()
        .with_filter(env_filter)
        .with_filter(filter::filter_fn(|metadata| *metadata.level() > Level::WARN));
    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter::LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(stderr_log)
        .try_init()
}
