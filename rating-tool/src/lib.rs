pub mod player;
pub mod round;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs to stderr, at `info` unless `RUST_LOG` says otherwise. Records from
/// the `log` facade are included.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
