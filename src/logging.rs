//! Diagnostic logging setup for the binary

use tracing_subscriber::{EnvFilter, fmt};

/// Pick the fallback filter for a `-v` count when `RUST_LOG` is unset.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. Stdout carries the walk output, so logs must
/// never go there. Calling this twice is harmless.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
