//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (e.g. `"info"`)
/// applies. Reports go to stdout, so logs never interleave with them.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
