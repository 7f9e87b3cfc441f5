// src/log.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Stderr logging for the CLI.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the level for this
/// crate (0 = warn, 1 = info, 2 = debug, 3+ = trace) and dependencies stay at warn.
pub fn init(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,kosdaq_discl={level}")));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
