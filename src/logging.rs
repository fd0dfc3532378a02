use std::io;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GROUP_REPORT_LOG";

pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr subscriber; `GROUP_REPORT_LOG` overrides `-v`.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let default_level = if quiet {
        "warn"
    } else {
        level_for_verbosity(verbosity)
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;
