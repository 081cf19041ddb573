//! Logging setup for `fixdesk`.
//!
//! Diagnostics go to stderr so JSON output on stdout stays clean.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Initialize the global tracing subscriber.
///
/// Verbosity maps `-v` to info, `-vv` to debug, `-vvv` to trace; `-q`
/// keeps errors only. A `FIXDESK_LOG` directive overrides the computed
/// level. With `json` set, events are emitted as JSON lines.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool, json: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_env("FIXDESK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, quiet)));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    }
}

const fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbosity() {
        assert_eq!(level_directive(3, true), "error");
    }

    #[test]
    fn verbosity_levels_map_in_order() {
        assert_eq!(level_directive(0, false), "warn");
        assert_eq!(level_directive(1, false), "info");
        assert_eq!(level_directive(2, false), "debug");
        assert_eq!(level_directive(5, false), "trace");
    }
}
