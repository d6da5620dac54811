//! Tracing setup shared by both binaries.
//!
//! Logs go to stderr so stdout carries only the report.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count.
///
/// - 0: WARN (degraded git queries)
/// - 1 (-v): INFO (run summaries)
/// - 2+ (-vv): DEBUG (per-file progress)
#[must_use]
pub fn filter_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,docs_validator=info,docs_cli=info",
        _ => "info,docs_validator=debug,docs_cli=debug",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the `-v` count.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_levels() {
        assert_eq!(filter_for(0), "warn");
        assert!(filter_for(1).contains("docs_validator=info"));
        assert!(filter_for(2).contains("docs_validator=debug"));
        assert_eq!(filter_for(5), filter_for(2));
    }

    #[test]
    fn test_filters_parse() {
        for verbose in 0..3 {
            assert!(EnvFilter::try_new(filter_for(verbose)).is_ok());
        }
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(0);
        init_tracing(2);
    }
}
