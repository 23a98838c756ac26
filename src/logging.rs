//! Logging setup for the command line tool

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::error::{CodeError, Result};

static LOGGING_INIT: Once = Once::new();

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence; otherwise `verbosity` picks the level
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace). Repeated calls are no-ops.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let mut init_result = Ok(());

    LOGGING_INIT.call_once(|| {
        init_result = tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbosity))
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|error| CodeError::Message(format!("failed to initialize logging: {}", error)));
    });

    init_result
}

fn env_filter(verbosity: u8) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_level(verbosity)),
    }
}

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
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
    fn init_logging_is_idempotent() {
        assert!(init_logging(0).is_ok());
        assert!(init_logging(3).is_ok());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "trace");
    }
}
