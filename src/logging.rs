//! Console logging for the `census-clean` binary.
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger` once at startup. The level defaults to `info`, each `-v`
//! raises it a step, and `RUST_LOG` overrides both.
//!
//! ```no_run
//! census_clean::logging::init(0).expect("Failed to initialize logging");
//! log::info!("App started");
//! ```
//!
//! The validation-error log is a separate audit file written by
//! [`ViolationLog`](crate::validation::ViolationLog), not by this logger.

use crate::error::{CensusError, Result};
use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global logger.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(verbosity: u8) -> Result<()> {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbosity)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| CensusError::Other(format!("Failed to initialize logging: {e}")))?;

    log::debug!("Logging initialized at verbosity {verbosity}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "info");
        assert_eq!(default_filter(1), "debug");
        assert_eq!(default_filter(5), "trace");
    }
}
