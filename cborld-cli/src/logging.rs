// ============================================================================
// cborld-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialization
//
// The application logs through the standard `log` facade with `env_logger`
// as the backend, writing to stderr so it never interleaves with converted
// output or diagnostics on stdout.
//
// USAGE:
// - default: warnings and errors only
// - --verbose: info level
// - RUST_LOG=debug: overrides both, shows each orchestration step
//
// AI-ASSISTANT-INFO: Logging initialization for the CLI

use env_logger::Env;

/// Default filter for the given verbosity.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "info" } else { "warn" }
}

/// Initializes env_logger. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    // try_init: a second initialization (e.g. in tests) is not an error.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "info");
    }
}
