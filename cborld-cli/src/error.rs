// ============================================================================
// cborld-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses the core error type unchanged; failures are reported once,
// at the top level, by `terminal::print_error`.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - FAILURE_EXIT_CODE: Process status for any failed command
//
// AI-ASSISTANT-INFO: CLI error handling utilities

// ---- Internal crate imports ----
use cborld_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit status for any error raised while running a command.
pub const FAILURE_EXIT_CODE: i32 = 1;
