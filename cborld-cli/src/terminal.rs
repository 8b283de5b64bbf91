// ============================================================================
// cborld-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// This module provides the small set of styled output helpers the commands
// use: status lines for verbose statistics, the success confirmation, and
// the error report with its cause chain.
//
// KEY COMPONENTS:
// - styling: Symbols and indentation constants
// - print_status / print_success: stdout lines
// - print_error: stderr error report
//
// AI-ASSISTANT-INFO: Terminal UI components and styling for the CLI

// ---- Standard library imports ----
use std::error::Error;

// ---- External crate imports ----
use console::style;

// ============================================================================
// STYLING CONSTANTS
// ============================================================================

/// Styling constants for terminal output
pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const ERROR_SYMBOL: &str = "✗";

    pub const STATUS_INDENT: &str = "  ";
    pub const CAUSE_INDENT: &str = "  ";
}

// ============================================================================
// OUTPUT FUNCTIONS
// ============================================================================

/// Prints a `label: value` status line.
pub fn print_status(label: &str, value: &str) {
    println!(
        "{}{} {}",
        styling::STATUS_INDENT,
        style(format!("{label}:")).bold(),
        value
    );
}

/// Prints the one-line confirmation that ends a successful command.
pub fn print_success(message: &str) {
    println!("{} {}", style(styling::SUCCESS_SYMBOL).green().bold(), message);
}

/// Prints `Error: ...` followed by every source in the chain to stderr.
pub fn print_error(error: &dyn Error) {
    let mut lines = error_lines(error).into_iter();
    if let Some(first) = lines.next() {
        eprintln!(
            "{} {}",
            style(format!("{} Error:", styling::ERROR_SYMBOL)).red().bold(),
            first
        );
    }
    for cause in lines {
        eprintln!("{}{} {}", styling::CAUSE_INDENT, style("Caused by:").yellow(), cause);
    }
}

/// Messages of an error and each of its sources, outermost first.
#[must_use]
pub fn error_lines(error: &dyn Error) -> Vec<String> {
    let mut lines = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(cause.to_string());
        source = cause.source();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cborld_core::CoreError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_lines_walk_the_chain() {
        let error = CoreError::io(
            PathBuf::from("missing.jsonld"),
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            error_lines(&error),
            vec![
                "I/O error on 'missing.jsonld'".to_string(),
                "No such file or directory".to_string()
            ]
        );
    }

    #[test]
    fn test_error_lines_single() {
        let error = CoreError::Config("too many contexts".to_string());
        assert_eq!(error_lines(&error).len(), 1);
    }
}
