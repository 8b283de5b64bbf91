// cborld-cli/src/lib.rs
//
// Library portion of the cborld CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, DecodeArgs, EncodeArgs, MapArgs, build_command, parse_args};
pub use commands::decode::run_decode;
pub use commands::encode::run_encode;
pub use commands::{GlobalFlags, default_transcoder};
pub use error::{CliResult, FAILURE_EXIT_CODE};
