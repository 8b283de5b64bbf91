// cborld-cli/src/main.rs
//
// Entry point for the cborld binary.
//
// Responsibilities:
// - Parsing command-line arguments (help text lists the codec's transforms).
// - Initializing env_logger.
// - Wiring the codec and document loader into the core transcoder.
// - Dispatching to the encode or decode command.
// - Printing the error chain and exiting with status 1 on failure.

use std::process;

use cborld_cli::{
    Cli, Commands, FAILURE_EXIT_CODE, GlobalFlags, default_transcoder, logging, parse_args,
    run_decode, run_encode, terminal,
};
use cborld_core::{CborLdCodec, Codec};
use log::debug;

fn main() {
    let term_codecs = CborLdCodec::new().term_codecs();
    let cli: Cli = parse_args(&term_codecs);
    logging::init_logging(cli.verbose);
    debug!("Parsed arguments: {cli:?}");

    let flags = GlobalFlags {
        verbose: cli.verbose,
        diagnose: cli.diagnose,
    };
    let transcoder = default_transcoder(cli.context_dir);

    let result = match cli.command {
        Commands::Encode(args) => run_encode(&transcoder, args, flags),
        Commands::Decode(args) => run_decode(&transcoder, args, flags),
    };

    if let Err(error) = result {
        terminal::print_error(&error);
        process::exit(FAILURE_EXIT_CODE);
    }
}
