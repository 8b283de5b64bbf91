//! Implementation of the 'decode' subcommand.

use cborld_core::{Codec, DocumentLoader, Transcoder};
use log::debug;

use super::{GlobalFlags, core_config, print_report};
use crate::cli::DecodeArgs;
use crate::error::CliResult;
use crate::terminal;

/// Runs the decode command.
pub fn run_decode<C: Codec, L: DocumentLoader>(
    transcoder: &Transcoder<C, L>,
    args: DecodeArgs,
    flags: GlobalFlags,
) -> CliResult<()> {
    debug!("Decode arguments: {args:?}");
    let config = core_config(args.file, args.output, args.maps, flags)?;

    let report = transcoder.decode_file(&config)?;
    if config.verbose {
        print_report(&report);
    }
    terminal::print_success(&format!(
        "JSON-LD written to {}",
        config.output_path.display()
    ));
    Ok(())
}
