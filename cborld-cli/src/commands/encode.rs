//! Implementation of the 'encode' subcommand.
//!
//! Converts one JSON-LD file to CBOR-LD, delegating the work to the
//! cborld-core transcoder.

use cborld_core::{Codec, DocumentLoader, Transcoder};
use log::debug;

use super::{GlobalFlags, core_config, print_report};
use crate::cli::EncodeArgs;
use crate::error::CliResult;
use crate::terminal;

/// Runs the encode command.
pub fn run_encode<C: Codec, L: DocumentLoader>(
    transcoder: &Transcoder<C, L>,
    args: EncodeArgs,
    flags: GlobalFlags,
) -> CliResult<()> {
    debug!("Encode arguments: {args:?}");
    let config = core_config(args.file, args.output, args.maps, flags)?;

    let report = transcoder.encode_file(&config)?;
    if config.verbose {
        print_report(&report);
    }
    terminal::print_success(&format!(
        "CBOR-LD written to {}",
        config.output_path.display()
    ));
    Ok(())
}
