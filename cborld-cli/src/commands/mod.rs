//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

pub mod decode;
pub mod encode;

use std::path::PathBuf;

use cborld_core::{CborLdCodec, FileDocumentLoader, SizeReport, Transcoder, format_bytes};

use crate::cli::MapArgs;
use crate::terminal;

/// Flags that apply to every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalFlags {
    pub verbose: bool,
    pub diagnose: bool,
}

/// Transcoder the binary runs with: the built-in codec and a file loader
/// over the optional context cache directory.
pub fn default_transcoder(
    context_dir: Option<PathBuf>,
) -> Transcoder<CborLdCodec, FileDocumentLoader> {
    Transcoder::new(CborLdCodec::new(), FileDocumentLoader::new(context_dir))
}

/// Builds and validates the core configuration for one run.
fn core_config(
    input: PathBuf,
    output: PathBuf,
    maps: MapArgs,
    flags: GlobalFlags,
) -> crate::error::CliResult<cborld_core::CoreConfig> {
    cborld_core::CoreConfigBuilder::new()
        .input_path(input)
        .output_path(output)
        .contexts(maps.contexts)
        .transforms(maps.transforms)
        .verbose(flags.verbose)
        .diagnose(flags.diagnose)
        .build()
}

/// Prints the verbose size statistics for a finished run.
fn print_report(report: &SizeReport) {
    terminal::print_status("Input size", &format_bytes(report.input_size));
    terminal::print_status("Output size", &format_bytes(report.output_size));
    terminal::print_status("Ratio", &report.summary());
}
