// cborld-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;

use cborld_core::config::{DEFAULT_CBORLD_OUTPUT, DEFAULT_JSONLD_OUTPUT};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "cborld",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "cborld: JSON-LD <-> CBOR-LD converter",
    long_about = "Encodes JSON-LD documents to compact CBOR-LD and decodes them back via cborld-core."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print size statistics after each conversion
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Print codec diagnostics to stdout while converting
    #[arg(short, long, global = true, default_value_t = false)]
    pub diagnose: bool,

    /// Directory of cached context documents used to resolve context URLs
    ///
    /// Each context is read from a file named after its URL: the scheme is
    /// dropped, every character outside A-Z, a-z and 0-9 becomes '-', and
    /// '.jsonld' is appended. For example https://www.w3.org/2018/credentials/v1
    /// is read from www-w3-org-2018-credentials-v1.jsonld. Standard contexts
    /// are not bundled, so they must be cached here too.
    /// Can also be set via the CBORLD_CONTEXT_DIR environment variable.
    #[arg(long, global = true, value_name = "DIR", env = "CBORLD_CONTEXT_DIR")]
    pub context_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encodes a JSON-LD document to CBOR-LD
    Encode(EncodeArgs),
    /// Decodes a CBOR-LD document to JSON-LD
    Decode(DecodeArgs),
}

/// Options shared by both commands for building the application maps.
#[derive(Args, Debug, Clone, Default)]
pub struct MapArgs {
    /// Application context URL, assigned IDs from 0x8000 in the order given (repeatable)
    #[arg(short = 'c', long = "context", value_name = "URL")]
    pub contexts: Vec<String>,

    /// Term transform as TERM:TRANSFORM, or TERM alone to disable one (repeatable)
    #[arg(short = 't', long = "transform", value_name = "TERM:TRANSFORM")]
    pub transforms: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON-LD file to encode
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub maps: MapArgs,

    /// File to write the CBOR-LD output to
    #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_CBORLD_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// CBOR-LD file to decode
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub maps: MapArgs,

    /// File to write the JSON-LD output to
    #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_JSONLD_OUTPUT)]
    pub output: PathBuf,
}

/// Builds the clap command with the supported transforms listed in the help
/// text of both subcommands.
pub fn build_command(term_codecs: &[&str]) -> clap::Command {
    let transforms_help = format!("Supported transforms: {}", term_codecs.join(", "));
    Cli::command()
        .mut_subcommand("encode", |cmd| cmd.after_help(transforms_help.clone()))
        .mut_subcommand("decode", |cmd| cmd.after_help(transforms_help.clone()))
}

/// Parses the process arguments against [`build_command`], exiting with
/// clap's usage error on failure.
pub fn parse_args(term_codecs: &[&str]) -> Cli {
    let matches = build_command(term_codecs).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}
