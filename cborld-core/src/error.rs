// ============================================================================
// cborld-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the cborld Core Library
//
// This module defines the error taxonomy of the transcoder. Every step of the
// encode and decode flows (read, parse, codec call, write) returns a
// `CoreResult`, and the CLI maps any failure to a non-zero exit status.
//
// KEY COMPONENTS:
// - CoreError: top-level error for orchestration failures
// - CoreResult: result alias used throughout the crate
//
// Codec-level failures live in `codec::CodecError` and document loader
// failures in `loader::LoaderError`; both are wrapped, never flattened, so the
// full cause chain survives up to the CLI.
//
// AI-ASSISTANT-INFO: Error types for the cborld core library

// ---- Standard library imports ----
use std::io;
use std::path::PathBuf;

// ---- External crate imports ----
use thiserror::Error;

// ---- Internal crate imports ----
use crate::codec::CodecError;

/// Errors raised by the transcode orchestrator.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The input file could not be read or the output file could not be written.
    #[error("I/O error on '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The encode input is not valid JSON.
    #[error("Failed to parse JSON input")]
    Parse(#[source] serde_json::Error),

    /// The decoded document could not be rendered as JSON text.
    #[error("Failed to serialize decoded document")]
    Serialize(#[source] serde_json::Error),

    /// The codec rejected the request.
    #[error("Codec error")]
    Codec(#[from] CodecError),

    /// The supplied configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for cborld-core operations.
pub type CoreResult<T> = Result<T, CoreError>;
