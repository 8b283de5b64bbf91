//! CBOR-LD codec seam.
//!
//! The transcoder talks to its codec only through the [`Codec`] trait. The
//! crate ships one implementation, [`CborLdCodec`], which compresses context
//! URLs and JSON-LD terms into integers and applies named term transforms to
//! values before framing the result as tagged CBOR.

mod cborld;
mod diagnostic;
mod dictionary;
mod registry;
mod transforms;

pub use cborld::{CBORLD_TAG, CborLdCodec, RegistryEntry};
pub use diagnostic::to_diagnostic;
pub use dictionary::{FIRST_TERM_ID, TermDictionary};
pub use registry::{ContextRegistry, KEYWORDS, STANDARD_CONTEXTS};
pub use transforms::{TERM_CODECS, TermCodec};

use serde_json::Value;
use thiserror::Error;

use crate::diagnostics::DiagnosticSink;
use crate::loader::{DocumentLoader, LoaderError};
use crate::maps::{AppContextMap, AppTermMap};

/// Failures raised by a codec while encoding or decoding.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to load context '{url}'")]
    Loader {
        url: String,
        #[source]
        source: LoaderError,
    },

    #[error("Context '{url}' does not contain an @context definition")]
    InvalidContext { url: String },

    #[error("Unknown transform '{transform}' for term '{term}'")]
    UnknownTransform { term: String, transform: String },

    #[error("Unknown context ID {0:#x}")]
    UnknownContextId(u64),

    #[error("Unknown term ID {0}")]
    UnknownTermId(u64),

    #[error("Invalid CBOR-LD data: {0}")]
    InvalidFormat(String),

    #[error("CBOR serialization failed: {0}")]
    Cbor(String),
}

/// Everything the codec needs to encode one document.
#[derive(Clone, Copy)]
pub struct EncodeRequest<'a> {
    pub document: &'a Value,
    pub document_loader: &'a dyn DocumentLoader,
    pub app_context_map: Option<&'a AppContextMap>,
    pub app_term_map: Option<&'a AppTermMap>,
    pub diagnose: Option<&'a DiagnosticSink>,
}

/// Everything the codec needs to decode one CBOR-LD buffer.
///
/// Carries the term map as well, so decode can invert the transforms encode
/// applied.
#[derive(Clone, Copy)]
pub struct DecodeRequest<'a> {
    pub bytes: &'a [u8],
    pub document_loader: &'a dyn DocumentLoader,
    pub app_context_map: Option<&'a AppContextMap>,
    pub app_term_map: Option<&'a AppTermMap>,
    pub diagnose: Option<&'a DiagnosticSink>,
}

/// A JSON-LD <-> CBOR-LD codec.
pub trait Codec {
    /// Encodes a JSON-LD document to CBOR-LD bytes.
    fn encode(&self, request: EncodeRequest<'_>) -> Result<Vec<u8>, CodecError>;

    /// Decodes CBOR-LD bytes back to a JSON-LD document.
    fn decode(&self, request: DecodeRequest<'_>) -> Result<Value, CodecError>;

    /// Names of the supported term transforms, in display order.
    fn term_codecs(&self) -> Vec<&'static str>;
}
