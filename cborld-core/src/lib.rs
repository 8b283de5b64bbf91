//! Core library for converting JSON-LD documents to and from CBOR-LD.
//!
//! This crate provides the pieces behind the `cborld` command line tool:
//! application context and term maps, a diagnostic sink, a pluggable codec
//! with a built-in CBOR-LD implementation, document loaders for resolving
//! remote contexts, and size reporting for both directions.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use cborld_core::{CborLdCodec, CoreConfigBuilder, FileDocumentLoader, Transcoder};
//! use std::path::PathBuf;
//!
//! let config = CoreConfigBuilder::new()
//!     .input_path(PathBuf::from("credential.jsonld"))
//!     .output_path(PathBuf::from("credential.cborld"))
//!     .contexts(vec!["https://example.com/app/v1".to_string()])
//!     .transforms(vec!["proofValue:base64Url".to_string()])
//!     .build()
//!     .unwrap();
//!
//! let transcoder = Transcoder::new(
//!     CborLdCodec::new(),
//!     FileDocumentLoader::new(Some(PathBuf::from("contexts"))),
//! );
//! let report = transcoder.encode_file(&config).unwrap();
//! println!("{report}");
//! ```

pub mod codec;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod maps;
pub mod reporting;
pub mod transcode;
pub mod utils;

// Re-exports for public API
pub use codec::{CborLdCodec, Codec, CodecError, DecodeRequest, EncodeRequest, TERM_CODECS};
pub use config::{CoreConfig, CoreConfigBuilder};
pub use diagnostics::{DiagnosticSink, diagnostic_sink};
pub use error::{CoreError, CoreResult};
pub use loader::{
    ChainedDocumentLoader, DocumentLoader, FileDocumentLoader, LoaderError, StaticDocumentLoader,
};
pub use maps::{AppContextMap, AppTermMap, build_app_context_map, build_app_term_map, build_maps};
pub use reporting::{Direction, SizeReport};
pub use transcode::Transcoder;
pub use utils::format_bytes;
