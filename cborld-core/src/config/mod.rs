//! Configuration structures and constants for the cborld-core library.
//!
//! This module provides the per-invocation configuration of the transcoder:
//! input and output paths, the raw `--context` / `--transform` option lists,
//! and the verbose and diagnose switches.

mod builder;

use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

use crate::error::{CoreError, CoreResult};
use crate::maps::check_app_context_capacity;

// Default constants

/// Default output path for the `encode` command.
pub const DEFAULT_CBORLD_OUTPUT: &str = "out.cborld";

/// Default output path for the `decode` command.
pub const DEFAULT_JSONLD_OUTPUT: &str = "out.jsonld";

/// First ID of the application-specific context ID space.
/// IDs below this value are reserved for the standard context registry.
pub const APP_CONTEXT_ID_BASE: u16 = 0x8000;

/// Number of context URLs that fit in the application-specific ID space.
pub const MAX_APP_CONTEXTS: usize = (u16::MAX - APP_CONTEXT_ID_BASE) as usize + 1;

/// Main configuration structure for one encode or decode invocation.
///
/// Created by the consumer of the library (e.g. cborld-cli) and handed to
/// [`crate::Transcoder`]. The option lists are kept raw; the map builder turns
/// them into the structured maps the codec consumes.
///
/// # Examples
///
/// ```rust
/// use cborld_core::config::CoreConfig;
/// use std::path::PathBuf;
///
/// let mut config = CoreConfig::new(
///     PathBuf::from("credential.jsonld"),
///     PathBuf::from("credential.cborld"),
/// );
/// config.contexts.push("https://example.com/context/v1".to_string());
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// File to read.
    pub input_path: PathBuf,

    /// File to write. Replaced if it already exists.
    pub output_path: PathBuf,

    /// Application-specific context URLs, in the order they were supplied.
    pub contexts: Vec<String>,

    /// `term:transform` pairs, in the order they were supplied.
    pub transforms: Vec<String>,

    /// Report input/output sizes after a successful run.
    pub verbose: bool,

    /// Ask the codec to emit diagnostic output.
    pub diagnose: bool,
}

impl CoreConfig {
    /// Creates a configuration with empty option lists and both switches off.
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
            contexts: Vec::new(),
            transforms: Vec::new(),
            verbose: false,
            diagnose: false,
        }
    }

    /// Checks the configuration before any file is touched.
    pub fn validate(&self) -> CoreResult<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(CoreError::Config("input path must not be empty".to_string()));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(CoreError::Config("output path must not be empty".to_string()));
        }

        check_app_context_capacity(self.contexts.len())
    }
}
