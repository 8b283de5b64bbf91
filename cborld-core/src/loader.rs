// ============================================================================
// cborld-core/src/loader.rs
// ============================================================================
//
// DOCUMENT LOADERS: Resolving JSON-LD Context URLs
//
// The codec resolves every remote `@context` URL through a `DocumentLoader`.
// The loader is injected into the transcoder instead of living in global
// state, so each invocation (and each test) controls exactly which context
// documents are reachable.
//
// KEY COMPONENTS:
// - DocumentLoader: trait implemented by every loader
// - StaticDocumentLoader: in-memory URL -> document map
// - FileDocumentLoader: `file://` URLs plus an on-disk context cache directory
// - ChainedDocumentLoader: tries several loaders in order
//
// AI-ASSISTANT-INFO: Context document loaders for the CBOR-LD codec

// ---- Standard library imports ----
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// ---- External crate imports ----
use log::{debug, trace};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while resolving a context URL.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("No context document available for '{0}'")]
    NotFound(String),

    #[error("Failed to read context document for '{url}' from '{path}'")]
    Io {
        url: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Context document for '{url}' is not valid JSON")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves a JSON-LD context URL to its document.
pub trait DocumentLoader {
    fn load(&self, url: &str) -> Result<Value, LoaderError>;
}

impl<T: DocumentLoader + ?Sized> DocumentLoader for &T {
    fn load(&self, url: &str) -> Result<Value, LoaderError> {
        (**self).load(url)
    }
}

impl<T: DocumentLoader + ?Sized> DocumentLoader for Box<T> {
    fn load(&self, url: &str) -> Result<Value, LoaderError> {
        (**self).load(url)
    }
}

// ============================================================================
// STATIC LOADER
// ============================================================================

/// Loader serving documents registered in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticDocumentLoader {
    documents: HashMap<String, Value>,
}

impl StaticDocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `document` under `url`, replacing any previous document.
    pub fn insert(&mut self, url: impl Into<String>, document: Value) {
        self.documents.insert(url.into(), document);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.insert(url, document);
        self
    }
}

impl DocumentLoader for StaticDocumentLoader {
    fn load(&self, url: &str) -> Result<Value, LoaderError> {
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| LoaderError::NotFound(url.to_string()))
    }
}

// ============================================================================
// FILE LOADER
// ============================================================================

/// Loader reading context documents from disk.
///
/// `file://` URLs are read from the path they name. Any other URL is looked
/// up in the optional context directory under [`cache_file_name`].
#[derive(Debug, Clone, Default)]
pub struct FileDocumentLoader {
    context_dir: Option<PathBuf>,
}

impl FileDocumentLoader {
    pub fn new(context_dir: Option<PathBuf>) -> Self {
        Self { context_dir }
    }

    fn resolve_path(&self, url: &str) -> Option<PathBuf> {
        if let Some(path) = url.strip_prefix("file://") {
            return Some(PathBuf::from(path));
        }
        self.context_dir
            .as_ref()
            .map(|dir| dir.join(cache_file_name(url)))
    }
}

impl DocumentLoader for FileDocumentLoader {
    fn load(&self, url: &str) -> Result<Value, LoaderError> {
        let path = self
            .resolve_path(url)
            .ok_or_else(|| LoaderError::NotFound(url.to_string()))?;

        if !path.is_file() {
            trace!("No cached context for {url} at {}", path.display());
            return Err(LoaderError::NotFound(url.to_string()));
        }

        debug!("Loading context {url} from {}", path.display());
        read_document(url, &path)
    }
}

fn read_document(url: &str, path: &Path) -> Result<Value, LoaderError> {
    let text = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        url: url.to_string(),
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoaderError::Parse {
        url: url.to_string(),
        source,
    })
}

/// File name a context URL is cached under inside a context directory.
///
/// The scheme is dropped and every character outside `[A-Za-z0-9]` becomes
/// `-`, so `https://www.w3.org/2018/credentials/v1` is cached as
/// `www-w3-org-2018-credentials-v1.jsonld`.
#[must_use]
pub fn cache_file_name(url: &str) -> String {
    let without_scheme = url
        .split_once("://")
        .map_or(url, |(_, rest)| rest);
    let mut name: String = without_scheme
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    name.push_str(".jsonld");
    name
}

// ============================================================================
// CHAINED LOADER
// ============================================================================

/// Loader trying each inner loader in order.
///
/// A `NotFound` moves on to the next loader; any other failure is returned
/// as-is, since the document exists but is unusable.
#[derive(Default)]
pub struct ChainedDocumentLoader {
    loaders: Vec<Box<dyn DocumentLoader>>,
}

impl ChainedDocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loader(mut self, loader: impl DocumentLoader + 'static) -> Self {
        self.loaders.push(Box::new(loader));
        self
    }
}

impl DocumentLoader for ChainedDocumentLoader {
    fn load(&self, url: &str) -> Result<Value, LoaderError> {
        for loader in &self.loaders {
            match loader.load(url) {
                Err(LoaderError::NotFound(_)) => continue,
                result => return result,
            }
        }
        Err(LoaderError::NotFound(url.to_string()))
    }
}
