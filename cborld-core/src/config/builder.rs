// ============================================================================
// cborld-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// This module implements the builder pattern for the CoreConfig structure,
// providing a fluent API for turning parsed command-line options into a
// validated configuration.
//
// KEY COMPONENTS:
// - CoreConfigBuilder: Builder struct for creating CoreConfig instances
// - Validation on build
//
// AI-ASSISTANT-INFO: Builder pattern implementation for CoreConfig

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::CoreConfig;
use crate::error::{CoreError, CoreResult};

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use cborld_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_path(PathBuf::from("credential.jsonld"))
///     .output_path(PathBuf::from("credential.cborld"))
///     .contexts(vec!["https://example.com/context/v1".to_string()])
///     .transforms(vec!["proofValue:base64Url".to_string()])
///     .verbose(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.contexts.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    // Required fields
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,

    // Optional fields with defaults
    contexts: Vec<String>,
    transforms: Vec<String>,
    verbose: bool,
    diagnose: bool,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file to read.
    pub fn input_path(mut self, input_path: PathBuf) -> Self {
        self.input_path = Some(input_path);
        self
    }

    /// Sets the file to write.
    pub fn output_path(mut self, output_path: PathBuf) -> Self {
        self.output_path = Some(output_path);
        self
    }

    /// Sets the application context URLs, in ID assignment order.
    pub fn contexts(mut self, contexts: Vec<String>) -> Self {
        self.contexts = contexts;
        self
    }

    /// Sets the raw `term:transform` pairs.
    pub fn transforms(mut self, transforms: Vec<String>) -> Self {
        self.transforms = transforms;
        self
    }

    /// Enables size reporting.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enables codec diagnostics.
    pub fn diagnose(mut self, diagnose: bool) -> Self {
        self.diagnose = diagnose;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` if a required path is missing or the
    /// resulting configuration fails [`CoreConfig::validate`].
    pub fn build(self) -> CoreResult<CoreConfig> {
        let input_path = self
            .input_path
            .ok_or_else(|| CoreError::Config("input path is required".to_string()))?;
        let output_path = self
            .output_path
            .ok_or_else(|| CoreError::Config("output path is required".to_string()))?;

        let config = CoreConfig {
            input_path,
            output_path,
            contexts: self.contexts,
            transforms: self.transforms,
            verbose: self.verbose,
            diagnose: self.diagnose,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_paths() {
        let result = CoreConfigBuilder::new()
            .input_path(PathBuf::from("in.jsonld"))
            .build();
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_builder_carries_options() {
        let config = CoreConfigBuilder::new()
            .input_path(PathBuf::from("in.cborld"))
            .output_path(PathBuf::from("out.jsonld"))
            .contexts(vec!["urn:a".to_string(), "urn:b".to_string()])
            .transforms(vec!["p:base64Pad".to_string()])
            .diagnose(true)
            .build()
            .unwrap();

        assert_eq!(config.contexts, vec!["urn:a", "urn:b"]);
        assert_eq!(config.transforms, vec!["p:base64Pad"]);
        assert!(config.diagnose);
        assert!(!config.verbose);
    }
}
