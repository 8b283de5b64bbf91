// ============================================================================
// cborld-core/src/transcode.rs
// ============================================================================
//
// TRANSCODE ORCHESTRATOR: Encode and Decode Command Flows
//
// This module drives one invocation of either command:
//
//   read input -> (parse JSON) -> build maps + sink -> codec -> write output
//
// Each step runs strictly after the previous one and returns a `CoreResult`;
// nothing is retried and no output file is touched unless the codec call
// succeeded. The codec and document loader are injected at construction so
// every invocation can be exercised in isolation.
//
// KEY COMPONENTS:
// - Transcoder: owns the codec and loader, runs encode_file / decode_file
//
// AI-ASSISTANT-INFO: Orchestrates file I/O around the CBOR-LD codec

// ---- Standard library imports ----
use std::fs;
use std::path::Path;

// ---- External crate imports ----
use log::{debug, info};
use serde_json::Value;

// ---- Internal crate imports ----
use crate::codec::{Codec, DecodeRequest, EncodeRequest};
use crate::config::CoreConfig;
use crate::diagnostics::{DiagnosticSink, diagnostic_sink};
use crate::error::{CoreError, CoreResult};
use crate::loader::DocumentLoader;
use crate::maps::build_maps;
use crate::reporting::{Direction, SizeReport};
use crate::utils::byte_len;

/// Runs encode and decode flows against an injected codec and loader.
///
/// # Examples
///
/// ```rust,no_run
/// use cborld_core::{CborLdCodec, CoreConfig, FileDocumentLoader, Transcoder};
/// use std::path::PathBuf;
///
/// let transcoder = Transcoder::new(CborLdCodec::new(), FileDocumentLoader::new(None));
/// let config = CoreConfig::new(PathBuf::from("credential.jsonld"), PathBuf::from("out.cborld"));
/// let report = transcoder.encode_file(&config).unwrap();
/// println!("{}", report.summary());
/// ```
pub struct Transcoder<C, L> {
    codec: C,
    loader: L,
}

impl<C: Codec, L: DocumentLoader> Transcoder<C, L> {
    pub fn new(codec: C, loader: L) -> Self {
        Self { codec, loader }
    }

    /// The injected codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Encodes the JSON-LD file at `config.input_path` to CBOR-LD at
    /// `config.output_path`, with diagnostics on stdout if requested.
    pub fn encode_file(&self, config: &CoreConfig) -> CoreResult<SizeReport> {
        let sink = diagnostic_sink(config.diagnose);
        self.encode_file_with_sink(config, sink.as_ref())
    }

    /// Encode flow with an explicit diagnostic sink.
    pub fn encode_file_with_sink(
        &self,
        config: &CoreConfig,
        sink: Option<&DiagnosticSink>,
    ) -> CoreResult<SizeReport> {
        config.validate()?;

        let input = read_input(&config.input_path)?;
        let document: Value = serde_json::from_slice(&input).map_err(CoreError::Parse)?;
        debug!("Parsed JSON-LD document from {}", config.input_path.display());

        let (context_map, term_map) = build_maps(&config.contexts, &config.transforms)?;
        let output = self.codec.encode(EncodeRequest {
            document: &document,
            document_loader: &self.loader,
            app_context_map: context_map.as_ref(),
            app_term_map: term_map.as_ref(),
            diagnose: sink,
        })?;

        write_output(&config.output_path, &output)?;
        info!(
            "Encoded {} to {}",
            config.input_path.display(),
            config.output_path.display()
        );
        Ok(SizeReport::new(
            Direction::Encode,
            byte_len(&input),
            byte_len(&output),
        ))
    }

    /// Decodes the CBOR-LD file at `config.input_path` to indented JSON-LD
    /// at `config.output_path`, with diagnostics on stdout if requested.
    pub fn decode_file(&self, config: &CoreConfig) -> CoreResult<SizeReport> {
        let sink = diagnostic_sink(config.diagnose);
        self.decode_file_with_sink(config, sink.as_ref())
    }

    /// Decode flow with an explicit diagnostic sink.
    pub fn decode_file_with_sink(
        &self,
        config: &CoreConfig,
        sink: Option<&DiagnosticSink>,
    ) -> CoreResult<SizeReport> {
        config.validate()?;

        let input = read_input(&config.input_path)?;
        let (context_map, term_map) = build_maps(&config.contexts, &config.transforms)?;
        let document = self.codec.decode(DecodeRequest {
            bytes: &input,
            document_loader: &self.loader,
            app_context_map: context_map.as_ref(),
            app_term_map: term_map.as_ref(),
            diagnose: sink,
        })?;

        let mut output = serde_json::to_string_pretty(&document).map_err(CoreError::Serialize)?;
        output.push('\n');
        write_output(&config.output_path, output.as_bytes())?;
        info!(
            "Decoded {} to {}",
            config.input_path.display(),
            config.output_path.display()
        );
        Ok(SizeReport::new(
            Direction::Decode,
            byte_len(&input),
            byte_len(output.as_bytes()),
        ))
    }
}

fn read_input(path: &Path) -> CoreResult<Vec<u8>> {
    let input = fs::read(path).map_err(|e| CoreError::io(path, e))?;
    debug!("Read {} bytes from {}", input.len(), path.display());
    Ok(input)
}

fn write_output(path: &Path, output: &[u8]) -> CoreResult<()> {
    fs::write(path, output).map_err(|e| CoreError::io(path, e))?;
    debug!("Wrote {} bytes to {}", output.len(), path.display());
    Ok(())
}
