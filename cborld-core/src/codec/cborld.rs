// ============================================================================
// cborld-core/src/codec/cborld.rs
// ============================================================================
//
// CBOR-LD CODEC: Dictionary Compression of JSON-LD Documents
//
// This module implements the `Codec` trait. Encoding walks a JSON-LD document
// and produces a CBOR value in which:
//
// - `@context` URLs registered in the standard table or the application
//   context map become integer IDs,
// - keys that are keywords or context-defined terms become integer IDs,
// - `@type` values that are terms become integer IDs,
// - string values of transformed terms become their compact form.
//
// The result is framed as tag 0xCB1D over `[registry_entry_id, payload]`.
// Decoding reverses each step using dictionaries rebuilt from the same
// contexts.
//
// AI-ASSISTANT-INFO: CBOR-LD codec implementation

// ---- External crate imports ----
use ciborium::value::{Integer, Value as CborValue};
use log::debug;
use serde_json::{Map, Number, Value};

// ---- Internal crate imports ----
use super::diagnostic::to_diagnostic;
use super::dictionary::{ContextCollector, TermDictionary};
use super::registry::ContextRegistry;
use super::transforms::{TERM_CODECS, TermCodec};
use super::{Codec, CodecError, DecodeRequest, EncodeRequest};
use crate::diagnostics::DiagnosticSink;
use crate::maps::AppTermMap;

/// CBOR tag wrapping every CBOR-LD payload.
pub const CBORLD_TAG: u64 = 0xCB1D;

/// Tag marking a value of a transformed term that was left untransformed.
const VERBATIM_TAG: u64 = 0xCB1E;

/// First element of the tagged CBOR-LD array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEntry {
    /// Payload is the JSON-LD document as plain CBOR.
    Uncompressed = 0,
    /// Payload uses context, term and value compression.
    Compressed = 1,
}

impl RegistryEntry {
    fn from_id(id: u64) -> Option<Self> {
        match id {
            0 => Some(Self::Uncompressed),
            1 => Some(Self::Compressed),
            _ => None,
        }
    }
}

/// The built-in CBOR-LD codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct CborLdCodec;

impl CborLdCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for CborLdCodec {
    fn encode(&self, request: EncodeRequest<'_>) -> Result<Vec<u8>, CodecError> {
        validate_term_map(request.app_term_map)?;

        let mut collector = ContextCollector::new(request.document_loader, request.diagnose);
        collector.collect_document(request.document)?;
        let dictionary = collector.into_dictionary();
        report_dictionary(request.diagnose, &dictionary);

        let compressor = Compressor {
            registry: ContextRegistry::new(request.app_context_map),
            dictionary: &dictionary,
            app_terms: request.app_term_map,
            diagnose: request.diagnose,
        };
        let payload = compressor.encode_value(None, request.document)?;
        let framed = CborValue::Tag(
            CBORLD_TAG,
            Box::new(CborValue::Array(vec![
                CborValue::Integer(Integer::from(RegistryEntry::Compressed as u8)),
                payload,
            ])),
        );

        if let Some(sink) = request.diagnose {
            sink.emit(&format!("Diagnostic: CBOR-LD {}", to_diagnostic(&framed)));
        }

        let mut bytes = Vec::new();
        ciborium::ser::into_writer(&framed, &mut bytes)
            .map_err(|e| CodecError::Cbor(e.to_string()))?;
        debug!("Encoded {} terms into {} bytes", dictionary.len(), bytes.len());
        Ok(bytes)
    }

    fn decode(&self, request: DecodeRequest<'_>) -> Result<Value, CodecError> {
        validate_term_map(request.app_term_map)?;

        let mut remaining = request.bytes;
        let framed: CborValue = ciborium::de::from_reader(&mut remaining)
            .map_err(|e| CodecError::InvalidFormat(e.to_string()))?;
        if !remaining.is_empty() {
            return Err(CodecError::InvalidFormat(format!(
                "{} trailing bytes after CBOR-LD item",
                remaining.len()
            )));
        }
        if let Some(sink) = request.diagnose {
            sink.emit(&format!("Diagnostic: CBOR-LD {}", to_diagnostic(&framed)));
        }

        let (entry, payload) = unframe(framed)?;
        if entry == RegistryEntry::Uncompressed {
            debug!("Decoding uncompressed CBOR-LD payload");
            return plain_to_json(&payload);
        }

        let registry = ContextRegistry::new(request.app_context_map);
        let mut collector = ContextCollector::new(request.document_loader, request.diagnose);
        collect_encoded_contexts(&mut collector, &registry, &payload)?;
        let dictionary = collector.into_dictionary();
        report_dictionary(request.diagnose, &dictionary);

        let expander = Expander {
            registry,
            dictionary: &dictionary,
            app_terms: request.app_term_map,
        };
        expander.decode_value(None, &payload)
    }

    fn term_codecs(&self) -> Vec<&'static str> {
        TERM_CODECS.to_vec()
    }
}

/// Rejects transform names no codec implements. An empty name is allowed and
/// means "no transform".
fn validate_term_map(app_terms: Option<&AppTermMap>) -> Result<(), CodecError> {
    let Some(app_terms) = app_terms else {
        return Ok(());
    };
    for (term, transform) in app_terms.iter() {
        if !transform.is_empty() && TermCodec::from_name(transform).is_none() {
            return Err(CodecError::UnknownTransform {
                term: term.to_string(),
                transform: transform.to_string(),
            });
        }
    }
    Ok(())
}

/// Transform for `term`: an application override wins, including an empty
/// override that disables the context-implied codec.
fn term_codec(
    app_terms: Option<&AppTermMap>,
    dictionary: &TermDictionary,
    term: &str,
) -> Option<TermCodec> {
    match app_terms.and_then(|terms| terms.get(term)) {
        Some(name) => TermCodec::from_name(name),
        None => dictionary.context_codec(term),
    }
}

fn report_dictionary(diagnose: Option<&DiagnosticSink>, dictionary: &TermDictionary) {
    if let Some(sink) = diagnose {
        sink.emit(&format!(
            "Diagnostic: term dictionary holds {} context terms",
            dictionary.len()
        ));
    }
}

fn unframe(framed: CborValue) -> Result<(RegistryEntry, CborValue), CodecError> {
    let CborValue::Tag(CBORLD_TAG, inner) = framed else {
        return Err(CodecError::InvalidFormat(format!(
            "expected CBOR tag {CBORLD_TAG:#x}"
        )));
    };
    let CborValue::Array(mut items) = *inner else {
        return Err(CodecError::InvalidFormat("expected a two-element array".to_string()));
    };
    if items.len() != 2 {
        return Err(CodecError::InvalidFormat(format!(
            "expected a two-element array, found {} elements",
            items.len()
        )));
    }

    let payload = items.pop().unwrap_or(CborValue::Null);
    let entry = match items.pop() {
        Some(CborValue::Integer(id)) => u64::try_from(id)
            .ok()
            .and_then(RegistryEntry::from_id)
            .ok_or_else(|| {
                CodecError::InvalidFormat(format!(
                    "unsupported registry entry {}",
                    i128::from(id)
                ))
            })?,
        _ => {
            return Err(CodecError::InvalidFormat(
                "registry entry must be an integer".to_string(),
            ));
        }
    };
    Ok((entry, payload))
}

// ============================================================================
// ENCODING
// ============================================================================

struct Compressor<'a> {
    registry: ContextRegistry<'a>,
    dictionary: &'a TermDictionary,
    app_terms: Option<&'a AppTermMap>,
    diagnose: Option<&'a DiagnosticSink>,
}

impl Compressor<'_> {
    fn encode_value(&self, term: Option<&str>, value: &Value) -> Result<CborValue, CodecError> {
        let codec = term.and_then(|term| term_codec(self.app_terms, self.dictionary, term));
        match value {
            Value::Object(map) => self.encode_object(map),
            Value::Array(items) => items
                .iter()
                .map(|item| self.encode_value(term, item))
                .collect::<Result<Vec<_>, _>>()
                .map(CborValue::Array),
            Value::String(text) => Ok(match codec.and_then(|codec| codec.encode(text)) {
                Some(compressed) => compressed,
                None => CborValue::Text(text.clone()),
            }),
            scalar => {
                let plain = json_to_plain(scalar)?;
                Ok(match codec {
                    Some(_) => CborValue::Tag(VERBATIM_TAG, Box::new(plain)),
                    None => plain,
                })
            }
        }
    }

    fn encode_object(&self, map: &Map<String, Value>) -> Result<CborValue, CodecError> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let encoded_key = match self.dictionary.id_for(key) {
                Some(id) => CborValue::Integer(Integer::from(id)),
                None => CborValue::Text(key.clone()),
            };
            let encoded_value = match key.as_str() {
                "@context" => self.encode_context(value)?,
                "@type" => self.encode_type(value)?,
                _ => self.encode_value(Some(key), value)?,
            };
            entries.push((encoded_key, encoded_value));
        }
        Ok(CborValue::Map(entries))
    }

    fn encode_context(&self, value: &Value) -> Result<CborValue, CodecError> {
        match value {
            Value::String(url) => Ok(match self.registry.id_for(url) {
                Some(id) => {
                    if let Some(sink) = self.diagnose {
                        sink.emit(&format!("Diagnostic: context {url} -> {id:#x}"));
                    }
                    CborValue::Integer(Integer::from(id))
                }
                None => CborValue::Text(url.clone()),
            }),
            Value::Array(items) => items
                .iter()
                .map(|item| self.encode_context(item))
                .collect::<Result<Vec<_>, _>>()
                .map(CborValue::Array),
            Value::Object(_) => json_to_plain(value),
            scalar => verbatim(scalar),
        }
    }

    fn encode_type(&self, value: &Value) -> Result<CborValue, CodecError> {
        match value {
            Value::String(name) => Ok(match self.dictionary.id_for(name) {
                Some(id) => CborValue::Integer(Integer::from(id)),
                None => CborValue::Text(name.clone()),
            }),
            Value::Array(items) => items
                .iter()
                .map(|item| self.encode_type(item))
                .collect::<Result<Vec<_>, _>>()
                .map(CborValue::Array),
            Value::Object(_) => json_to_plain(value),
            scalar => verbatim(scalar),
        }
    }
}

// ============================================================================
// DECODING
// ============================================================================

/// Feeds every `@context` entry of an encoded payload to the collector.
fn collect_encoded_contexts(
    collector: &mut ContextCollector<'_>,
    registry: &ContextRegistry<'_>,
    value: &CborValue,
) -> Result<(), CodecError> {
    match value {
        CborValue::Map(entries) => {
            for (key, item) in entries {
                if is_context_key(key) {
                    let context = decode_context(registry, item)?;
                    collector.add_context(&context)?;
                } else {
                    collect_encoded_contexts(collector, registry, item)?;
                }
            }
            Ok(())
        }
        CborValue::Array(items) => items
            .iter()
            .try_for_each(|item| collect_encoded_contexts(collector, registry, item)),
        _ => Ok(()),
    }
}

fn is_context_key(key: &CborValue) -> bool {
    match key {
        CborValue::Integer(id) => i128::from(*id) == 0,
        CborValue::Text(text) => text == "@context",
        _ => false,
    }
}

fn decode_context(registry: &ContextRegistry<'_>, value: &CborValue) -> Result<Value, CodecError> {
    match value {
        CborValue::Tag(VERBATIM_TAG, inner) => plain_to_json(inner),
        CborValue::Integer(id) => {
            let id = u64::try_from(*id)
                .map_err(|_| CodecError::InvalidFormat("negative context ID".to_string()))?;
            registry
                .url_for(id)
                .map(|url| Value::String(url.to_string()))
                .ok_or(CodecError::UnknownContextId(id))
        }
        CborValue::Array(items) => items
            .iter()
            .map(|item| decode_context(registry, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        inline => plain_to_json(inline),
    }
}

struct Expander<'a> {
    registry: ContextRegistry<'a>,
    dictionary: &'a TermDictionary,
    app_terms: Option<&'a AppTermMap>,
}

impl Expander<'_> {
    fn decode_value(&self, term: Option<&str>, value: &CborValue) -> Result<Value, CodecError> {
        let codec = term.and_then(|term| term_codec(self.app_terms, self.dictionary, term));
        match value {
            CborValue::Map(entries) => self.decode_object(entries),
            CborValue::Array(items) => items
                .iter()
                .map(|item| self.decode_value(term, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            CborValue::Text(text) => Ok(Value::String(text.clone())),
            CborValue::Tag(VERBATIM_TAG, inner) if codec.is_some() => plain_to_json(inner),
            compressed => match codec {
                Some(codec) => codec.decode(compressed).map(Value::String).ok_or_else(|| {
                    CodecError::InvalidFormat(format!(
                        "value of term '{}' is not valid {} data",
                        term.unwrap_or_default(),
                        codec.name()
                    ))
                }),
                None => plain_to_json(compressed),
            },
        }
    }

    fn decode_object(&self, entries: &[(CborValue, CborValue)]) -> Result<Value, CodecError> {
        let mut map = Map::with_capacity(entries.len());
        for (key, value) in entries {
            let term = self.decode_key(key)?;
            let decoded = match term.as_str() {
                "@context" => decode_context(&self.registry, value)?,
                "@type" => self.decode_type(value)?,
                _ => self.decode_value(Some(&term), value)?,
            };
            map.insert(term, decoded);
        }
        Ok(Value::Object(map))
    }

    fn decode_key(&self, key: &CborValue) -> Result<String, CodecError> {
        match key {
            CborValue::Text(text) => Ok(text.clone()),
            CborValue::Integer(id) => {
                let id = u64::try_from(*id)
                    .map_err(|_| CodecError::InvalidFormat("negative term ID".to_string()))?;
                self.dictionary
                    .term_for(id)
                    .map(str::to_string)
                    .ok_or(CodecError::UnknownTermId(id))
            }
            _ => Err(CodecError::InvalidFormat(
                "map keys must be term IDs or text".to_string(),
            )),
        }
    }

    fn decode_type(&self, value: &CborValue) -> Result<Value, CodecError> {
        match value {
            CborValue::Tag(VERBATIM_TAG, inner) => plain_to_json(inner),
            CborValue::Integer(id) => {
                let id = u64::try_from(*id)
                    .map_err(|_| CodecError::InvalidFormat("negative type ID".to_string()))?;
                self.dictionary
                    .term_for(id)
                    .map(|term| Value::String(term.to_string()))
                    .ok_or(CodecError::UnknownTermId(id))
            }
            CborValue::Array(items) => items
                .iter()
                .map(|item| self.decode_type(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            other => plain_to_json(other),
        }
    }
}

// ============================================================================
// PLAIN JSON <-> CBOR
// ============================================================================

/// Converts JSON to CBOR without any compression.
fn json_to_plain(value: &Value) -> Result<CborValue, CodecError> {
    Ok(match value {
        Value::Null => CborValue::Null,
        Value::Bool(flag) => CborValue::Bool(*flag),
        Value::Number(number) => {
            if let Some(unsigned) = number.as_u64() {
                CborValue::Integer(Integer::from(unsigned))
            } else if let Some(signed) = number.as_i64() {
                CborValue::Integer(Integer::from(signed))
            } else {
                let float = number.as_f64().ok_or_else(|| {
                    CodecError::Cbor(format!("number {number} has no CBOR representation"))
                })?;
                CborValue::Float(float)
            }
        }
        Value::String(text) => CborValue::Text(text.clone()),
        Value::Array(items) => CborValue::Array(
            items
                .iter()
                .map(json_to_plain)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => CborValue::Map(
            map.iter()
                .map(|(key, item)| Ok((CborValue::Text(key.clone()), json_to_plain(item)?)))
                .collect::<Result<Vec<_>, CodecError>>()?,
        ),
    })
}

/// Non-string scalar where integers would be read as IDs; tagged so decode
/// returns it unchanged.
fn verbatim(value: &Value) -> Result<CborValue, CodecError> {
    Ok(CborValue::Tag(VERBATIM_TAG, Box::new(json_to_plain(value)?)))
}

/// Converts uncompressed CBOR back to JSON.
fn plain_to_json(value: &CborValue) -> Result<Value, CodecError> {
    Ok(match value {
        CborValue::Null => Value::Null,
        CborValue::Bool(flag) => Value::Bool(*flag),
        CborValue::Integer(integer) => {
            let wide = i128::from(*integer);
            if let Ok(unsigned) = u64::try_from(wide) {
                Value::Number(Number::from(unsigned))
            } else if let Ok(signed) = i64::try_from(wide) {
                Value::Number(Number::from(signed))
            } else {
                return Err(CodecError::InvalidFormat(format!(
                    "integer {wide} does not fit a JSON number"
                )));
            }
        }
        CborValue::Float(float) => Number::from_f64(*float).map(Value::Number).ok_or_else(|| {
            CodecError::InvalidFormat(format!("float {float} does not fit a JSON number"))
        })?,
        CborValue::Text(text) => Value::String(text.clone()),
        CborValue::Array(items) => Value::Array(
            items
                .iter()
                .map(plain_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        CborValue::Map(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, item) in entries {
                let CborValue::Text(key) = key else {
                    return Err(CodecError::InvalidFormat(
                        "uncompressed map keys must be text".to_string(),
                    ));
                };
                map.insert(key.clone(), plain_to_json(item)?);
            }
            Value::Object(map)
        }
        other => {
            return Err(CodecError::InvalidFormat(format!(
                "unexpected CBOR item {}",
                to_diagnostic(other)
            )));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::StaticDocumentLoader;
    use crate::maps::{build_app_context_map, build_app_term_map};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    const EXAMPLE_CONTEXT: &str = "https://example.com/ctx/v1";

    fn loader() -> StaticDocumentLoader {
        StaticDocumentLoader::new().with_document(
            EXAMPLE_CONTEXT,
            json!({
                "@context": {
                    "Badge": "https://example.com/vocab#Badge",
                    "name": "https://schema.org/name",
                    "issued": {"@id": "https://example.com/vocab#issued", "@type": "xsd:dateTime"},
                    "digest": "https://example.com/vocab#digest",
                    "score": "https://example.com/vocab#score"
                }
            }),
        )
    }

    fn document() -> Value {
        json!({
            "@context": EXAMPLE_CONTEXT,
            "@type": "Badge",
            "name": "Rust Apprentice",
            "issued": "2021-01-01T00:00:00Z",
            "digest": "q83vEjRWeJA=",
            "score": 42,
            "unknown": {"nested": [1, 2.5, null, true]}
        })
    }

    fn encode(
        document: &Value,
        loader: &StaticDocumentLoader,
        contexts: &[&str],
        transforms: &[&str],
    ) -> Result<Vec<u8>, CodecError> {
        let contexts: Vec<String> = contexts.iter().map(|s| s.to_string()).collect();
        let transforms: Vec<String> = transforms.iter().map(|s| s.to_string()).collect();
        let context_map = build_app_context_map(&contexts).unwrap();
        let term_map = build_app_term_map(&transforms);
        CborLdCodec.encode(EncodeRequest {
            document,
            document_loader: loader,
            app_context_map: context_map.as_ref(),
            app_term_map: term_map.as_ref(),
            diagnose: None,
        })
    }

    fn decode(
        bytes: &[u8],
        loader: &StaticDocumentLoader,
        contexts: &[&str],
        transforms: &[&str],
    ) -> Result<Value, CodecError> {
        let contexts: Vec<String> = contexts.iter().map(|s| s.to_string()).collect();
        let transforms: Vec<String> = transforms.iter().map(|s| s.to_string()).collect();
        let context_map = build_app_context_map(&contexts).unwrap();
        let term_map = build_app_term_map(&transforms);
        CborLdCodec.decode(DecodeRequest {
            bytes,
            document_loader: loader,
            app_context_map: context_map.as_ref(),
            app_term_map: term_map.as_ref(),
            diagnose: None,
        })
    }

    #[test]
    fn test_round_trip_with_overrides() {
        let loader = loader();
        let bytes = encode(&document(), &loader, &[EXAMPLE_CONTEXT], &["digest:base64Pad"]).unwrap();
        let decoded = decode(&bytes, &loader, &[EXAMPLE_CONTEXT], &["digest:base64Pad"]).unwrap();
        assert_eq!(decoded, document());
    }

    #[test]
    fn test_encoding_compresses_terms_and_context() {
        let loader = loader();
        let bytes = encode(&document(), &loader, &[EXAMPLE_CONTEXT], &["digest:base64Pad"]).unwrap();
        let framed: CborValue = ciborium::de::from_reader(bytes.as_slice()).unwrap();
        let (entry, payload) = unframe(framed).unwrap();
        assert_eq!(entry, RegistryEntry::Compressed);

        let CborValue::Map(entries) = payload else {
            panic!("payload should be a map");
        };
        // Sorted terms: Badge=100, digest=102, issued=104, name=106, score=108.
        assert_eq!(entries[0].0, CborValue::Integer(0_u8.into()));
        assert_eq!(entries[0].1, CborValue::Integer(0x8000_u16.into()));
        assert_eq!(entries[1].1, CborValue::Integer(100_u8.into()));
        assert_eq!(entries[3].1, CborValue::Integer(1_609_459_200_i64.into()));
        assert_eq!(entries[4].1, CborValue::Bytes(vec![0xab, 0xcd, 0xef, 0x12, 0x34, 0x56, 0x78, 0x90]));
        assert_eq!(entries[5].1, CborValue::Integer(42_u8.into()));
        assert_eq!(entries[6].0, CborValue::Text("unknown".to_string()));
    }

    #[test]
    fn test_numeric_value_of_transformed_term_is_marked_verbatim() {
        let loader = loader();
        let mut doc = document();
        doc["issued"] = json!(1_609_459_200);
        let bytes = encode(&doc, &loader, &[], &[]).unwrap();

        let framed: CborValue = ciborium::de::from_reader(bytes.as_slice()).unwrap();
        let (_, payload) = unframe(framed).unwrap();
        let CborValue::Map(entries) = payload else {
            panic!("payload should be a map");
        };
        assert_eq!(
            entries[3].1,
            CborValue::Tag(VERBATIM_TAG, Box::new(CborValue::Integer(1_609_459_200_u64.into())))
        );
        assert_eq!(decode(&bytes, &loader, &[], &[]).unwrap(), doc);
    }

    #[test]
    fn test_unregistered_context_stays_text() {
        let loader = loader();
        let bytes = encode(&document(), &loader, &[], &[]).unwrap();
        assert!(bytes.windows(EXAMPLE_CONTEXT.len()).any(|w| w == EXAMPLE_CONTEXT.as_bytes()));
        assert_eq!(decode(&bytes, &loader, &[], &[]).unwrap(), document());
    }

    #[test]
    fn test_decode_with_missing_app_context_fails() {
        let loader = loader();
        let bytes = encode(&document(), &loader, &[EXAMPLE_CONTEXT], &[]).unwrap();
        assert!(matches!(
            decode(&bytes, &loader, &[], &[]),
            Err(CodecError::UnknownContextId(0x8000))
        ));
    }

    #[test]
    fn test_unknown_transform_is_rejected() {
        let loader = loader();
        let result = encode(&document(), &loader, &[], &["digest:rot13"]);
        assert!(matches!(result, Err(CodecError::UnknownTransform { .. })));
    }

    #[test]
    fn test_empty_transform_disables_context_codec() {
        let loader = loader();
        let bytes = encode(&document(), &loader, &[], &["issued"]).unwrap();
        assert!(bytes.windows(20).any(|w| w == b"2021-01-01T00:00:00Z"));
        assert_eq!(decode(&bytes, &loader, &[], &["issued"]).unwrap(), document());
    }

    #[test]
    fn test_non_canonical_values_stay_text() {
        let loader = loader();
        let mut doc = document();
        doc["digest"] = json!("not base64!");
        let bytes = encode(&doc, &loader, &[], &["digest:base64Pad"]).unwrap();
        assert_eq!(decode(&bytes, &loader, &[], &["digest:base64Pad"]).unwrap(), doc);
    }

    #[test]
    fn test_standard_context_compresses() {
        let loader = StaticDocumentLoader::new().with_document(
            "https://www.w3.org/2018/credentials/v1",
            json!({"@context": {"VerifiableCredential": "https://www.w3.org/2018/credentials#VerifiableCredential"}}),
        );
        let doc = json!({
            "@context": ["https://www.w3.org/2018/credentials/v1"],
            "type": ["VerifiableCredential"]
        });
        let bytes = encode(&doc, &loader, &[], &[]).unwrap();
        let framed: CborValue = ciborium::de::from_reader(bytes.as_slice()).unwrap();
        let (_, payload) = unframe(framed).unwrap();
        let CborValue::Map(entries) = payload else {
            panic!("payload should be a map");
        };
        assert_eq!(
            entries[0].1,
            CborValue::Array(vec![CborValue::Integer(0x11_u8.into())])
        );
        assert_eq!(decode(&bytes, &loader, &[], &[]).unwrap(), doc);
    }

    #[test]
    fn test_decode_rejects_untagged_input() {
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(&CborValue::Text("hello".into()), &mut bytes).unwrap();
        let loader = StaticDocumentLoader::new();
        assert!(matches!(
            decode(&bytes, &loader, &[], &[]),
            Err(CodecError::InvalidFormat(_))
        ));
        assert!(matches!(
            decode(&[0xff, 0x00], &loader, &[], &[]),
            Err(CodecError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let loader = StaticDocumentLoader::new();
        let doc = json!({"@context": {"name": "urn:n"}, "name": "x"});
        let mut bytes = encode(&doc, &loader, &[], &[]).unwrap();
        bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

        match decode(&bytes, &loader, &[], &[]) {
            Err(CodecError::InvalidFormat(message)) => assert!(message.contains("trailing bytes")),
            other => panic!("expected trailing bytes error, got {other:?}"),
        }
    }

    #[test]
    fn test_numeric_type_is_not_read_as_term_id() {
        let loader = StaticDocumentLoader::new();
        let doc = json!({"@context": {"name": "urn:n"}, "@type": 4});
        let bytes = encode(&doc, &loader, &[], &[]).unwrap();

        assert_eq!(decode(&bytes, &loader, &[], &[]).unwrap(), doc);
    }

    #[test]
    fn test_scalar_context_is_not_read_as_context_id() {
        let loader = StaticDocumentLoader::new();
        let doc = json!({"@context": [17, {"name": "urn:n"}, true], "name": "x"});
        let bytes = encode(&doc, &loader, &[], &[]).unwrap();

        assert_eq!(decode(&bytes, &loader, &[], &[]).unwrap(), doc);
    }

    #[test]
    fn test_decode_uncompressed_entry() {
        let framed = CborValue::Tag(
            CBORLD_TAG,
            Box::new(CborValue::Array(vec![
                CborValue::Integer(0_u8.into()),
                CborValue::Map(vec![(CborValue::Text("name".into()), CborValue::Text("plain".into()))]),
            ])),
        );
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(&framed, &mut bytes).unwrap();

        let loader = StaticDocumentLoader::new();
        assert_eq!(decode(&bytes, &loader, &[], &[]).unwrap(), json!({"name": "plain"}));
    }

    #[test]
    fn test_diagnostics_are_emitted() {
        let loader = loader();
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        let sink = DiagnosticSink::from_fn(move |line| captured.lock().unwrap().push(line.to_string()));

        let doc = document();
        CborLdCodec
            .encode(EncodeRequest {
                document: &doc,
                document_loader: &loader,
                app_context_map: None,
                app_term_map: None,
                diagnose: Some(&sink),
            })
            .unwrap();

        let lines = lines.lock().unwrap();
        assert!(lines.iter().any(|line| line.contains("loaded context")));
        assert!(lines.iter().any(|line| line.starts_with("Diagnostic: CBOR-LD 51997(")));
    }

    #[test]
    fn test_term_codecs_listed() {
        assert_eq!(
            CborLdCodec.term_codecs(),
            vec!["base16", "base64Pad", "base64Url", "xsdDateTime"]
        );
    }
}
