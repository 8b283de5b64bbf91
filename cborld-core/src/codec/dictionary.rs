//! Term dictionary built from the contexts a document references.
//!
//! Every term defined by any reachable context (remote contexts through the
//! document loader, inline and scoped contexts directly) is collected, sorted,
//! and given an even ID starting at [`FIRST_TERM_ID`]. Encode and decode
//! build the dictionary from the same set of contexts, so both sides agree on
//! the IDs without transmitting them.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::debug;
use serde_json::{Map, Value};

use super::CodecError;
use super::registry::{keyword_for, keyword_id};
use super::transforms::TermCodec;
use crate::diagnostics::DiagnosticSink;
use crate::loader::DocumentLoader;

/// ID of the first context-defined term; lower IDs belong to keywords.
pub const FIRST_TERM_ID: u64 = 100;

/// Bidirectional term <-> ID table plus the value codec each term's context
/// definition implies.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    ids: HashMap<String, u64>,
    terms: HashMap<u64, String>,
    typed: HashMap<String, TermCodec>,
}

impl TermDictionary {
    /// Number of context-defined terms (keywords excluded).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// ID for a keyword or context-defined term.
    pub fn id_for(&self, term: &str) -> Option<u64> {
        keyword_id(term).or_else(|| self.ids.get(term).copied())
    }

    /// Keyword or term encoded as `id`.
    pub fn term_for(&self, id: u64) -> Option<&str> {
        if id < FIRST_TERM_ID {
            return keyword_for(id);
        }
        self.terms.get(&id).map(String::as_str)
    }

    /// Codec implied by the term's context definition, if every definition
    /// of the term agrees on it.
    pub fn context_codec(&self, term: &str) -> Option<TermCodec> {
        self.typed.get(term).copied()
    }
}

/// Walks context values and accumulates term definitions.
pub(crate) struct ContextCollector<'a> {
    loader: &'a dyn DocumentLoader,
    diagnose: Option<&'a DiagnosticSink>,
    loaded: HashSet<String>,
    // None once two definitions of the same term disagree on @type.
    types: BTreeMap<String, Option<String>>,
}

impl<'a> ContextCollector<'a> {
    pub(crate) fn new(loader: &'a dyn DocumentLoader, diagnose: Option<&'a DiagnosticSink>) -> Self {
        Self {
            loader,
            diagnose,
            loaded: HashSet::new(),
            types: BTreeMap::new(),
        }
    }

    /// Adds the contexts referenced by every `@context` entry of a JSON-LD
    /// document.
    pub(crate) fn collect_document(&mut self, document: &Value) -> Result<(), CodecError> {
        match document {
            Value::Object(map) => {
                if let Some(context) = map.get("@context") {
                    self.add_context(context)?;
                }
                for (key, value) in map {
                    if key != "@context" {
                        self.collect_document(value)?;
                    }
                }
                Ok(())
            }
            Value::Array(items) => items.iter().try_for_each(|item| self.collect_document(item)),
            _ => Ok(()),
        }
    }

    /// Adds one `@context` value: a URL, an inline definition, or an array
    /// of either.
    pub(crate) fn add_context(&mut self, context: &Value) -> Result<(), CodecError> {
        match context {
            Value::String(url) => self.add_remote(url),
            Value::Object(definitions) => self.add_definitions(definitions),
            Value::Array(items) => items.iter().try_for_each(|item| self.add_context(item)),
            _ => Ok(()),
        }
    }

    fn add_remote(&mut self, url: &str) -> Result<(), CodecError> {
        if !self.loaded.insert(url.to_string()) {
            return Ok(());
        }

        let document = self
            .loader
            .load(url)
            .map_err(|source| CodecError::Loader {
                url: url.to_string(),
                source,
            })?;
        let context = document
            .get("@context")
            .ok_or_else(|| CodecError::InvalidContext {
                url: url.to_string(),
            })?;

        debug!("Loaded context {url}");
        if let Some(sink) = self.diagnose {
            sink.emit(&format!("Diagnostic: loaded context {url}"));
        }
        self.add_context(context)
    }

    fn add_definitions(&mut self, definitions: &Map<String, Value>) -> Result<(), CodecError> {
        for (term, definition) in definitions {
            if term.starts_with('@') {
                continue;
            }

            let declared = definition
                .get("@type")
                .and_then(Value::as_str)
                .map(str::to_string);
            match self.types.get_mut(term) {
                Some(existing) => {
                    if *existing != declared {
                        *existing = None;
                    }
                }
                None => {
                    self.types.insert(term.clone(), declared);
                }
            }

            if let Some(scoped) = definition.get("@context") {
                self.add_context(scoped)?;
            }
        }
        Ok(())
    }

    /// Assigns IDs in sorted term order.
    pub(crate) fn into_dictionary(self) -> TermDictionary {
        let mut dictionary = TermDictionary::default();
        let mut next_id = FIRST_TERM_ID;
        for (term, declared) in self.types {
            if let Some(codec) = declared.as_deref().and_then(TermCodec::for_context_type) {
                dictionary.typed.insert(term.clone(), codec);
            }
            dictionary.ids.insert(term.clone(), next_id);
            dictionary.terms.insert(next_id, term);
            next_id += 2;
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::StaticDocumentLoader;
    use serde_json::json;

    fn dictionary_for(document: &Value, loader: &StaticDocumentLoader) -> Result<TermDictionary, CodecError> {
        let mut collector = ContextCollector::new(loader, None);
        collector.collect_document(document)?;
        Ok(collector.into_dictionary())
    }

    #[test]
    fn test_terms_sorted_from_first_id() {
        let loader = StaticDocumentLoader::new().with_document(
            "urn:ctx",
            json!({"@context": {"@version": 1.1, "zeta": "urn:z", "alpha": "urn:a"}}),
        );
        let document = json!({"@context": ["urn:ctx", {"middle": "urn:m"}]});

        let dictionary = dictionary_for(&document, &loader).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.id_for("alpha"), Some(100));
        assert_eq!(dictionary.id_for("middle"), Some(102));
        assert_eq!(dictionary.id_for("zeta"), Some(104));
        assert_eq!(dictionary.id_for("@version"), Some(50));
        assert_eq!(dictionary.term_for(102), Some("middle"));
        assert_eq!(dictionary.term_for(101), None);
    }

    #[test]
    fn test_scoped_and_nested_contexts_are_collected() {
        let loader = StaticDocumentLoader::new();
        let document = json!({
            "@context": {"outer": {"@id": "urn:outer", "@context": {"scoped": "urn:s"}}},
            "outer": {"@context": {"nested": "urn:n"}}
        });

        let dictionary = dictionary_for(&document, &loader).unwrap();
        assert!(dictionary.id_for("scoped").is_some());
        assert!(dictionary.id_for("nested").is_some());
    }

    #[test]
    fn test_typed_terms_imply_codec_unless_conflicting() {
        let loader = StaticDocumentLoader::new();
        let document = json!({
            "@context": [
                {"issued": {"@id": "urn:i", "@type": "xsd:dateTime"}},
                {"expires": {"@id": "urn:e", "@type": "xsd:dateTime"}},
                {"expires": {"@id": "urn:e", "@type": "@id"}}
            ]
        });

        let dictionary = dictionary_for(&document, &loader).unwrap();
        assert_eq!(dictionary.context_codec("issued"), Some(TermCodec::XsdDateTime));
        assert_eq!(dictionary.context_codec("expires"), None);
    }

    #[test]
    fn test_missing_remote_context_fails() {
        let loader = StaticDocumentLoader::new();
        let document = json!({"@context": "https://example.com/missing"});
        assert!(matches!(
            dictionary_for(&document, &loader),
            Err(CodecError::Loader { .. })
        ));
    }

    #[test]
    fn test_document_without_context_definition_fails() {
        let loader = StaticDocumentLoader::new().with_document("urn:bad", json!({"name": "urn:n"}));
        let document = json!({"@context": "urn:bad"});
        assert!(matches!(
            dictionary_for(&document, &loader),
            Err(CodecError::InvalidContext { .. })
        ));
    }
}
