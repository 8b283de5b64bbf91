// ============================================================================
// cborld-core/src/maps.rs
// ============================================================================
//
// MAP BUILDER: Structured Codec Options from Raw CLI Lists
//
// This module turns the repeatable `--context` and `--transform` option lists
// into the two ordered maps the codec consumes:
//
// - AppContextMap: context URL -> 16-bit ID, assigned positionally from the
//   start of the application-specific ID space (0x8000).
// - AppTermMap: term -> transform codec name, parsed from `term:transform`.
//
// An empty option list yields no map at all (`None`), so the codec can tell
// "no override requested" apart from "override with nothing". Malformed
// transform entries degrade to "no transform" instead of failing.
//
// AI-ASSISTANT-INFO: Builds the application context and term maps

// ---- Standard library imports ----
use std::collections::HashSet;

// ---- External crate imports ----
use log::{debug, warn};

// ---- Internal crate imports ----
use crate::config::{APP_CONTEXT_ID_BASE, MAX_APP_CONTEXTS};
use crate::error::{CoreError, CoreResult};

// ============================================================================
// APPLICATION CONTEXT MAP
// ============================================================================

/// Ordered mapping from application context URL to its numeric ID.
///
/// Every entry satisfies `id == 0x8000 + index`, where `index` is the
/// position of the URL in the list it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContextMap {
    entries: Vec<(String, u16)>,
}

impl AppContextMap {
    /// Number of registered URLs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the ID assigned to `url`.
    pub fn id_for(&self, url: &str) -> Option<u16> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == url)
            .map(|(_, id)| *id)
    }

    /// Looks up the URL registered under `id`.
    pub fn url_for(&self, id: u16) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == id)
            .map(|(url, _)| url.as_str())
    }

    /// Iterates over `(url, id)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.entries.iter().map(|(url, id)| (url.as_str(), *id))
    }
}

/// Fails if `count` context URLs do not fit in the application-specific ID
/// space.
pub fn check_app_context_capacity(count: usize) -> CoreResult<()> {
    if count > MAX_APP_CONTEXTS {
        return Err(CoreError::Config(format!(
            "{count} application contexts supplied, at most {MAX_APP_CONTEXTS} fit in the 16-bit ID space"
        )));
    }
    Ok(())
}

/// Builds the application context map from URLs in the order supplied.
///
/// Returns `Ok(None)` for an empty list. A URL supplied more than once keeps
/// the ID of its first occurrence; later copies are skipped, but still
/// consume their positional ID so the remaining entries keep `0x8000 + index`.
///
/// # Errors
///
/// Returns `CoreError::Config` if the list does not fit in the 16-bit ID space.
pub fn build_app_context_map(contexts: &[String]) -> CoreResult<Option<AppContextMap>> {
    if contexts.is_empty() {
        return Ok(None);
    }

    check_app_context_capacity(contexts.len())?;

    let mut entries: Vec<(String, u16)> = Vec::with_capacity(contexts.len());
    let mut seen: HashSet<&str> = HashSet::with_capacity(contexts.len());
    for (index, url) in contexts.iter().enumerate() {
        // Bounded by the MAX_APP_CONTEXTS check above.
        let id = APP_CONTEXT_ID_BASE + index as u16;
        if !seen.insert(url.as_str()) {
            warn!("Context '{url}' supplied more than once, keeping its first ID");
            continue;
        }
        debug!("Application context {url} -> {id:#06x}");
        entries.push((url.clone(), id));
    }

    Ok(Some(AppContextMap { entries }))
}

// ============================================================================
// APPLICATION TERM MAP
// ============================================================================

/// Ordered mapping from JSON-LD term to the name of its transform codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppTermMap {
    entries: Vec<(String, String)>,
}

impl AppTermMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or replaces the transform for `term`, keeping its position.
    pub fn insert(&mut self, term: impl Into<String>, transform: impl Into<String>) {
        let term = term.into();
        let transform = transform.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == term) {
            Some(entry) => entry.1 = transform,
            None => self.entries.push((term, transform)),
        }
    }

    /// Raw transform name for `term`, possibly empty.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == term)
            .map(|(_, transform)| transform.as_str())
    }

    /// Transform name for `term`, treating an empty name as "no transform".
    pub fn transform_for(&self, term: &str) -> Option<&str> {
        self.get(term).filter(|transform| !transform.is_empty())
    }

    /// Iterates over `(term, transform)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(term, transform)| (term.as_str(), transform.as_str()))
    }
}

/// Builds the application term map from `term:transform` entries.
///
/// Only the first two `:`-separated segments matter: `"a:b:c"` maps `a` to
/// `b`, and an entry without a separator maps the whole entry to an empty
/// transform. Returns `None` for an empty list.
pub fn build_app_term_map(transforms: &[String]) -> Option<AppTermMap> {
    if transforms.is_empty() {
        return None;
    }

    let mut map = AppTermMap::default();
    for entry in transforms {
        let mut segments = entry.split(':');
        let term = segments.next().unwrap_or_default();
        let transform = segments.next().unwrap_or_default();
        if transform.is_empty() {
            debug!("Term '{term}' has no transform, leaving its values untouched");
        }
        map.insert(term, transform);
    }

    Some(map)
}

/// Builds both maps for one invocation.
pub fn build_maps(
    contexts: &[String],
    transforms: &[String],
) -> CoreResult<(Option<AppContextMap>, Option<AppTermMap>)> {
    Ok((build_app_context_map(contexts)?, build_app_term_map(transforms)))
}
