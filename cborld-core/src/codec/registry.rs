//! Context and keyword ID tables.

use crate::maps::AppContextMap;

/// Well-known context URLs and their IDs. All sit below the
/// application-specific ID space starting at `0x8000`.
pub const STANDARD_CONTEXTS: &[(u16, &str)] = &[
    (0x10, "https://www.w3.org/ns/activitystreams"),
    (0x11, "https://www.w3.org/2018/credentials/v1"),
    (0x12, "https://www.w3.org/ns/did/v1"),
    (0x13, "https://w3id.org/security/suites/ed25519-2018/v1"),
    (0x14, "https://w3id.org/security/suites/ed25519-2020/v1"),
    (0x15, "https://w3id.org/cit/v1"),
    (0x16, "https://w3id.org/age/v1"),
    (0x17, "https://w3id.org/security/suites/x25519-2020/v1"),
    (0x18, "https://w3id.org/veres-one/v1"),
    (0x19, "https://w3id.org/webkms/v1"),
    (0x1A, "https://w3id.org/zcap/v1"),
    (0x1B, "https://w3id.org/security/suites/hmac-2019/v1"),
    (0x1C, "https://w3id.org/security/suites/aes-2019/v1"),
    (0x1D, "https://w3id.org/vaccination/v1"),
    (0x1E, "https://w3id.org/vc-revocation-list-2020/v1"),
    (0x1F, "https://w3id.org/dcc/v1"),
    (0x20, "https://w3id.org/vc/status-list/v1"),
];

/// JSON-LD keywords in ID order; keyword `i` is encoded as `2 * i`.
pub const KEYWORDS: &[&str] = &[
    "@context",
    "@type",
    "@id",
    "@value",
    "@direction",
    "@graph",
    "@included",
    "@index",
    "@json",
    "@language",
    "@list",
    "@nest",
    "@reverse",
    "@base",
    "@container",
    "@default",
    "@embed",
    "@explicit",
    "@none",
    "@omitDefault",
    "@prefix",
    "@preserve",
    "@protected",
    "@requireAll",
    "@set",
    "@version",
    "@vocab",
];

/// ID of a keyword, if `term` is one.
pub(crate) fn keyword_id(term: &str) -> Option<u64> {
    KEYWORDS
        .iter()
        .position(|keyword| *keyword == term)
        .map(|index| index as u64 * 2)
}

/// Keyword encoded as `id`, if any.
pub(crate) fn keyword_for(id: u64) -> Option<&'static str> {
    if id % 2 != 0 {
        return None;
    }
    usize::try_from(id / 2)
        .ok()
        .and_then(|index| KEYWORDS.get(index).copied())
}

/// Combined view of the standard context table and the application map.
///
/// Application entries win over standard ones for the same URL.
#[derive(Debug, Clone, Copy)]
pub struct ContextRegistry<'a> {
    app: Option<&'a AppContextMap>,
}

impl<'a> ContextRegistry<'a> {
    pub fn new(app: Option<&'a AppContextMap>) -> Self {
        Self { app }
    }

    /// ID a context URL compresses to.
    pub fn id_for(&self, url: &str) -> Option<u64> {
        if let Some(id) = self.app.and_then(|app| app.id_for(url)) {
            return Some(u64::from(id));
        }
        STANDARD_CONTEXTS
            .iter()
            .find(|(_, candidate)| *candidate == url)
            .map(|(id, _)| u64::from(*id))
    }

    /// URL a context ID expands to.
    pub fn url_for(&self, id: u64) -> Option<&'a str> {
        let id = u16::try_from(id).ok()?;
        if let Some(url) = self.app.and_then(|app| app.url_for(id)) {
            return Some(url);
        }
        STANDARD_CONTEXTS
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, url)| *url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::build_app_context_map;

    #[test]
    fn test_keyword_ids() {
        assert_eq!(keyword_id("@context"), Some(0));
        assert_eq!(keyword_id("@type"), Some(2));
        assert_eq!(keyword_id("@id"), Some(4));
        assert_eq!(keyword_id("name"), None);
        assert_eq!(keyword_for(2), Some("@type"));
        assert_eq!(keyword_for(3), None);
        assert_eq!(keyword_for(98), None);
    }

    #[test]
    fn test_standard_ids_stay_below_app_space() {
        assert!(STANDARD_CONTEXTS.iter().all(|(id, _)| *id < 0x8000));
    }

    #[test]
    fn test_registry_merges_app_contexts() {
        let app = build_app_context_map(&["https://example.com/ctx/v1".to_string()])
            .unwrap()
            .unwrap();
        let registry = ContextRegistry::new(Some(&app));

        assert_eq!(registry.id_for("https://example.com/ctx/v1"), Some(0x8000));
        assert_eq!(registry.id_for("https://www.w3.org/2018/credentials/v1"), Some(0x11));
        assert_eq!(registry.url_for(0x8000), Some("https://example.com/ctx/v1"));
        assert_eq!(registry.url_for(0x8001), None);
        assert_eq!(registry.url_for(u64::MAX), None);
    }
}
