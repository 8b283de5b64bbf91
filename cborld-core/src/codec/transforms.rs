//! Term codecs: named value transforms applied to individual JSON-LD terms.
//!
//! A transform only fires when it is exactly reversible for the given string;
//! anything else stays text so decoding reproduces the original byte for byte.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use chrono::{DateTime, SecondsFormat, Utc};
use ciborium::value::Value as CborValue;

/// Names of the supported term codecs, in display order.
pub const TERM_CODECS: &[&str] = &["base16", "base64Pad", "base64Url", "xsdDateTime"];

const XSD_DATE_TIME: &[&str] = &["xsd:dateTime", "http://www.w3.org/2001/XMLSchema#dateTime"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermCodec {
    /// Lowercase hex text to a byte string.
    Base16,
    /// Padded standard base64 text to a byte string.
    Base64Pad,
    /// Unpadded URL-safe base64 text to a byte string.
    Base64Url,
    /// RFC 3339 UTC timestamp with whole seconds to epoch seconds.
    XsdDateTime,
}

impl TermCodec {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "base16" => Some(Self::Base16),
            "base64Pad" => Some(Self::Base64Pad),
            "base64Url" => Some(Self::Base64Url),
            "xsdDateTime" => Some(Self::XsdDateTime),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Base16 => "base16",
            Self::Base64Pad => "base64Pad",
            Self::Base64Url => "base64Url",
            Self::XsdDateTime => "xsdDateTime",
        }
    }

    /// Default codec for a term whose context definition declares `@type`.
    pub fn for_context_type(type_iri: &str) -> Option<Self> {
        XSD_DATE_TIME.contains(&type_iri).then_some(Self::XsdDateTime)
    }

    /// Compresses `value`, or `None` if the result would not decode back to
    /// exactly the same string.
    pub fn encode(self, value: &str) -> Option<CborValue> {
        let encoded = match self {
            Self::Base16 => CborValue::Bytes(hex::decode(value).ok()?),
            Self::Base64Pad => CborValue::Bytes(STANDARD.decode(value).ok()?),
            Self::Base64Url => CborValue::Bytes(URL_SAFE_NO_PAD.decode(value).ok()?),
            Self::XsdDateTime => {
                let timestamp = DateTime::parse_from_rfc3339(value).ok()?;
                CborValue::Integer(timestamp.timestamp().into())
            }
        };
        (self.decode(&encoded)?.as_str() == value).then_some(encoded)
    }

    /// Expands a compressed value, or `None` if it is not in this codec's
    /// compressed form.
    pub fn decode(self, value: &CborValue) -> Option<String> {
        match (self, value) {
            (Self::Base16, CborValue::Bytes(bytes)) => Some(hex::encode(bytes)),
            (Self::Base64Pad, CborValue::Bytes(bytes)) => Some(STANDARD.encode(bytes)),
            (Self::Base64Url, CborValue::Bytes(bytes)) => Some(URL_SAFE_NO_PAD.encode(bytes)),
            (Self::XsdDateTime, CborValue::Integer(seconds)) => {
                let seconds = i64::try_from(i128::from(*seconds)).ok()?;
                let timestamp = DateTime::<Utc>::from_timestamp(seconds, 0)?;
                Some(timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for name in TERM_CODECS {
            let codec = TermCodec::from_name(name).unwrap();
            assert_eq!(codec.name(), *name);
        }
        assert_eq!(TermCodec::from_name("base58btc"), None);
    }

    #[test]
    fn test_base64_pad_compresses_to_bytes() {
        let encoded = TermCodec::Base64Pad.encode("aGVsbG8=").unwrap();
        assert_eq!(encoded, CborValue::Bytes(b"hello".to_vec()));
        assert_eq!(TermCodec::Base64Pad.decode(&encoded).unwrap(), "aGVsbG8=");
    }

    #[test]
    fn test_base64_url_rejects_padding() {
        assert!(TermCodec::Base64Url.encode("aGVsbG8").is_some());
        assert!(TermCodec::Base64Url.encode("aGVsbG8=").is_none());
    }

    #[test]
    fn test_base16_keeps_uppercase_as_text() {
        assert_eq!(
            TermCodec::Base16.encode("deadbeef"),
            Some(CborValue::Bytes(vec![0xde, 0xad, 0xbe, 0xef]))
        );
        assert!(TermCodec::Base16.encode("DEADBEEF").is_none());
        assert!(TermCodec::Base16.encode("not hex").is_none());
    }

    #[test]
    fn test_date_time_whole_seconds_only() {
        let encoded = TermCodec::XsdDateTime.encode("2021-01-01T00:00:00Z").unwrap();
        assert_eq!(encoded, CborValue::Integer(1_609_459_200_i64.into()));
        assert_eq!(
            TermCodec::XsdDateTime.decode(&encoded).unwrap(),
            "2021-01-01T00:00:00Z"
        );

        assert!(TermCodec::XsdDateTime.encode("2021-01-01T00:00:00.5Z").is_none());
        assert!(TermCodec::XsdDateTime.encode("2021-01-01T01:00:00+01:00").is_none());
        assert!(TermCodec::XsdDateTime.encode("yesterday").is_none());
    }

    #[test]
    fn test_context_type_defaults() {
        assert_eq!(
            TermCodec::for_context_type("http://www.w3.org/2001/XMLSchema#dateTime"),
            Some(TermCodec::XsdDateTime)
        );
        assert_eq!(TermCodec::for_context_type("@id"), None);
    }

    #[test]
    fn test_decode_rejects_foreign_representation() {
        assert!(TermCodec::XsdDateTime.decode(&CborValue::Bytes(vec![1])).is_none());
        assert!(TermCodec::Base16.decode(&CborValue::Integer(1_i64.into())).is_none());
    }
}
