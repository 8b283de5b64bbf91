//! Single-line CBOR diagnostic notation (RFC 8949 section 8) for debug output.

use ciborium::value::Value as CborValue;

/// Renders `value` in CBOR diagnostic notation.
pub fn to_diagnostic(value: &CborValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &CborValue) {
    match value {
        CborValue::Integer(integer) => out.push_str(&i128::from(*integer).to_string()),
        CborValue::Bytes(bytes) => {
            out.push_str("h'");
            out.push_str(&hex::encode(bytes));
            out.push('\'');
        }
        CborValue::Float(float) => out.push_str(&format!("{float:?}")),
        CborValue::Text(text) => out.push_str(&format!("{text:?}")),
        CborValue::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        CborValue::Null => out.push_str("null"),
        CborValue::Tag(tag, inner) => {
            out.push_str(&format!("{tag}("));
            write_value(out, inner);
            out.push(')');
        }
        CborValue::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        CborValue::Map(entries) => {
            out.push('{');
            for (index, (key, item)) in entries.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_value(out, key);
                out.push_str(": ");
                write_value(out, item);
            }
            out.push('}');
        }
        // ciborium's Value is non_exhaustive.
        _ => out.push_str("undefined"),
    }
}
