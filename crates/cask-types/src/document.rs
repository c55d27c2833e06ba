//! Generic JSON document access shared by the typed decoders.
//!
//! A decoder reads every required field before deciding the outcome, so a
//! single error reports the full set of absent keys. A key holding a value
//! of the wrong JSON type counts as missing: the field the decoder needs is
//! not there.

use serde_json::Value;

use crate::error::DecodeResult;

/// A parsed JSON object, as produced by the codec boundary.
pub type Document = serde_json::Map<String, Value>;

/// A resource that decodes from a JSON [`Document`].
pub trait FromDocument: Sized {
    /// Resource name used in decode errors.
    const RESOURCE: &'static str;

    fn from_document(doc: &Document) -> DecodeResult<Self>;
}

/// Read a required string field, recording the key on miss or type mismatch.
pub(crate) fn str_field(
    doc: &Document,
    key: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match doc.get(key).and_then(Value::as_str) {
        Some(s) => Some(s.to_owned()),
        None => {
            missing.push(key);
            None
        }
    }
}

/// Read a required unsigned integer field.
pub(crate) fn u64_field(
    doc: &Document,
    key: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<u64> {
    match doc.get(key).and_then(Value::as_u64) {
        Some(n) => Some(n),
        None => {
            missing.push(key);
            None
        }
    }
}

/// Read a required array field.
pub(crate) fn array_field<'a>(
    doc: &'a Document,
    key: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<&'a Vec<Value>> {
    match doc.get(key).and_then(Value::as_array) {
        Some(items) => Some(items),
        None => {
            missing.push(key);
            None
        }
    }
}

/// Read a required array-of-strings field.
pub(crate) fn str_array_field(
    doc: &Document,
    key: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<Vec<String>> {
    let items = array_field(doc, key, missing)?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(s) => out.push(s.to_owned()),
            None => {
                missing.push(key);
                return None;
            }
        }
    }
    Some(out)
}
