use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{str_field, u64_field, Document};
use crate::error::{DecodeError, DecodeResult};

/// One pinned content address, from `pin/ls`.
///
/// The daemon reports pins as a `Keys` map from hash to `{Type, Count}`;
/// each map entry becomes one `Pin` carrying its key as `hash`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub hash: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Count")]
    pub count: u64,
}

impl Pin {
    const RESOURCE: &'static str = "Pin";

    /// Decode a full `pin/ls` response document into one record per entry
    /// of its `Keys` map.
    pub fn from_keys_document(doc: &Document) -> DecodeResult<Vec<Self>> {
        let keys = match doc.get("Keys") {
            Some(Value::Object(keys)) => keys,
            Some(_) | None => {
                return Err(DecodeError::missing(Self::RESOURCE, vec!["Keys"]));
            }
        };
        let mut pins = Vec::with_capacity(keys.len());
        for (hash, entry) in keys {
            let entry = entry.as_object().ok_or(DecodeError::UnexpectedShape {
                resource: Self::RESOURCE,
                expected: "object per pinned hash",
            })?;
            pins.push(Self::from_entry(hash, entry)?);
        }
        Ok(pins)
    }

    /// Decode a single `Keys` map entry.
    pub fn from_entry(hash: &str, entry: &Document) -> DecodeResult<Self> {
        let mut missing = Vec::new();
        let kind = str_field(entry, "Type", &mut missing);
        let count = u64_field(entry, "Count", &mut missing);
        match (kind, count) {
            (Some(kind), Some(count)) => Ok(Self {
                hash: hash.to_owned(),
                kind,
                count,
            }),
            _ => Err(DecodeError::missing(Self::RESOURCE, missing)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn one_record_per_keys_entry() {
        let pins = Pin::from_keys_document(&doc(json!({
            "Keys": {
                "h1": {"Type": "recursive", "Count": 1},
                "h2": {"Type": "direct", "Count": 3},
            }
        })))
        .unwrap();
        assert_eq!(pins.len(), 2);
        let h1 = pins.iter().find(|p| p.hash == "h1").unwrap();
        assert_eq!(h1.kind, "recursive");
        assert_eq!(h1.count, 1);
        let h2 = pins.iter().find(|p| p.hash == "h2").unwrap();
        assert_eq!(h2.kind, "direct");
        assert_eq!(h2.count, 3);
    }

    #[test]
    fn empty_keys_map_yields_no_pins() {
        let pins = Pin::from_keys_document(&doc(json!({"Keys": {}}))).unwrap();
        assert!(pins.is_empty());
    }

    #[test]
    fn absent_keys_map_is_missing_field() {
        let err = Pin::from_keys_document(&doc(json!({}))).unwrap_err();
        assert_eq!(err, DecodeError::missing("Pin", vec!["Keys"]));
    }

    #[test]
    fn entry_without_count_fails() {
        let err = Pin::from_keys_document(&doc(json!({
            "Keys": {"h1": {"Type": "recursive"}}
        })))
        .unwrap_err();
        assert_eq!(err, DecodeError::missing("Pin", vec!["Count"]));
    }
}
