use serde::{Deserialize, Serialize};

use crate::document::{str_field, Document, FromDocument};
use crate::error::{DecodeError, DecodeResult};

/// Daemon version report, from `version`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Commit")]
    pub commit: String,
}

impl FromDocument for Version {
    const RESOURCE: &'static str = "Version";

    fn from_document(doc: &Document) -> DecodeResult<Self> {
        let mut missing = Vec::new();
        let version = str_field(doc, "Version", &mut missing);
        let commit = str_field(doc, "Commit", &mut missing);
        match (version, commit) {
            (Some(version), Some(commit)) => Ok(Self { version, commit }),
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
    fn decodes_from_daemon_keys() {
        let v = Version::from_document(&doc(json!({
            "Version": "0.3.9",
            "Commit": "43622bs",
        })))
        .unwrap();
        assert_eq!(v.version, "0.3.9");
        assert_eq!(v.commit, "43622bs");
    }

    #[test]
    fn empty_document_reports_both_fields() {
        let err = Version::from_document(&doc(json!({}))).unwrap_err();
        assert_eq!(
            err,
            DecodeError::missing("Version", vec!["Version", "Commit"])
        );
    }

    #[test]
    fn decode_inverts_encode() {
        let v = Version {
            version: "0.4.0".into(),
            commit: "abc123".into(),
        };
        let encoded = serde_json::to_value(&v).unwrap();
        let decoded = Version::from_document(encoded.as_object().unwrap()).unwrap();
        assert_eq!(decoded, v);
    }
}
