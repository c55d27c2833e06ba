use serde::{Deserialize, Serialize};

use crate::document::{array_field, str_field, Document, FromDocument};
use crate::error::{DecodeError, DecodeResult};

/// A named signing key, from `key/gen` and `key/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Id")]
    pub id: String,
}

impl Key {
    /// Decode a `key/list` response: a `Keys` array of key records.
    pub fn list_from_document(doc: &Document) -> DecodeResult<Vec<Self>> {
        let mut missing = Vec::new();
        let items = match array_field(doc, "Keys", &mut missing) {
            Some(items) => items,
            None => return Err(DecodeError::missing(Self::RESOURCE, missing)),
        };
        let mut keys = Vec::with_capacity(items.len());
        for item in items {
            let entry = item.as_object().ok_or(DecodeError::UnexpectedShape {
                resource: Self::RESOURCE,
                expected: "array of key objects",
            })?;
            keys.push(Self::from_document(entry)?);
        }
        Ok(keys)
    }
}

impl FromDocument for Key {
    const RESOURCE: &'static str = "Key";

    fn from_document(doc: &Document) -> DecodeResult<Self> {
        let mut missing = Vec::new();
        let name = str_field(doc, "Name", &mut missing);
        let id = str_field(doc, "Id", &mut missing);
        match (name, id) {
            (Some(name), Some(id)) => Ok(Self { name, id }),
            _ => Err(DecodeError::missing(Self::RESOURCE, missing)),
        }
    }
}
