use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{Document, FromDocument};
use crate::error::{DecodeError, DecodeResult};

/// Result of `name/publish` or `name/resolve`.
///
/// `name/publish` responds with `Name` and `Value`; `name/resolve` responds
/// with `Path` only. Whichever of `Value` / `Path` is present becomes
/// `value`, with `Value` taking priority when a daemon sends both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Published {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Value")]
    pub value: String,
}

impl FromDocument for Published {
    const RESOURCE: &'static str = "Published";

    fn from_document(doc: &Document) -> DecodeResult<Self> {
        let name = doc
            .get("Name")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let value = doc
            .get("Value")
            .and_then(Value::as_str)
            .or_else(|| doc.get("Path").and_then(Value::as_str))
            .map(str::to_owned);
        match value {
            Some(value) => Ok(Self { name, value }),
            None => Err(DecodeError::missing(Self::RESOURCE, vec!["Value", "Path"])),
        }
    }
}
