//! Stored objects, their links, and the records returned by object writes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{array_field, str_field, u64_field, Document, FromDocument};
use crate::error::{DecodeError, DecodeResult};

/// A named reference from one object to another.
///
/// The content address is opaque to the client; it is never parsed or
/// validated here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Hash")]
    pub hash: String,
    #[serde(rename = "Size")]
    pub size: u64,
}

impl FromDocument for Link {
    const RESOURCE: &'static str = "Link";

    fn from_document(doc: &Document) -> DecodeResult<Self> {
        let mut missing = Vec::new();
        let name = str_field(doc, "Name", &mut missing);
        let hash = str_field(doc, "Hash", &mut missing);
        let size = u64_field(doc, "Size", &mut missing);
        match (name, hash, size) {
            (Some(name), Some(hash), Some(size)) => Ok(Self { name, hash, size }),
            _ => Err(DecodeError::missing(Self::RESOURCE, missing)),
        }
    }
}

/// A stored object, from `object/get`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// Links in the exact order the daemon returned them.
    #[serde(rename = "Links")]
    pub links: Vec<Link>,
    #[serde(rename = "Data")]
    pub data: String,
}

impl FromDocument for Object {
    const RESOURCE: &'static str = "Object";

    fn from_document(doc: &Document) -> DecodeResult<Self> {
        let mut missing = Vec::new();
        let links = array_field(doc, "Links", &mut missing);
        let data = str_field(doc, "Data", &mut missing);
        match (links, data) {
            (Some(links), Some(data)) => Ok(Self {
                links: decode_links(Self::RESOURCE, links)?,
                data,
            }),
            _ => Err(DecodeError::missing(Self::RESOURCE, missing)),
        }
    }
}

/// Size statistics for a stored object, from `object/stat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStat {
    #[serde(rename = "Hash")]
    pub hash: String,
    #[serde(rename = "NumLinks")]
    pub num_links: u64,
    #[serde(rename = "BlockSize")]
    pub block_size: u64,
    #[serde(rename = "LinksSize")]
    pub links_size: u64,
    #[serde(rename = "DataSize")]
    pub data_size: u64,
    #[serde(rename = "CumulativeSize")]
    pub cumulative_size: u64,
}

impl FromDocument for ObjectStat {
    const RESOURCE: &'static str = "ObjectStat";

    fn from_document(doc: &Document) -> DecodeResult<Self> {
        let mut missing = Vec::new();
        let hash = str_field(doc, "Hash", &mut missing);
        let num_links = u64_field(doc, "NumLinks", &mut missing);
        let block_size = u64_field(doc, "BlockSize", &mut missing);
        let links_size = u64_field(doc, "LinksSize", &mut missing);
        let data_size = u64_field(doc, "DataSize", &mut missing);
        let cumulative_size = u64_field(doc, "CumulativeSize", &mut missing);
        match (hash, num_links, block_size, links_size, data_size, cumulative_size) {
            (Some(hash), Some(num_links), Some(block_size), Some(links_size), Some(data_size), Some(cumulative_size)) => {
                Ok(Self {
                    hash,
                    num_links,
                    block_size,
                    links_size,
                    data_size,
                    cumulative_size,
                })
            }
            _ => Err(DecodeError::missing(Self::RESOURCE, missing)),
        }
    }
}

/// The hash/links pair returned by `object/new`, `object/put`, and
/// `object/patch/add-link`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchObject {
    #[serde(rename = "Hash")]
    pub hash: String,
    /// Absent in the response when the new object has no links.
    #[serde(rename = "Links", default)]
    pub links: Vec<Link>,
}

impl FromDocument for PatchObject {
    const RESOURCE: &'static str = "PatchObject";

    fn from_document(doc: &Document) -> DecodeResult<Self> {
        let mut missing = Vec::new();
        let hash = str_field(doc, "Hash", &mut missing);
        let links = match doc.get("Links") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => decode_links(Self::RESOURCE, items)?,
            Some(_) => {
                missing.push("Links");
                Vec::new()
            }
        };
        match hash {
            Some(hash) if missing.is_empty() => Ok(Self { hash, links }),
            _ => Err(DecodeError::missing(Self::RESOURCE, missing)),
        }
    }
}

/// Decode a `Links` array, preserving element order.
fn decode_links(resource: &'static str, items: &[Value]) -> DecodeResult<Vec<Link>> {
    let mut links = Vec::with_capacity(items.len());
    for item in items {
        let entry = item.as_object().ok_or(DecodeError::UnexpectedShape {
            resource,
            expected: "array of link objects",
        })?;
        links.push(Link::from_document(entry)?);
    }
    Ok(links)
}
