//! Response envelope and the decode pipeline.
//!
//! A transport call yields an [`Envelope`]: either the raw body bytes or the
//! failure that stopped the call. Decoding short-circuits on a failed
//! envelope, so a transport or status failure is propagated unchanged and
//! never reaches JSON parsing. A body that is not valid JSON is
//! [`ApiError::Parse`], distinct from every transport failure, so callers
//! can tell "daemon unreachable" from "daemon returned garbage".

use bytes::Bytes;
use cask_types::{Document, FromDocument};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Outcome of one transport call, consumed by a decoder.
pub type Envelope = ApiResult<Bytes>;

/// Decode an envelope into a generic JSON document.
pub fn decode_document(envelope: Envelope) -> ApiResult<Document> {
    let bytes = envelope?;
    let value: Value = serde_json::from_slice(&bytes)?;
    match value {
        Value::Object(doc) => Ok(doc),
        _ => Err(ApiError::Decode(cask_types::DecodeError::UnexpectedShape {
            resource: "response",
            expected: "object",
        })),
    }
}

/// Decode an envelope into a typed resource.
pub fn decode_resource<T: FromDocument>(envelope: Envelope) -> ApiResult<T> {
    let doc = decode_document(envelope)?;
    Ok(T::from_document(&doc)?)
}
