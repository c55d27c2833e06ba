//! HTTP client binding for the cask daemon control API.
//!
//! Translates typed method calls into requests against a daemon's
//! `http://{host}:{port}/api/v0/` endpoints and decodes the responses back
//! into the records defined in [`cask_types`]. The pipeline behind every
//! operation is the same: build the endpoint URL, make one HTTP call, fold
//! the outcome into an envelope, decode.
//!
//! ```rust,ignore
//! use cask_client::{CaskClient, ClientConfig};
//!
//! let client = CaskClient::new(ClientConfig::default());
//! let version = client.version().await?;
//! println!("daemon {} ({})", version.version, version.commit);
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod options;
pub mod transport;

pub use client::CaskClient;
pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use endpoint::build_url;
pub use envelope::{decode_document, decode_resource, Envelope};
pub use error::{ApiError, ApiResult};
pub use options::{KeyGenOptions, NamePublishOptions, NameResolveOptions};
pub use transport::{Transport, DEFAULT_TIMEOUT, PUBLISH_TIMEOUT};

// Re-export the resource records so callers need only this crate.
pub use cask_types::{
    DecodeError, Document, Identity, Key, Link, Object, ObjectStat, PatchObject, Pin, Published,
    Version,
};
