//! Typed resources for the cask daemon API.
//!
//! Every successful daemon response is a JSON document; this crate defines
//! the value records those documents decode into and the decoders that
//! produce them. Decoding is pure and total: given the same document a
//! decoder always yields the same record or the same [`DecodeError`], and a
//! record is never partially populated.
//!
//! # Key Types
//!
//! - [`Version`] — daemon version and commit
//! - [`Object`] / [`Link`] — a stored object and its ordered links
//! - [`ObjectStat`] — object size statistics
//! - [`Identity`] — the daemon node's identity
//! - [`Pin`] — a pinned content address
//! - [`Published`] — result of a name publish or resolve
//! - [`Key`] — a named signing key
//! - [`PatchObject`] — the hash/links pair returned by object write paths

pub mod document;
pub mod error;
pub mod identity;
pub mod key;
pub mod name;
pub mod object;
pub mod pin;
pub mod version;

pub use document::{Document, FromDocument};
pub use error::{DecodeError, DecodeResult};
pub use identity::Identity;
pub use key::Key;
pub use name::Published;
pub use object::{Link, Object, ObjectStat, PatchObject};
pub use pin::Pin;
pub use version::Version;
