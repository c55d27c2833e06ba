//! Per-operation request options.
//!
//! Each option is independently defaultable: an unset option is omitted
//! from the query string entirely, never sent as a sentinel value. The
//! `timeout` options override the transport read timeout for that call
//! instead of travelling on the wire.

use std::time::Duration;

/// Options for `name/publish`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamePublishOptions {
    pub resolve: Option<bool>,
    pub lifetime: Option<String>,
    pub ttl: Option<String>,
    pub key: Option<String>,
    pub timeout: Option<Duration>,
}

impl NamePublishOptions {
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_bool(&mut params, "resolve", self.resolve);
        push_str(&mut params, "lifetime", self.lifetime.as_deref());
        push_str(&mut params, "ttl", self.ttl.as_deref());
        push_str(&mut params, "key", self.key.as_deref());
        params
    }
}

/// Options for `name/resolve`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameResolveOptions {
    pub recursive: Option<bool>,
    pub nocache: Option<bool>,
    pub timeout: Option<Duration>,
}

impl NameResolveOptions {
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_bool(&mut params, "recursive", self.recursive);
        push_bool(&mut params, "nocache", self.nocache);
        params
    }
}

/// Options for `key/gen`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyGenOptions {
    /// Key algorithm; sent as `type` on the wire.
    pub kind: Option<String>,
    pub size: Option<u64>,
    pub timeout: Option<Duration>,
}

impl KeyGenOptions {
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_str(&mut params, "type", self.kind.as_deref());
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        params
    }
}

fn push_bool(params: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<bool>) {
    if let Some(value) = value {
        params.push((name, value.to_string()));
    }
}

fn push_str(params: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        params.push((name, value.to_owned()));
    }
}
