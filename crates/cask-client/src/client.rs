//! Client facade: one method per daemon capability.
//!
//! Every method is the same pipeline: build the endpoint URL, make exactly
//! one HTTP call, decode the envelope with the matching resource decoder.
//! No retries, no caching, no state mutation. The client is cheap to clone
//! and safe to share across tasks; the config never changes after
//! construction.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bytes::Bytes;
use reqwest::multipart::Form;

use cask_types::{
    Document, Identity, Key, Object, ObjectStat, PatchObject, Pin, Published, Version,
};

use crate::config::ClientConfig;
use crate::envelope::{decode_document, decode_resource, Envelope};
use crate::error::ApiResult;
use crate::options::{KeyGenOptions, NamePublishOptions, NameResolveOptions};
use crate::transport::{Transport, DEFAULT_TIMEOUT, PUBLISH_TIMEOUT};
use crate::endpoint::build_url;

#[derive(Clone, Debug)]
pub struct CaskClient {
    config: ClientConfig,
    transport: Transport,
}

impl CaskClient {
    pub fn new(config: ClientConfig) -> Self {
        let transport = Transport::new(config.user_agent.clone());
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get(
        &self,
        path: &str,
        args: &[&str],
        params: &[(&str, String)],
        timeout: Duration,
    ) -> Envelope {
        let url = build_url(&self.config, path, args, params);
        self.transport.get(&url, timeout).await
    }

    // ---- Daemon introspection ----

    pub async fn version(&self) -> ApiResult<Version> {
        decode_resource(self.get("version", &[], &[], DEFAULT_TIMEOUT).await)
    }

    pub async fn id(&self) -> ApiResult<Identity> {
        decode_resource(self.get("id", &[], &[], DEFAULT_TIMEOUT).await)
    }

    // ---- Swarm and bootstrap ----

    pub async fn swarm_peers(&self) -> ApiResult<Document> {
        decode_document(self.get("swarm/peers", &[], &[], DEFAULT_TIMEOUT).await)
    }

    pub async fn swarm_addrs(&self) -> ApiResult<Document> {
        decode_document(self.get("swarm/addrs", &[], &[], DEFAULT_TIMEOUT).await)
    }

    pub async fn bootstrap_list(&self) -> ApiResult<Document> {
        decode_document(self.get("bootstrap/list", &[], &[], DEFAULT_TIMEOUT).await)
    }

    // ---- Blocks ----

    /// Fetch a raw block. The body is returned untouched, never decoded.
    pub async fn block_get(&self, key: &str) -> ApiResult<Bytes> {
        self.get("block/get", &[key], &[], DEFAULT_TIMEOUT).await
    }

    // ---- Objects ----

    pub async fn object_get(&self, key: &str) -> ApiResult<Object> {
        decode_resource(self.get("object/get", &[key], &[], DEFAULT_TIMEOUT).await)
    }

    /// Fetch an object in its raw protobuf encoding, skipping structured
    /// decoding entirely.
    pub async fn object_get_protobuf(&self, key: &str) -> ApiResult<Bytes> {
        let params = [("encoding", "protobuf".to_string())];
        self.get("object/get", &[key], &params, DEFAULT_TIMEOUT).await
    }

    /// Store an object. The payload travels as a base64-encoded `data`
    /// multipart field.
    pub async fn object_put(&self, data: &[u8], pin: bool) -> ApiResult<PatchObject> {
        let params = [
            ("datafieldenc", "base64".to_string()),
            ("pin", pin.to_string()),
        ];
        let url = build_url(&self.config, "object/put", &[], &params);
        let form = Form::new().text("data", BASE64.encode(data));
        decode_resource(
            self.transport
                .post_multipart(&url, form, DEFAULT_TIMEOUT)
                .await,
        )
    }

    pub async fn object_new(&self) -> ApiResult<PatchObject> {
        decode_resource(self.get("object/new", &[], &[], DEFAULT_TIMEOUT).await)
    }

    pub async fn object_patch_add_link(
        &self,
        root: &str,
        name: &str,
        target: &str,
    ) -> ApiResult<PatchObject> {
        decode_resource(
            self.get(
                "object/patch/add-link",
                &[root, name, target],
                &[],
                DEFAULT_TIMEOUT,
            )
            .await,
        )
    }

    pub async fn object_stat(&self, key: &str) -> ApiResult<ObjectStat> {
        decode_resource(self.get("object/stat", &[key], &[], DEFAULT_TIMEOUT).await)
    }

    // ---- Pins ----

    pub async fn pin_ls(&self) -> ApiResult<Vec<Pin>> {
        let doc = decode_document(self.get("pin/ls", &[], &[], DEFAULT_TIMEOUT).await)?;
        Ok(Pin::from_keys_document(&doc)?)
    }

    // ---- Names ----

    pub async fn name_publish(
        &self,
        path: &str,
        opts: &NamePublishOptions,
    ) -> ApiResult<Published> {
        let timeout = opts.timeout.unwrap_or(PUBLISH_TIMEOUT);
        decode_resource(
            self.get("name/publish", &[path], &opts.query_params(), timeout)
                .await,
        )
    }

    /// Resolve a published name. With `name` unset the daemon resolves the
    /// node's own name and no `arg` parameter is sent at all.
    pub async fn name_resolve(
        &self,
        name: Option<&str>,
        opts: &NameResolveOptions,
    ) -> ApiResult<Published> {
        let args: Vec<&str> = name.into_iter().collect();
        let timeout = opts.timeout.unwrap_or(DEFAULT_TIMEOUT);
        decode_resource(
            self.get("name/resolve", &args, &opts.query_params(), timeout)
                .await,
        )
    }

    // ---- Keys ----

    pub async fn key_gen(&self, name: &str, opts: &KeyGenOptions) -> ApiResult<Key> {
        let timeout = opts.timeout.unwrap_or(DEFAULT_TIMEOUT);
        decode_resource(
            self.get("key/gen", &[name], &opts.query_params(), timeout)
                .await,
        )
    }

    pub async fn key_list(&self) -> ApiResult<Vec<Key>> {
        let doc = decode_document(self.get("key/list", &[], &[], DEFAULT_TIMEOUT).await)?;
        Ok(Key::list_from_document(&doc)?)
    }
}

impl Default for CaskClient {
    /// Client for the default local daemon address.
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
