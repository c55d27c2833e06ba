//! Byte-level HTTP transport.
//!
//! The adapter owns the boundary between this crate and `reqwest`: it sends
//! one request, folds any non-200 status into [`ApiError::Status`] with the
//! response body verbatim, and hands back raw bytes otherwise. It never
//! inspects or decodes a success body.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::USER_AGENT;
use reqwest::multipart::Form;
use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Default read timeout for daemon calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Name publication can take much longer than a read.
pub const PUBLISH_TIMEOUT: Duration = Duration::from_millis(60000);

#[derive(Clone, Debug)]
pub struct Transport {
    http: reqwest::Client,
    user_agent: String,
}

impl Transport {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            user_agent: user_agent.into(),
        }
    }

    /// GET a URL, returning the raw response body.
    pub async fn get(&self, url: &str, timeout: Duration) -> ApiResult<Bytes> {
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(timeout)
            .send()
            .await?;
        self.read_body("GET", url, response).await
    }

    /// POST a multipart form to a URL, returning the raw response body.
    pub async fn post_multipart(
        &self,
        url: &str,
        form: Form,
        timeout: Duration,
    ) -> ApiResult<Bytes> {
        let response = self
            .http
            .post(url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(timeout)
            .multipart(form)
            .send()
            .await?;
        self.read_body("POST", url, response).await
    }

    async fn read_body(&self, method: &str, url: &str, response: Response) -> ApiResult<Bytes> {
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            debug!(method, url, status = status.as_u16(), "daemon returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let body = response.bytes().await?;
        debug!(method, url, len = body.len(), "daemon response received");
        Ok(body)
    }
}
