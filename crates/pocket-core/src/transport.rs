use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::constants::{headers, JSON_CONTENT_TYPE};
use crate::error::{PocketError, Result};

/// HTTP plumbing for the fixed API origin.
///
/// Every call is a single POST attempt. Anything other than `200 OK` becomes
/// [`PocketError::Transport`] carrying the service's `X-Error` header.
#[derive(Clone, Debug)]
pub struct Transport {
    client: reqwest::Client,
    origin: String,
    timeout: Option<Duration>,
}

impl Transport {
    pub fn new(origin: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Self::with_client(client, origin)
    }

    pub fn with_client(client: reqwest::Client, origin: impl Into<String>) -> Result<Self> {
        let origin = origin.into();
        Url::parse(&origin)?;
        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
            timeout: None,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    pub async fn post_json<P, R>(&self, path: &str, payload: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(payload)?;
        let request = self
            .client
            .post(self.endpoint(path))
            .header(headers::ACCEPT, JSON_CONTENT_TYPE)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body);
        self.execute(path, request).await
    }

    pub async fn post_form<P, R>(&self, path: &str, payload: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self
            .client
            .post(self.endpoint(path))
            .header(headers::ACCEPT, JSON_CONTENT_TYPE)
            .form(payload);
        self.execute(path, request).await
    }

    async fn execute<R: DeserializeOwned>(&self, path: &str, request: RequestBuilder) -> Result<R> {
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        debug!(path = %path, status = status.as_u16(), "pocket api response");

        if status != StatusCode::OK {
            return Err(PocketError::Transport {
                status: status.as_u16(),
                message: header_text(response.headers(), headers::ERROR),
                code: header_text(response.headers(), headers::ERROR_CODE),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
