//! Plain HTTP transport used by the pagination drivers and the seat-map
//! pipeline.
//!
//! The drivers only depend on the [`Transport`] trait so that tests can
//! script responses without a network. [`HttpTransport`] is the `reqwest`
//! implementation used in production.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;

/// Ordered query pairs. Keys may repeat (list filters are sent once per entry).
pub type Query = [(String, String)];

/// A successful JSON response.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    pub status: u16,
    pub reason: String,
    pub body: serde_json::Value,
}

/// A successful HTML response. The body carries no structure until it is
/// passed through the [`html`](crate::html) locator.
#[derive(Debug, Clone)]
pub struct HtmlResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

/// The two fetch operations the extraction pipeline consumes.
///
/// Implementations map I/O failures to [`ScraperError::Http`], non-2xx
/// statuses to [`ScraperError::UnexpectedStatus`], and undecodable bodies to
/// [`ScraperError::Deserialize`] / [`ScraperError::InvalidUtf8`].
pub trait Transport: Send + Sync {
    fn fetch_json(
        &self,
        endpoint: &str,
        query: &Query,
    ) -> impl Future<Output = Result<JsonResponse, ScraperError>> + Send;

    fn fetch_html(
        &self,
        endpoint: &str,
        query: &Query,
    ) -> impl Future<Output = Result<HtmlResponse, ScraperError>> + Send;
}

/// `reqwest`-backed [`Transport`]. Holds no per-request state; each fetch
/// releases its connection back to the pool before returning.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request and returns status, reason phrase and raw body of
    /// a 2xx response.
    async fn get(
        &self,
        endpoint: &str,
        query: &Query,
    ) -> Result<(u16, String, Vec<u8>), ScraperError> {
        let url = Url::parse(endpoint).map_err(|e| ScraperError::InvalidUrl {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        tracing::trace!(endpoint, params = query.len(), "sending request");
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_owned();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                reason,
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok((status.as_u16(), reason, body.to_vec()))
    }
}

impl Transport for HttpTransport {
    async fn fetch_json(
        &self,
        endpoint: &str,
        query: &Query,
    ) -> Result<JsonResponse, ScraperError> {
        let (status, reason, body) = self.get(endpoint, query).await?;
        let body = serde_json::from_slice(&body).map_err(|e| ScraperError::Deserialize {
            context: endpoint.to_owned(),
            source: e,
        })?;
        Ok(JsonResponse {
            status,
            reason,
            body,
        })
    }

    async fn fetch_html(
        &self,
        endpoint: &str,
        query: &Query,
    ) -> Result<HtmlResponse, ScraperError> {
        let (status, reason, body) = self.get(endpoint, query).await?;
        let body = String::from_utf8(body).map_err(|e| ScraperError::InvalidUtf8 {
            context: endpoint.to_owned(),
            source: e,
        })?;
        Ok(HtmlResponse {
            status,
            reason,
            body,
        })
    }
}
