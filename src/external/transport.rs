//! HTTP transport seam for the push provider.
//!
//! The sender never talks to reqwest directly; it posts through the
//! `HttpTransport` trait so tests can substitute a mock and assert on what
//! was sent. `ReqwestTransport` is the production implementation.

use async_trait::async_trait;

use crate::error::PushResult;

/// Raw response of a transport POST: status code plus body text.
///
/// Status interpretation belongs to the caller - the transport reports
/// error statuses as ordinary responses, not failures.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

/// Trait for the HTTP collaborator that performs a single POST.
///
/// Implementations are shared across all in-flight sends of a process and
/// must be safe for concurrent use.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue one POST and return the raw response.
    ///
    /// # Arguments
    /// * `url` - Absolute request URL
    /// * `headers` - Header name/value pairs attached to the request
    /// * `body` - Request body text
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> PushResult<HttpResponse>;
}

/// Production transport backed by a shared `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an explicitly constructed client (see
    /// [`build_http_client`](crate::external::build_http_client))
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> PushResult<HttpResponse> {
        let mut request = self.client.post(url).body(body);

        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
