//! HTTP transport for the DB-Forge gateway.
//!
//! One `send` path for every operation: build the request, send it, capture
//! status and body, classify failures. Connection reuse, TLS, redirects and
//! timeout enforcement all live inside [`reqwest::Client`]; this layer never
//! retries and holds no state beyond the immutable base URL.

use log::{debug, warn};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Instant;

use crate::error::{DbForgeError, Result};

#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub(crate) fn new(base_url: &str, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get(&self, path: &str, query: &[(String, String)]) -> Result<JsonValue> {
        self.send(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<JsonValue> {
        let body = serde_json::to_value(body).map_err(|e| DbForgeError::GenericError {
            status_code: 0,
            message: format!("failed to serialize request body: {}", e),
            code: None,
        })?;
        self.send(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<JsonValue> {
        self.send(Method::POST, path, &[], None).await
    }

    /// One request/response round trip.
    ///
    /// Returns the parsed JSON body on status < 400. Failures classify in
    /// order: transport errors first (timeout, connection, other), then
    /// unparseable bodies, then status >= 400 with its optional error
    /// envelope.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<JsonValue>,
    ) -> Result<JsonValue> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http_client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        debug!("[FORGE_HTTP] Sending {} {}", method, url);
        let start = Instant::now();

        let response = request.send().await.map_err(|e| {
            warn!(
                "[FORGE_HTTP] Transport failure for {} {}: {} duration_ms={}",
                method,
                url,
                e,
                start.elapsed().as_millis()
            );
            DbForgeError::from(e)
        })?;

        let status = response.status().as_u16();
        debug!(
            "[FORGE_HTTP] Response received: status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );

        let text = response.text().await?;
        let parsed: JsonValue = serde_json::from_str(&text).map_err(|e| {
            warn!("[FORGE_HTTP] Unparseable body (status={}): {}", status, e);
            DbForgeError::parse_failure(status, &e)
        })?;

        if status >= 400 {
            let err = DbForgeError::from_status(status, &parsed);
            warn!("[FORGE_HTTP] Gateway error: status={} message=\"{}\"", status, err);
            return Err(err);
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let transport = HttpTransport::new("http://db.localhost/", reqwest::Client::new());
        assert_eq!(transport.base_url(), "http://db.localhost");
    }

    #[test]
    fn test_base_url_without_slash_unchanged() {
        let transport = HttpTransport::new("http://db.localhost:8080", reqwest::Client::new());
        assert_eq!(transport.base_url(), "http://db.localhost:8080");
    }
}
