//! HTTP client for the waste-management backend.
//!
//! Every endpoint answers with an [`ApiEnvelope`]. The backend also reports
//! validation failures (400) and authentication failures (401) as envelopes, so
//! non-2xx bodies are decoded before falling back to the bare HTTP status.

use super::envelope::ApiEnvelope;
use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, Result};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use tracing::{debug, warn};

/// Typed access to the backend API.
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    config: ConsoleConfig,
    http: Client,
}

impl ConsoleClient {
    /// Create a client; the configuration is validated first.
    pub fn new(config: ConsoleConfig) -> Result<Self> {
        let config = config.validate()?;
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub(crate) async fn get(&self, path: &str) -> Result<ApiEnvelope> {
        self.execute(Method::GET, path, |req| req).await
    }

    pub(crate) async fn get_query(&self, path: &str, params: &[(&str, &str)]) -> Result<ApiEnvelope> {
        self.execute(Method::GET, path, |req| req.query(params)).await
    }

    pub(crate) async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<ApiEnvelope> {
        self.execute(Method::POST, path, |req| req.json(body)).await
    }

    pub(crate) async fn put_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<ApiEnvelope> {
        self.execute(Method::PUT, path, |req| req.json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str, params: &[(&str, &str)]) -> Result<ApiEnvelope> {
        self.execute(Method::DELETE, path, |req| req.query(params)).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<ApiEnvelope> {
        let url = self.config.endpoint(path);
        debug!(%method, path, "backend request");

        let response = build(self.http.request(method, &url)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ApiEnvelope>(&body) {
            Ok(envelope) => {
                if !envelope.is_success() {
                    warn!(path, status = status.as_u16(), message = ?envelope.message, "backend reported an error");
                }
                envelope.check(status.as_u16())
            }
            Err(err) if status.is_success() => Err(ConsoleError::Decode(err)),
            Err(_) => {
                warn!(path, status = status.as_u16(), "backend request failed");
                Err(ConsoleError::backend(
                    status.as_u16(),
                    format!("Request failed with status {}: {}", status, body.trim()),
                ))
            }
        }
    }
}

/// Percent-encodes a URI so it can sit inside a path segment.
pub(crate) fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Rejects blank required parameters with the backend's own wording.
pub(crate) fn require(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConsoleError::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(
            encode_segment("http://ex.org/onto#Usine_1"),
            "http%3A%2F%2Fex.org%2Fonto%23Usine_1"
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(ConsoleClient::new(ConsoleConfig::new("ftp://nowhere")).is_err());
    }
}
