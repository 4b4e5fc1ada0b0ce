//! The SemanticPen API client and its transport layer
//!
//! [`Client`] owns a [`reqwest::Client`] configured with the request timeout
//! and attaches bearer-token authentication to every request. The transport
//! returns the raw status code and body bytes; interpreting them is the job
//! of the resource operations built on top.

use reqwest::{Method, StatusCode, header};
use serde::Serialize;
use std::fmt;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Raw response from the transport layer: status code plus body bytes
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

/// Client for the SemanticPen article generation API
///
/// Holds no mutable state: the configuration and the underlying connection
/// pool are read-only after construction, so a `Client` can be shared freely
/// across tasks (clone it, or put it behind an `Arc`).
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    config: Config,
    http: reqwest::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish()
    }
}

impl Client {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, Config::default())
    }

    /// Create a client with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `config.base_url` is not a valid URL,
    /// or a network error if the underlying HTTP client cannot be built.
    pub fn with_config(api_key: impl Into<String>, config: Config) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| Error::Validation {
            field: "base_url".to_string(),
            message: format!("invalid base URL: {e}"),
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Network)?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
            http,
        })
    }

    /// The configuration this client was constructed with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute an authenticated request against the API.
    ///
    /// Serializes the optional body to JSON, attaches the bearer token and
    /// content type, and returns the raw status plus body bytes. Timeouts
    /// map to [`Error::Timeout`], other transport failures to
    /// [`Error::Network`]. No retries happen at this layer.
    pub(crate) async fn request<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!(method = %method, url = %url, "sending API request");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            let payload = serde_json::to_vec(body)?;
            if self.config.debug {
                tracing::debug!(
                    authorization = "Bearer ***",
                    content_type = "application/json",
                    body = %String::from_utf8_lossy(&payload),
                    "request details"
                );
            }
            request = request.body(payload);
        } else if self.config.debug {
            tracing::debug!(
                authorization = "Bearer ***",
                content_type = "application/json",
                "request details"
            );
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.config.timeout)
            } else {
                Error::Network(e)
            }
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(self.config.timeout)
                } else {
                    Error::Network(e)
                }
            })?
            .to_vec();

        if self.config.debug {
            tracing::debug!(
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&body),
                "response details"
            );
        } else {
            tracing::trace!(status = status.as_u16(), "received API response");
        }

        Ok(RawResponse { status, body })
    }

    /// Check connectivity to the API.
    ///
    /// Issues a bodiless request to the connectivity-check endpoint.
    ///
    /// # Errors
    ///
    /// Returns the translated API error for any non-OK response, or the
    /// transport error if the request never completed.
    pub async fn test_connection(&self) -> Result<()> {
        let response = self
            .request::<()>(Method::GET, "/test-connection", None)
            .await?;

        if response.status != StatusCode::OK {
            return Err(Error::from_response(response.status, &response.body));
        }

        Ok(())
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio_test::assert_ok;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: String) -> Client {
        Client::with_config(
            "test-key",
            Config {
                base_url,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn invalid_base_url_is_rejected_at_construction() {
        let result = Client::with_config(
            "test-key",
            Config {
                base_url: "not a url".into(),
                ..Default::default()
            },
        );

        match result {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "base_url"),
            other => panic!("expected Validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn debug_output_redacts_the_api_key() {
        let client = Client::new("super-secret-key").unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn requests_carry_bearer_auth_and_content_type() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/test-connection"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        assert_ok!(client.test_connection().await);
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_normalized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/test-connection"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(format!("{}/", server.uri()));
        assert_ok!(client.test_connection().await);
    }

    #[tokio::test]
    async fn test_connection_translates_non_ok_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/test-connection"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
            .mount(&server)
            .await;

        let client = test_client(server.uri());
        match client.test_connection().await {
            Err(Error::Api(api)) => {
                assert_eq!(api.status_code, 503);
                assert_eq!(api.message, "maintenance window");
            }
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn slow_response_maps_to_timeout_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/test-connection"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = Client::with_config(
            "test-key",
            Config {
                base_url: server.uri(),
                timeout: Duration::from_millis(50),
                ..Default::default()
            },
        )
        .unwrap();

        match client.test_connection().await {
            Err(Error::Timeout(timeout)) => assert_eq!(timeout, Duration::from_millis(50)),
            other => panic!("expected Timeout error, got {:?}", other.map(|_| ())),
        }
    }
}
