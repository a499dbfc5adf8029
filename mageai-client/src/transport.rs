//! Transport seam for the Mage AI API
//!
//! One `call` is one HTTP round-trip: method, path relative to the `api/`
//! root, optional JSON body, fixed headers. The trait exists so the
//! operations can be driven against a stub in tests; `HttpTransport` is the
//! production implementation. Cancellation and timeout live entirely here,
//! as a single fixed per-call timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};

use crate::ClientConfig;
use crate::error::{ClientError, Result};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Fixed per-call timeout, matching the server client's default.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One HTTP round-trip against the Mage AI API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the raw success body.
    ///
    /// Fails with a transport error on network failure or a non-2xx status;
    /// interpreting the body is the codec's job, not the transport's.
    async fn call(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>>;
}

/// Production transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    api_url: Url,
    api_key: String,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from client configuration.
    ///
    /// The host is normalized with a trailing slash and the `api/` segment is
    /// appended, so `http://host:6789` becomes `http://host:6789/api/`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Self::with_client(config, http)
    }

    /// Build a transport with a caller-configured reqwest client.
    ///
    /// This allows overriding timeouts, proxies, TLS settings, etc.
    pub fn with_client(config: &ClientConfig, http: reqwest::Client) -> Result<Self> {
        let mut host = config.host.clone();
        if !host.ends_with('/') {
            host.push('/');
        }
        let api_url = Url::parse(&host)
            .and_then(|base| base.join("api/"))
            .map_err(|err| ClientError::config(&config.host, err))?;
        Ok(Self {
            api_url,
            api_key: config.api_key.clone(),
            http,
        })
    }

    /// The resolved API root, e.g. "http://localhost:6789/api/".
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        let url = self
            .api_url
            .join(path)
            .map_err(|err| ClientError::config(path, err))?;

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::unexpected_status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> ClientConfig {
        ClientConfig {
            host: host.to_string(),
            api_key: "secret".to_string(),
        }
    }

    #[test]
    fn test_api_url_appends_api_segment() {
        let transport = HttpTransport::new(&config("http://localhost:6789")).unwrap();
        assert_eq!(transport.api_url().as_str(), "http://localhost:6789/api/");
    }

    #[test]
    fn test_api_url_tolerates_trailing_slash() {
        let transport = HttpTransport::new(&config("http://localhost:6789/")).unwrap();
        assert_eq!(transport.api_url().as_str(), "http://localhost:6789/api/");
    }

    #[test]
    fn test_invalid_host_is_a_config_error() {
        let err = HttpTransport::new(&config("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::Config { .. }));
    }
}
