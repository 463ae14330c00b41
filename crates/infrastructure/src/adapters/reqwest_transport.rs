//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port using the reqwest library.
//! It handles all HTTP communication of the console.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use imageer_application::client::{ApiRequest, ApiResponse, Credentials, HttpMethod};
use imageer_application::error::TransportError;
use imageer_application::ports::Transport;
use reqwest::{Client, Method, Url};

/// Default request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// HTTP transport implementation using reqwest.
///
/// Relative URLs, produced by clients without a base URL, are resolved
/// against the configured origin. A forwarded `Cookie` header stands in for
/// the browser's cookie jar: it accompanies requests whose credential mode
/// allows it.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    origin: Option<Url>,
    cookie: Option<String>,
    timeout_ms: u64,
}

impl ReqwestTransport {
    /// Creates a transport with the given timeout.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "imageer-console/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(timeout_ms: u64) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("imageer-console/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self::with_client(client, timeout_ms))
    }

    /// Creates a transport around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, timeout_ms: u64) -> Self {
        Self {
            client,
            origin: None,
            cookie: None,
            timeout_ms,
        }
    }

    /// Sets the origin relative URLs are resolved against.
    #[must_use]
    pub fn with_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Forwards `cookie` as the `Cookie` header.
    #[must_use]
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    /// Converts a client `HttpMethod` to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn resolve(&self, url: &str) -> Result<Url, TransportError> {
        match Url::parse(url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .origin
                .as_ref()
                .ok_or_else(|| TransportError::InvalidUrl(format!("{url} (no origin configured)")))?
                .join(url)
                .map_err(|e| TransportError::InvalidUrl(format!("{e}: {url}"))),
            Err(e) => Err(TransportError::InvalidUrl(format!("{e}: {url}"))),
        }
    }

    fn sends_cookie(&self, credentials: Credentials, url: &Url) -> bool {
        match credentials {
            Credentials::Include => true,
            Credentials::SameOrigin => self
                .origin
                .as_ref()
                .is_some_and(|origin| origin.origin() == url.origin()),
            Credentials::Omit => false,
        }
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return TransportError::ConnectionFailed(error.to_string());
        }
        if error.is_body() || error.is_decode() {
            return TransportError::Body(error.to_string());
        }
        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.resolve(&request.url)?;
        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url.clone());

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(cookie) = &self.cookie
            && self.sends_cookie(request.credentials, &url)
        {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_ms))?;

        let status = response.status();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?
            .to_vec();

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}
