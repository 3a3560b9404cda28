// crates/user-conformance-client/src/http.rs
// ============================================================================
// Module: HTTP Resource Client
// Description: Blocking reqwest client for the Users resource.
// Purpose: Issue the five CRUD verbs and return uninterpreted envelopes.
// Dependencies: reqwest, serde, serde_json, url, user-conformance-core
// ============================================================================

//! ## Overview
//! The client issues bounded blocking requests and returns raw envelopes.
//! It applies no interpretation to statuses or bodies; decoding and
//! assertion belong to the verifier. Timeouts, a response-size limit, a
//! fixed user agent, and disabled redirects bound every exchange, and a
//! configured bearer token is attached to each request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use serde::Deserialize;
use serde_json::Value;
use url::Url;
use user_conformance_core::Envelope;
use user_conformance_core::ResourceClient;
use user_conformance_core::TransportError;
use user_conformance_core::UserId;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the HTTP resource client.
///
/// # Invariants
/// - `timeout_ms` applies to the full request lifecycle.
/// - `max_response_bytes` is a hard upper bound on response bodies.
/// - Redirects are never followed regardless of configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceClientConfig {
    /// Base URL of the remote API, up to but not including `/users`.
    pub base_url: String,
    /// Optional bearer token attached to every request.
    pub auth_token: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl ResourceClientConfig {
    /// Creates a configuration for the given base URL with default limits.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout_ms: 10_000,
            max_response_bytes: 1024 * 1024,
            user_agent: "user-conformance/0.1".to_string(),
        }
    }

    /// Attaches a bearer token for Authorization headers.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Blocking HTTP implementation of the resource-client seam.
#[derive(Debug)]
pub struct HttpResourceClient {
    /// Client configuration, including limits and auth.
    config: ResourceClientConfig,
    /// Parsed base URL.
    base: Url,
    /// Underlying blocking HTTP client.
    client: Client,
}

impl HttpResourceClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] when the base URL does not parse or
    /// the HTTP client cannot be constructed.
    pub fn new(config: ResourceClientConfig) -> Result<Self, TransportError> {
        let base = Url::parse(&config.base_url)
            .map_err(|err| TransportError::Build(format!("invalid base url: {err}")))?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(|err| TransportError::Build(format!("http client build failed: {err}")))?;
        Ok(Self {
            config,
            base,
            client,
        })
    }

    /// Builds the collection or entity endpoint URL.
    fn endpoint(&self, id: Option<UserId>) -> Result<Url, TransportError> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| TransportError::Build("base url cannot be a base".to_string()))?;
            segments.pop_if_empty().push("users");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    /// Sends one request and captures the raw envelope.
    fn dispatch(
        &self,
        method: Method,
        id: Option<UserId>,
        payload: Option<&Value>,
    ) -> Result<Envelope, TransportError> {
        let url = self.endpoint(id)?;
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(payload) = payload {
            let body = serde_json::to_string(payload)
                .map_err(|err| TransportError::Build(format!("payload encoding failed: {err}")))?;
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }
        let response = request
            .send()
            .map_err(|err| TransportError::Send(err.to_string()))?;
        let status = response.status().as_u16();
        let body = read_body_limited(response, self.config.max_response_bytes)?;
        Ok(Envelope::new(status, body))
    }
}

impl ResourceClient for HttpResourceClient {
    fn list(&self) -> Result<Envelope, TransportError> {
        self.dispatch(Method::GET, None, None)
    }

    fn create(&self, payload: &Value) -> Result<Envelope, TransportError> {
        self.dispatch(Method::POST, None, Some(payload))
    }

    fn get(&self, id: UserId) -> Result<Envelope, TransportError> {
        self.dispatch(Method::GET, Some(id), None)
    }

    fn replace(&self, id: UserId, payload: &Value) -> Result<Envelope, TransportError> {
        self.dispatch(Method::PUT, Some(id), Some(payload))
    }

    fn modify(&self, id: UserId, payload: &Value) -> Result<Envelope, TransportError> {
        self.dispatch(Method::PATCH, Some(id), Some(payload))
    }

    fn remove(&self, id: UserId) -> Result<Envelope, TransportError> {
        self.dispatch(Method::DELETE, Some(id), None)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads the response body as text while enforcing a byte limit.
fn read_body_limited(response: Response, max_bytes: usize) -> Result<String, TransportError> {
    let limit = u64::try_from(max_bytes)
        .map_err(|_| TransportError::Read("response size limit exceeds u64".to_string()))?
        .saturating_add(1);
    let mut buf = Vec::new();
    let mut handle = response.take(limit);
    handle
        .read_to_end(&mut buf)
        .map_err(|err| TransportError::Read(format!("failed to read response: {err}")))?;
    if buf.len() > max_bytes {
        return Err(TransportError::Read("response exceeds size limit".to_string()));
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
