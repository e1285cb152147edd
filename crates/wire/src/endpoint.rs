//! Gateway endpoint configuration and request preparation
//!
//! Turns an encoded record into everything a transport needs to issue the
//! call: method, URL, content type, and the params placed in either the query
//! or the body. Serializing and escaping the params is left to the transport.
//!
//! ```
//! use multisend_wire::{EndpointConfig, SendMethod, SendSmsRequest};
//!
//! let request = SendSmsRequest::new("user", "secret", "me", "0501234567", "hi");
//! let prepared = EndpointConfig::default().prepare(&request, SendMethod::Post);
//!
//! assert_eq!(prepared.url, "https://api.multisend.co.il/MultiSendAPI/sendsms");
//! assert!(prepared.query.is_empty());
//! assert_eq!(prepared.body.get("message"), Some("hi"));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encode::{encode, Params};
use crate::field::Record;

/// Default gateway base address
pub const DEFAULT_BASE_URL: &str = "https://api.multisend.co.il/MultiSendAPI/";

/// Default page for sending SMS
pub const DEFAULT_SEND_PAGE: &str = "sendsms";

/// HTTP method used to submit a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SendMethod {
    /// Params go in the query string
    #[default]
    Get,
    /// Params go in a form body
    Post,
}

impl SendMethod {
    /// Method name as sent on the request line
    pub const fn as_str(self) -> &'static str {
        match self {
            SendMethod::Get => "GET",
            SendMethod::Post => "POST",
        }
    }

    /// Content type header for this method
    pub const fn content_type(self) -> &'static str {
        match self {
            SendMethod::Get => "text/plain",
            SendMethod::Post => "application/x-www-form-urlencoded",
        }
    }
}

/// Where requests are sent
///
/// Use the builder pattern to override defaults:
///
/// ```
/// use multisend_wire::EndpointConfig;
///
/// let config = EndpointConfig::new()
///     .base_url("http://localhost:8080/")
///     .send_page("sms");
/// assert_eq!(config.send_url(), "http://localhost:8080/sms");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base address, including the trailing slash
    pub base_url: String,
    /// Page appended to the base address for send calls
    pub send_page: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            send_page: DEFAULT_SEND_PAGE.to_string(),
        }
    }
}

impl EndpointConfig {
    /// Config with the gateway defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base address
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the send page
    pub fn send_page(mut self, send_page: impl Into<String>) -> Self {
        self.send_page = send_page.into();
        self
    }

    /// Full URL of the send page
    pub fn send_url(&self) -> String {
        format!("{}{}", self.base_url, self.send_page)
    }

    /// Encode `record` and place its params according to `method`
    pub fn prepare<R: Record>(&self, record: &R, method: SendMethod) -> PreparedRequest {
        let params = encode(record);
        let url = self.send_url();
        debug!(
            target: "multisend::endpoint",
            method = method.as_str(),
            url = %url,
            params = params.len(),
            "prepared request"
        );

        let (query, body) = match method {
            SendMethod::Get => (params, Params::new()),
            SendMethod::Post => (Params::new(), params),
        };

        PreparedRequest {
            method,
            url,
            content_type: method.content_type(),
            query,
            body,
        }
    }
}

/// A request ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: SendMethod,
    /// Target URL, without query string
    pub url: String,
    /// Content type header value
    pub content_type: &'static str,
    /// Query params, filled for GET
    pub query: Params,
    /// Form body params, filled for POST
    pub body: Params,
}
