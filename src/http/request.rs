//! Plain-data description of an outbound API request.
//!
//! The façade builds [`HttpRequest`] values; the executor turns them into
//! network calls. Keeping the request as data makes it comparable in tests.

use serde_json::Value;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCEPT: &str = "Accept";
pub const CUSTOMER_API_ID: &str = "X-Customer-Api-Id";
pub const SECRET: &str = "X-Secret";
pub const ADMIN_SECRET: &str = "X-Admin-Secret";

pub const APPLICATION_JSON: &str = "application/json";

/// HTTP verb of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether a JSON payload is sent with this verb.
    pub fn allows_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully resolved API request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Creates a request, dropping the body for verbs that do not carry one.
    pub fn new(
        method: HttpMethod,
        url: impl Into<String>,
        headers: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Self {
        let body = body.filter(|b| method.allows_body() && !b.is_null());
        Self {
            method,
            url: url.into(),
            headers,
            body,
        }
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
