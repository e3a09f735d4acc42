//! HTTP request/response descriptions as plain data.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values;
//! the actual round-trip happens in [`crate::transport`] (or in a caller that
//! supplies its own executor). Keeping the request/response shapes as owned
//! plain data makes every build/parse path testable without a network.

/// HTTP method for a request. The poll API only uses GET and POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `PollClient::build_*` methods. `path` is the full URL including
/// the base URL and any query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed after executing an `HttpRequest`, then passed to
/// `PollClient::parse_*` methods for status mapping and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
