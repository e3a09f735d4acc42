//! Blocking HTTP executor backed by ureq.
//!
//! # Design
//! Bridges the plain-data [`HttpRequest`]/[`HttpResponse`] types to a real
//! network round-trip. ureq's status-as-error behavior is disabled so 4xx/5xx
//! responses come back as data and status interpretation stays in the
//! client's `parse_*` methods. Anything that keeps a response from being
//! read (connect failure, timeout, body read error) maps to
//! `ApiError::Transport`. One call, one request: no retries and no pooling
//! beyond the agent's own.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

const TIMEOUT: Duration = Duration::from_secs(10);

/// Execute an `HttpRequest` and return the raw `HttpResponse`.
pub fn execute(request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(TIMEOUT))
        .build()
        .new_agent();

    let mut response = match request.method {
        HttpMethod::Get => {
            let mut req = agent.get(&request.path);
            for (name, value) in &request.headers {
                req = req.header(name.as_str(), value.as_str());
            }
            req.call()
        }
        HttpMethod::Post => {
            let mut req = agent.post(&request.path);
            for (name, value) in &request.headers {
                req = req.header(name.as_str(), value.as_str());
            }
            match &request.body {
                Some(body) => req.send(body.as_bytes()),
                None => req.send_empty(),
            }
        }
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_refused_maps_to_transport_error() {
        // Port 1 on loopback is never listening.
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: "http://127.0.0.1:1/polls".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let err = execute(&request).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
