//! HTTP request builder and response parser for the poll API.
//!
//! # Design
//! `PollClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that validates
//! arguments and produces an `HttpRequest`, and a `parse_*` method that maps
//! the `HttpResponse` status onto a typed result. Argument validation lives
//! in `build_*`, so bad arguments are rejected before a request even exists.
//! The blocking convenience methods (`fetch_polls`, `login`, ...) chain
//! build → [`transport::execute`] → parse for callers that just want the
//! one-shot call.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::report;
use crate::transport;
use crate::types::{Credentials, Poll, PollResults, Token, User, Vote, VoteRequest};

const JSON: (&str, &str) = ("content-type", "application/json");
const FORM: (&str, &str) = ("content-type", "application/x-www-form-urlencoded");

/// Synchronous client for the poll API, bound to one base URL.
#[derive(Debug, Clone)]
pub struct PollClient {
    base_url: String,
}

impl PollClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // List polls
    // -----------------------------------------------------------------------

    pub fn build_fetch_polls(&self, skip: i64, limit: i64) -> Result<HttpRequest, ApiError> {
        if skip < 0 {
            return Err(ApiError::Validation(
                "skip must be non-negative".to_string(),
            ));
        }
        if limit <= 0 {
            return Err(ApiError::Validation("limit must be positive".to_string()));
        }
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/polls?skip={skip}&limit={limit}", self.base_url),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_fetch_polls(&self, response: HttpResponse) -> Result<Vec<Poll>, ApiError> {
        match response.status {
            200 => decode(&response.body),
            status => Err(ApiError::from_status(status, &response.body)),
        }
    }

    /// Fetch one page of polls.
    pub fn fetch_polls(&self, skip: i64, limit: i64) -> Result<Vec<Poll>, ApiError> {
        let request = self.build_fetch_polls(skip, limit)?;
        self.parse_fetch_polls(transport::execute(&request)?)
    }

    // -----------------------------------------------------------------------
    // Poll results
    // -----------------------------------------------------------------------

    pub fn build_poll_results(&self, poll_id: i64) -> Result<HttpRequest, ApiError> {
        if poll_id <= 0 {
            return Err(ApiError::Validation(
                "poll id must be a positive integer".to_string(),
            ));
        }
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/polls/{poll_id}/results", self.base_url),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_poll_results(&self, response: HttpResponse) -> Result<PollResults, ApiError> {
        match response.status {
            200 => decode(&response.body),
            404 => Err(ApiError::NotFound),
            status => Err(ApiError::from_status(status, &response.body)),
        }
    }

    /// Fetch the aggregated results for one poll.
    pub fn poll_results(&self, poll_id: i64) -> Result<PollResults, ApiError> {
        let request = self.build_poll_results(poll_id)?;
        self.parse_poll_results(transport::execute(&request)?)
    }

    /// Fetch results and render them as a text report.
    pub fn poll_results_summary(&self, poll_id: i64) -> Result<String, ApiError> {
        Ok(report::format_poll_results(&self.poll_results(poll_id)?))
    }

    // -----------------------------------------------------------------------
    // Register
    // -----------------------------------------------------------------------

    pub fn build_register(&self, username: &str, password: &str) -> Result<HttpRequest, ApiError> {
        let credentials = validated_credentials(username, password)?;
        let body = serde_json::to_string(&credentials)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/register", self.base_url),
            headers: vec![(JSON.0.to_string(), JSON.1.to_string())],
            body: Some(body),
        })
    }

    pub fn parse_register(&self, response: HttpResponse) -> Result<User, ApiError> {
        match response.status {
            200 => decode(&response.body),
            400 => Err(ApiError::Conflict),
            status => Err(ApiError::from_status(status, &response.body)),
        }
    }

    /// Register a new user.
    pub fn register(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let request = self.build_register(username, password)?;
        self.parse_register(transport::execute(&request)?)
    }

    // -----------------------------------------------------------------------
    // Login
    // -----------------------------------------------------------------------

    pub fn build_login(&self, username: &str, password: &str) -> Result<HttpRequest, ApiError> {
        let credentials = validated_credentials(username, password)?;
        let body = serde_urlencoded::to_string(&credentials)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/login", self.base_url),
            headers: vec![(FORM.0.to_string(), FORM.1.to_string())],
            body: Some(body),
        })
    }

    pub fn parse_login(&self, response: HttpResponse) -> Result<Token, ApiError> {
        match response.status {
            200 => decode(&response.body),
            400 => Err(ApiError::InvalidCredentials),
            status => Err(ApiError::from_status(status, &response.body)),
        }
    }

    /// Log in and obtain a bearer token.
    pub fn login(&self, username: &str, password: &str) -> Result<Token, ApiError> {
        let request = self.build_login(username, password)?;
        self.parse_login(transport::execute(&request)?)
    }

    // -----------------------------------------------------------------------
    // Vote
    // -----------------------------------------------------------------------

    pub fn build_vote(
        &self,
        poll_id: i64,
        option_id: i64,
        access_token: &str,
    ) -> Result<HttpRequest, ApiError> {
        if poll_id <= 0 {
            return Err(ApiError::Validation(
                "poll id must be a positive integer".to_string(),
            ));
        }
        if option_id <= 0 {
            return Err(ApiError::Validation(
                "option id must be a positive integer".to_string(),
            ));
        }
        if access_token.is_empty() {
            return Err(ApiError::Validation(
                "access token is required for voting".to_string(),
            ));
        }
        let body = serde_json::to_string(&VoteRequest { option_id })
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/polls/{poll_id}/vote", self.base_url),
            headers: vec![
                (JSON.0.to_string(), JSON.1.to_string()),
                (
                    "authorization".to_string(),
                    format!("Bearer {access_token}"),
                ),
            ],
            body: Some(body),
        })
    }

    pub fn parse_vote(&self, response: HttpResponse) -> Result<Vote, ApiError> {
        match response.status {
            200 => decode(&response.body),
            401 => Err(ApiError::Unauthorized),
            404 => Err(ApiError::NotFound),
            status => Err(ApiError::from_status(status, &response.body)),
        }
    }

    /// Cast a vote on a poll option.
    pub fn vote(&self, poll_id: i64, option_id: i64, access_token: &str) -> Result<Vote, ApiError> {
        let request = self.build_vote(poll_id, option_id, access_token)?;
        self.parse_vote(transport::execute(&request)?)
    }
}

fn validated_credentials(username: &str, password: &str) -> Result<Credentials, ApiError> {
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "username and password are required".to_string(),
        ));
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}
