//! Domain DTOs for the poll API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. Each field is
//! declared explicitly so a 2xx body that does not match becomes a
//! `MalformedResponse` error instead of silently defaulting. The one
//! deliberate default is `PollResults::results`: a poll with no votes may
//! come back without the field, and that is a legal zero-votes state.

use serde::{Deserialize, Serialize};

/// A poll as returned by `GET /polls`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Poll {
    pub id: i64,
    pub question: String,
    pub created_at: String,
    pub options: Vec<PollOption>,
}

/// One selectable option on a poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollOption {
    pub id: i64,
    pub text: String,
}

/// Aggregated results for one poll, as returned by
/// `GET /polls/{id}/results`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollResults {
    pub poll_id: i64,
    pub question: String,
    /// Per-option tallies in server insertion order. The order carries no
    /// ranking meaning; ranking is computed by [`crate::report`].
    #[serde(default)]
    pub results: Vec<OptionTally>,
}

/// Vote count for a single option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionTally {
    pub option_id: i64,
    pub text: String,
    pub vote_count: u64,
}

/// Username/password pair. JSON body for `/register`, form body for
/// `/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A registered user, as returned by `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Bearer token issued by `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Request payload for `POST /polls/{id}/vote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRequest {
    pub option_id: i64,
}

/// A recorded vote, as returned by the vote endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    pub id: i64,
    pub user_id: i64,
    pub option_id: i64,
    pub created_at: String,
}
