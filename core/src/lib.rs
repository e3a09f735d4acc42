//! Synchronous client for a remote poll-application HTTP API.
//!
//! # Overview
//! Covers the five API operations — list polls, fetch poll results, register,
//! login, cast a vote — plus a pure results aggregator/formatter. Each
//! operation validates its arguments locally, issues one blocking request,
//! and maps the response status onto a typed value or an [`ApiError`]
//! variant.
//!
//! # Design
//! - `PollClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (validates, produces a request)
//!   and `parse_*` (consumes a response), so every path is testable without
//!   a network; blocking convenience methods chain the two through
//!   [`transport::execute`].
//! - Errors form a closed enum callers pattern-match on: validation, the
//!   recognized domain statuses, transport failure, and unrecognized server
//!   errors with status and detail as separate fields.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod report;
pub mod transport;
pub mod types;

pub use client::PollClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use report::{format_poll_results, rank_options, total_votes};
pub use types::{Credentials, OptionTally, Poll, PollOption, PollResults, Token, User, Vote, VoteRequest};
