use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Poll {
    pub id: i64,
    pub question: String,
    pub created_at: String,
    pub options: Vec<PollOption>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PollOption {
    pub id: i64,
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PollResults {
    pub poll_id: i64,
    pub question: String,
    pub results: Vec<OptionTally>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptionTally {
    pub option_id: i64,
    pub text: String,
    pub vote_count: u64,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Deserialize)]
pub struct VoteRequest {
    pub option_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vote {
    pub id: i64,
    pub user_id: i64,
    pub option_id: i64,
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

struct StoredUser {
    id: i64,
    password: String,
}

#[derive(Default)]
pub struct AppState {
    polls: Vec<Poll>,
    users: HashMap<String, StoredUser>,
    tokens: HashMap<String, i64>,
    votes: Vec<Vote>,
    next_user_id: i64,
    next_vote_id: i64,
}

impl AppState {
    /// Two sample polls so list/results endpoints have data from the start.
    fn seeded() -> Self {
        let created_at = Utc::now().to_rfc3339();
        AppState {
            polls: vec![
                Poll {
                    id: 1,
                    question: "Favorite language?".to_string(),
                    created_at: created_at.clone(),
                    options: vec![
                        PollOption { id: 1, text: "Rust".to_string() },
                        PollOption { id: 2, text: "Python".to_string() },
                        PollOption { id: 3, text: "Go".to_string() },
                    ],
                },
                Poll {
                    id: 2,
                    question: "Tabs or spaces?".to_string(),
                    created_at,
                    options: vec![
                        PollOption { id: 4, text: "Tabs".to_string() },
                        PollOption { id: 5, text: "Spaces".to_string() },
                    ],
                },
            ],
            next_user_id: 1,
            next_vote_id: 1,
            ..Default::default()
        }
    }
}

pub type Db = Arc<RwLock<AppState>>;

type ErrorBody = (StatusCode, Json<Value>);

fn detail(status: StatusCode, message: &str) -> ErrorBody {
    (status, Json(json!({ "detail": message })))
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(AppState::seeded()));
    Router::new()
        .route("/polls", get(list_polls))
        .route("/polls/{id}/results", get(poll_results))
        .route("/polls/{id}/vote", post(vote))
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_polls(
    State(db): State<Db>,
    Query(page): Query<Pagination>,
) -> Json<Vec<Poll>> {
    let state = db.read().await;
    let polls = state
        .polls
        .iter()
        .skip(page.skip as usize)
        .take(page.limit as usize)
        .cloned()
        .collect();
    Json(polls)
}

async fn poll_results(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<PollResults>, ErrorBody> {
    let state = db.read().await;
    let poll = state
        .polls
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Poll not found"))?;

    let results = poll
        .options
        .iter()
        .map(|option| OptionTally {
            option_id: option.id,
            text: option.text.clone(),
            vote_count: state.votes.iter().filter(|v| v.option_id == option.id).count() as u64,
        })
        .collect();

    Ok(Json(PollResults {
        poll_id: poll.id,
        question: poll.question.clone(),
        results,
    }))
}

async fn register(
    State(db): State<Db>,
    Json(input): Json<Credentials>,
) -> Result<Json<User>, ErrorBody> {
    let mut state = db.write().await;
    if state.users.contains_key(&input.username) {
        return Err(detail(StatusCode::BAD_REQUEST, "Username already registered"));
    }
    let id = state.next_user_id;
    state.next_user_id += 1;
    state.users.insert(
        input.username.clone(),
        StoredUser {
            id,
            password: input.password,
        },
    );
    Ok(Json(User {
        id,
        username: input.username,
    }))
}

async fn login(
    State(db): State<Db>,
    Form(input): Form<Credentials>,
) -> Result<Json<Token>, ErrorBody> {
    let mut state = db.write().await;
    let user_id = match state.users.get(&input.username) {
        Some(user) if user.password == input.password => user.id,
        _ => return Err(detail(StatusCode::BAD_REQUEST, "Incorrect username or password")),
    };
    let access_token = Uuid::new_v4().to_string();
    state.tokens.insert(access_token.clone(), user_id);
    Ok(Json(Token {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

async fn vote(
    State(db): State<Db>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(input): Json<VoteRequest>,
) -> Result<Json<Vote>, ErrorBody> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Not authenticated"))?;

    let mut state = db.write().await;
    let user_id = *state
        .tokens
        .get(token)
        .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Invalid or expired token"))?;

    let poll = state
        .polls
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Poll not found"))?;
    if !poll.options.iter().any(|o| o.id == input.option_id) {
        return Err(detail(StatusCode::NOT_FOUND, "Option not found"));
    }

    let vote = Vote {
        id: state.next_vote_id,
        user_id,
        option_id: input.option_id,
        created_at: Utc::now().to_rfc3339(),
    };
    state.next_vote_id += 1;
    state.votes.push(vote.clone());
    Ok(Json(vote))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_serializes_to_json() {
        let poll = Poll {
            id: 1,
            question: "Lunch?".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            options: vec![PollOption { id: 1, text: "Pizza".to_string() }],
        };
        let json = serde_json::to_value(&poll).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["question"], "Lunch?");
        assert_eq!(json["options"][0]["text"], "Pizza");
    }

    #[test]
    fn credentials_reject_missing_password() {
        let result: Result<Credentials, _> = serde_json::from_str(r#"{"username":"alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn pagination_defaults() {
        let page: Pagination = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn seeded_state_has_two_polls_and_no_votes() {
        let state = AppState::seeded();
        assert_eq!(state.polls.len(), 2);
        assert!(state.votes.is_empty());
        assert!(state.users.is_empty());
    }
}
