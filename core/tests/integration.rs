//! Full register → login → vote → results flow against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP through the blocking convenience methods, so the
//! transport layer is covered end-to-end along with request building and
//! response parsing.

use poll_core::{report, ApiError, PollClient};

fn start_mock_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn poll_lifecycle() {
    let addr = start_mock_server();
    let client = PollClient::new(&format!("http://{addr}"));

    // Step 1: list the seeded polls.
    let polls = client.fetch_polls(0, 10).unwrap();
    assert_eq!(polls.len(), 2);
    assert_eq!(polls[0].question, "Favorite language?");

    // Step 2: pagination applies on the server.
    let polls = client.fetch_polls(1, 10).unwrap();
    assert_eq!(polls.len(), 1);
    assert_eq!(polls[0].id, 2);

    // Step 3: bad arguments fail locally.
    let err = client.fetch_polls(-1, 10).unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    // Step 4: register a user; a second attempt is a conflict.
    let user = client.register("itest", "hunter2").unwrap();
    assert_eq!(user.username, "itest");
    let err = client.register("itest", "hunter2").unwrap_err();
    assert!(matches!(err, ApiError::Conflict));

    // Step 5: wrong password is rejected.
    let err = client.login("itest", "wrong").unwrap_err();
    assert!(matches!(err, ApiError::InvalidCredentials));

    // Step 6: real login issues a token.
    let token = client.login("itest", "hunter2").unwrap();
    assert!(!token.access_token.is_empty());

    // Step 7: a bogus token cannot vote.
    let err = client.vote(1, 2, "not-a-real-token").unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    // Step 8: cast a vote for option 2.
    let vote = client.vote(1, 2, &token.access_token).unwrap();
    assert_eq!(vote.user_id, user.id);
    assert_eq!(vote.option_id, 2);

    // Step 9: results reflect the vote.
    let results = client.poll_results(1).unwrap();
    assert_eq!(results.poll_id, 1);
    assert_eq!(report::total_votes(&results.results), 1);
    let tally = results.results.iter().find(|t| t.option_id == 2).unwrap();
    assert_eq!(tally.vote_count, 1);

    // Step 10: the formatted summary ranks the voted option first.
    let summary = client.poll_results_summary(1).unwrap();
    assert!(summary.starts_with("Poll #1: Favorite language?\n"));
    assert!(summary.contains("Total votes: 1\n"));
    assert!(summary.contains("1. Python\n   Votes: 1 (100.0%)\n   Option ID: 2\n"));

    // Step 11: a missing poll is a domain failure, not a transport failure.
    let err = client.poll_results(999).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 12: voting on a nonexistent option is NotFound.
    let err = client.vote(1, 999, &token.access_token).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}
