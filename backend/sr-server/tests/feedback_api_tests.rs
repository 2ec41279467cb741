mod common;

use common::{create_test_server, register_and_login, submit_snippet};

use googletest::prelude::*;
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
async fn given_reviewed_snippet_when_owner_lists_submissions_then_sees_reviewer_email() {
    let (server, _state) = create_test_server().await;

    let (token_a, _) = register_and_login(&server, "alice@example.com", "password123").await;
    let (token_b, reviewer_id) =
        register_and_login(&server, "bob@example.com", "password123").await;

    let snippet_id = submit_snippet(&server, &token_a, "print(1)").await;

    // Bob picks Alice's snippet and leaves feedback
    let picked = server
        .get("/api/v1/snippets/review")
        .authorization_bearer(&token_b)
        .await;
    assert_eq!(picked.status_code(), 200);

    let feedback = server
        .post(&format!("/api/v1/snippets/{}/feedback", snippet_id))
        .authorization_bearer(&token_b)
        .json(&json!({ "text": "looks fine" }))
        .await;
    assert_eq!(feedback.status_code(), 201);

    let feedback_body: Value = feedback.json();
    assert_that!(
        feedback_body["feedback"]["reviewer_id"].as_str(),
        some(eq(reviewer_id.as_str()))
    );

    // Alice sees the feedback with Bob's email resolved
    let mine = server
        .get("/api/v1/snippets/mine")
        .authorization_bearer(&token_a)
        .await;
    assert_eq!(mine.status_code(), 200);

    let body: Value = mine.json();
    let submissions = body["submissions"].as_array().unwrap();
    assert_that!(submissions, len(eq(1)));

    let submission = &submissions[0];
    assert_that!(
        submission["snippet"]["id"].as_str(),
        some(eq(snippet_id.as_str()))
    );

    let entries = submission["feedback"].as_array().unwrap();
    assert_that!(entries, len(eq(1)));
    assert_that!(entries[0]["text"].as_str(), some(eq("looks fine")));
    assert_that!(
        entries[0]["reviewer_email"].as_str(),
        some(eq("bob@example.com"))
    );
}

#[tokio::test]
async fn given_own_snippet_when_submitting_feedback_then_forbidden() {
    let (server, _state) = create_test_server().await;

    let (token, _) = register_and_login(&server, "alice@example.com", "password123").await;
    let snippet_id = submit_snippet(&server, &token, "print(1)").await;

    let response = server
        .post(&format!("/api/v1/snippets/{}/feedback", snippet_id))
        .authorization_bearer(&token)
        .json(&json!({ "text": "very nice" }))
        .await;

    assert_eq!(response.status_code(), 403);

    let body: Value = response.json();
    assert_that!(body["error"]["code"].as_str(), some(eq("FORBIDDEN")));
}

#[tokio::test]
async fn given_missing_snippet_when_submitting_feedback_then_not_found() {
    let (server, _state) = create_test_server().await;

    let (token, _) = register_and_login(&server, "alice@example.com", "password123").await;

    let response = server
        .post(&format!("/api/v1/snippets/{}/feedback", Uuid::new_v4()))
        .authorization_bearer(&token)
        .json(&json!({ "text": "very nice" }))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn given_malformed_snippet_id_when_submitting_feedback_then_validation_error() {
    let (server, _state) = create_test_server().await;

    let (token, _) = register_and_login(&server, "alice@example.com", "password123").await;

    let response = server
        .post("/api/v1/snippets/not-a-uuid/feedback")
        .authorization_bearer(&token)
        .json(&json!({ "text": "very nice" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn given_empty_text_when_submitting_feedback_then_validation_error_before_lookup() {
    let (server, _state) = create_test_server().await;

    let (token, _) = register_and_login(&server, "alice@example.com", "password123").await;

    // Snippet does not exist, but blank text is rejected first
    let response = server
        .post(&format!("/api/v1/snippets/{}/feedback", Uuid::new_v4()))
        .authorization_bearer(&token)
        .json(&json!({ "text": "   " }))
        .await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_that!(body["error"]["code"].as_str(), some(eq("VALIDATION_ERROR")));
}

#[tokio::test]
async fn given_no_token_when_submitting_feedback_then_unauthorized() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post(&format!("/api/v1/snippets/{}/feedback", Uuid::new_v4()))
        .json(&json!({ "text": "very nice" }))
        .await;

    assert_eq!(response.status_code(), 401);
}
