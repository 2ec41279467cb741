mod common;

use common::{create_snippet, create_test_pool, create_user};

use sr_review::{FeedbackService, SubmissionAggregator};

use chrono::{Duration, Utc};
use googletest::prelude::*;
use sr_db::SnippetRepository;

#[tokio::test]
async fn given_feedback_on_some_snippets_when_aggregated_then_groups_are_exact() {
    // Given: Alice owns two snippets; Bob left two comments on the first
    let pool = create_test_pool().await;
    let alice = create_user(&pool, "alice@example.com").await;
    let bob = create_user(&pool, "bob@example.com").await;

    let first = create_snippet(&pool, alice.id, "fn a() {}").await;
    let second = create_snippet(&pool, alice.id, "fn b() {}").await;

    let feedback = FeedbackService::new(pool.clone());
    feedback.submit(bob.id, first.id, "looks fine").await.unwrap();
    feedback.submit(bob.id, first.id, "one nit").await.unwrap();

    // When
    let aggregator = SubmissionAggregator::new(pool);
    let submissions = aggregator.list_own_with_feedback(alice.id).await.unwrap();

    // Then: Both snippets present exactly once, feedback attached to the
    // right one, the other carries an empty group
    assert_that!(submissions.len(), eq(2));

    let with_feedback = submissions
        .iter()
        .find(|s| s.snippet.id == first.id)
        .unwrap();
    assert_that!(with_feedback.feedback.len(), eq(2));
    for entry in &with_feedback.feedback {
        assert_that!(entry.snippet_id, eq(first.id));
        assert_that!(entry.reviewer_email, eq("bob@example.com"));
    }

    let without_feedback = submissions
        .iter()
        .find(|s| s.snippet.id == second.id)
        .unwrap();
    assert_that!(without_feedback.feedback.len(), eq(0));
}

#[tokio::test]
async fn given_owned_snippets_when_aggregated_then_creation_order_preserved() {
    let pool = create_test_pool().await;
    let alice = create_user(&pool, "alice@example.com").await;

    // Backdate so ordering is unambiguous at second resolution
    let mut older = sr_core::Snippet::new(alice.id, "older".to_string(), None);
    older.created_at = Utc::now() - Duration::seconds(120);
    let repo = SnippetRepository::new(pool.clone());
    repo.create(&older).await.unwrap();
    create_snippet(&pool, alice.id, "newer").await;

    let aggregator = SubmissionAggregator::new(pool);
    let submissions = aggregator.list_own_with_feedback(alice.id).await.unwrap();

    assert_that!(submissions.len(), eq(2));
    assert_that!(submissions[0].snippet.content, eq("older"));
    assert_that!(submissions[1].snippet.content, eq("newer"));
}

#[tokio::test]
async fn given_feedback_on_other_owners_when_aggregated_then_not_included() {
    let pool = create_test_pool().await;
    let alice = create_user(&pool, "alice@example.com").await;
    let bob = create_user(&pool, "bob@example.com").await;

    let alices = create_snippet(&pool, alice.id, "alice code").await;
    let bobs = create_snippet(&pool, bob.id, "bob code").await;

    let feedback = FeedbackService::new(pool.clone());
    feedback.submit(bob.id, alices.id, "for alice").await.unwrap();
    feedback.submit(alice.id, bobs.id, "for bob").await.unwrap();

    let aggregator = SubmissionAggregator::new(pool);
    let submissions = aggregator.list_own_with_feedback(alice.id).await.unwrap();

    assert_that!(submissions.len(), eq(1));
    assert_that!(submissions[0].feedback.len(), eq(1));
    assert_that!(submissions[0].feedback[0].text, eq("for alice"));
}

#[tokio::test]
async fn given_user_without_snippets_when_aggregated_then_empty_list() {
    let pool = create_test_pool().await;
    let alice = create_user(&pool, "alice@example.com").await;

    let aggregator = SubmissionAggregator::new(pool);
    let submissions = aggregator.list_own_with_feedback(alice.id).await.unwrap();

    assert_that!(submissions.len(), eq(0));
}
