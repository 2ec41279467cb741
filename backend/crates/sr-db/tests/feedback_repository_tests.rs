mod common;

use common::{create_test_pool, test_feedback, test_snippet, test_user};

use sr_db::{FeedbackRepository, SnippetRepository, UserRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_feedback_on_two_snippets_when_fetched_by_ids_then_reviewer_email_joined() {
    // Given: Alice owns two snippets, Bob reviewed both
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let snippets = SnippetRepository::new(pool.clone());
    let repo = FeedbackRepository::new(pool);

    let alice = test_user("alice@example.com");
    let bob = test_user("bob@example.com");
    users.create(&alice).await.unwrap();
    users.create(&bob).await.unwrap();

    let first = test_snippet(alice.id, "fn a() {}");
    let second = test_snippet(alice.id, "fn b() {}");
    snippets.create(&first).await.unwrap();
    snippets.create(&second).await.unwrap();

    repo.create(&test_feedback(first.id, bob.id, "looks fine"))
        .await
        .unwrap();
    repo.create(&test_feedback(second.id, bob.id, "needs tests"))
        .await
        .unwrap();

    // When: One batched fetch over both snippet ids
    let found = repo
        .find_with_reviewer_by_snippet_ids(&[first.id, second.id])
        .await
        .unwrap();

    // Then: Both entries come back with Bob's email attached
    assert_that!(found.len(), eq(2));
    for entry in &found {
        assert_that!(entry.reviewer_id, eq(bob.id));
        assert_that!(entry.reviewer_email, eq("bob@example.com"));
    }
}

#[tokio::test]
async fn given_feedback_on_other_snippets_when_fetched_by_ids_then_excluded() {
    let pool = create_test_pool().await;
    let users = UserRepository::new(pool.clone());
    let snippets = SnippetRepository::new(pool.clone());
    let repo = FeedbackRepository::new(pool);

    let alice = test_user("alice@example.com");
    let bob = test_user("bob@example.com");
    users.create(&alice).await.unwrap();
    users.create(&bob).await.unwrap();

    let wanted = test_snippet(alice.id, "fn a() {}");
    let unrelated = test_snippet(bob.id, "fn c() {}");
    snippets.create(&wanted).await.unwrap();
    snippets.create(&unrelated).await.unwrap();

    repo.create(&test_feedback(wanted.id, bob.id, "on wanted"))
        .await
        .unwrap();
    repo.create(&test_feedback(unrelated.id, alice.id, "on unrelated"))
        .await
        .unwrap();

    let found = repo
        .find_with_reviewer_by_snippet_ids(&[wanted.id])
        .await
        .unwrap();

    assert_that!(found.len(), eq(1));
    assert_that!(found[0].snippet_id, eq(wanted.id));
    assert_that!(found[0].text, eq("on wanted"));
}

#[tokio::test]
async fn given_empty_id_set_when_fetched_then_returns_empty_without_querying() {
    let pool = create_test_pool().await;
    let repo = FeedbackRepository::new(pool);

    let found = repo.find_with_reviewer_by_snippet_ids(&[]).await.unwrap();

    assert_that!(found.len(), eq(0));
}
