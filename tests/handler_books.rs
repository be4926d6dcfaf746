mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_books_empty() {
    let server = common::create_test_server(common::create_test_pool().await);

    let response = server.get("/books").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_books_returns_all() {
    let pool = common::create_test_pool().await;
    common::insert_test_book(&pool, "Dune", "Frank Herbert").await;
    common::insert_test_book(&pool, "Emma", "Jane Austen").await;
    let server = common::create_test_server(pool);

    let response = server.get("/books").await;

    response.assert_status_ok();
    let items = response.json::<Vec<Value>>();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Dune");
    assert!(items[0].get("id").is_some());
    assert!(items[0].get("author").is_some());
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_book_success() {
    let pool = common::create_test_pool().await;
    let id = common::insert_test_book(&pool, "Dune", "Frank Herbert").await;
    let server = common::create_test_server(pool);

    let response = server.get(&format!("/books/{id}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": id.to_string(),
        "title": "Dune",
        "author": "Frank Herbert"
    }));
}

#[tokio::test]
async fn test_get_book_not_found() {
    let server = common::create_test_server(common::create_test_pool().await);

    let response = server.get(&format!("/books/{}", Uuid::new_v4())).await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_get_book_invalid_id() {
    let server = common::create_test_server(common::create_test_pool().await);

    let response = server.get("/books/not-a-uuid").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Invalid book id");
}

#[tokio::test]
async fn test_delete_book_invalid_id() {
    let pool = common::create_test_pool().await;
    common::insert_test_book(&pool, "Dune", "Herbert").await;
    let server = common::create_test_server(pool.clone());

    let response = server.delete("/books/42").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    assert_eq!(common::count_rows(&pool).await, 1);
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_book_success() {
    let server = common::create_test_server(common::create_test_pool().await);

    let response = server
        .post("/books")
        .json(&json!({ "title": "Dune", "author": "Herbert" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["author"], "Herbert");
    let id = body["id"].as_str().unwrap();
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_create_book_ignores_client_id() {
    let server = common::create_test_server(common::create_test_pool().await);
    let client_id = Uuid::new_v4();

    let response = server
        .post("/books")
        .json(&json!({ "id": client_id, "title": "Dune", "author": "Herbert" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_ne!(body["id"], client_id.to_string());
}

#[tokio::test]
async fn test_create_book_missing_author() {
    let server = common::create_test_server(common::create_test_pool().await);

    let response = server.post("/books").json(&json!({ "title": "Dune" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Invalid request body");
    assert!(
        body["error"]["details"]["reason"]
            .as_str()
            .unwrap()
            .contains("author")
    );
}

#[tokio::test]
async fn test_create_book_malformed_json() {
    let pool = common::create_test_pool().await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/books")
        .text("{ not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    assert_eq!(common::count_rows(&pool).await, 0);
}

#[tokio::test]
async fn test_create_book_empty_title() {
    let server = common::create_test_server(common::create_test_pool().await);

    let response = server
        .post("/books")
        .json(&json!({ "title": "", "author": "Herbert" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

// ─── REPLACE ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_replace_book_success() {
    let pool = common::create_test_pool().await;
    let id = common::insert_test_book(&pool, "Dune", "Herbert").await;
    let server = common::create_test_server(pool);

    let response = server
        .put(&format!("/books/{id}"))
        .json(&json!({ "title": "Dune Messiah", "author": "Frank Herbert" }))
        .await;

    response.assert_status_ok();

    let fetched = server.get(&format!("/books/{id}")).await;
    fetched.assert_json(&json!({
        "id": id.to_string(),
        "title": "Dune Messiah",
        "author": "Frank Herbert"
    }));
}

#[tokio::test]
async fn test_replace_book_not_found() {
    let server = common::create_test_server(common::create_test_pool().await);

    let response = server
        .put(&format!("/books/{}", Uuid::new_v4()))
        .json(&json!({ "title": "Ghost", "author": "Nobody" }))
        .await;

    response.assert_status_not_found();
}

// ─── PATCH ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_patch_book_title_only() {
    let pool = common::create_test_pool().await;
    let id = common::insert_test_book(&pool, "Dune", "Frank Herbert").await;
    let server = common::create_test_server(pool);

    let response = server
        .patch(&format!("/books/{id}"))
        .json(&json!({ "title": "Dune Messiah" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": id.to_string(),
        "title": "Dune Messiah",
        "author": "Frank Herbert"
    }));
}

#[tokio::test]
async fn test_patch_book_both_fields() {
    let pool = common::create_test_pool().await;
    let id = common::insert_test_book(&pool, "Dune", "Herbert").await;
    let server = common::create_test_server(pool);

    let response = server
        .patch(&format!("/books/{id}"))
        .json(&json!({ "title": "Emma", "author": "Jane Austen" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Emma");
    assert_eq!(body["author"], "Jane Austen");
}

#[tokio::test]
async fn test_patch_book_not_found() {
    let server = common::create_test_server(common::create_test_pool().await);

    let response = server
        .patch(&format!("/books/{}", Uuid::new_v4()))
        .json(&json!({ "title": "Ghost" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_book_returns_deleted() {
    let pool = common::create_test_pool().await;
    let id = common::insert_test_book(&pool, "Dune", "Herbert").await;
    let server = common::create_test_server(pool.clone());

    let response = server.delete(&format!("/books/{id}")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["title"], "Dune");

    assert_eq!(common::count_rows(&pool).await, 0);
    server
        .get(&format!("/books/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_book_not_found() {
    let server = common::create_test_server(common::create_test_pool().await);

    let response = server.delete(&format!("/books/{}", Uuid::new_v4())).await;

    response.assert_status_not_found();
}

// ─── COUNT ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_count_tracks_creates_and_deletes() {
    let server = common::create_test_server(common::create_test_pool().await);

    server.get("/books/count").await.assert_json(&json!(0));

    let mut ids = Vec::new();
    for title in ["Dune", "Emma", "Ulysses"] {
        let response = server
            .post("/books")
            .json(&json!({ "title": title, "author": "Someone" }))
            .await;
        response.assert_status_ok();
        ids.push(response.json::<Value>()["id"].as_str().unwrap().to_string());
    }

    server
        .delete(&format!("/books/{}", ids[0]))
        .await
        .assert_status_ok();

    let response = server.get("/books/count").await;
    response.assert_status_ok();
    response.assert_json(&json!(2));
}

#[tokio::test]
async fn test_corrupt_row_returns_internal_error_without_details() {
    let pool = common::create_test_pool().await;
    sqlx::query("INSERT INTO books (id, title, author) VALUES ('not-a-uuid', 't', 'a')")
        .execute(&pool)
        .await
        .unwrap();
    let server = common::create_test_server(pool);

    let response = server.get("/books").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "internal_error");
    assert_eq!(body["error"]["details"], json!({}));
    assert!(!response.text().contains("not-a-uuid"));
}

// ─── SEARCH ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_by_title_substring() {
    let pool = common::create_test_pool().await;
    common::insert_test_book(&pool, "Dune", "Herbert").await;
    common::insert_test_book(&pool, "Dune Messiah", "Herbert").await;
    common::insert_test_book(&pool, "Emma", "Austen").await;
    let server = common::create_test_server(pool);

    let response = server.get("/books/search/Dune").await;

    response.assert_status_ok();
    let items = response.json::<Vec<Value>>();
    assert_eq!(items.len(), 2);
    assert!(
        items
            .iter()
            .all(|b| b["title"].as_str().unwrap().contains("Dune"))
    );
}

#[tokio::test]
async fn test_search_by_title_no_match() {
    let pool = common::create_test_pool().await;
    common::insert_test_book(&pool, "Dune", "Herbert").await;
    let server = common::create_test_server(pool);

    let response = server.get("/books/search/dune").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_search_by_title_with_encoded_space() {
    let pool = common::create_test_pool().await;
    common::insert_test_book(&pool, "Dune Messiah", "Herbert").await;
    let server = common::create_test_server(pool);

    let response = server.get("/books/search/Dune%20Mess").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 1);
}

// ─── AUTHOR ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_books_by_author() {
    let pool = common::create_test_pool().await;
    common::insert_test_book(&pool, "Dune", "Herbert").await;
    common::insert_test_book(&pool, "Emma", "Austen").await;
    let server = common::create_test_server(pool);

    let response = server.get("/books/author/Austen").await;

    response.assert_status_ok();
    let items = response.json::<Vec<Value>>();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Emma");
}

#[tokio::test]
async fn test_books_by_author_no_match() {
    let pool = common::create_test_pool().await;
    common::insert_test_book(&pool, "Dune", "Herbert").await;
    let server = common::create_test_server(pool);

    let response = server.get("/books/author/Herb").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

// ─── LIFECYCLE ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_get_delete_lifecycle() {
    let server = common::create_test_server(common::create_test_pool().await);

    let created = server
        .post("/books")
        .json(&json!({ "title": "Dune", "author": "Herbert" }))
        .await;
    created.assert_status_ok();
    let body = created.json::<Value>();
    let id = body["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let fetched = server.get(&format!("/books/{id}")).await;
    fetched.assert_status_ok();
    fetched.assert_json(&body);

    server
        .delete(&format!("/books/{id}"))
        .await
        .assert_status_ok();

    server
        .get(&format!("/books/{id}"))
        .await
        .assert_status_not_found();
}
