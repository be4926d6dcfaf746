#![allow(dead_code)]

use book_api::api::routes::book_routes;
use book_api::infrastructure::db::{self, DatabaseConfig};
use book_api::state::AppState;
use axum::Router;
use axum_test::TestServer;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Fresh in-memory database with the schema applied.
pub async fn create_test_pool() -> SqlitePool {
    db::connect(&DatabaseConfig::in_memory()).await.unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool)
}

/// Server exposing the book routes on top of `pool`.
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app: Router = book_routes().with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}

/// Inserts a row directly, bypassing the service layer.
pub async fn insert_test_book(pool: &SqlitePool, title: &str, author: &str) -> Uuid {
    let id = Uuid::new_v4();

    sqlx::query("INSERT INTO books (id, title, author) VALUES (?, ?, ?)")
        .bind(id.to_string())
        .bind(title)
        .bind(author)
        .execute(pool)
        .await
        .unwrap();

    id
}

pub async fn count_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await
        .unwrap()
}
