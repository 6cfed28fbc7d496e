//! Integration tests for the Bookshelf Server

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use bookshelf_core::Catalog;
use bookshelf_server::routes::create_router;
use bookshelf_server::state::AppState;
use serde_json::Value;
use std::io::Write;

/// Create a test server over the bundled sample dataset
fn create_test_server() -> TestServer {
    let state = AppState::new(Catalog::sample().expect("sample dataset"));
    let app = create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_index_renders_first_page() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(count(&html, "data-preview=\""), 6);
    assert!(html.contains("<span class=\"list__remaining\">(8)</span>"));
    assert!(!html.contains("list__message_show"));
}

#[tokio::test]
async fn test_index_cumulative_pages() {
    let server = create_test_server();

    let response = server.get("/").add_query_param("page", "2").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(count(&html, "data-preview=\""), 12);
    assert!(html.contains("<span class=\"list__remaining\">(2)</span>"));
}

#[tokio::test]
async fn test_index_page_zero_treated_as_one() {
    let server = create_test_server();

    let response = server.get("/").add_query_param("page", "0").await;

    response.assert_status_ok();
    assert_eq!(count(&response.text(), "data-preview=\""), 6);
}

#[tokio::test]
async fn test_search_by_title() {
    let server = create_test_server();

    let response = server
        .get("/")
        .add_query_param("title", "dune")
        .add_query_param("genre", "any")
        .add_query_param("author", "any")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(count(&html, "data-preview=\""), 1);
    assert!(html.contains("data-preview=\"b-0001\""));
    assert!(!html.contains("list__message_show"));
    assert!(html.contains("data-list-button disabled"));
}

#[tokio::test]
async fn test_search_without_results() {
    let server = create_test_server();

    let response = server
        .get("/")
        .add_query_param("genre", "nonexistent-id")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(count(&html, "data-preview=\""), 0);
    assert!(html.contains("list__message list__message_show"));
}

#[tokio::test]
async fn test_book_page_opens_detail() {
    let server = create_test_server();

    let response = server.get("/books/b-0001").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("data-list-active open"));
    assert!(html.contains("<div class=\"modal__subtitle\">Frank Herbert (1965)</div>"));
}

#[tokio::test]
async fn test_unknown_book_page_is_plain_list() {
    let server = create_test_server();

    let response = server.get("/books/does-not-exist").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("data-list-active open"));
    assert_eq!(count(&html, "data-preview=\""), 6);
}

#[tokio::test]
async fn test_more_fragment() {
    let server = create_test_server();

    let response = server.get("/books/more").add_query_param("page", "2").await;

    response.assert_status_ok();
    assert_eq!(response.header("x-remaining"), "0");
    let html = response.text();
    assert_eq!(count(&html, "data-preview=\""), 2);
    assert!(!html.contains("<html"));
}

#[tokio::test]
async fn test_theme_from_client_hint() {
    let server = create_test_server();

    let response = server
        .get("/")
        .add_header(
            HeaderName::from_static("sec-ch-prefers-color-scheme"),
            HeaderValue::from_static("\"dark\""),
        )
        .await;

    response.assert_status_ok();
    assert!(response
        .text()
        .contains(":root { --color-dark: 255, 255, 255; --color-light: 10, 10, 20; }"));
}

#[tokio::test]
async fn test_theme_query_overrides_hint() {
    let server = create_test_server();

    let response = server
        .get("/")
        .add_query_param("theme", "day")
        .add_header(
            HeaderName::from_static("sec-ch-prefers-color-scheme"),
            HeaderValue::from_static("dark"),
        )
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("--color-dark: 10, 10, 20;"));
}

#[tokio::test]
async fn test_api_list_books() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/books")
        .add_query_param("genre", "g-classic")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 7);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 6);
    assert_eq!(body["remaining"], 1);
    assert_eq!(body["has_more"], true);
    assert_eq!(body["books"].as_array().unwrap().len(), 6);
    assert_eq!(body["books"][0]["author_name"], "Frank Herbert");
}

#[tokio::test]
async fn test_api_list_books_second_page() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/books")
        .add_query_param("genre", "g-classic")
        .add_query_param("page", "2")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["books"].as_array().unwrap().len(), 1);
    assert_eq!(body["remaining"], 0);
    assert_eq!(body["has_more"], false);
}

#[tokio::test]
async fn test_api_get_book() {
    let server = create_test_server();

    let response = server.get("/api/v1/books/b-0012").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], "b-0012");
    assert_eq!(body["title"], "Frankenstein");
    assert_eq!(body["subtitle"], "Mary Shelley (1818)");
    assert_eq!(body["genres"][0], "Horror");
}

#[tokio::test]
async fn test_api_get_book_not_found() {
    let server = create_test_server();

    let response = server.get("/api/v1/books/missing").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_api_lookups_keep_dataset_order() {
    let server = create_test_server();

    let genres: Value = server.get("/api/v1/genres").await.json();
    assert_eq!(genres[0]["id"], "g-scifi");
    assert_eq!(genres[0]["name"], "Science Fiction");

    let authors: Value = server.get("/api/v1/authors").await.json();
    assert_eq!(authors.as_array().unwrap().len(), 8);
    assert_eq!(authors[1]["name"], "Ursula K. Le Guin");
}

#[tokio::test]
async fn test_api_theme() {
    let server = create_test_server();

    let response = server.get("/api/v1/theme/night").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["theme"], "night");
    assert_eq!(body["palette"]["dark"], serde_json::json!([255, 255, 255]));

    let response = server.get("/api/v1/theme/sepia").await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_custom_dataset_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "books_per_page": 1,
            "authors": { "a": "Anon" },
            "books": [
                { "id": "x", "title": "X", "author": "a", "published": "2020-01-01T00:00:00Z" },
                { "id": "y", "title": "Y", "author": "a", "published": "2021-01-01T00:00:00Z" }
            ]
        }"#,
    )
    .unwrap();

    let state = AppState::new(Catalog::load(file.path()).unwrap());
    let server = TestServer::new(create_router(state)).unwrap();

    let body: Value = server.get("/api/v1/books").await.json();
    assert_eq!(body["books"].as_array().unwrap().len(), 1);
    assert_eq!(body["remaining"], 1);
}

#[tokio::test]
async fn test_api_list_books_page_past_the_end() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/books")
        .add_query_param("page", "18446744073709551615")
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["books"].as_array().unwrap().len(), 0);
    assert_eq!(body["remaining"], 0);
    assert_eq!(body["has_more"], false);
    assert_eq!(body["total"], 14);
}

#[tokio::test]
async fn test_index_page_past_the_end() {
    let server = create_test_server();

    let response = server
        .get("/")
        .add_query_param("page", "18446744073709551615")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(count(&html, "data-preview=\""), 14);
    assert!(html.contains("data-list-button disabled"));
}
