// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use catalog_service::domain::repositories::book_repository::BookRepository;
use serde_json::{json, Value};

fn book_json(isbn: &str, title: &str, author: &str, price: f64) -> Value {
    json!({ "isbn": isbn, "title": title, "author": author, "price": price })
}

#[tokio::test]
async fn test_book_lifecycle_end_to_end() {
    let app = create_test_app();
    let book = book_json("9780000000001", "T", "A", 9.90);

    // Given: create
    let response = app.server.post("/books").json(&book).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>(), book);

    // When: get by isbn
    let response = app.server.get("/books/9780000000001").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), book);

    // Then: delete and the book is gone
    let response = app.server.delete("/books/9780000000001").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app.server.get("/books/9780000000001").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Book with ISBN 9780000000001 was not found."
    );
}

#[tokio::test]
async fn test_create_duplicate_returns_conflict() {
    let app = create_test_app();
    let first = book_json("1234567890", "First", "Author", 5.0);

    let response = app.server.post("/books").json(&first).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = app
        .server
        .post("/books")
        .json(&book_json("1234567890", "Second", "Author", 6.0))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Book with ISBN 1234567890 already exists.");

    // Stored value is still the first book
    let response = app.server.get("/books/1234567890").await;
    assert_eq!(response.json::<Value>(), first);
}

#[tokio::test]
async fn test_get_unknown_book_returns_not_found() {
    let app = create_test_app();

    let response = app.server.get("/books/1111111111").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_book_returns_no_content() {
    let app = create_test_app();

    let response = app.server.delete("/books/1111111111").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_all_books() {
    let app = create_test_app();

    let response = app.server.get("/books").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));

    for isbn in ["1234567890", "9780000000001"] {
        let response = app
            .server
            .post("/books")
            .json(&book_json(isbn, "Title", "Author", 1.0))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let books: Vec<Value> = app.server.get("/books").await.json();
    let mut isbns: Vec<&str> = books.iter().filter_map(|b| b["isbn"].as_str()).collect();
    isbns.sort();
    assert_eq!(isbns, vec!["1234567890", "9780000000001"]);
}

#[tokio::test]
async fn test_put_creates_then_replaces() {
    let app = create_test_app();

    let original = book_json("1234567890", "Original", "Author", 1.0);
    let response = app.server.put("/books").json(&original).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), original);

    let edited = book_json("1234567890", "Edited", "Someone Else", 2.5);
    let response = app.server.put("/books").json(&edited).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), edited);

    let response = app.server.get("/books/1234567890").await;
    assert_eq!(response.json::<Value>(), edited);
    assert_eq!(app.repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_invalid_books_are_rejected() {
    let app = create_test_app();

    let cases = [
        (book_json("", "T", "A", 1.0), "isbn"),
        (book_json("12345", "T", "A", 1.0), "isbn"),
        (book_json("12345678901234", "T", "A", 1.0), "isbn"),
        (book_json("1234567890", "  ", "A", 1.0), "title"),
        (book_json("1234567890", "T", "", 1.0), "author"),
        (book_json("1234567890", "T", "A", 0.0), "price"),
        (book_json("1234567890", "T", "A", -3.0), "price"),
        (
            json!({ "isbn": "1234567890", "title": "T", "author": "A" }),
            "price",
        ),
    ];

    for (payload, field) in cases {
        for response in [
            app.server.post("/books").json(&payload).await,
            app.server.put("/books").json(&payload).await,
        ] {
            assert_eq!(
                response.status_code(),
                StatusCode::BAD_REQUEST,
                "payload {} should be rejected",
                payload
            );
            let body: Value = response.json();
            assert_eq!(body["error"], "Validation failed");
            assert!(
                body["details"].get(field).is_some(),
                "expected {} in {}",
                field,
                body
            );
        }
    }

    assert_eq!(app.repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_validation_messages() {
    let app = create_test_app();

    let response = app
        .server
        .post("/books")
        .json(&book_json("1234567890", "T", "A", 0.0))
        .await;
    let body: Value = response.json();

    assert_eq!(
        body["details"]["price"],
        json!(["The book price must be greater than zero."])
    );
}

#[tokio::test]
async fn test_version_endpoint() {
    let app = create_test_app();

    let response = app.server.get("/version").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unreadable_bodies_are_bad_requests() {
    let app = create_test_app();

    let wrong_type = json!({ "isbn": "1234567890", "title": "T", "author": "A", "price": "abc" });
    let null_title = json!({ "isbn": "1234567890", "title": null, "author": "A", "price": 1.0 });

    for payload in [wrong_type, null_title] {
        for response in [
            app.server.post("/books").json(&payload).await,
            app.server.put("/books").json(&payload).await,
        ] {
            assert_eq!(
                response.status_code(),
                StatusCode::BAD_REQUEST,
                "payload {} should be rejected",
                payload
            );
            let body: Value = response.json();
            assert!(body["error"].is_string());
        }
    }

    // Not JSON at all
    for response in [
        app.server.post("/books").text("not json").await,
        app.server.put("/books").text("not json").await,
    ] {
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    assert_eq!(app.repository.count().await.unwrap(), 0);
}
