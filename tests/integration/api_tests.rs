//! API integration tests
//!
//! Each test builds the full router over its own in-memory database.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{
    api,
    config::AppConfig,
    repository::{self, Repository},
    AppState,
};

async fn test_app() -> Router {
    let pool = repository::connect_in_memory()
        .await
        .expect("Failed to create in-memory database");
    let state = AppState::new(AppConfig::default(), Repository::new(pool));
    api::router(state)
}

/// Send a request and return the status with the parsed JSON body (`Null` when empty)
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn register(app: &Router, email: &str) -> (i64, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "email": email,
            "password": "secret1",
            "passwordConfirm": "secret1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
    (
        body["id"].as_i64().expect("No id in response"),
        body["token"].as_str().expect("No token in response").to_string(),
    )
}

/// Author, book and note written by a fresh identity
async fn seed_note(app: &Router, token: &str) -> (i64, i64, i64) {
    let (_, author) = send(
        app,
        Method::POST,
        "/api/v1/authors",
        Some(token),
        Some(json!({ "name": "Orwell", "bio": "writer" })),
    )
    .await;
    let author_id = author["id"].as_i64().expect("No author id");

    let (_, book) = send(
        app,
        Method::POST,
        "/api/v1/books",
        Some(token),
        Some(json!({ "title": "1984", "authorId": author_id })),
    )
    .await;
    let book_id = book["id"].as_i64().expect("No book id");

    let (_, note) = send(
        app,
        Method::POST,
        "/api/v1/notes",
        Some(token),
        Some(json!({ "bookId": book_id, "content": "great", "pageNumber": 12 })),
    )
    .await;
    let note_id = note["id"].as_i64().expect("No note id");

    (author_id, book_id, note_id)
}

async fn graphql(app: &Router, token: Option<&str>, query: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/graphql",
        token,
        Some(json!({ "query": query })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "up");
}

#[tokio::test]
async fn test_health_check_reports_database_down() {
    let pool = repository::connect_in_memory()
        .await
        .expect("Failed to create in-memory database");
    let app = api::router(AppState::new(AppConfig::default(), Repository::new(pool.clone())));
    pool.close().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None, None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "down");
}

#[tokio::test]
async fn test_register_then_duplicate_conflicts() {
    let app = test_app().await;
    let (_, token) = register(&app, "a@b.com").await;
    assert!(!token.is_empty());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({
            "email": "a@b.com",
            "password": "secret1",
            "passwordConfirm": "secret1"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_reports_password_length_before_confirmation() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({ "email": "a@b.com", "password": "123", "passwordConfirm": "123" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_USER_INPUT");
    assert_eq!(body["field"], "password");
}

#[tokio::test]
async fn test_login_and_me() {
    let app = test_app().await;
    let (id, _) = register(&app, "reader@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "reader@example.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("No token").to_string();

    let (status, body) = send(&app, Method::GET, "/api/v1/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["email"], "reader@example.com");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "reader@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/books", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");

    let (status, _) = send(&app, Method::GET, "/api/v1/books", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/authors",
        None,
        Some(json!({ "name": "Orwell" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Author reads are public
    let (status, body) = send(&app, Method::GET, "/api/v1/authors", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_book_records_owner() {
    let app = test_app().await;
    let (user_id, token) = register(&app, "a@b.com").await;
    let (author_id, book_id, _) = seed_note(&app, &token).await;

    let (status, book) = send(
        &app,
        Method::GET,
        &format!("/api/v1/books/{}", book_id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["title"], "1984");
    assert_eq!(book["authorId"], author_id);
    assert_eq!(book["ownerId"], user_id);
}

#[tokio::test]
async fn test_book_validation() {
    let app = test_app().await;
    let (_, token) = register(&app, "a@b.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(&token),
        Some(json!({ "title": "X", "authorId": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "authorId");
    assert_eq!(body["error"], "Author ID must be an integer");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/books",
        Some(&token),
        Some(json!({ "title": "X", "authorId": 999 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Author not found");
}

#[tokio::test]
async fn test_note_validation() {
    let app = test_app().await;
    let (_, token) = register(&app, "a@b.com").await;
    let (_, book_id, _) = seed_note(&app, &token).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/notes",
        Some(&token),
        Some(json!({ "content": "ok", "bookId": book_id, "pageNumber": -1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "pageNumber");
}

#[tokio::test]
async fn test_other_identity_cannot_touch_note() {
    let app = test_app().await;
    let (_, token_a) = register(&app, "a@b.com").await;
    let (_, token_b) = register(&app, "b@b.com").await;
    let (_, book_id, note_id) = seed_note(&app, &token_a).await;
    let uri = format!("/api/v1/notes/{}", note_id);

    // Even an invalid payload is rejected on ownership first
    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token_b),
        Some(json!({ "content": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token_b),
        Some(json!({ "content": "hijacked", "bookId": book_id })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token_b), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::GET, &uri, Some(&token_b), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, note) = send(&app, Method::GET, &uri, Some(&token_a), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["content"], "great");
    assert_eq!(note["pageNumber"], 12);

    // B sees none of A's notes on the book
    let (status, notes) = send(
        &app,
        Method::GET,
        &format!("/api/v1/books/{}/notes", book_id),
        Some(&token_b),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(notes, json!([]));
}

#[tokio::test]
async fn test_owner_updates_and_deletes_note() {
    let app = test_app().await;
    let (_, token) = register(&app, "a@b.com").await;
    let (_, book_id, note_id) = seed_note(&app, &token).await;
    let uri = format!("/api/v1/notes/{}", note_id);

    let (status, note) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&token),
        Some(json!({ "content": "  revised  ", "pageNumber": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["content"], "revised");
    assert_eq!(note["pageNumber"], 40);
    assert_eq!(note["bookId"], book_id);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Note not found");
}

#[tokio::test]
async fn test_delete_cascades() {
    let app = test_app().await;
    let (_, token) = register(&app, "a@b.com").await;
    let (author_id, book_id, note_id) = seed_note(&app, &token).await;

    // Deleting the author keeps the book without an author
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/authors/{}", author_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, book) = send(
        &app,
        Method::GET,
        &format!("/api/v1/books/{}", book_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["authorId"], Value::Null);

    // Deleting the book removes its notes
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/books/{}", book_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/v1/notes/{}", note_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_author_name_conflicts() {
    let app = test_app().await;
    let (_, token) = register(&app, "a@b.com").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/authors",
        Some(&token),
        Some(json!({ "name": "Le Guin" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/authors",
        Some(&token),
        Some(json!({ "name": "Le Guin", "bio": null })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Author already exists");
}

#[tokio::test]
async fn test_invalid_path_id() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/authors/abc", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "id");

    let (status, body) = send(&app, Method::GET, "/api/v1/authors/0", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ID must be a positive integer");

    let (status, _) = send(&app, Method::GET, "/api/v1/authors/42", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_graphql_matches_rest() {
    let app = test_app().await;

    let body = graphql(
        &app,
        None,
        r#"mutation { register(email: "a@b.com", password: "secret1", passwordConfirm: "secret1") { id token } }"#,
    )
    .await;
    let token = body["data"]["register"]["token"]
        .as_str()
        .expect("No token in response")
        .to_string();

    let body = graphql(&app, None, "{ books { id } }").await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");

    let body = graphql(
        &app,
        Some(&token),
        r#"mutation { addAuthor(name: "Orwell", bio: "writer") { id } }"#,
    )
    .await;
    let author_id = body["data"]["addAuthor"]["id"].as_i64().expect("No author id");

    let body = graphql(
        &app,
        Some(&token),
        r#"mutation { addBook(title: "  ", authorId: 1) { id } }"#,
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
    assert_eq!(body["errors"][0]["extensions"]["field"], "title");

    let body = graphql(
        &app,
        Some(&token),
        &format!(
            r#"mutation {{ addBook(title: "1984", authorId: {}) {{ id title author {{ name }} }} }}"#,
            author_id
        ),
    )
    .await;
    assert_eq!(body["data"]["addBook"]["title"], "1984");
    assert_eq!(body["data"]["addBook"]["author"]["name"], "Orwell");
    let book_id = body["data"]["addBook"]["id"].as_i64().expect("No book id");

    let body = graphql(
        &app,
        Some(&token),
        &format!(
            r#"mutation {{ addNote(bookId: {}, content: "great", pageNumber: 0) {{ id }} }}"#,
            book_id
        ),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["field"], "pageNumber");

    let body = graphql(
        &app,
        Some(&token),
        &format!(
            r#"mutation {{ addNote(bookId: {}, content: "great") {{ id pageNumber }} }}"#,
            book_id
        ),
    )
    .await;
    assert_eq!(body["data"]["addNote"]["pageNumber"], Value::Null);
    let note_id = body["data"]["addNote"]["id"].as_i64().expect("No note id");

    let (_, other_token) = register(&app, "b@b.com").await;
    let body = graphql(
        &app,
        Some(&other_token),
        &format!(r#"mutation {{ deleteNote(id: "{}") }}"#, note_id),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "FORBIDDEN");

    let body = graphql(
        &app,
        Some(&token),
        &format!(r#"{{ notes(bookId: "{}") {{ content }} }}"#, book_id),
    )
    .await;
    assert_eq!(body["data"]["notes"], json!([{ "content": "great" }]));

    let body = graphql(&app, None, r#"{ author(id: "abc") { name } }"#).await;
    assert_eq!(body["errors"][0]["extensions"]["field"], "id");
}

#[tokio::test]
async fn test_graphql_mistyped_arguments_match_rest() {
    let app = test_app().await;
    let (_, token_a) = register(&app, "a@b.com").await;
    let (_, token_b) = register(&app, "b@b.com").await;
    let (_, _, note_id) = seed_note(&app, &token_a).await;

    // Same field-tagged rejection as POST /books
    let body = graphql(
        &app,
        Some(&token_a),
        r#"mutation { addBook(title: "X", authorId: "abc") { id } }"#,
    )
    .await;
    assert_eq!(body["errors"][0]["message"], "Author ID must be an integer");
    assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
    assert_eq!(body["errors"][0]["extensions"]["field"], "authorId");

    // Authentication runs before any argument check
    let body = graphql(
        &app,
        None,
        r#"mutation { addBook(title: 5, authorId: "abc") { id } }"#,
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");

    // Ownership runs before any argument check
    let body = graphql(
        &app,
        Some(&token_b),
        &format!(r#"mutation {{ updateNote(id: {}, pageNumber: 1.5) {{ id }} }}"#, note_id),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "FORBIDDEN");

    let body = graphql(
        &app,
        Some(&token_a),
        &format!(
            r#"mutation {{ updateNote(id: {}, content: "fine", pageNumber: 1.5) {{ id }} }}"#,
            note_id
        ),
    )
    .await;
    assert_eq!(body["errors"][0]["message"], "Page number must be an integer");
    assert_eq!(body["errors"][0]["extensions"]["field"], "pageNumber");

    let (_, note) = send(
        &app,
        Method::GET,
        &format!("/api/v1/notes/{}", note_id),
        Some(&token_a),
        None,
    )
    .await;
    assert_eq!(note["content"], "great");
    assert_eq!(note["pageNumber"], 12);
}
