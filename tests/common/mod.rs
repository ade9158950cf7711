#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use movies_api::infrastructure::db::pool::{connect_to_db, run_migrations, DbPool};
use movies_api::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "movies-api-test-boundary";

pub async fn test_db() -> DbPool {
    let db = connect_to_db("sqlite::memory:", 1).await.unwrap();
    run_migrations(&db).await.unwrap();
    db
}

pub async fn test_app() -> Router {
    let db = test_db().await;
    movies_api::app::create_app(AppState::new(db)).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn create_genre(app: &Router, name: &str) -> u64 {
    let (status, body) = send_json(
        app,
        json(Method::POST, "/api/genres", serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_u64().unwrap()
}

/// Hand-built multipart/form-data body.
pub struct Form {
    body: Vec<u8>,
}

impl Form {
    pub fn new() -> Self {
        Self { body: Vec::new() }
    }

    /// All scalar movie fields, without a poster.
    pub fn movie(title: &str, rate: f64, genre_id: u64) -> Self {
        Self::new()
            .text("Title", title)
            .text("Year", "1999")
            .text("Rate", &rate.to_string())
            .text("Storeline", "Something happens.")
            .text("GenreId", &genre_id.to_string())
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn request(mut self, method: Method, uri: &str) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(self.body))
            .unwrap()
    }
}

pub async fn create_movie(app: &Router, title: &str, rate: f64, genre_id: u64) -> Value {
    let request = Form::movie(title, rate, genre_id)
        .file("Poster", "poster.png", b"fake png bytes")
        .request(Method::POST, "/api/movies");
    let (status, body) = send_json(app, request).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}
