mod common;

use axum::http::{Method, StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn created_genre_can_be_fetched_by_id() {
    let app = test_app().await;

    let id = create_genre(&app, "Drama").await;

    let (status, body) = send_json(&app, get(&format!("/api/genres/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Drama");
    assert_eq!(body["id"], id);
}

#[tokio::test]
async fn list_returns_every_genre() {
    let app = test_app().await;
    create_genre(&app, "Drama").await;
    create_genre(&app, "Comedy").await;
    create_genre(&app, "Drama").await;

    let (status, body) = send_json(&app, get("/api/genres")).await;
    assert_eq!(status, StatusCode::OK);

    let mut names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Comedy", "Drama", "Drama"]);
}

#[tokio::test]
async fn missing_genre_reports_its_id() {
    let app = test_app().await;

    let (status, body) = send_json(&app, get("/api/genres/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No genre was found with ID: 42");
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn update_overwrites_name() {
    let app = test_app().await;
    let id = create_genre(&app, "Scifi").await;

    let (status, body) = send_json(
        &app,
        json(Method::PUT, &format!("/api/genres/{id}"), json!({ "name": "Sci-Fi" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Sci-Fi");

    let (_, body) = send_json(&app, get(&format!("/api/genres/{id}"))).await;
    assert_eq!(body["name"], "Sci-Fi");
}

#[tokio::test]
async fn update_of_missing_genre_is_not_found() {
    let app = test_app().await;

    let (status, body) = send_json(
        &app,
        json(Method::PUT, "/api/genres/9", json!({ "name": "Western" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No genre was found with ID: 9");
}

#[tokio::test]
async fn pascal_case_body_is_accepted() {
    let app = test_app().await;

    let (status, body) = send_json(
        &app,
        json(Method::POST, "/api/genres", json!({ "Name": "Horror" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Horror");
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let app = test_app().await;

    let (status, body) =
        send_json(&app, json(Method::POST, "/api/genres", json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name must be between 1 and 100 characters");
}

#[tokio::test]
async fn deleted_genre_is_gone() {
    let app = test_app().await;
    let id = create_genre(&app, "Musical").await;

    let (status, body) = send_json(&app, delete(&format!("/api/genres/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Musical");

    let (status, body) = send_json(&app, get(&format!("/api/genres/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("No genre was found with ID: {id}"));

    let (status, _) = send_json(&app, delete(&format!("/api/genres/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn genre_in_use_cannot_be_deleted() {
    let app = test_app().await;
    let id = create_genre(&app, "Crime").await;
    create_movie(&app, "Heat", 8.3, id).await;

    let (status, _) = send_json(&app, delete(&format!("/api/genres/{id}"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send_json(&app, get(&format!("/api/genres/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_check_answers() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}
