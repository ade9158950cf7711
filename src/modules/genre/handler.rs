use super::dto::GenreDto;
use super::model::Genre;
use super::service::GenreService;
use crate::common::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// List all genres
#[utoipa::path(
    get,
    path = "/api/genres",
    responses(
        (status = 200, description = "List of genres", body = Vec<Genre>)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, AppError> {
    GenreService::find_all(state).await.map(Json)
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/api/genres/{id}",
    params(
        ("id" = u8, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = Genre),
        (status = 404, description = "Genre not found", body = ApiResponse)
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<u8>,
) -> Result<Json<Genre>, AppError> {
    GenreService::find_by_id(state, id).await.map(Json)
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/api/genres",
    request_body = GenreDto,
    responses(
        (status = 200, description = "Genre created", body = Genre),
        (status = 400, description = "Bad Request", body = ApiResponse)
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<GenreDto>,
) -> Result<Json<Genre>, AppError> {
    GenreService::create(state, payload).await.map(Json)
}

/// Update genre
#[utoipa::path(
    put,
    path = "/api/genres/{id}",
    params(
        ("id" = u8, Path, description = "Genre ID")
    ),
    request_body = GenreDto,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 400, description = "Bad Request", body = ApiResponse),
        (status = 404, description = "Genre not found", body = ApiResponse)
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<u8>,
    Json(payload): Json<GenreDto>,
) -> Result<Json<Genre>, AppError> {
    GenreService::update(state, id, payload).await.map(Json)
}

/// Delete genre
#[utoipa::path(
    delete,
    path = "/api/genres/{id}",
    params(
        ("id" = u8, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre deleted", body = Genre),
        (status = 404, description = "Genre not found", body = ApiResponse)
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<u8>,
) -> Result<Json<Genre>, AppError> {
    GenreService::delete(state, id).await.map(Json)
}
