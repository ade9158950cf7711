use super::dto::{ByGenreQuery, MovieDetailsDto, MovieForm, MovieFormBody};
use super::model::Movie;
use super::service::MovieService;
use crate::common::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};

#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "Movies ordered by rate, highest first", body = Vec<MovieDetailsDto>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieDetailsDto>>, AppError> {
    MovieService::list_movies(state, None).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = MovieDetailsDto),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieDetailsDto>, AppError> {
    MovieService::get_movie(state, id).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/movies/GetByGenreId",
    params(ByGenreQuery),
    responses(
        (status = 200, description = "Movies of one genre, highest rate first", body = Vec<MovieDetailsDto>)
    ),
    tag = "Movies"
)]
pub async fn list_movies_by_genre(
    State(state): State<AppState>,
    Query(query): Query<ByGenreQuery>,
) -> Result<Json<Vec<MovieDetailsDto>>, AppError> {
    MovieService::list_movies(state, query.filter()).await.map(Json)
}

#[utoipa::path(
    post,
    path = "/api/movies",
    request_body(content = MovieFormBody, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Movie created", body = Movie),
        (status = 400, description = "Invalid poster or genre", body = ApiResponse)
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Movie>, AppError> {
    let form = MovieForm::from_multipart(multipart).await?;
    MovieService::create_movie(state, form).await.map(Json)
}

#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    request_body(content = MovieFormBody, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Invalid poster or genre", body = ApiResponse),
        (status = 404, description = "Movie not found", body = ApiResponse)
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<Movie>, AppError> {
    let form = MovieForm::from_multipart(multipart).await?;
    MovieService::update_movie(state, id, form).await.map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie deleted", body = Movie),
        (status = 404, description = "Movie not found", body = ApiResponse)
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Movie>, AppError> {
    MovieService::delete_movie(state, id).await.map(Json)
}
