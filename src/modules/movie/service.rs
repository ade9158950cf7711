use super::dto::{MovieDetailsDto, MovieForm};
use super::model::{GenreFilter, Movie, NewMovie};
use crate::common::upload::validate_poster;
use crate::error::{AppError, Result};
use crate::state::AppState;
use tracing::info;

pub struct MovieService;

impl MovieService {
    pub async fn list_movies(state: AppState, genre: GenreFilter) -> Result<Vec<MovieDetailsDto>> {
        let movies = state.movies.get_all(genre).await?;

        Ok(movies.into_iter().map(MovieDetailsDto::from).collect())
    }

    /// Absent movies map to a bodiless 404.
    pub async fn get_movie(state: AppState, id: i32) -> Result<MovieDetailsDto> {
        state
            .movies
            .get_details(id)
            .await?
            .map(MovieDetailsDto::from)
            .ok_or(AppError::NotFound(None))
    }

    pub async fn create_movie(state: AppState, mut form: MovieForm) -> Result<Movie> {
        let poster = form
            .poster
            .take()
            .ok_or_else(|| AppError::validation("Poster is required!"))?;
        validate_poster(&poster)?;

        if !state.genres.is_valid_genre(form.genre_id).await? {
            return Err(AppError::validation("Invalid Genere ID!"));
        }

        let movie = NewMovie::from(form).with_poster(poster.into_bytes());
        let movie = state.movies.add(movie).await?;

        info!("Created movie {} ({})", movie.id, movie.title);
        Ok(movie)
    }

    pub async fn update_movie(state: AppState, id: i32, mut form: MovieForm) -> Result<Movie> {
        let mut movie = state
            .movies
            .get_by_id(id, None)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No movie was found with ID: {}", id)))?;

        if !state.genres.is_valid_genre(form.genre_id).await? {
            return Err(AppError::validation("Invalid genere ID!"));
        }

        if let Some(poster) = form.poster.take() {
            validate_poster(&poster)?;
            movie.poster = poster.into_bytes();
        }

        form.apply_to(&mut movie);
        let movie = state.movies.update(&movie).await?;

        info!("Updated movie {}", movie.id);
        Ok(movie)
    }

    pub async fn delete_movie(state: AppState, id: i32) -> Result<Movie> {
        let movie = state
            .movies
            .get_by_id(id, None)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No movie was found with ID {}", id)))?;

        let movie = state.movies.delete(&movie).await?;

        info!("Deleted movie {}", movie.id);
        Ok(movie)
    }
}
