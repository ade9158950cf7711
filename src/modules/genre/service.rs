use super::dto::GenreDto;
use super::model::Genre;
use crate::error::{AppError, Result};
use crate::state::AppState;
use tracing::info;
use validator::Validate;

pub struct GenreService;

impl GenreService {
    fn not_found(id: u8) -> AppError {
        AppError::not_found(format!("No genre was found with ID: {}", id))
    }

    pub async fn find_all(state: AppState) -> Result<Vec<Genre>> {
        state.genres.get_all().await
    }

    pub async fn find_by_id(state: AppState, id: u8) -> Result<Genre> {
        state
            .genres
            .get_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn create(state: AppState, dto: GenreDto) -> Result<Genre> {
        dto.validate()?;

        let genre = state.genres.add(dto.into()).await?;
        info!("Created genre {} ({})", genre.id, genre.name);
        Ok(genre)
    }

    pub async fn update(state: AppState, id: u8, dto: GenreDto) -> Result<Genre> {
        let mut genre = Self::find_by_id(state.clone(), id).await?;
        dto.validate()?;

        genre.name = dto.name;
        state.genres.update(&genre).await
    }

    pub async fn delete(state: AppState, id: u8) -> Result<Genre> {
        let genre = Self::find_by_id(state.clone(), id).await?;

        let genre = state.genres.delete(&genre).await?;
        info!("Deleted genre {}", genre.id);
        Ok(genre)
    }
}
