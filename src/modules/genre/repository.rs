use async_trait::async_trait;

use super::model::{Genre, NewGenre};
use crate::error::Result;
use crate::infrastructure::db::pool::DbPool;

/// Persistence gateway for genres.
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Genre>>;
    async fn get_by_id(&self, id: u8) -> Result<Option<Genre>>;
    async fn add(&self, genre: NewGenre) -> Result<Genre>;
    async fn update(&self, genre: &Genre) -> Result<Genre>;
    async fn delete(&self, genre: &Genre) -> Result<Genre>;
    async fn is_valid_genre(&self, id: u8) -> Result<bool>;
}

pub struct SqlGenreRepository {
    pool: DbPool,
}

impl SqlGenreRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for SqlGenreRepository {
    async fn get_all(&self) -> Result<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres")
            .fetch_all(&self.pool)
            .await?;

        Ok(genres)
    }

    async fn get_by_id(&self, id: u8) -> Result<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = ?1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await?;

        Ok(genre)
    }

    async fn add(&self, genre: NewGenre) -> Result<Genre> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name)
            VALUES (?1)
            RETURNING id, name
            "#,
        )
        .bind(genre.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(genre)
    }

    async fn update(&self, genre: &Genre) -> Result<Genre> {
        sqlx::query("UPDATE genres SET name = ?1 WHERE id = ?2")
            .bind(&genre.name)
            .bind(i64::from(genre.id))
            .execute(&self.pool)
            .await?;

        Ok(genre.clone())
    }

    async fn delete(&self, genre: &Genre) -> Result<Genre> {
        sqlx::query("DELETE FROM genres WHERE id = ?1")
            .bind(i64::from(genre.id))
            .execute(&self.pool)
            .await?;

        Ok(genre.clone())
    }

    async fn is_valid_genre(&self, id: u8) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres WHERE id = ?1")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
