use async_trait::async_trait;

use super::model::{GenreFilter, Movie, MovieDetails, NewMovie};
use crate::error::Result;
use crate::infrastructure::db::pool::DbPool;

/// Persistence gateway for movies.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Movies with their genre name, highest rate first.
    async fn get_all(&self, genre: GenreFilter) -> Result<Vec<MovieDetails>>;
    async fn get_by_id(&self, id: i32, genre: GenreFilter) -> Result<Option<Movie>>;
    async fn get_details(&self, id: i32) -> Result<Option<MovieDetails>>;
    async fn add(&self, movie: NewMovie) -> Result<Movie>;
    async fn update(&self, movie: &Movie) -> Result<Movie>;
    async fn delete(&self, movie: &Movie) -> Result<Movie>;
}

pub struct SqlMovieRepository {
    pool: DbPool,
}

impl SqlMovieRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for SqlMovieRepository {
    async fn get_all(&self, genre: GenreFilter) -> Result<Vec<MovieDetails>> {
        let movies = sqlx::query_as::<_, MovieDetails>(
            r#"
            SELECT m.id, m.title, m.year, m.rate, m.storeline, m.poster, m.genre_id,
                   g.name AS genre_name
            FROM movies m
            JOIN genres g ON g.id = m.genre_id
            WHERE ?1 IS NULL OR m.genre_id = ?1
            ORDER BY m.rate DESC
            "#,
        )
        .bind(genre.map(i64::from))
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }

    async fn get_by_id(&self, id: i32, genre: GenreFilter) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, year, rate, storeline, poster, genre_id
            FROM movies
            WHERE id = ?1 AND (?2 IS NULL OR genre_id = ?2)
            "#,
        )
        .bind(id)
        .bind(genre.map(i64::from))
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn get_details(&self, id: i32) -> Result<Option<MovieDetails>> {
        let movie = sqlx::query_as::<_, MovieDetails>(
            r#"
            SELECT m.id, m.title, m.year, m.rate, m.storeline, m.poster, m.genre_id,
                   g.name AS genre_name
            FROM movies m
            JOIN genres g ON g.id = m.genre_id
            WHERE m.id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn add(&self, movie: NewMovie) -> Result<Movie> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, year, rate, storeline, poster, genre_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, title, year, rate, storeline, poster, genre_id
            "#,
        )
        .bind(movie.title)
        .bind(movie.year)
        .bind(movie.rate)
        .bind(movie.storeline)
        .bind(movie.poster)
        .bind(i64::from(movie.genre_id))
        .fetch_one(&self.pool)
        .await?;

        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<Movie> {
        sqlx::query(
            r#"
            UPDATE movies
            SET title = ?1, year = ?2, rate = ?3, storeline = ?4, poster = ?5, genre_id = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(movie.rate)
        .bind(&movie.storeline)
        .bind(&movie.poster)
        .bind(i64::from(movie.genre_id))
        .bind(movie.id)
        .execute(&self.pool)
        .await?;

        Ok(movie.clone())
    }

    async fn delete(&self, movie: &Movie) -> Result<Movie> {
        sqlx::query("DELETE FROM movies WHERE id = ?1")
            .bind(movie.id)
            .execute(&self.pool)
            .await?;

        Ok(movie.clone())
    }
}
