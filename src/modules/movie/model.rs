use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::common::encoding::serialize_base64;

/// Restricts a movie query to one genre. `None` matches every genre.
pub type GenreFilter = Option<u8>;

#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub storeline: String,
    #[serde(serialize_with = "serialize_base64")]
    #[schema(value_type = String, format = Byte)]
    pub poster: Vec<u8>,
    #[sqlx(try_from = "i64")]
    pub genre_id: u8,
}

/// A movie joined with the name of its genre.
#[derive(Debug, FromRow, Clone)]
pub struct MovieDetails {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub storeline: String,
    pub poster: Vec<u8>,
    #[sqlx(try_from = "i64")]
    pub genre_id: u8,
    pub genre_name: String,
}

#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub storeline: String,
    pub poster: Vec<u8>,
    pub genre_id: u8,
}

impl NewMovie {
    pub fn with_poster(mut self, poster: Vec<u8>) -> Self {
        self.poster = poster;
        self
    }
}
