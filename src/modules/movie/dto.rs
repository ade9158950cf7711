use axum::extract::Multipart;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::model::{GenreFilter, Movie, MovieDetails, NewMovie};
use crate::common::encoding::serialize_base64;
use crate::common::upload::{read_poster, PosterUpload};
use crate::error::{AppError, Result};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailsDto {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub storeline: String,
    #[serde(serialize_with = "serialize_base64")]
    #[schema(value_type = String, format = Byte)]
    pub poster: Vec<u8>,
    pub genre_id: u8,
    pub genre_name: String,
}

impl From<MovieDetails> for MovieDetailsDto {
    fn from(m: MovieDetails) -> Self {
        Self {
            id: m.id,
            title: m.title,
            year: m.year,
            rate: m.rate,
            storeline: m.storeline,
            poster: m.poster,
            genre_id: m.genre_id,
            genre_name: m.genre_name,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ByGenreQuery {
    /// Genre to filter by; `0` or no value lists every movie.
    #[serde(alias = "gereId")]
    pub genre_id: Option<u8>,
}

impl ByGenreQuery {
    pub fn filter(&self) -> GenreFilter {
        self.genre_id.filter(|id| *id != 0)
    }
}

/// Multipart body accepted when creating or updating a movie. Documentation only.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieFormBody {
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub storeline: String,
    pub genre_id: u8,
    #[schema(value_type = Option<String>, format = Binary)]
    pub poster: Option<Vec<u8>>,
}

/// Movie fields read from a multipart request.
#[derive(Debug, Validate)]
pub struct MovieForm {
    #[validate(length(min = 1, max = 250, message = "Title must be between 1 and 250 characters"))]
    pub title: String,
    pub year: i32,
    pub rate: f64,
    #[validate(length(min = 1, max = 2500, message = "Storeline must be between 1 and 2500 characters"))]
    pub storeline: String,
    pub genre_id: u8,
    pub poster: Option<PosterUpload>,
}

impl MovieForm {
    /// Reads every form field. Field names are matched case-insensitively and
    /// a poster part that is not a file, or is an empty file, counts as no poster.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut title = None;
        let mut year = None;
        let mut rate = None;
        let mut storeline = None;
        let mut genre_id = None;
        let mut poster = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_ascii_lowercase();

            match name.as_str() {
                "poster" if field.file_name().is_none() => {
                    debug!("Ignoring poster field without a file name");
                }
                "poster" => {
                    let upload = read_poster(field).await?;
                    if !upload.is_empty() {
                        poster = Some(upload);
                    }
                }
                "title" => title = Some(field.text().await?),
                "year" => year = Some(field.text().await?),
                "rate" => rate = Some(field.text().await?),
                "storeline" => storeline = Some(field.text().await?),
                "genreid" => genre_id = Some(field.text().await?),
                _ => debug!("Ignoring form field {}", name),
            }
        }

        let form = Self {
            title: required(title, "Title")?,
            year: parsed(year, "Year")?,
            rate: parsed(rate, "Rate")?,
            storeline: required(storeline, "Storeline")?,
            genre_id: parsed(genre_id, "GenreId")?,
            poster,
        };
        form.validate()?;

        Ok(form)
    }

    /// Overwrites the scalar fields of a stored movie. The poster is never touched.
    pub fn apply_to(self, movie: &mut Movie) {
        movie.title = self.title;
        movie.genre_id = self.genre_id;
        movie.year = self.year;
        movie.storeline = self.storeline;
        movie.rate = self.rate;
    }
}

impl From<MovieForm> for NewMovie {
    fn from(form: MovieForm) -> Self {
        Self {
            title: form.title,
            year: form.year,
            rate: form.rate,
            storeline: form.storeline,
            poster: Vec::new(),
            genre_id: form.genre_id,
        }
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value.ok_or_else(|| AppError::validation(format!("The {} field is required.", field)))
}

fn parsed<T: FromStr>(value: Option<String>, field: &str) -> Result<T> {
    required(value, field)?
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("The value for {} is not valid.", field)))
}
