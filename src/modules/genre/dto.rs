use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::genre::model::NewGenre;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenreDto {
    #[serde(alias = "Name")]
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
}

impl From<GenreDto> for NewGenre {
    fn from(dto: GenreDto) -> Self {
        Self { name: dto.name }
    }
}
