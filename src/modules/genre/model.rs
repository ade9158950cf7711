use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, FromRow, ToSchema, Clone, PartialEq)]
pub struct Genre {
    #[sqlx(try_from = "i64")]
    pub id: u8,
    pub name: String,
}

/// A genre that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewGenre {
    pub name: String,
}
