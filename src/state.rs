use std::sync::Arc;

use crate::infrastructure::db::pool::DbPool;
use crate::modules::genre::repository::{GenreRepository, SqlGenreRepository};
use crate::modules::movie::repository::{MovieRepository, SqlMovieRepository};

#[derive(Clone)]
pub struct AppState {
    pub genres: Arc<dyn GenreRepository>,
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self {
            genres: Arc::new(SqlGenreRepository::new(db.clone())),
            movies: Arc::new(SqlMovieRepository::new(db)),
        }
    }
}
