use crate::error::{AppError, Result};
use axum::extract::multipart::Field;
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use std::path::Path;
use tracing::debug;

pub const ALLOWED_POSTER_EXTENSIONS: [&str; 2] = ["jpg", "png"];
pub const MAX_POSTER_SIZE: usize = 1_048_576;

/// A poster file received in a multipart form.
///
/// Only the first `MAX_POSTER_SIZE + 1` bytes are buffered; `size` always
/// holds the full length of the uploaded part so oversized files can be
/// rejected without keeping them in memory.
#[derive(Debug, Clone)]
pub struct PosterUpload {
    pub file_name: String,
    pub size: usize,
    data: Bytes,
}

impl PosterUpload {
    pub fn new(file_name: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            size: data.len(),
            data,
        }
    }

    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.size == 0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data.to_vec()
    }
}

/// Drains a multipart file field into memory, buffering at most one byte past
/// the poster size limit.
pub async fn read_poster(mut field: Field<'_>) -> Result<PosterUpload> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let mut buffer = BytesMut::new();
    let mut size = 0usize;

    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        size += chunk.len();

        let room = (MAX_POSTER_SIZE + 1).saturating_sub(buffer.len());
        if room > 0 {
            buffer.extend_from_slice(&chunk[..chunk.len().min(room)]);
        }
    }

    debug!("Received poster {} ({} bytes)", file_name, size);

    Ok(PosterUpload {
        file_name,
        size,
        data: buffer.freeze(),
    })
}

/// Checks the poster extension first, then its size.
pub fn validate_poster(poster: &PosterUpload) -> Result<()> {
    let allowed = poster
        .extension()
        .is_some_and(|ext| ALLOWED_POSTER_EXTENSIONS.contains(&ext.as_str()));
    if !allowed {
        return Err(AppError::validation("Only .png and .jpg images are allowed!"));
    }

    if poster.size > MAX_POSTER_SIZE {
        return Err(AppError::validation("Max allowed size for poster is 1MB!"));
    }

    Ok(())
}
