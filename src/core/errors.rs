//! Errors raised by the playlist service

use thiserror::Error;

/// Failure of a service operation
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A playlist or song id has no stored record
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn playlist_not_found(id: i64) -> Self {
        ServiceError::NotFound(format!("Not found playlist with id = {}", id))
    }

    pub fn song_not_found(id: i64) -> Self {
        ServiceError::NotFound(format!("Not found song with id = {}", id))
    }

    #[cfg(test)]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound(_))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
