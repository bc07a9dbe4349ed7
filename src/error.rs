use std::io;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("ticket not found: {0}")]
    TicketNotFound(Uuid),
    #[error("ticket already resolved: {0}")]
    TicketResolved(Uuid),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
