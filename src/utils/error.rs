use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("User not found.")]
    UserNotFound,
    #[error("{0}")]
    Database(String),
}

impl AppError {
    /// Stable, machine-readable name carried in the failure envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::UserNotFound => "user_not_found",
            AppError::Database(_) => "database",
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            kind: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

/// Value of the `error` field in every failure envelope
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}
