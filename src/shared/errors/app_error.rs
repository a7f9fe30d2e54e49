use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Raised by a repository when a write loses a uniqueness race.
    #[error("Storage conflict: {0}")]
    StorageConflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {}", .0.join(", "))]
    ValidationError(Vec<String>),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Timeout: {0}")]
    Timeout(String),
}

impl AppError {
    /// Shorthand for a validation failure with a single entry
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![message.into()])
    }

    /// Messages a client is allowed to see
    pub fn client_messages(&self) -> Vec<String> {
        match self {
            AppError::ValidationError(errors) => errors.clone(),
            AppError::NotFound(msg) | AppError::AlreadyExists(msg) | AppError::InvalidInput(msg) => {
                vec![msg.clone()]
            }
            AppError::Timeout(_) => vec!["request timed out".to_string()],
            _ => vec!["internal server error".to_string()],
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => AppError::NotFound("Record not found in database".to_string()),
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                AppError::StorageConflict(info.message().to_string())
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::ApiError(format!("HTTP {}: {}", status, err))
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_entry() {
        let err = AppError::ValidationError(vec![
            "name: must not be blank".to_string(),
            "climate: length must be between 3 and 50".to_string(),
        ]);

        assert_eq!(
            err.to_string(),
            "Validation error: name: must not be blank, climate: length must be between 3 and 50"
        );
        assert_eq!(err.client_messages().len(), 2);
    }

    #[test]
    fn infrastructure_errors_are_hidden_from_clients() {
        let err = AppError::DatabaseError("connection refused".to_string());
        assert_eq!(err.client_messages(), vec!["internal server error".to_string()]);
    }

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err: AppError = diesel::result::Error::NotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
