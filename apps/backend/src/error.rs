use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// JSON body emitted for every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing token")]
    MissingToken,
    #[error("Invalid token: {detail}")]
    InvalidToken { detail: String },
    #[error("Invalid credentials")]
    AuthenticationError,
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Human-readable text placed in the response body.
    fn message(&self) -> String {
        match self {
            AppError::MissingToken => "Missing token".to_string(),
            AppError::InvalidToken { detail } => format!("Invalid token: {detail}"),
            AppError::AuthenticationError => "Invalid credentials".to_string(),
            AppError::NotFound { detail } => detail.clone(),
            AppError::Validation { detail } => detail.clone(),
            // Operational details stay out of the response body.
            AppError::Db { .. } | AppError::Internal { .. } | AppError::Config { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    /// Central kind -> status mapping consumed by the dispatch layer.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken
            | AppError::InvalidToken { .. }
            | AppError::AuthenticationError => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Db { .. } | AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid_token(detail: impl Into<String>) -> Self {
        Self::InvalidToken {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorBody {
            message: self.message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::AppError;

    #[test]
    fn test_auth_errors_map_to_401() {
        assert_eq!(AppError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::invalid_token("bad signature").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::AuthenticationError.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            AppError::not_found("Couldn't find Todo with 'id'=1").status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_validation_maps_to_422() {
        assert_eq!(
            AppError::validation("Title can't be blank").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_operational_errors_map_to_500_with_generic_message() {
        for err in [
            AppError::db("connection refused"),
            AppError::internal("boom"),
            AppError::config("missing var"),
        ] {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.message(), "Internal server error");
        }
    }
}
