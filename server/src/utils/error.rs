use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::services::LinkEncodeError;
use crate::store::StoreError;
use crate::utils::response::{error as error_response, plain_text};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid scheme ID format!")]
    InvalidSchemeIdFormat,

    #[error("Invalid scheme ID!")]
    SchemeNotFound,

    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    #[error("Malformed multipart body")]
    Multipart(#[from] MultipartError),

    #[error("Expected a multipart/form-data body")]
    NotMultipart(#[from] MultipartRejection),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),

    #[error("File I/O error")]
    Io(#[from] std::io::Error),

    #[error("QR code generation failed")]
    LinkEncode(#[from] LinkEncodeError),

    #[error("Template rendering failed")]
    Template(#[from] askama::Error),

    #[error("Internal server error")]
    InternalServerError(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::SchemeNotFound,
            StoreError::Database(e) => AppError::DatabaseError(e),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidSchemeIdFormat => StatusCode::BAD_REQUEST,
            AppError::SchemeNotFound => StatusCode::NOT_FOUND,
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Multipart(e) => e.status(),
            AppError::NotMultipart(e) => e.status(),
            AppError::DatabaseError(_)
            | AppError::Io(_)
            | AppError::LinkEncode(_)
            | AppError::Template(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidSchemeIdFormat => "INVALID_SCHEME_ID_FORMAT",
            AppError::SchemeNotFound => "SCHEME_NOT_FOUND",
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::Multipart(_) => "MALFORMED_MULTIPART",
            AppError::NotMultipart(_) => "NOT_MULTIPART",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::LinkEncode(_) => "QR_CODE_ERROR",
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::InvalidSchemeIdFormat | AppError::SchemeNotFound => {
                tracing::debug!(code = self.code(), "Rejected scheme lookup");
            }
            AppError::MissingField(field) => {
                error!(error = ?self, field = %field, "Application error");
            }
            AppError::InternalServerError(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::Multipart(e) => error!(error = ?e, "Multipart error"),
            AppError::NotMultipart(e) => {
                error!(error = %e.body_text(), "Multipart rejection");
            }
            AppError::DatabaseError(e) => error!(error = ?e, "Database error"),
            AppError::Io(e) => error!(error = ?e, "File I/O error"),
            AppError::LinkEncode(e) => error!(error = ?e, "QR code error"),
            AppError::Template(e) => error!(error = ?e, "Template error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        // Log internal details
        self.log();

        match &self {
            // Participation lookups answer in plain text
            AppError::InvalidSchemeIdFormat | AppError::SchemeNotFound => {
                plain_text(status, self.to_string())
            }
            AppError::MissingField(_)
            | AppError::Multipart(_)
            | AppError::NotMultipart(_) => {
                error_response(code, self.to_string(), None, status)
            }
            // Do not expose internal details in the response
            _ => error_response(code, "An internal error occurred", None, status),
        }
    }
}
