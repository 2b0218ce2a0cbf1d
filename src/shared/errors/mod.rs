//! Error Types
//!
//! The service-level error taxonomy and its mapping onto HTTP responses.
//!
//! Every failure leaving a repository or use case is a [`ServiceError`].
//! Its `Display` output is the safe message; the boxed source carries the
//! internal diagnostic and is only ever logged.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Boxed internal cause attached to a [`ServiceError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of a [`ServiceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    User,
    System,
}

impl ErrorKind {
    /// Validation and not-found failures are specialised user errors.
    #[must_use]
    pub fn is_user_error(self) -> bool {
        matches!(self, Self::Validation | Self::NotFound | Self::User)
    }
}

/// Raised as the source of a system error when a request context is
/// cancelled or its deadline passes before the operation completes.
#[derive(Debug, Error)]
#[error("operation '{operation}' was cancelled before it completed")]
pub struct OperationCancelled {
    pub operation: String,
}

/// Failures returned by repositories and use cases
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input broke a syntactic or business rule
    #[error("{message}")]
    Validation {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// A lookup by natural key matched nothing
    #[error("{message}")]
    NotFound {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Any other caller-caused failure
    #[error("{message}")]
    User {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Internal fault; the message is generic and the source holds the detail
    #[error("{message}")]
    System {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    pub fn validation_with_source(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            source: None,
        }
    }

    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a backend failure behind the generic
    /// `Unable to <operation> due to a system error` message.
    pub fn system(operation: &str, source: impl Into<BoxError>) -> Self {
        Self::System {
            message: format!("Unable to {operation} due to a system error"),
            source: source.into(),
        }
    }

    /// System error reporting that `operation` was abandoned because its
    /// request context finished first.
    #[must_use]
    pub fn cancelled(operation: &str) -> Self {
        Self::system(
            operation,
            OperationCancelled {
                operation: operation.to_string(),
            },
        )
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::User { .. } => ErrorKind::User,
            Self::System { .. } => ErrorKind::System,
        }
    }

    /// Message that is safe to hand back to the caller
    #[must_use]
    pub fn safe_message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::User { message, .. }
            | Self::System { message, .. } => message,
        }
    }

    #[must_use]
    pub fn is_user_error(&self) -> bool {
        self.kind().is_user_error()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::System { source, .. } if source.is::<OperationCancelled>())
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Missing query parameter '{0}'")]
    MissingQueryParameter(&'static str),

    /// Request body that could not be read as the expected JSON
    #[error("{0}")]
    MalformedBody(String),

    #[error("Invalid request")]
    InvalidRequest(Vec<FieldError>),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for request body validation
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(err) => match err.kind() {
                ErrorKind::Validation | ErrorKind::User => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::System => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::MissingQueryParameter(_) | Self::MalformedBody(_) | Self::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Service(err) => match err.kind() {
                ErrorKind::Validation => "VALIDATION_ERROR",
                ErrorKind::NotFound => "NOT_FOUND",
                ErrorKind::User => "BAD_REQUEST",
                ErrorKind::System => "INTERNAL_ERROR",
            },
            Self::MissingQueryParameter(_) | Self::MalformedBody(_) | Self::InvalidRequest(_) => {
                "BAD_REQUEST"
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();

        if let ApiError::Service(ServiceError::System { message, source }) = &self {
            tracing::error!(error = %source, safe_message = %message, "Request failed with a system error");
        }

        let (message, details) = match self {
            ApiError::Service(err) => (err.safe_message().to_string(), None),
            ApiError::MissingQueryParameter(name) => {
                (format!("Missing query parameter '{name}'"), None)
            }
            ApiError::MalformedBody(reason) => (reason, None),
            ApiError::InvalidRequest(fields) => ("Invalid request".to_string(), Some(fields)),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let fields = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| FieldError {
                    field: (*field).to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map_or_else(|| "invalid".to_string(), ToString::to_string),
                })
            })
            .collect();
        ApiError::InvalidRequest(fields)
    }
}
