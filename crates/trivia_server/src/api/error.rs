//! HTTP error envelope.
//!
//! Every failure leaves the server as `{success: false, error, message}` with a
//! fixed, kind-specific message. Internal details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use trivia_core::{RepoError, TriviaServiceError};

/// Client-facing error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Resource(s) Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::Unprocessable => "Not Processable",
            Self::Internal => "Internal Server Error",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status().as_u16(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<TriviaServiceError> for ApiError {
    fn from(value: TriviaServiceError) -> Self {
        match value {
            TriviaServiceError::Validation(_) => Self::BadRequest,
            TriviaServiceError::QuestionNotFound(_) | TriviaServiceError::CategoryNotFound(_) => {
                Self::NotFound
            }
            TriviaServiceError::UnknownQuizCategory(_) => Self::Unprocessable,
            TriviaServiceError::Repo(err) => {
                error!("event=api_error module=api status=error error_code=store_failure error={err}");
                Self::Internal
            }
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        TriviaServiceError::from(value).into()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use trivia_core::{QuestionValidationError, RepoError, TriviaServiceError};

    #[test]
    fn service_errors_map_to_fixed_kinds() {
        let cases = [
            (
                TriviaServiceError::Validation(QuestionValidationError::BlankAnswer),
                ApiError::BadRequest,
            ),
            (TriviaServiceError::QuestionNotFound(3), ApiError::NotFound),
            (TriviaServiceError::CategoryNotFound(9), ApiError::NotFound),
            (TriviaServiceError::UnknownQuizCategory(9), ApiError::Unprocessable),
            (
                TriviaServiceError::Repo(RepoError::InvalidData("broken".to_string())),
                ApiError::Internal,
            ),
        ];

        for (service_error, expected) in cases {
            assert_eq!(ApiError::from(service_error), expected);
        }
    }

    #[test]
    fn method_not_allowed_has_its_own_kind() {
        let api_error = ApiError::MethodNotAllowed;
        assert_eq!(api_error.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(api_error.to_string(), "405 Method Not Allowed");
    }

    #[test]
    fn repo_not_found_becomes_404() {
        let api_error = ApiError::from(RepoError::NotFound(12));
        assert_eq!(api_error.status(), StatusCode::NOT_FOUND);
        assert_eq!(api_error.message(), "Resource(s) Not Found");
    }
}
