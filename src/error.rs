use std::borrow::Cow;

use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::auth::{AuthError, API_KEY_SCHEME};

#[derive(Debug, Clone, Copy, Deserialize)]
pub enum ErrorVerbosity {
    /// Server returns an empty response with [`StatusCode::NO_CONTENT`] for all errors.
    None,
    /// Server returns only the appropriate status code.
    StatusCode,
    /// Server returns only the message with the appropriate status code.
    Message,
    /// Server returns the message, the error type with cleared error content and the appropriate status code.
    Type,
    /// Server returns the message, the error type with the error content and the appropriate status code.
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_message(&self) -> bool {
        matches!(
            self,
            ErrorVerbosity::Message | ErrorVerbosity::Type | ErrorVerbosity::Full
        )
    }

    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    #[serde(flatten)]
    error: ApiError,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ApiErrorMessage {
    message: &'static str,
}

impl From<ApiErrorResponse> for ApiErrorMessage {
    fn from(response: ApiErrorResponse) -> Self {
        ApiErrorMessage {
            message: response.message,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let headers = self.error.headers();

        match self.error.verbosity() {
            ErrorVerbosity::None => StatusCode::NO_CONTENT.into_response(),
            ErrorVerbosity::StatusCode => {
                let status_code = self.error.status_code();

                (status_code, headers).into_response()
            }
            ErrorVerbosity::Message => {
                let status_code = self.error.status_code();

                (status_code, headers, Json(ApiErrorMessage::from(self))).into_response()
            }
            ErrorVerbosity::Type | ErrorVerbosity::Full => {
                let status_code = self.error.status_code();

                (status_code, headers, Json(self)).into_response()
            }
        }
    }
}

#[derive(Debug, From, Serialize)]
#[serde(tag = "error_type", content = "error")]
/// API error
pub enum ApiError {
    /// Authorization header error
    ///
    /// This error is returned when the `Authorization` header is missing or malformed.
    AuthHeader(AuthHeaderError),
}

impl ApiError {
    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::AuthHeader(err) => err.verbosity,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::AuthHeader(_) => "Authorization header error",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AuthHeader(err) => err.status_code(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        match self {
            ApiError::AuthHeader(err) => {
                if let AuthHeaderErrorType::Missing = err.auth_header_error_type {
                    headers.insert("WWW-Authenticate", HeaderValue::from_static(API_KEY_SCHEME));
                }
            }
        }

        headers
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        let message = match error.verbosity() {
            ErrorVerbosity::None => "",
            _ => error.message(),
        };

        ApiErrorResponse { error, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiErrorResponse::from(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub enum AuthHeaderErrorType {
    Missing,
    Malformed,
}

impl From<AuthError> for AuthHeaderErrorType {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NoAuthHeaderIncluded => AuthHeaderErrorType::Missing,
            AuthError::MalformedHeader => AuthHeaderErrorType::Malformed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthHeaderError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    auth_header_error_type: AuthHeaderErrorType,
    auth_header_error_reason: Option<Cow<'static, str>>,
}

impl AuthHeaderError {
    pub fn new(verbosity: ErrorVerbosity, auth_header_error_type: AuthHeaderErrorType) -> Self {
        let auth_header_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| Self::reason(&auth_header_error_type));

        AuthHeaderError {
            verbosity,
            auth_header_error_type,
            auth_header_error_reason,
        }
    }

    fn reason(auth_header_error_type: &AuthHeaderErrorType) -> Cow<'static, str> {
        match auth_header_error_type {
            AuthHeaderErrorType::Missing => Cow::Borrowed("`Authorization` header is missing"),
            AuthHeaderErrorType::Malformed => Cow::Borrowed("malformed authorization header"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self.auth_header_error_type {
            AuthHeaderErrorType::Missing => StatusCode::UNAUTHORIZED,
            AuthHeaderErrorType::Malformed => StatusCode::BAD_REQUEST,
        }
    }
}
