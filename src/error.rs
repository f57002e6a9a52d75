use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::connect::envelope::DecodeError;
use crate::connect::verify::AuthFailure;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unauthorized: {0}")]
    Unauthorized(AuthFailure),
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] DecodeError),
    #[error("sink error: {0}")]
    Sink(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Error::Sink(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthFailure> for Error {
    fn from(reason: AuthFailure) -> Self {
        Error::Unauthorized(reason)
    }
}

// The reason stays in the logs; callers only ever see the status.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Startup failures. The server refuses to bind while any of these hold.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("DS_CONNECT_KEY is required and must not be empty")]
    MissingSecret,
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
        }
    }
}
