use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use http::status::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const NOT_AUTHENTICATED_MESSAGE: &str = "Please authenticate yourself.";
const NOT_AUTHORIZED_MESSAGE: &str = "You are not allowed to do that.";
const NETWORK_ERROR_MESSAGE: &str = "Sorry, we've got noise on the line.";
const BAD_RESPONSE_MESSAGE: &str = "Sorry, the server's answer made no sense to us.";
const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong.";
const NOT_FOUND_MESSAGE: &str = "There's nothing here";

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    NotAuthenticated,
    InsufficientPrivileges,
    /// The request never produced a response (connect, timeout, transport).
    Network(String),
    /// The backend answered with a non-success status and an error payload.
    Api { status: u16, detail: String },
    /// The backend answered with a success status but an undecodable body.
    InvalidResponse(String),
    NotFound,
    InternalError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotAuthenticated | AppError::InsufficientPrivileges => StatusCode::FORBIDDEN,
            AppError::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Api { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::NotAuthenticated => String::from(NOT_AUTHENTICATED_MESSAGE),
            AppError::InsufficientPrivileges => String::from(NOT_AUTHORIZED_MESSAGE),
            AppError::Network(_) => String::from(NETWORK_ERROR_MESSAGE),
            // the backend phrases its error details for end users
            AppError::Api { detail, .. } => detail.clone(),
            AppError::InvalidResponse(_) => String::from(BAD_RESPONSE_MESSAGE),
            AppError::NotFound => String::from(NOT_FOUND_MESSAGE),
            AppError::InternalError(_) => String::from(INTERNAL_ERROR_MESSAGE),
        }
    }

    pub fn error_detail(&self) -> String {
        match self {
            AppError::NotAuthenticated => String::from(NOT_AUTHENTICATED_MESSAGE),
            AppError::InsufficientPrivileges => String::from("Insufficient privileges"),
            AppError::Network(e) => e.clone(),
            AppError::Api { detail, .. } => detail.clone(),
            AppError::InvalidResponse(e) => e.clone(),
            AppError::NotFound => String::from(NOT_FOUND_MESSAGE),
            AppError::InternalError(e) => e.clone(),
        }
    }

    /// Constructs a new [`AppError::InternalError`] from some other type.
    pub fn new(msg: impl ToString) -> Self {
        Self::InternalError(msg.to_string())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}

impl FromStr for AppError {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            AppError::InvalidResponse(error.to_string())
        } else {
            AppError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::InvalidResponse(error.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        AppError::InternalError(error.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(error: std::env::VarError) -> Self {
        AppError::InternalError(error.to_string())
    }
}
