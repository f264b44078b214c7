//! Error types for the application.

use matrix_sdk::ruma::OwnedRoomId;
use thiserror::Error;

/// Configuration-related errors.
///
/// These are reported as warnings; the values still flow into login.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {var} is not set")]
    MissingVar { var: &'static str },
}

/// Matrix client and request errors.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("Failed to build client for homeserver '{homeserver}': {source}")]
    ClientBuild {
        homeserver: String,
        #[source]
        source: matrix_sdk::ClientBuildError,
    },

    #[error("Login failed for '{user}': {source}")]
    LoginFailed {
        user: String,
        #[source]
        source: matrix_sdk::Error,
    },

    #[error("Room {room_id} is not known to this client")]
    UnknownRoom { room_id: OwnedRoomId },

    #[error("Invalid state content: {0}")]
    InvalidContent(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] matrix_sdk::HttpError),

    #[error("Matrix error: {0}")]
    Sdk(#[from] matrix_sdk::Error),
}

/// Result type alias for Matrix operations.
pub type MatrixResult<T> = std::result::Result<T, MatrixError>;
