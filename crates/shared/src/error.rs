use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    Internal,
}

impl ErrorCode {
    pub fn http_status(self) -> u16 {
        match self {
            ErrorCode::NotFound => 404,
            ErrorCode::Validation => 422,
            ErrorCode::Internal => 500,
        }
    }
}

/// JSON error body returned by the data server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

/// Failure to serve the roster data file, tied to the file it concerns.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiException {
    pub code: ErrorCode,
    pub message: String,
    pub path: PathBuf,
}

impl ApiException {
    /// A missing file is `NotFound`; any other read failure is `Internal`.
    pub fn read_failed(path: &Path, err: &io::Error) -> Self {
        let (code, message) = match err.kind() {
            io::ErrorKind::NotFound => (
                ErrorCode::NotFound,
                format!("data file '{}' not found", path.display()),
            ),
            _ => (
                ErrorCode::Internal,
                format!("failed to read data file '{}': {err}", path.display()),
            ),
        };
        Self {
            code,
            message,
            path: path.to_path_buf(),
        }
    }

    pub fn invalid_document(path: &Path, err: &serde_json::Error) -> Self {
        Self {
            code: ErrorCode::Validation,
            message: format!("invalid roster document '{}': {err}", path.display()),
            path: path.to_path_buf(),
        }
    }
}

impl From<ApiException> for ApiError {
    fn from(value: ApiException) -> Self {
        Self {
            code: value.code,
            message: value.message,
        }
    }
}
