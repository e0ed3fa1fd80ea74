// src/error/types.rs
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Resource not found")]
    NotFound,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown route: {0}")]
    InvalidRoute(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the server answered but refused the request
    /// (any non-2xx status, including 404).
    pub fn is_status(&self) -> bool {
        matches!(self, AppError::Status { .. } | AppError::NotFound)
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Other(format!("Number parse error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_are_flagged() {
        let err = AppError::Status {
            status: 500,
            url: "http://localhost:8000/api/characters/".to_string(),
        };
        assert!(err.is_status());
        assert!(AppError::NotFound.is_status());
        assert!(!AppError::Other("boom".to_string()).is_status());
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::NotFound).unwrap();
        assert_eq!(json, "\"Resource not found\"");
    }

    #[test]
    fn test_parse_int_conversion() {
        let err: AppError = "abc".parse::<u64>().unwrap_err().into();
        assert!(err.to_string().starts_with("Other error: Number parse error"));
    }
}
