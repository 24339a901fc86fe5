//! Error handling module for the VCC client.
//!
//! Provides the centralized error taxonomy shared by the remote clients, the
//! certificate renderer and the persisted session state. Field-scoped form
//! validation errors are deliberately not part of this type; they live in
//! [`crate::form::ValidationErrors`] and never reach the network layer.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const REMOTE_ERROR: &str = "REMOTE_ERROR";
    pub const AUTH_ERROR: &str = "AUTH_ERROR";
    pub const RENDER_ERROR: &str = "RENDER_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Non-success response from the remote record or session service
    Remote(String),
    /// Credential rejection during login
    Auth(String),
    /// Certificate document assembly failure
    Render(String),
    /// Persisted client state could not be read or written
    Storage(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Remote(_) => codes::REMOTE_ERROR,
            AppError::Auth(_) => codes::AUTH_ERROR,
            AppError::Render(_) => codes::RENDER_ERROR,
            AppError::Storage(_) => codes::STORAGE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Remote(msg)
            | AppError::Auth(msg)
            | AppError::Render(msg)
            | AppError::Storage(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        AppError::Remote(format!("Request failed: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("IO error: {:?}", err);
        AppError::Storage(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Storage(format!("JSON error: {}", err))
    }
}
