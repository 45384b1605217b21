//! Error types for core module
//!
//! Covers settings persistence. Everything else in the crate either cannot
//! fail or reports through [`crate::game::error::GameError`].

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
