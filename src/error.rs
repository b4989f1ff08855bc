//! Error handling module for HackinTune
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

#![allow(dead_code)] // Error variants and helpers are available for future use

use thiserror::Error;

/// Main error type for HackinTune
#[derive(Error, Debug)]
pub enum HackinTuneError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Property list read/write errors (OpenCore config.plist)
    #[error("Plist error: {0}")]
    Plist(#[from] plist::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// External command failures (diskutil, ioreg, zip, curl, ...)
    #[error("Command failed: {0}")]
    Command(String),

    /// Parsing errors (command output, release tags, plist structure)
    #[error("Parse error: {0}")]
    Parse(String),

    /// EFI partition and artifact errors (mount state, generation paths)
    #[error("EFI error: {0}")]
    Efi(String),

    /// Validation errors (system state checks, user input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// State errors (mutex poisoning, invalid state)
    #[error("State error: {0}")]
    State(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for HackinTune operations
pub type Result<T> = std::result::Result<T, HackinTuneError>;

// Convenient error constructors
impl HackinTuneError {
    /// Create a command error
    pub fn command(msg: impl Into<String>) -> Self {
        Self::Command(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an EFI error
    pub fn efi(msg: impl Into<String>) -> Self {
        Self::Efi(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HackinTuneError::efi("no mounted EFI partition");
        assert_eq!(err.to_string(), "EFI error: no mounted EFI partition");

        let err = HackinTuneError::parse("missing tag_name field");
        assert_eq!(err.to_string(), "Parse error: missing tag_name field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HackinTuneError = io_err.into();
        assert!(matches!(err, HackinTuneError::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let err = HackinTuneError::command("diskutil exited with status 1");
        assert!(matches!(err, HackinTuneError::Command(_)));

        let err = HackinTuneError::validation("SIP is enabled");
        assert!(matches!(err, HackinTuneError::Validation(_)));
    }
}
