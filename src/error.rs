//! Error types
//!
//! The renderer and field updates never fail. Everything here comes from the
//! edges: reading metadata files, parsing CLI input, and the export actions.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the readmegen library
#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown license: {0} (expected one of MIT, Apache-2.0, GPL-3.0, BSD-3-Clause, ISC)")]
    UnknownLicense(String),

    #[error("Invalid value for {field}: {value} (expected true or false)")]
    InvalidFlag { field: String, value: String },

    #[error("Invalid assignment '{0}' (expected FIELD=VALUE)")]
    InvalidAssignment(String),

    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

/// Result type alias for readmegen operations
pub type Result<T> = std::result::Result<T, ReadmeError>;
