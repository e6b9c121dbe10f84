//! Error types for appdesc operations.
//!
//! This module defines [`AppdescError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AppdescError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `AppdescError::Other`) for unexpected errors
//! - Unparseable versions are never errors; they surface as "incompatible"

use std::path::PathBuf;
use thiserror::Error;

use crate::resolver::CircularDependencyError;

/// Core error type for appdesc operations.
#[derive(Debug, Error)]
pub enum AppdescError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A descriptor document is not valid JSON.
    #[error("Failed to parse descriptor at {path}: {message}")]
    DescriptorParseError { path: PathBuf, message: String },

    /// A descriptor is well-formed JSON but unusable.
    #[error("Invalid descriptor: {message}")]
    InvalidDescriptor { message: String },

    /// No application with the given id is loaded.
    #[error("Unknown application: {id}")]
    UnknownApplication { id: String },

    /// Application dependency cycle detected.
    #[error(transparent)]
    CircularDependency(#[from] CircularDependencyError),

    /// Remote registry request failed.
    #[error("Remote request to {url} failed: {message}")]
    Remote { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for appdesc operations.
pub type Result<T> = std::result::Result<T, AppdescError>;
