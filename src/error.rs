//! Error types for toolcheck operations.
//!
//! This module defines [`ToolcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ToolcheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ToolcheckError::Other`) for unexpected errors
//! - Version text that fails to parse is never an error: the compatibility
//!   core degrades to an indeterminate verdict instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolcheck operations.
#[derive(Debug, Error)]
pub enum ToolcheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Tool entry already exists in the configuration.
    #[error("Tool {name} already exists")]
    ToolExists { name: String },

    /// Tool entry does not exist in the configuration.
    #[error("Tool {name} does not exist")]
    UnknownTool { name: String },

    /// A range expression without a supported `^`/`~`/`*` form.
    ///
    /// This is a config error the user must fix; plain exact-match
    /// specifiers are routed around the expander by the resolver.
    #[error("Version range must start with ^ or ~ or contain *: {expr}")]
    InvalidRange { expr: String },

    /// Launching a tool's version command failed.
    #[error("Failed to invoke '{tool}': {message}")]
    Invocation { tool: String, message: String },

    /// A tool's version command exceeded the audit timeout.
    #[error("'{tool}' timed out after {seconds}s")]
    Timeout { tool: String, seconds: u64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for toolcheck operations.
pub type Result<T> = std::result::Result<T, ToolcheckError>;
