use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI pipelines to tell a rejected template apart from
/// a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - template normalized (or validated with --check)
    Success = 0,
    /// Output declarations were rejected (malformed export or duplicate key)
    OutputsRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, parse error, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OutputsRejected => write!(f, "Outputs Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Host-side errors for loading, locating and writing templates.
///
/// Normalization failures themselves are
/// [`NormalizationError`](crate::output_normalization::domain::NormalizationError).
#[derive(Debug, Error)]
pub enum ExportsError {
    #[error("Template file not found: {path}\n\n💡 Hint: {suggestion}")]
    TemplateNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse template: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the template is valid {format}")]
    TemplateParseError {
        path: PathBuf,
        format: String,
        details: String,
    },

    #[error("Section '{section}' in {path} is not a mapping\n\n💡 Hint: The section must contain `Resources` and/or `Outputs` keys")]
    InvalidSection { path: PathBuf, section: String },

    #[error("Failed to serialize template as {format}\nDetails: {details}")]
    SerializationError { format: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid template path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing template file")]
    InvalidTemplatePath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
