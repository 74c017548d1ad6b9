// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NfoSweepError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<NfoSweepError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, NfoSweepError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to scan '{root}': {reason}")]
    ScanFailed {
        root: PathBuf,
        reason: String,
        #[source]
        source: Option<Box<NfoSweepError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata of '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode '{path}': {details}")]
    Decode { path: PathBuf, details: String },

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    FileRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to rename onto existing file '{path}'")]
    DestinationExists { path: PathBuf },

    #[error("Directory walk failed at '{path}': {details}")]
    Walk { path: PathBuf, details: String },
}

impl InfrastructureError {
    /// The underlying cause without the path prefix, for operator-facing lines
    /// that already print the path themselves.
    pub fn reason(&self) -> String {
        match self {
            Self::FileRead { source, .. }
            | Self::Metadata { source, .. }
            | Self::FileRename { source, .. } => source.to_string(),
            Self::Decode { details, .. } | Self::Walk { details, .. } => details.clone(),
            Self::DestinationExists { path } => {
                format!("destination already exists: {}", path.display())
            }
        }
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<NfoSweepError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| NfoSweepError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| NfoSweepError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
