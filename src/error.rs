//! Error types for the census cleaning pipeline.
//!
//! Only fatal conditions are errors. A cell or row that breaks a schema rule is
//! recorded as a [`Violation`](crate::validation::Violation) and handled by
//! removing the row, so it never shows up here.
//!
//! ```
//! use census_clean::error::CensusError;
//!
//! fn describe(err: &CensusError) -> &'static str {
//!     match err {
//!         CensusError::NotFound(_) => "download step missing",
//!         CensusError::FormatMismatch(_) => "wrong raw file",
//!         CensusError::LogWrite(_) => "log destination unavailable",
//!         _ => "other",
//!     }
//! }
//! ```
//!
//! The `ResultExt` trait adds `.context()` to any `Result` whose error converts
//! into [`CensusError`]:
//!
//! ```no_run
//! use census_clean::error::ResultExt as _;
//!
//! fn load() -> census_clean::error::Result<String> {
//!     let text = std::fs::read_to_string("data/raw/adult.data").context("Failed to read raw data")?;
//!     Ok(text)
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

/// Main error type for census cleaning operations.
#[derive(Debug)]
pub enum CensusError {
    /// Raw input file does not exist
    NotFound(PathBuf),

    /// Raw input file does not carry the `.data` extension
    FormatMismatch(PathBuf),

    /// The violation log could not be opened or written
    LogWrite(std::io::Error),

    /// Malformed rule set (duplicate columns, inverted ranges, empty enumerations)
    Schema(String),

    /// Data processing errors (Polars reads, casts, writes)
    DataProcessing(String),

    /// Configuration errors
    Config(String),

    /// Other I/O errors
    Io(std::io::Error),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for CensusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(
                f,
                "Unable to find raw file in {}. Please check the download step.",
                path.display()
            ),
            Self::FormatMismatch(path) => write!(
                f,
                "{} is not a DATA file. Please ensure the correct file format.",
                path.display()
            ),
            Self::LogWrite(e) => write!(f, "Failed to write validation log: {e}"),
            Self::Schema(msg) => write!(f, "Invalid schema: {msg}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CensusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LogWrite(e) | Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CensusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for CensusError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for CensusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for CensusError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for census cleaning operations.
pub type Result<T> = std::result::Result<T, CensusError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CensusError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: CensusError = e.into();
            CensusError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: CensusError = e.into();
            CensusError::Other(format!("{}: {}", f(), err))
        })
    }
}
