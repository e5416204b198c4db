//! Error types for light-curve analysis.

use thiserror::Error;

/// Broad failure class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter is out of its valid domain.
    InvalidArgument,
    /// Too few samples for the requested operation.
    InsufficientData,
    /// A search finished without finding an acceptable answer.
    NotFound,
    /// A configuration document could not be parsed or written.
    Config,
}

/// Errors that can occur during folding, period search and centering.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Period must be positive and finite, got {period}")]
    InvalidPeriod { period: f64 },

    #[error(
        "Invalid period grid [{period_min}, {period_max}) with step {step}: \
         require 0 < period_min < period_max, step > 0 and at most {max} periods",
        max = crate::search::MAX_GRID_LEN
    )]
    InvalidGrid {
        period_min: f64,
        period_max: f64,
        step: f64,
    },

    #[error("Folded point ({phase}, {value}) is not finite or outside phase range [0, {period})")]
    InvalidPoint { phase: f64, value: f64, period: f64 },

    #[error("Partition bins_per_sqrt must be between 1 and {max}, got {bins_per_sqrt}")]
    InvalidPartition { bins_per_sqrt: usize, max: usize },

    #[error("Neighborhood radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("Invalid synthetic light curve parameter '{name}': {value}")]
    InvalidSynthetic { name: &'static str, value: f64 },

    #[error("Column length mismatch: {times} times, {values} values")]
    LengthMismatch { times: usize, values: usize },

    #[error("Insufficient data: found {found} samples, need at least {required}")]
    InsufficientData { found: usize, required: usize },

    #[error(
        "No point with at least {min_neighbors} neighbors within radius {radius} \
         ({examined} candidates examined)"
    )]
    NotFound {
        examined: usize,
        min_neighbors: usize,
        radius: f64,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_yml::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPeriod { .. }
            | Error::InvalidGrid { .. }
            | Error::InvalidPoint { .. }
            | Error::InvalidPartition { .. }
            | Error::InvalidRadius { .. }
            | Error::InvalidSynthetic { .. }
            | Error::LengthMismatch { .. } => ErrorKind::InvalidArgument,
            Error::InsufficientData { .. } => ErrorKind::InsufficientData,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
