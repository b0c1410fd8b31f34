//! Defines [`MssqlError`], representing all errors returned by this crate.

use arrow_schema::ArrowError;
use std::fmt::Debug;
use thiserror::Error;

use crate::datatypes::GeometryKind;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MssqlError {
    /// A per-kind encoder was handed a geometry of a kind it does not accept.
    #[error("Incorrect type passed to encoder: expected {expected:?}, found {found:?}")]
    TypeMismatch {
        /// The kind the encoder accepts.
        expected: GeometryKind,
        /// The kind of the geometry that was passed.
        found: GeometryKind,
    },

    /// No registered encoder accepts this geometry kind.
    #[error("No encoder registered for {0:?}")]
    MissingEncoder(GeometryKind),

    /// More than one registered encoder accepts this geometry kind.
    #[error("{1} encoders registered for {0:?}, expected exactly one")]
    AmbiguousEncoder(GeometryKind, usize),

    /// The geometry tree is nested deeper than the configured limit.
    #[error("Geometry nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),

    /// Whenever an offset or count does not fit in the 32-bit integers of the wire format.
    #[error("Overflow")]
    Overflow,

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, MssqlError>;

impl From<MssqlError> for ArrowError {
    fn from(err: MssqlError) -> Self {
        match err {
            MssqlError::Arrow(err) => err,
            _ => ArrowError::ExternalError(Box::new(err)),
        }
    }
}
