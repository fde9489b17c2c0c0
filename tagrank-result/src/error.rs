use std::{fmt, io};
use thiserror::Error;

/// Unified error type for all tagrank operations.
///
/// Every failure mode in a run maps to exactly one variant, and every
/// variant aborts the whole run: there are no retries and no partial
/// success reporting. Errors propagate upward with `?` and are reported
/// once at the binary boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing run parameters.
    ///
    /// Raised before any store access: wrong argument arity, a language
    /// code that is not exactly two ASCII characters, an unparsable
    /// timestamp, or a rank size of zero. Fix the input and rerun.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store could not be opened, or was used while closed.
    ///
    /// Surfaced immediately; no scan is attempted.
    #[error("store connection error: {0}")]
    StoreConnection(String),

    /// Failure while iterating scan results.
    ///
    /// A mid-scan fault discards all rankings accumulated so far for
    /// every language; no partial output is emitted for the run.
    #[error("scan I/O error: {0}")]
    ScanIo(#[source] io::Error),

    /// The deployed schema does not match the fixed slot-to-column
    /// mapping: a count cell of the wrong width, a non-UTF-8 hashtag
    /// cell, or a row key too short to carry a language suffix.
    ///
    /// Treated as a configuration fault, never a per-row condition to
    /// tolerate; the run aborts rather than silently skipping rows.
    #[error("schema access error: {0}")]
    SchemaAccess(String),

    /// I/O error outside the scan path (output sink, file creation).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Internal error indicating a bug or unexpected state.
    #[error("an internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create an [`Error::InvalidArgument`] from any displayable value.
    #[inline]
    pub fn invalid_argument<E: fmt::Display>(err: E) -> Self {
        Error::InvalidArgument(err.to_string())
    }

    /// Create an [`Error::ScanIo`] from an underlying I/O fault.
    ///
    /// Scan-path I/O is kept distinct from [`Error::Io`] so callers can
    /// tell an aborted scan apart from a failed output write.
    #[inline]
    pub fn scan_io(err: io::Error) -> Self {
        Error::ScanIo(err)
    }

    /// Create an [`Error::SchemaAccess`] from any displayable value.
    #[inline]
    pub fn schema_access<E: fmt::Display>(err: E) -> Self {
        Error::SchemaAccess(err.to_string())
    }
}
