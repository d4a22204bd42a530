//! Error types of the *splicedata* crate
//!
//! Defects are split into three layers:
//!
//! - [`RecordError`]: a single annotation record is malformed or
//!   violates an encoding precondition. Carries the identity of the
//!   failing record (gene and coordinates) so a defect in a
//!   multi-thousand-row table can be located.
//! - [`ReadWriteError`]: IO-level problems while reading the
//!   annotation table or creating the output store.
//! - [`SpliceError`]: catch-all for everything else (store writes,
//!   misuse of the lower-level APIs).

use std::fmt;

/// Generic error of the *splicedata* crate
#[derive(Debug, PartialEq, Eq)]
pub struct SpliceError {
    message: String,
}

impl SpliceError {
    pub fn new<S: ToString>(message: S) -> Self {
        SpliceError {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for SpliceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SpliceError {}

impl From<String> for SpliceError {
    fn from(message: String) -> Self {
        SpliceError { message }
    }
}

impl From<std::io::Error> for SpliceError {
    fn from(err: std::io::Error) -> Self {
        SpliceError::new(err)
    }
}

impl From<ndarray_npy::WriteNpzError> for SpliceError {
    fn from(err: ndarray_npy::WriteNpzError) -> Self {
        SpliceError::new(err)
    }
}

impl From<RecordError> for SpliceError {
    fn from(err: RecordError) -> Self {
        SpliceError::new(err)
    }
}

impl From<ReadWriteError> for SpliceError {
    fn from(err: ReadWriteError) -> Self {
        SpliceError::new(err)
    }
}

/// Error for IO-related issues during reading or writing
#[derive(Debug)]
pub struct ReadWriteError {
    message: String,
}

impl ReadWriteError {
    pub fn new<E: fmt::Display>(err: E) -> Self {
        ReadWriteError {
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ReadWriteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ReadWriteError {}

impl From<std::io::Error> for ReadWriteError {
    fn from(err: std::io::Error) -> Self {
        ReadWriteError::new(err)
    }
}

impl From<RecordError> for ReadWriteError {
    fn from(err: RecordError) -> Self {
        ReadWriteError::new(err)
    }
}

/// The ways a single annotation record can be defective
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordErrorKind {
    /// Wrong column count or a sequence length that does not match
    /// `tx_end - tx_start + 1 + 2 * context`
    Schema(String),
    /// Strand value other than `+` or `-`
    InvalidStrand(String),
    /// Sequence character outside `{N, A, C, G, T}` (case-insensitive)
    InvalidBase(char),
    /// Coordinate token that is not a non-negative integer
    InvalidCoord(String),
}

/// A defect in a single annotation record
///
/// The `record` field identifies the failing record, usually as
/// `gene (chrom:tx_start-tx_end)` or `line <n>` when the row could not
/// be parsed far enough to know the gene.
///
/// # Examples
///
/// ```rust
/// use splicedata::utils::errors::{RecordError, RecordErrorKind};
///
/// let err = RecordError::invalid_strand("BRCA1 (chr17:43044295-43125364)", ".");
/// assert_eq!(
///     err.to_string(),
///     "invalid strand '.' in record BRCA1 (chr17:43044295-43125364)"
/// );
/// assert!(matches!(err.kind(), RecordErrorKind::InvalidStrand(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    kind: RecordErrorKind,
    record: String,
}

impl RecordError {
    pub fn new<S: Into<String>>(kind: RecordErrorKind, record: S) -> Self {
        RecordError {
            kind,
            record: record.into(),
        }
    }

    pub fn schema<S: Into<String>, M: Into<String>>(record: S, message: M) -> Self {
        Self::new(RecordErrorKind::Schema(message.into()), record)
    }

    pub fn invalid_strand<S: Into<String>, V: Into<String>>(record: S, value: V) -> Self {
        Self::new(RecordErrorKind::InvalidStrand(value.into()), record)
    }

    pub fn invalid_base<S: Into<String>>(record: S, base: char) -> Self {
        Self::new(RecordErrorKind::InvalidBase(base), record)
    }

    pub fn invalid_coord<S: Into<String>, V: Into<String>>(record: S, token: V) -> Self {
        Self::new(RecordErrorKind::InvalidCoord(token.into()), record)
    }

    /// Which precondition the record violated
    pub fn kind(&self) -> &RecordErrorKind {
        &self.kind
    }

    /// Identity of the failing record
    pub fn record(&self) -> &str {
        &self.record
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            RecordErrorKind::Schema(msg) => {
                write!(f, "{} in record {}", msg, self.record)
            }
            RecordErrorKind::InvalidStrand(value) => {
                write!(f, "invalid strand '{}' in record {}", value, self.record)
            }
            RecordErrorKind::InvalidBase(base) => {
                write!(f, "invalid base '{}' in record {}", base, self.record)
            }
            RecordErrorKind::InvalidCoord(token) => {
                write!(f, "invalid coordinate '{}' in record {}", token, self.record)
            }
        }
    }
}

impl std::error::Error for RecordError {}
