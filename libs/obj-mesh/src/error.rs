//! # Error Types
//!
//! Two tiers of failure:
//!
//! - [`ObjError`]: fatal to the enclosing load, save or pipeline call.
//! - [`RecordError`]: a single dropped input record. Collected into the
//!   parse report; the load continues.
//!
//! ## Example
//!
//! ```rust
//! use obj_mesh::{parse_obj, ParseOptions};
//!
//! let parsed = parse_obj("v 1 2\nv 1 2 3\n", &ParseOptions::default()).unwrap();
//! assert_eq!(parsed.document.vertex_count(), 1);
//! assert_eq!(parsed.skipped.len(), 1);
//! assert_eq!(parsed.skipped[0].line, 1);
//! ```

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// FATAL ERRORS
// =============================================================================

/// Errors that abort a load, save or pipeline run.
#[derive(Debug, Error)]
pub enum ObjError {
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Opening or reading the input failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Creating or writing the output failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Stream failure not tied to a named file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A face record was malformed and the parser was told to abort.
    #[error("malformed face on line {line}: {message}")]
    MalformedFace {
        /// One-based source line.
        line: usize,
        /// What was wrong with the face.
        message: String,
    },

    /// A face attribute sequence does not cover every corner.
    #[error("{attribute} indices cover {found} corners, face has {expected}")]
    AttributeLengthMismatch {
        /// Attribute kind ("texture" or "normal").
        attribute: &'static str,
        /// Number of vertex indices on the face.
        expected: usize,
        /// Number of attribute indices supplied.
        found: usize,
    },

    /// A caller-supplied transform parameter is not a finite number.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl ObjError {
    /// Creates a malformed face error.
    pub fn malformed_face(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedFace {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for OBJ operations.
pub type ObjResult<T> = Result<T, ObjError>;

// =============================================================================
// RECORD ERRORS
// =============================================================================

/// A record the parser dropped, with its one-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct RecordError {
    /// One-based source line.
    pub line: usize,
    /// Why the record was dropped.
    pub kind: RecordErrorKind,
}

impl RecordError {
    /// Creates a record error.
    pub const fn new(line: usize, kind: RecordErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Reasons a single record is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordErrorKind {
    /// Wrong number of fields after the prefix.
    #[error("{record} expects {expected} fields, found {found}")]
    FieldCount {
        /// Record prefix (`v`, `vt`, `vn`, `l`).
        record: &'static str,
        /// Required field count.
        expected: usize,
        /// Fields present.
        found: usize,
    },

    /// A field that should be a float did not parse.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The offending token.
        text: String,
    },

    /// An index is not a positive integer.
    #[error("invalid index '{text}'")]
    InvalidIndex {
        /// The offending token.
        text: String,
    },

    /// A face with no references.
    #[error("face has no vertex references")]
    EmptyFace,

    /// Some corners of a face carry an attribute and others do not.
    #[error("{attribute} indices present on only some corners")]
    PartialAttributes {
        /// Attribute kind ("texture" or "normal").
        attribute: &'static str,
    },
}

// =============================================================================
// TESTS
// =============================================================================
