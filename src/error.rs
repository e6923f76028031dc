// Copyright 2026 CliffordRBM Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for Clifford matching and sequence generation.

use std::fmt;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Config(String),
    /// Group table error
    Table(TableError),
    /// Gate sequence error
    Sequence(SequenceError),
    /// Validation error
    Validation(ValidationError),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Table(e) => write!(f, "Group table error: {}", e),
            Error::Sequence(e) => write!(f, "Sequence error: {}", e),
            Error::Validation(e) => write!(f, "Validation error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Table(e) => Some(e),
            Error::Sequence(e) => Some(e),
            Error::Validation(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Error::Table(e)
    }
}

impl From<SequenceError> for Error {
    fn from(e: SequenceError) -> Self {
        Error::Sequence(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Group-table errors.
///
/// A lookup miss during generation means the table is corrupted or the
/// tolerance is too tight; it is never coerced to a default index.
#[derive(Debug)]
pub enum TableError {
    /// No table element matches within tolerance
    LookupFailed { context: String },
    /// Product of two elements matches no element (closure broken)
    ClosureViolation { i: usize, j: usize },
    /// Two elements are phase-equivalent (table not pairwise distinct)
    DuplicateElement { i: usize, j: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::LookupFailed { context } => {
                write!(f, "no group element matches {} within tolerance", context)
            }
            TableError::ClosureViolation { i, j } => {
                write!(
                    f,
                    "closure violation: product of elements {} and {} matches no group element",
                    i, j
                )
            }
            TableError::DuplicateElement { i, j } => {
                write!(f, "elements {} and {} are equivalent up to phase", i, j)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Gate-sequence errors.
#[derive(Debug)]
pub enum SequenceError {
    /// Token outside the recognized pulse vocabulary
    InvalidToken(String),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidToken(token) => {
                write!(
                    f,
                    "unrecognized gate token '{}' (expected one of I, X, Y, X2p, X2n, Y2p, Y2n)",
                    token
                )
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Validation errors.
#[derive(Debug)]
pub enum ValidationError {
    /// Field validation failed
    Field { field: String, message: String },
    /// Resource limit exceeded
    ResourceLimit {
        resource: String,
        limit: u64,
        requested: u64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Field { field, message } => {
                write!(f, "Field '{}': {}", field, message)
            }
            ValidationError::ResourceLimit {
                resource,
                limit,
                requested,
            } => {
                write!(
                    f,
                    "Resource limit exceeded for {}: limit={}, requested={}",
                    resource, limit, requested
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    // =========================================================================
    // Error Display tests
    // =========================================================================

    #[test]
    fn test_error_display_config() {
        let e = Error::Config("bad tolerance".into());
        assert_eq!(e.to_string(), "Configuration error: bad tolerance");
    }

    #[test]
    fn test_error_display_table() {
        let e = Error::Table(TableError::LookupFailed {
            context: "inverse of composed sequence".into(),
        });
        assert_eq!(
            e.to_string(),
            "Group table error: no group element matches inverse of composed sequence within tolerance"
        );
    }

    #[test]
    fn test_error_display_sequence() {
        let e = Error::Sequence(SequenceError::InvalidToken("Z".into()));
        assert_eq!(
            e.to_string(),
            "Sequence error: unrecognized gate token 'Z' (expected one of I, X, Y, X2p, X2n, Y2p, Y2n)"
        );
    }

    #[test]
    fn test_error_display_validation() {
        let e = Error::Validation(ValidationError::Field {
            field: "allowed".into(),
            message: "cannot be empty".into(),
        });
        assert_eq!(e.to_string(), "Validation error: Field 'allowed': cannot be empty");
    }

    #[test]
    fn test_error_display_io() {
        let e = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(e.to_string(), "IO error: gone");
    }

    #[test]
    fn test_error_display_serialization() {
        let e = Error::Serialization("invalid yaml".into());
        assert_eq!(e.to_string(), "Serialization error: invalid yaml");
    }

    // =========================================================================
    // TableError Display tests
    // =========================================================================

    #[test]
    fn test_table_error_display_closure_violation() {
        let e = TableError::ClosureViolation { i: 3, j: 17 };
        assert_eq!(
            e.to_string(),
            "closure violation: product of elements 3 and 17 matches no group element"
        );
    }

    #[test]
    fn test_table_error_display_duplicate_element() {
        let e = TableError::DuplicateElement { i: 1, j: 2 };
        assert_eq!(e.to_string(), "elements 1 and 2 are equivalent up to phase");
    }

    // =========================================================================
    // ValidationError Display tests
    // =========================================================================

    #[test]
    fn test_validation_error_display_resource_limit() {
        let e = ValidationError::ResourceLimit {
            resource: "sequence_length".into(),
            limit: 4096,
            requested: 5000,
        };
        assert_eq!(
            e.to_string(),
            "Resource limit exceeded for sequence_length: limit=4096, requested=5000"
        );
    }

    // =========================================================================
    // Error::source() tests
    // =========================================================================

    #[test]
    fn test_error_source_table() {
        let e = Error::Table(TableError::ClosureViolation { i: 0, j: 0 });
        assert!(e.source().is_some());
    }

    #[test]
    fn test_error_source_sequence() {
        let e = Error::Sequence(SequenceError::InvalidToken("H".into()));
        assert!(e.source().is_some());
    }

    #[test]
    fn test_error_source_io() {
        let e = Error::Io(std::io::Error::other("disk"));
        assert!(e.source().is_some());
    }

    #[test]
    fn test_error_source_none_for_config() {
        let e = Error::Config("x".into());
        assert!(e.source().is_none());
    }

    #[test]
    fn test_error_source_none_for_serialization() {
        let e = Error::Serialization("x".into());
        assert!(e.source().is_none());
    }

    // =========================================================================
    // From impls
    // =========================================================================

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
    }

    #[test]
    fn test_from_table_error() {
        let te = TableError::LookupFailed { context: "x".into() };
        let e: Error = te.into();
        assert!(matches!(e, Error::Table(TableError::LookupFailed { .. })));
    }

    #[test]
    fn test_from_sequence_error() {
        let se = SequenceError::InvalidToken("Q".into());
        let e: Error = se.into();
        assert!(matches!(e, Error::Sequence(_)));
    }

    #[test]
    fn test_from_validation_error() {
        let ve = ValidationError::Field {
            field: "x".into(),
            message: "y".into(),
        };
        let e: Error = ve.into();
        assert!(matches!(e, Error::Validation(_)));
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{{{{").unwrap_err();
        let e: Error = yaml_err.into();
        assert!(matches!(e, Error::Serialization(_)));
    }
}
