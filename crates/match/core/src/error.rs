//! Common error infrastructure for match-core.
//!
//! Domain-specific errors (`SwapError`, `GenerateError`, `CascadeError`) are
//! defined in their respective modules alongside the operations they guard;
//! this module provides the shared severity classification and the trait
//! hosts use to route recovery.
//!
//! Every engine condition is locally recoverable for the host — a rejected
//! swap or an unsatisfiable generation request never corrupts a grid the
//! host already holds.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same or an alternative request.
    ///
    /// Examples: no legal move remaining on a board
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: non-adjacent swap, alphabet too small to generate from
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: cascade round cap exceeded
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all match-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
