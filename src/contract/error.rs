//! Contract error types for the inventory schema
//!
//! These errors are transport-agnostic. They cover exactly the constraint
//! violations the persistence layer can surface, plus not-found and internal.

/// Inventory domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Record not found
    NotFound {
        /// Resource type (section, item, unit, ...)
        resource: &'static str,
        /// Surrogate key
        id: i64,
    },
    /// Unique constraint violation on a code column
    DuplicateCode {
        /// Resource type carrying the code (item, unit, recipe)
        resource: &'static str,
        /// The offending code
        code: String,
    },
    /// Restrict-on-delete: the record is still referenced
    StillReferenced {
        /// Resource type of the record being deleted
        resource: &'static str,
        /// Surrogate key of the record being deleted
        id: i64,
    },
    /// Insert/update references a related record that does not exist
    MissingRelated {
        /// Constraint detail from the persistence layer
        detail: String,
    },
    /// Required field missing or malformed
    Validation {
        /// Validation error message
        message: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::DuplicateCode { resource, code } => {
                write!(f, "duplicate {} code: {}", resource, code)
            }
            Self::StillReferenced { resource, id } => {
                write!(f, "{} {} is still referenced and cannot be deleted", resource, id)
            }
            Self::MissingRelated { detail } => {
                write!(f, "referenced record does not exist: {}", detail)
            }
            Self::Validation { message } => {
                write!(f, "validation error: {}", message)
            }
            Self::Internal => {
                write!(f, "internal error")
            }
        }
    }
}

impl std::error::Error for InventoryError {}
