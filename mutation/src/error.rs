//! Mutation error types.

use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during a mutation.
///
/// Every error aborts the whole mutation; no partially built value escapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("Property {field} does not exist on {shape}")]
    PropertyDoesNotExist { field: String, shape: String },

    #[error("Invalid type for property {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Cannot mutate value of type {actual}")]
    UnsupportedType { actual: String },

    /// Not raised by the engine; available to self-mutation hooks.
    #[error("Cannot modify readonly property {field} on {shape}")]
    ReadOnlyProperty { field: String, shape: String },
}

impl MutationError {
    pub fn property_does_not_exist(field: impl Into<String>, shape: impl Into<String>) -> Self {
        Self::PropertyDoesNotExist {
            field: field.into(),
            shape: shape.into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn unsupported_type(actual: impl Into<String>) -> Self {
        Self::UnsupportedType {
            actual: actual.into(),
        }
    }

    pub fn read_only_property(field: impl Into<String>, shape: impl Into<String>) -> Self {
        Self::ReadOnlyProperty {
            field: field.into(),
            shape: shape.into(),
        }
    }
}
