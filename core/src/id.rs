//! Identity types for registered shapes.

use std::fmt;

/// Identifier for a type (record shape, interface or enum) in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Create a new TypeId from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
