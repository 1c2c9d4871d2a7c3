//! Recast Registry
//!
//! Schema lookup standing in for runtime reflection. Records are typed by the
//! shapes declared here: field names, declared types, nullability, static
//! fields and the nominal type hierarchy (record parents, interfaces, enums).
//! The registry is immutable after construction via RegistryBuilder.

mod builder;
mod names;
mod registry;
mod type_spec;
mod types;

pub use builder::{RegistryBuilder, RegistryError, TypeBuilder};
pub use registry::Registry;
pub use type_spec::{ParsedType, TypeSpec, TypeSpecError};
pub use types::*;
