//! Recast Core Types
//!
//! This crate provides the value model shared by the registry and the mutation engine:
//! - Type identifiers (TypeId)
//! - Map keys (Key) and ordered maps (Map)
//! - Dynamic bags (Bag), record instances (Record) and enum cases (EnumCase)
//! - The Value enum tying them together

mod id;
mod key;
mod record;
mod value;

pub use id::*;
pub use key::*;
pub use record::*;
pub use value::*;
