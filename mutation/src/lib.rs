//! Recast Mutation
//!
//! Copy-with-modifications for maps, bags and records.
//!
//! Responsibilities:
//! - Route a value to the right strategy (map overlay, self-mutation, bag assignment, record assembly)
//! - Validate proposed field values against declared field types
//! - Copy every unchanged field forward
//! - Reject changes to fields the shape does not declare
//!
//! The source value is never modified; every operation returns a new value.
//!
//! # Module Structure
//!
//! - `executor` - Mutator, the dispatcher callers go through
//! - `pending` - PendingMutation, the chained builder form
//! - `capability` - SelfMutate, a shape's own copy-with-changes operation
//! - `ops/` - Individual strategies (map, bag, record)
//! - `validation` - Field type checks
//! - `error` - Error types for mutation failures

mod capability;
mod error;
mod executor;
mod ops;
mod pending;
mod validation;

pub use capability::SelfMutate;
pub use error::{MutationError, MutationResult};
pub use executor::Mutator;
pub use ops::{mutate_bag, mutate_map, mutate_record};
pub use pending::PendingMutation;
pub use validation::{describe_value, validate_field};

/// Proposed changes, keyed by field name (or map key).
pub type ChangeSet = recast_core::Map;
