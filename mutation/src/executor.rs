//! Mutator - the dispatcher every mutation goes through.
//!
//! The mutator routes a value to one strategy in `ops/`:
//! - maps → `ops/map.rs` (overlay)
//! - records with a registered self-mutation hook → the hook
//! - bags → `ops/bag.rs` (unchecked assignment)
//! - records of a registered shape → `ops/record.rs` (validated assembly)
//!
//! Anything else is rejected with `UnsupportedType`.

use recast_core::{Record, TypeId, Value};
use recast_registry::Registry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::capability::SelfMutate;
use crate::error::{MutationError, MutationResult};
use crate::ops;
use crate::pending::PendingMutation;
use crate::validation;
use crate::ChangeSet;

/// Mutation engine bound to a registry.
pub struct Mutator<'r> {
    registry: &'r Registry,
    self_mutations: HashMap<TypeId, Arc<dyn SelfMutate>>,
}

impl<'r> Mutator<'r> {
    /// Create a new mutator.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            self_mutations: HashMap::new(),
        }
    }

    /// Register a shape's own copy-with-changes operation.
    pub fn with_self_mutation(mut self, type_id: TypeId, hook: impl SelfMutate + 'static) -> Self {
        self.self_mutations.insert(type_id, Arc::new(hook));
        self
    }

    /// The registry this mutator reads shapes from.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Check if a shape has a self-mutation hook.
    pub fn has_self_mutation(&self, type_id: TypeId) -> bool {
        self.self_mutations.contains_key(&type_id)
    }

    /// Produce a copy of `value` with `changes` applied.
    pub fn mutate(&self, value: &Value, changes: &ChangeSet) -> MutationResult<Value> {
        let result = self.dispatch(value, changes);
        if let Err(err) = &result {
            log::debug!("mutation rejected: {}", err);
        }
        result
    }

    /// Produce a copy of a record with validated `changes` applied.
    ///
    /// Always uses the generic algorithm, even if the shape has a hook.
    pub fn mutate_record(&self, record: &Record, changes: &ChangeSet) -> MutationResult<Record> {
        ops::mutate_record(self.registry, record, changes)
    }

    /// Start a chained mutation of `value`.
    pub fn begin<'a>(&'a self, value: &'a Value) -> PendingMutation<'a, 'r> {
        PendingMutation::new(self, value)
    }

    fn dispatch(&self, value: &Value, changes: &ChangeSet) -> MutationResult<Value> {
        match value {
            Value::Map(map) => {
                log::trace!("dispatch: map");
                Ok(Value::Map(ops::mutate_map(map, changes)))
            }
            Value::Record(record) => match self.self_mutations.get(&record.type_id) {
                Some(hook) => {
                    log::trace!("dispatch: self-mutation of {}", record.type_id);
                    let next = hook.mutate(self.registry, record, changes)?;
                    // Hooks may rewrite fields freely but never the shape
                    if next.type_id != record.type_id {
                        log::debug!(
                            "self-mutation of {} returned shape {}",
                            record.type_id,
                            next.type_id
                        );
                        return Err(MutationError::unsupported_type(
                            validation::describe_value(self.registry, value),
                        ));
                    }
                    Ok(Value::Record(next))
                }
                None => {
                    log::trace!("dispatch: record {}", record.type_id);
                    ops::mutate_record(self.registry, record, changes).map(Value::Record)
                }
            },
            Value::Bag(bag) => {
                log::trace!("dispatch: bag");
                Ok(Value::Bag(ops::mutate_bag(bag, changes)))
            }
            other => Err(MutationError::unsupported_type(validation::describe_value(
                self.registry,
                other,
            ))),
        }
    }
}

impl fmt::Debug for Mutator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hooks: Vec<&TypeId> = self.self_mutations.keys().collect();
        hooks.sort();
        f.debug_struct("Mutator")
            .field("types", &self.registry.type_count())
            .field("self_mutations", &hooks)
            .finish()
    }
}
