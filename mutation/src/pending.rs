//! Chained mutation builder.

use recast_core::{Key, Value};

use crate::error::MutationResult;
use crate::executor::Mutator;
use crate::ChangeSet;

/// Accumulates changes for one value and applies them on [`commit`](Self::commit).
///
/// Later changes to the same key replace earlier ones. Nothing is validated
/// until commit; committing again replays the same pending changes against
/// the same source value.
#[derive(Debug)]
pub struct PendingMutation<'a, 'r> {
    mutator: &'a Mutator<'r>,
    value: &'a Value,
    changes: ChangeSet,
}

impl<'a, 'r> PendingMutation<'a, 'r> {
    pub(crate) fn new(mutator: &'a Mutator<'r>, value: &'a Value) -> Self {
        Self {
            mutator,
            value,
            changes: ChangeSet::new(),
        }
    }

    /// Merge a partial change set into the pending changes.
    pub fn with(mut self, partial: ChangeSet) -> Self {
        for (key, value) in partial {
            self.changes.insert(key, value);
        }
        self
    }

    /// Set a single pending change.
    pub fn set(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.changes.insert(key, value);
        self
    }

    /// The changes accumulated so far.
    pub fn changes(&self) -> &ChangeSet {
        &self.changes
    }

    /// Apply the pending changes to the source value.
    pub fn commit(&self) -> MutationResult<Value> {
        self.mutator.mutate(self.value, &self.changes)
    }
}
