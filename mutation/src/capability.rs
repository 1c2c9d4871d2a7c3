//! Self-mutation capability.

use recast_core::Record;
use recast_registry::Registry;

use crate::error::MutationResult;
use crate::ChangeSet;

/// A shape's own copy-with-changes operation.
///
/// When registered for a shape, the [`Mutator`](crate::Mutator) hands records
/// of that shape to this hook instead of assembling them itself. The hook must
/// return a record of the same shape (the mutator rejects any other shape with
/// `UnsupportedType`) and must not rely on mutating `source`.
/// It may call [`mutate_record`](crate::mutate_record) to reuse the generic
/// algorithm.
pub trait SelfMutate: Send + Sync {
    fn mutate(
        &self,
        registry: &Registry,
        source: &Record,
        changes: &ChangeSet,
    ) -> MutationResult<Record>;
}

impl<F> SelfMutate for F
where
    F: Fn(&Registry, &Record, &ChangeSet) -> MutationResult<Record> + Send + Sync,
{
    fn mutate(
        &self,
        registry: &Registry,
        source: &Record,
        changes: &ChangeSet,
    ) -> MutationResult<Record> {
        self(registry, source, changes)
    }
}
