//! Dynamic bag assignment.

use recast_core::Bag;

use crate::ChangeSet;

/// Clone `source` and assign every change directly.
///
/// Bags have no shape: nothing is checked, unknown names are created and
/// integer keys become their decimal name.
pub fn mutate_bag(source: &Bag, changes: &ChangeSet) -> Bag {
    let mut result = source.clone();
    for (key, value) in changes {
        result.set(key.to_string(), value.clone());
    }
    result
}
