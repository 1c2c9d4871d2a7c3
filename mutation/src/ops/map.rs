//! Map overlay.

use recast_core::Map;

use crate::ChangeSet;

/// Overlay `changes` onto a copy of `source`.
///
/// Existing keys keep their position and take the new value; new keys are
/// appended. Integer keys are matched as keys, never as positions.
pub fn mutate_map(source: &Map, changes: &ChangeSet) -> Map {
    let mut result = source.clone();
    for (key, value) in changes {
        result.insert(key.clone(), value.clone());
    }
    log::trace!("overlaid {} keys onto map of {}", changes.len(), source.len());
    result
}
