//! Record assembly - copy a record with validated field changes.

use recast_core::{Fields, Record};
use recast_registry::Registry;

use crate::error::{MutationError, MutationResult};
use crate::validation;
use crate::ChangeSet;

/// Build a new record of the same shape as `source` with `changes` applied.
///
/// The new record is assembled field by field from the shape's field list:
/// changed fields are validated, unchanged initialized fields are copied,
/// uninitialized fields stay uninitialized and static fields are skipped.
/// Unknown change keys are only checked after that pass, so a type mismatch
/// is always reported ahead of an unknown field.
pub fn mutate_record(
    registry: &Registry,
    source: &Record,
    changes: &ChangeSet,
) -> MutationResult<Record> {
    let shape = registry.get_shape(source.type_id).ok_or_else(|| {
        let actual = registry
            .get_type(source.type_id)
            .map_or("object", |t| t.name.as_str());
        MutationError::unsupported_type(actual)
    })?;

    let mut fields = Fields::new();
    for field in registry.all_fields(source.type_id) {
        if field.is_static {
            continue;
        }

        if let Some(proposed) = changes.get_str(&field.name) {
            let value = validation::validate_field(registry, field, proposed)?;
            log::trace!("{}.{}: set", shape.name, field.name);
            fields.insert(field.name.clone(), value);
        } else if let Some(current) = source.get(&field.name) {
            fields.insert(field.name.clone(), current.clone());
        }
    }

    for key in changes.keys() {
        let exists = key
            .as_str()
            .is_some_and(|name| registry.has_field(source.type_id, name));
        if !exists {
            return Err(MutationError::property_does_not_exist(
                key.to_string(),
                &shape.name,
            ));
        }
    }

    Ok(Record::new(source.type_id, fields))
}
