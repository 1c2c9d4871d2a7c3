//! Field type validation.

use recast_core::Value;
use recast_registry::{FieldDef, Registry, TypeSpec};

use crate::error::{MutationError, MutationResult};

/// Check a proposed value against a field's declared type.
///
/// Returns the value to store: an integer proposed for a `float` field is
/// widened to a float, anything else is stored as given.
pub fn validate_field(
    registry: &Registry,
    field: &FieldDef,
    value: &Value,
) -> MutationResult<Value> {
    if !accepts(registry, field, value) {
        return Err(MutationError::type_mismatch(
            &field.name,
            field.expected_type_name(),
            describe_value(registry, value),
        ));
    }

    match (&field.type_spec, value) {
        (Some(TypeSpec::Float), Value::Int(i)) => Ok(Value::Float(*i as f64)),
        _ => Ok(value.clone()),
    }
}

/// Rules are evaluated in order; the first that applies decides.
fn accepts(registry: &Registry, field: &FieldDef, value: &Value) -> bool {
    // No declared type: no constraint
    let Some(spec) = &field.type_spec else {
        return true;
    };
    if value.is_null() && field.nullable {
        return true;
    }

    match spec {
        TypeSpec::Int => value.is_int(),
        TypeSpec::Float => value.is_float() || value.is_int(),
        TypeSpec::String => value.is_string(),
        TypeSpec::Bool => value.is_bool(),
        TypeSpec::Array => value.is_array(),
        TypeSpec::Object => value.is_object(),
        TypeSpec::Mixed => true,
        TypeSpec::Null => value.is_null(),
        TypeSpec::Class(name) => registry.is_instance_of(value, name),
        // Unions and intersections are not checked
        TypeSpec::Union(_) | TypeSpec::Intersection(_) => true,
    }
}

/// Describe a value's runtime type: its class name for objects with a known
/// class, its category (`int`, `array`, `null`, ...) otherwise.
pub fn describe_value(registry: &Registry, value: &Value) -> String {
    registry
        .class_name_of(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.category().to_string())
}
