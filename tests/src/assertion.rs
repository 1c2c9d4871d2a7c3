//! Field assertions with messages that name the field and the value kind.

use recast_core::Value;

use crate::value_ext::ValueExt;

/// Assert that `value` has `name` set to `expected`.
#[track_caller]
pub fn assert_field(value: &Value, name: &str, expected: impl Into<Value>) {
    let expected = expected.into();
    match value.field(name) {
        Some(actual) => assert_eq!(
            actual, &expected,
            "field `{}` of {} differs",
            name,
            value.category()
        ),
        None => panic!(
            "field `{}` missing from {}: expected {}",
            name,
            value.category(),
            expected
        ),
    }
}

/// Assert several fields at once.
#[track_caller]
pub fn assert_fields(value: &Value, expected: &[(&str, Value)]) {
    for (name, expected) in expected {
        assert_field(value, name, expected.clone());
    }
}

/// Assert that a record field is declared but holds no value.
#[track_caller]
pub fn assert_uninitialized(value: &Value, name: &str) {
    let record = value
        .as_record()
        .unwrap_or_else(|| panic!("expected a record, got {}", value.category()));
    assert!(
        !record.is_initialized(name),
        "field `{}` should be uninitialized, found {:?}",
        name,
        record.get(name)
    );
}
