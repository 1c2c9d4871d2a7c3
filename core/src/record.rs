//! Record instances, dynamic bags and enum cases.
//!
//! A record belongs to a registered shape and holds the values of its
//! initialized fields. A bag has no shape at all.

use crate::{TypeId, Value};
use indexmap::IndexMap;

/// Ordered field storage, name to value.
pub type Fields = IndexMap<String, Value>;

/// An instance of a registered record shape.
///
/// A field that has no entry is declared but uninitialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Shape of this record (reference to registry).
    pub type_id: TypeId,
    /// Initialized field values.
    fields: Fields,
}

impl Record {
    /// Create a record with the given field values.
    pub fn new(type_id: TypeId, fields: Fields) -> Self {
        Self { type_id, fields }
    }

    /// Create a record with every field uninitialized.
    pub fn empty(type_id: TypeId) -> Self {
        Self::new(type_id, Fields::new())
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns true if the field holds a value.
    pub fn is_initialized(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Set a field value on an owned record.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Initialized fields in order.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consume the record, returning its fields.
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

/// A value with arbitrary named entries and no fixed shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bag {
    entries: Fields,
}

impl Bag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entry by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Assign an entry, creating it if absent.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bag has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Fields> for Bag {
    fn from(entries: Fields) -> Self {
        Self { entries }
    }
}

/// A case of a registered enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumCase {
    /// The enum this case belongs to.
    pub type_id: TypeId,
    /// Case name.
    pub case: String,
}

impl EnumCase {
    pub fn new(type_id: TypeId, case: impl Into<String>) -> Self {
        Self {
            type_id,
            case: case.into(),
        }
    }
}

/// Helper macro to create ordered field maps for records and bags.
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut fields = $crate::Fields::new();
            $(
                fields.insert($key.to_string(), $crate::Value::from($value));
            )+
            fields
        }
    };
}
