//! The Registry - immutable schema lookup.

use crate::{FieldDef, SubtypeIndex, TypeDef, TypeKind};
use recast_core::{EnumCase, TypeId, Value, BAG_CLASS, TIMESTAMP_CLASS};
use std::collections::{HashMap, HashSet};

/// The Registry provides runtime lookup of shape definitions.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Type definitions by ID.
    types: HashMap<TypeId, TypeDef>,
    /// Type ID lookup by name.
    type_names: HashMap<String, TypeId>,

    /// Precomputed subtype relationships.
    subtype_index: SubtypeIndex,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(
        types: HashMap<TypeId, TypeDef>,
        type_names: HashMap<String, TypeId>,
        subtype_index: SubtypeIndex,
    ) -> Self {
        Self {
            types,
            type_names,
            subtype_index,
        }
    }

    // ==================== Type Lookups ====================

    /// Get a type definition by name.
    pub fn get_type_by_name(&self, name: &str) -> Option<&TypeDef> {
        self.type_names.get(name).and_then(|id| self.types.get(id))
    }

    /// Get a type definition by ID.
    pub fn get_type(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(&id)
    }

    /// Get a type ID by name.
    pub fn get_type_id(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(name).copied()
    }

    /// Get a record shape by ID; interfaces and enums are not shapes.
    pub fn get_shape(&self, id: TypeId) -> Option<&TypeDef> {
        self.get_type(id).filter(|t| t.kind == TypeKind::Record)
    }

    /// Get all type definitions.
    pub fn all_types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    /// Get the number of types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    // ==================== Field Lookups ====================

    /// Get a field definition from a type, including inherited fields.
    pub fn get_field(&self, type_id: TypeId, name: &str) -> Option<&FieldDef> {
        let type_def = self.types.get(&type_id)?;
        if let Some(field) = type_def.get_field(name) {
            return Some(field);
        }
        type_def
            .parent_ids
            .iter()
            .find_map(|&parent_id| self.get_field(parent_id, name))
    }

    /// Check if a type has a field (own or inherited, static or not).
    pub fn has_field(&self, type_id: TypeId, name: &str) -> bool {
        self.get_field(type_id, name).is_some()
    }

    /// Get all fields of a type, inherited fields first, each in declaration order.
    pub fn all_fields(&self, type_id: TypeId) -> Vec<&FieldDef> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();

        self.collect_fields(type_id, &mut result, &mut seen);
        result
    }

    fn collect_fields<'a>(
        &'a self,
        type_id: TypeId,
        result: &mut Vec<&'a FieldDef>,
        seen: &mut HashSet<TypeId>,
    ) {
        // Interfaces may be reached along more than one path.
        if !seen.insert(type_id) {
            return;
        }
        if let Some(type_def) = self.types.get(&type_id) {
            for &parent_id in &type_def.parent_ids {
                self.collect_fields(parent_id, result, seen);
            }
            result.extend(type_def.fields.values());
        }
    }

    // ==================== Enum Lookups ====================

    /// Get an enum case value by enum and case name.
    pub fn enum_case(&self, enum_name: &str, case: &str) -> Option<Value> {
        let type_def = self
            .get_type_by_name(enum_name)
            .filter(|t| t.kind == TypeKind::Enum && t.has_case(case))?;
        Some(Value::Enum(EnumCase::new(type_def.id, case)))
    }

    // ==================== Subtype Queries ====================

    /// Check if `sub` is a subtype of `super_type`.
    pub fn is_subtype(&self, sub: TypeId, super_type: TypeId) -> bool {
        self.subtype_index.is_subtype(sub, super_type)
    }

    /// Get all supertypes of a type (not including the type itself).
    pub fn get_supertypes(&self, type_id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        self.subtype_index.get_supertypes(type_id)
    }

    /// Class identity of an object value, if it has one.
    ///
    /// Records and enum cases of unregistered types have none.
    pub fn class_name_of(&self, value: &Value) -> Option<&str> {
        match value {
            Value::Record(record) => self.get_type(record.type_id).map(|t| t.name.as_str()),
            Value::Enum(case) => self.get_type(case.type_id).map(|t| t.name.as_str()),
            Value::Timestamp(_) => Some(TIMESTAMP_CLASS),
            Value::Bag(_) => Some(BAG_CLASS),
            _ => None,
        }
    }

    /// Nominal check: is `value` an instance of the class, interface or enum `class_name`?
    pub fn is_instance_of(&self, value: &Value, class_name: &str) -> bool {
        let Some(actual) = self.class_name_of(value) else {
            return false;
        };
        if actual == class_name {
            return true;
        }
        match (self.get_type_id(actual), self.get_type_id(class_name)) {
            (Some(sub), Some(super_type)) => self.is_subtype(sub, super_type),
            _ => false,
        }
    }
}
