//! Schema definition types.

use crate::TypeSpec;
use indexmap::IndexMap;
use recast_core::TypeId;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Field definition within a record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Declared type as written (`?int`, `int|string`, `Status`), if any.
    pub declared_type: Option<String>,
    /// Parsed form of `declared_type`, filled in when the shape is registered.
    pub type_spec: Option<TypeSpec>,
    /// Whether this field accepts null.
    pub nullable: bool,
    /// Whether this field belongs to the shape rather than its instances.
    pub is_static: bool,
    /// Whether this field is immutable after construction.
    pub readonly: bool,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: Some(declared_type.into()),
            type_spec: None,
            nullable: false,
            is_static: false,
            readonly: false,
        }
    }

    /// A field with no declared type; any value is accepted.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            type_spec: None,
            nullable: false,
            is_static: false,
            readonly: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn static_field(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Name of the declared type, as reported in type mismatch errors.
    pub fn expected_type_name(&self) -> String {
        match &self.type_spec {
            Some(spec) => spec.to_string(),
            None => "mixed".to_string(),
        }
    }
}

/// What a registered type is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A record shape with fields; can be instantiated.
    Record,
    /// A named contract; no fields, no instances.
    Interface,
    /// A closed set of named cases.
    Enum,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Record => write!(f, "record"),
            TypeKind::Interface => write!(f, "interface"),
            TypeKind::Enum => write!(f, "enum"),
        }
    }
}

/// Type definition.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// Unique identifier.
    pub id: TypeId,
    /// Type name.
    pub name: String,
    /// Kind of type.
    pub kind: TypeKind,
    /// Parent record and implemented/extended interfaces.
    pub parent_ids: Vec<TypeId>,
    /// Own field definitions in declaration order (records only).
    pub fields: IndexMap<String, FieldDef>,
    /// Case names in declaration order (enums only).
    pub cases: Vec<String>,
}

impl TypeDef {
    pub fn new(id: TypeId, name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            parent_ids: Vec::new(),
            fields: IndexMap::new(),
            cases: Vec::new(),
        }
    }

    /// Get an own field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Check if this type declares a field itself.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Check if this enum declares a case.
    pub fn has_case(&self, case: &str) -> bool {
        self.cases.iter().any(|c| c == case)
    }

    pub fn is_record(&self) -> bool {
        self.kind == TypeKind::Record
    }
}

/// Precomputed subtype relationships.
#[derive(Debug, Default)]
pub struct SubtypeIndex {
    /// For each type, all of its supertypes (transitive, excluding itself).
    supertypes: HashMap<TypeId, HashSet<TypeId>>,
}

impl SubtypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the subtype index from type definitions.
    pub fn build(types: &HashMap<TypeId, TypeDef>) -> Self {
        let mut index = Self::new();
        for &type_id in types.keys() {
            index.collect(type_id, types);
        }
        index
    }

    /// Compute (and memoize) the supertypes of one type.
    fn collect(&mut self, type_id: TypeId, types: &HashMap<TypeId, TypeDef>) -> HashSet<TypeId> {
        if let Some(done) = self.supertypes.get(&type_id) {
            return done.clone();
        }

        let mut result = HashSet::new();
        // Parents are registered before their children, so the recursion is finite.
        if let Some(type_def) = types.get(&type_id) {
            for &parent_id in &type_def.parent_ids {
                result.insert(parent_id);
                result.extend(self.collect(parent_id, types));
            }
        }

        self.supertypes.insert(type_id, result.clone());
        result
    }

    /// Check if `sub` is `super_type` or one of its subtypes.
    pub fn is_subtype(&self, sub: TypeId, super_type: TypeId) -> bool {
        if sub == super_type {
            return true;
        }
        self.supertypes
            .get(&sub)
            .map(|set| set.contains(&super_type))
            .unwrap_or(false)
    }

    /// Get all supertypes of a type (not including the type itself).
    pub fn get_supertypes(&self, type_id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        self.supertypes
            .get(&type_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
