//! RegistryBuilder for constructing an immutable Registry.

use crate::{names, FieldDef, Registry, SubtypeIndex, TypeDef, TypeKind, TypeSpec, TypeSpecError};
use indexmap::IndexMap;
use recast_core::{TypeId, BAG_CLASS, TIMESTAMP_CLASS};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Reserved type name: {0}")]
    ReservedTypeName(String),

    #[error("Invalid {what} name: {name}")]
    InvalidIdentifier { what: &'static str, name: String },

    #[error("Unknown parent type: {0}")]
    UnknownParentType(String),

    #[error("Type {type_name} ({kind}) cannot inherit from {parent}")]
    InvalidParent {
        type_name: String,
        kind: TypeKind,
        parent: String,
    },

    #[error("Record {0} extends more than one record")]
    MultipleParentRecords(String),

    #[error("Duplicate field {field} on type {type_name}")]
    DuplicateField { type_name: String, field: String },

    #[error("Type {type_name} ({kind}) cannot declare fields")]
    FieldsNotAllowed { type_name: String, kind: TypeKind },

    #[error("Type {type_name} ({kind}) cannot declare cases")]
    CasesNotAllowed { type_name: String, kind: TypeKind },

    #[error("Duplicate case {case} on enum {type_name}")]
    DuplicateCase { type_name: String, case: String },

    #[error("Invalid type for field {field} on {type_name}: {source}")]
    InvalidFieldType {
        type_name: String,
        field: String,
        #[source]
        source: TypeSpecError,
    },

    #[error("Identifier pattern failed to compile: {0}")]
    Pattern(String),
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Next type ID to allocate.
    next_type_id: u32,

    /// Types being built.
    types: HashMap<TypeId, TypeDef>,
    /// Type name to ID mapping.
    type_names: HashMap<String, TypeId>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record shape.
    pub fn add_record(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        self.add_type(name, TypeKind::Record)
    }

    /// Add an interface.
    pub fn add_interface(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        self.add_type(name, TypeKind::Interface)
    }

    /// Add an enum.
    pub fn add_enum(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        self.add_type(name, TypeKind::Enum)
    }

    fn add_type(&mut self, name: impl Into<String>, kind: TypeKind) -> TypeBuilder<'_> {
        let name = name.into();
        let id = TypeId::new(self.next_type_id);
        self.next_type_id += 1;

        TypeBuilder {
            builder: self,
            id,
            name,
            kind,
            extends: Vec::new(),
            implements: Vec::new(),
            fields: Vec::new(),
            cases: Vec::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let subtype_index = SubtypeIndex::build(&self.types);
        log::debug!("registry built with {} types", self.types.len());
        Ok(Registry::new(self.types, self.type_names, subtype_index))
    }
}

/// Builder for a type definition.
pub struct TypeBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    id: TypeId,
    name: String,
    kind: TypeKind,
    extends: Vec<String>,
    implements: Vec<String>,
    fields: Vec<FieldDef>,
    cases: Vec<String>,
}

impl<'a> TypeBuilder<'a> {
    /// Add a parent by name: a record for records, an interface for interfaces.
    pub fn extends(mut self, parent_name: impl Into<String>) -> Self {
        self.extends.push(parent_name.into());
        self
    }

    /// Add an implemented interface by name.
    pub fn implements(mut self, interface_name: impl Into<String>) -> Self {
        self.implements.push(interface_name.into());
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add an enum case.
    pub fn case(mut self, case: impl Into<String>) -> Self {
        self.cases.push(case.into());
        self
    }

    /// Finish building this type.
    pub fn done(self) -> Result<TypeId, RegistryError> {
        check_identifier("type", &self.name)?;
        if names::is_reserved(&self.name) || self.name == TIMESTAMP_CLASS || self.name == BAG_CLASS
        {
            return Err(RegistryError::ReservedTypeName(self.name));
        }
        if self.builder.type_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateTypeName(self.name));
        }

        let parent_ids = self.resolve_parents()?;
        let fields = self.resolve_fields(&parent_ids)?;
        let cases = self.resolve_cases()?;

        let type_def = TypeDef {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            parent_ids,
            fields,
            cases,
        };

        log::trace!("registered {} {} as {}", self.kind, self.name, self.id);
        self.builder.type_names.insert(self.name, self.id);
        self.builder.types.insert(self.id, type_def);

        Ok(self.id)
    }

    fn parent(&self, name: &str) -> Result<&TypeDef, RegistryError> {
        self.builder
            .type_names
            .get(name)
            .and_then(|id| self.builder.types.get(id))
            .ok_or_else(|| RegistryError::UnknownParentType(name.to_string()))
    }

    fn invalid_parent(&self, parent: &str) -> RegistryError {
        RegistryError::InvalidParent {
            type_name: self.name.clone(),
            kind: self.kind,
            parent: parent.to_string(),
        }
    }

    fn resolve_parents(&self) -> Result<Vec<TypeId>, RegistryError> {
        let mut parent_ids = Vec::new();

        // Records extend records; interfaces extend interfaces; enums extend nothing.
        let mut parent_records = 0;
        for parent_name in &self.extends {
            let parent = self.parent(parent_name)?;
            let allowed = match self.kind {
                TypeKind::Record => parent.kind == TypeKind::Record,
                TypeKind::Interface => parent.kind == TypeKind::Interface,
                TypeKind::Enum => false,
            };
            if !allowed {
                return Err(self.invalid_parent(parent_name));
            }
            if parent.kind == TypeKind::Record {
                parent_records += 1;
            }
            parent_ids.push(parent.id);
        }
        if parent_records > 1 {
            return Err(RegistryError::MultipleParentRecords(self.name.clone()));
        }

        for interface_name in &self.implements {
            let parent = self.parent(interface_name)?;
            if self.kind == TypeKind::Interface || parent.kind != TypeKind::Interface {
                return Err(self.invalid_parent(interface_name));
            }
            parent_ids.push(parent.id);
        }

        Ok(parent_ids)
    }

    fn resolve_fields(
        &self,
        parent_ids: &[TypeId],
    ) -> Result<IndexMap<String, FieldDef>, RegistryError> {
        if !self.fields.is_empty() && self.kind != TypeKind::Record {
            return Err(RegistryError::FieldsNotAllowed {
                type_name: self.name.clone(),
                kind: self.kind,
            });
        }

        let mut fields = IndexMap::new();
        for field in &self.fields {
            check_identifier("field", &field.name)?;
            let inherited = parent_ids
                .iter()
                .any(|&id| self.inherits_field(id, &field.name));
            if inherited || fields.contains_key(&field.name) {
                return Err(RegistryError::DuplicateField {
                    type_name: self.name.clone(),
                    field: field.name.clone(),
                });
            }

            let mut field = field.clone();
            if let Some(decl) = &field.declared_type {
                let parsed = TypeSpec::parse(decl).map_err(|source| {
                    RegistryError::InvalidFieldType {
                        type_name: self.name.clone(),
                        field: field.name.clone(),
                        source,
                    }
                })?;
                field.type_spec = Some(parsed.spec);
                field.nullable |= parsed.nullable;
            }
            fields.insert(field.name.clone(), field);
        }
        Ok(fields)
    }

    fn inherits_field(&self, type_id: TypeId, name: &str) -> bool {
        match self.builder.types.get(&type_id) {
            Some(def) => {
                def.has_field(name)
                    || def
                        .parent_ids
                        .iter()
                        .any(|&parent| self.inherits_field(parent, name))
            }
            None => false,
        }
    }

    fn resolve_cases(&self) -> Result<Vec<String>, RegistryError> {
        if !self.cases.is_empty() && self.kind != TypeKind::Enum {
            return Err(RegistryError::CasesNotAllowed {
                type_name: self.name.clone(),
                kind: self.kind,
            });
        }

        let mut cases: Vec<String> = Vec::new();
        for case in &self.cases {
            check_identifier("case", case)?;
            if cases.contains(case) {
                return Err(RegistryError::DuplicateCase {
                    type_name: self.name.clone(),
                    case: case.clone(),
                });
            }
            cases.push(case.clone());
        }
        Ok(cases)
    }
}

fn check_identifier(what: &'static str, name: &str) -> Result<(), RegistryError> {
    if names::is_identifier(name).map_err(RegistryError::Pattern)? {
        Ok(())
    } else {
        Err(RegistryError::InvalidIdentifier {
            what,
            name: name.to_string(),
        })
    }
}
