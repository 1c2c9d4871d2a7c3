//! Declared field types.
//!
//! Field types are written as strings when a shape is declared
//! (`int`, `?Timestamp`, `int|string`, `Countable&Traversable`) and parsed
//! into a [`TypeSpec`] when the shape is registered.

use crate::names;
use std::fmt;
use thiserror::Error;

/// The declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    Int,
    Float,
    String,
    Bool,
    /// Associative map.
    Array,
    /// Any object: record, bag, enum case or timestamp.
    Object,
    /// Accepts anything.
    Mixed,
    /// Only `null`.
    Null,
    /// Instances of a class, interface or enum (nominal).
    Class(String),
    /// `A|B`: never validated.
    Union(Vec<TypeSpec>),
    /// `A&B`: never validated.
    Intersection(Vec<TypeSpec>),
}

/// A parsed type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedType {
    pub spec: TypeSpec,
    /// `?T`, `T|null`, `null` and `mixed` accept null.
    pub nullable: bool,
}

/// Errors from parsing a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeSpecError {
    #[error("Empty type declaration")]
    Empty,

    #[error("Invalid type name: {0}")]
    InvalidName(String),

    #[error("Nullable marker cannot apply to {0}")]
    InvalidNullable(String),

    #[error("Intersection members must be class types: {0}")]
    NonClassIntersection(String),

    #[error("Identifier pattern failed to compile: {0}")]
    Pattern(String),
}

impl TypeSpec {
    /// Build a class type.
    pub fn class(name: impl Into<String>) -> Self {
        TypeSpec::Class(name.into())
    }

    /// Parse a type declaration such as `?int` or `int|string`.
    pub fn parse(decl: &str) -> Result<ParsedType, TypeSpecError> {
        let decl = decl.trim();
        if decl.is_empty() {
            return Err(TypeSpecError::Empty);
        }

        if let Some(inner) = decl.strip_prefix('?') {
            if inner.contains('|') || inner.contains('&') {
                return Err(TypeSpecError::InvalidNullable(inner.to_string()));
            }
            let spec = parse_atom(inner)?;
            if matches!(spec, TypeSpec::Mixed | TypeSpec::Null) {
                return Err(TypeSpecError::InvalidNullable(inner.to_string()));
            }
            return Ok(ParsedType {
                spec,
                nullable: true,
            });
        }

        if decl.contains('|') {
            let mut members = Vec::new();
            for member in decl.split('|') {
                let member = member.trim();
                let spec = match member
                    .strip_prefix('(')
                    .and_then(|m| m.strip_suffix(')'))
                {
                    Some(group) => parse_intersection(group)?,
                    None => parse_atom(member)?,
                };
                members.push(spec);
            }
            let nullable = members.contains(&TypeSpec::Null);
            return Ok(ParsedType {
                spec: TypeSpec::Union(members),
                nullable,
            });
        }

        if decl.contains('&') {
            return Ok(ParsedType {
                spec: parse_intersection(decl)?,
                nullable: false,
            });
        }

        let spec = parse_atom(decl)?;
        let nullable = matches!(spec, TypeSpec::Mixed | TypeSpec::Null);
        Ok(ParsedType { spec, nullable })
    }

    /// Returns true for union and intersection types.
    pub fn is_compound(&self) -> bool {
        matches!(self, TypeSpec::Union(_) | TypeSpec::Intersection(_))
    }
}

fn parse_intersection(decl: &str) -> Result<TypeSpec, TypeSpecError> {
    let mut members = Vec::new();
    for member in decl.split('&') {
        let spec = parse_atom(member)?;
        if !matches!(spec, TypeSpec::Class(_)) {
            return Err(TypeSpecError::NonClassIntersection(decl.to_string()));
        }
        members.push(spec);
    }
    Ok(TypeSpec::Intersection(members))
}

fn parse_atom(name: &str) -> Result<TypeSpec, TypeSpecError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TypeSpecError::Empty);
    }
    let spec = match name.to_ascii_lowercase().as_str() {
        "int" => TypeSpec::Int,
        "float" => TypeSpec::Float,
        "string" => TypeSpec::String,
        "bool" => TypeSpec::Bool,
        "array" => TypeSpec::Array,
        "object" => TypeSpec::Object,
        "mixed" => TypeSpec::Mixed,
        "null" => TypeSpec::Null,
        _ => {
            if !names::is_identifier(name).map_err(TypeSpecError::Pattern)? {
                return Err(TypeSpecError::InvalidName(name.to_string()));
            }
            TypeSpec::Class(name.to_string())
        }
    };
    Ok(spec)
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Int => write!(f, "int"),
            TypeSpec::Float => write!(f, "float"),
            TypeSpec::String => write!(f, "string"),
            TypeSpec::Bool => write!(f, "bool"),
            TypeSpec::Array => write!(f, "array"),
            TypeSpec::Object => write!(f, "object"),
            TypeSpec::Mixed => write!(f, "mixed"),
            TypeSpec::Null => write!(f, "null"),
            TypeSpec::Class(name) => write!(f, "{}", name),
            TypeSpec::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    match member {
                        TypeSpec::Intersection(_) => write!(f, "({})", member)?,
                        _ => write!(f, "{}", member)?,
                    }
                }
                Ok(())
            }
            TypeSpec::Intersection(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, "&")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
        }
    }
}
