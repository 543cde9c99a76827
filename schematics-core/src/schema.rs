//! Schema - Define type schemas for resources and data sources
//!
//! Providers declare one schema per resource type. Callers validate their
//! configuration against it before any remote call is made.

use std::collections::HashMap;
use std::fmt;

use crate::resource::{Resource, State, Value};

/// Attribute type
#[derive(Debug, Clone)]
pub enum AttributeType {
    /// String
    String,
    /// Integer
    Int,
    /// Floating point number
    Float,
    /// Boolean
    Bool,
    /// Enum (list of allowed values)
    Enum(Vec<String>),
    /// Custom type (with validation function)
    Custom {
        name: String,
        base: Box<AttributeType>,
        validate: fn(&Value) -> Result<(), String>,
    },
    /// List
    List(Box<AttributeType>),
    /// Map
    Map(Box<AttributeType>),
    /// Nested object. Values are lists of maps, one map per instance.
    Block(BlockSchema),
}

impl AttributeType {
    /// Check if a value conforms to this type
    pub fn validate(&self, value: &Value) -> Result<(), TypeError> {
        match (self, value) {
            (AttributeType::String, Value::String(_)) => Ok(()),
            (AttributeType::Int, Value::Int(_)) => Ok(()),
            (AttributeType::Float, Value::Float(_) | Value::Int(_)) => Ok(()),
            (AttributeType::Bool, Value::Bool(_)) => Ok(()),

            (AttributeType::Enum(variants), Value::String(s)) => {
                if variants.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(TypeError::InvalidEnumVariant {
                        value: s.clone(),
                        expected: variants.clone(),
                    })
                }
            }

            (AttributeType::Custom { base, validate, .. }, v) => {
                base.validate(v)?;
                validate(v).map_err(|msg| TypeError::ValidationFailed { message: msg })
            }

            (AttributeType::List(inner), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Map(inner), Value::Map(map)) => {
                for (k, v) in map {
                    inner.validate(v).map_err(|e| TypeError::MapValueError {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Block(block), Value::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    let Value::Map(fields) = item else {
                        return Err(TypeError::ListItemError {
                            index: i,
                            inner: Box::new(TypeError::TypeMismatch {
                                expected: "Map".to_string(),
                                got: item.type_name().to_string(),
                            }),
                        });
                    };
                    block.validate(fields).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: value.type_name().to_string(),
            }),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Float => "Float".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::Custom { name, .. } => name.clone(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
            AttributeType::Block(_) => "Block".to_string(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Type error
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid enum variant '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        value: String,
        expected: Vec<String>,
    },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("Attribute '{name}' is computed and cannot be set")]
    ComputedAttribute { name: String },

    #[error("Attribute '{name}' allows at most {max} item(s), got {got}")]
    TooManyItems { name: String, max: usize, got: usize },

    #[error("Attribute '{name}': {inner}")]
    AttributeError { name: String, inner: Box<TypeError> },

    #[error("List item at index {index}: {inner}")]
    ListItemError { index: usize, inner: Box<TypeError> },

    #[error("Map value for key '{key}': {inner}")]
    MapValueError { key: String, inner: Box<TypeError> },
}

/// Who may set an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Required,
    Optional,
    /// Assigned by the service only
    Computed,
    /// Settable, filled in by the service when left out
    OptionalComputed,
}

impl Mutability {
    pub fn is_settable(&self) -> bool {
        !matches!(self, Mutability::Computed)
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mutability::Required => "required",
            Mutability::Optional => "optional",
            Mutability::Computed => "computed",
            Mutability::OptionalComputed => "optional+computed",
        };
        write!(f, "{}", s)
    }
}

/// Attribute schema
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub mutability: Mutability,
    /// Changing this attribute requires replacing the resource
    pub force_new: bool,
    pub sensitive: bool,
    /// Deprecation message, if any
    pub deprecated: Option<String>,
    /// Upper bound on list and block length
    pub max_items: Option<usize>,
    pub default: Option<Value>,
    pub description: Option<String>,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            mutability: Mutability::Optional,
            force_new: false,
            sensitive: false,
            deprecated: None,
            max_items: None,
            default: None,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.mutability = Mutability::Required;
        self
    }

    pub fn computed(mut self) -> Self {
        self.mutability = Mutability::Computed;
        self
    }

    pub fn optional_computed(mut self) -> Self {
        self.mutability = Mutability::OptionalComputed;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = Some(message.into());
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.mutability == Mutability::Required
    }

    fn validate_value(&self, value: &Value) -> Result<(), TypeError> {
        if let (Some(max), Value::List(items)) = (self.max_items, value)
            && items.len() > max
        {
            return Err(TypeError::TooManyItems {
                name: self.name.clone(),
                max,
                got: items.len(),
            });
        }
        self.attr_type
            .validate(value)
            .map_err(|e| TypeError::AttributeError {
                name: self.name.clone(),
                inner: Box::new(e),
            })
    }
}

/// Attributes of a nested object
#[derive(Debug, Clone, Default)]
pub struct BlockSchema {
    pub attributes: HashMap<String, AttributeSchema>,
}

impl BlockSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    /// Validate one block instance. Computed attributes inside blocks are
    /// tolerated because read results are fed back as configuration.
    fn validate(&self, fields: &HashMap<String, Value>) -> Result<(), TypeError> {
        for (name, schema) in &self.attributes {
            if schema.is_required() && !fields.contains_key(name) && schema.default.is_none() {
                return Err(TypeError::MissingRequired { name: name.clone() });
            }
        }
        for (name, value) in fields {
            match self.attributes.get(name) {
                Some(schema) => schema.validate_value(value)?,
                None => return Err(TypeError::UnknownAttribute { name: name.clone() }),
            }
        }
        Ok(())
    }
}

/// Whether a schema describes a writable resource or a read-only data source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Resource,
    DataSource,
}

/// Resource schema
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub resource_type: String,
    pub kind: SchemaKind,
    pub attributes: HashMap<String, AttributeSchema>,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            kind: SchemaKind::Resource,
            attributes: HashMap::new(),
            description: None,
        }
    }

    pub fn data_source(resource_type: impl Into<String>) -> Self {
        Self {
            kind: SchemaKind::DataSource,
            ..Self::new(resource_type)
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.get(name)
    }

    /// Attribute names in lexical order
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Whether `key` changed between `prior` and `desired`. Attributes the
    /// service may fill in only count when `desired` sets them.
    pub fn has_change(&self, prior: &State, desired: &Resource, key: &str) -> bool {
        match self.get(key).map(|attr| attr.mutability) {
            Some(Mutability::Computed | Mutability::OptionalComputed) => {
                desired.has_configured_change(prior, key)
            }
            _ => desired.has_change(prior, key),
        }
    }

    /// Validate resource attributes
    pub fn validate(&self, attributes: &HashMap<String, Value>) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();

        // Check required attributes
        for (name, schema) in &self.attributes {
            if schema.is_required() && !attributes.contains_key(name) && schema.default.is_none() {
                errors.push(TypeError::MissingRequired { name: name.clone() });
            }
        }

        // Type check each attribute
        for (name, value) in attributes {
            match self.attributes.get(name) {
                Some(schema) if !schema.mutability.is_settable() => {
                    errors.push(TypeError::ComputedAttribute { name: name.clone() });
                }
                Some(schema) => {
                    if let Err(e) = schema.validate_value(value) {
                        errors.push(e);
                    }
                }
                None => errors.push(TypeError::UnknownAttribute { name: name.clone() }),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Helper functions for common types
pub mod types {
    use super::*;

    pub fn string_list() -> AttributeType {
        AttributeType::List(Box::new(AttributeType::String))
    }

    pub fn string_map() -> AttributeType {
        AttributeType::Map(Box::new(AttributeType::String))
    }

    /// List of string-valued maps
    pub fn string_map_list() -> AttributeType {
        AttributeType::List(Box::new(string_map()))
    }

    /// Non-negative integer type
    pub fn non_negative_int() -> AttributeType {
        AttributeType::Custom {
            name: "NonNegativeInt".to_string(),
            base: Box::new(AttributeType::Int),
            validate: |value| match value {
                Value::Int(n) if *n >= 0 => Ok(()),
                Value::Int(_) => Err("Value must not be negative".to_string()),
                _ => Err("Expected integer".to_string()),
            },
        }
    }
}

/// Check that a string's length (in characters) lies within `min..=max`
pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), String> {
    let len = s.chars().count();
    if len < min || len > max {
        Err(format!(
            "length of '{}' must be between {} and {}, got {}",
            s, min, max, len
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_value(fields: &[(&str, Value)]) -> Value {
        Value::List(vec![Value::Map(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )])
    }

    #[test]
    fn service_filled_attributes_change_only_when_configured() {
        let schema = ResourceSchema::new("ibm_schematics_workspace")
            .attribute(AttributeSchema::new("description", AttributeType::String))
            .attribute(AttributeSchema::new("locked_by", AttributeType::String).optional_computed());
        let prior = State::existing(
            crate::resource::ResourceId::new("ibm_schematics_workspace", "ws"),
            HashMap::from([
                ("description".to_string(), Value::String("old".to_string())),
                ("locked_by".to_string(), Value::String("ops".to_string())),
            ]),
        );
        let desired = Resource::new("ibm_schematics_workspace", "ws");

        assert!(schema.has_change(&prior, &desired, "description"));
        assert!(!schema.has_change(&prior, &desired, "locked_by"));

        let desired = desired.with_attribute("locked_by", Value::String("me".to_string()));
        assert!(schema.has_change(&prior, &desired, "locked_by"));
    }

    #[test]
    fn validate_string_type() {
        let t = AttributeType::String;
        assert!(t.validate(&Value::String("hello".to_string())).is_ok());
        assert!(t.validate(&Value::Int(42)).is_err());
    }

    #[test]
    fn float_accepts_integers() {
        let t = AttributeType::Float;
        assert!(t.validate(&Value::Float(1.5)).is_ok());
        assert!(t.validate(&Value::Int(2)).is_ok());
        assert!(t.validate(&Value::Bool(true)).is_err());
    }

    #[test]
    fn validate_enum_type() {
        let t = AttributeType::Enum(vec!["a".to_string(), "b".to_string()]);
        assert!(t.validate(&Value::String("a".to_string())).is_ok());
        assert!(t.validate(&Value::String("c".to_string())).is_err());
    }

    #[test]
    fn validate_non_negative_int() {
        let t = types::non_negative_int();
        assert!(t.validate(&Value::Int(0)).is_ok());
        assert!(t.validate(&Value::Int(7)).is_ok());
        assert!(t.validate(&Value::Int(-1)).is_err());
        assert!(t.validate(&Value::String("1".to_string())).is_err());
    }

    #[test]
    fn validate_resource_schema() {
        let schema = ResourceSchema::new("resource")
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(AttributeSchema::new("count", types::non_negative_int()))
            .attribute(AttributeSchema::new("enabled", AttributeType::Bool));

        let mut attrs = HashMap::new();
        attrs.insert("name".to_string(), Value::String("my-resource".to_string()));
        attrs.insert("count".to_string(), Value::Int(5));
        attrs.insert("enabled".to_string(), Value::Bool(true));

        assert!(schema.validate(&attrs).is_ok());
    }

    #[test]
    fn missing_required_attribute() {
        let schema = ResourceSchema::new("workspace")
            .attribute(AttributeSchema::new("name", AttributeType::String).required());

        let attrs = HashMap::new();
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(matches!(errors[0], TypeError::MissingRequired { .. }));
    }

    #[test]
    fn computed_attribute_cannot_be_set() {
        let schema = ResourceSchema::new("workspace")
            .attribute(AttributeSchema::new("crn", AttributeType::String).computed());

        let mut attrs = HashMap::new();
        attrs.insert("crn".to_string(), Value::String("crn:v1".to_string()));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(matches!(errors[0], TypeError::ComputedAttribute { .. }));
    }

    #[test]
    fn block_respects_max_items_and_nested_required() {
        let bastion = BlockSchema::new()
            .attribute(AttributeSchema::new("name", AttributeType::String))
            .attribute(AttributeSchema::new("host", AttributeType::String).required());
        let schema = ResourceSchema::new("action").attribute(
            AttributeSchema::new("bastion", AttributeType::Block(bastion)).max_items(1),
        );

        let mut attrs = HashMap::new();
        attrs.insert(
            "bastion".to_string(),
            block_value(&[("host", Value::String("10.0.0.1".to_string()))]),
        );
        assert!(schema.validate(&attrs).is_ok());

        attrs.insert(
            "bastion".to_string(),
            block_value(&[("name", Value::String("b".to_string()))]),
        );
        assert!(schema.validate(&attrs).is_err());

        let one = block_value(&[("host", Value::String("h".to_string()))]);
        let Value::List(mut items) = one.clone() else {
            unreachable!()
        };
        items.extend(one.as_list().unwrap().iter().cloned());
        attrs.insert("bastion".to_string(), Value::List(items));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(matches!(errors[0], TypeError::TooManyItems { max: 1, got: 2, .. }));
    }

    #[test]
    fn unknown_attribute_is_reported() {
        let schema = ResourceSchema::data_source("workspace");
        let mut attrs = HashMap::new();
        attrs.insert("nope".to_string(), Value::Bool(true));
        let errors = schema.validate(&attrs).unwrap_err();
        assert!(matches!(errors[0], TypeError::UnknownAttribute { .. }));
        assert_eq!(schema.kind, SchemaKind::DataSource);
    }

    #[test]
    fn validate_length_bounds() {
        assert!(validate_length("abc", 1, 3).is_ok());
        assert!(validate_length("", 1, 3).is_err());
        assert!(validate_length("abcd", 1, 3).is_err());
    }
}
