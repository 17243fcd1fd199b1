//! Rule definitions decoded from a build language schema

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::attribute_definition::{AttributeDefinition, AttributeType};

/// A rule as it appears in the serialized schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSource {
    pub name: String,
    #[serde(default, alias = "attribute")]
    pub attributes: Vec<AttributeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// An attribute as it appears in the serialized schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSource {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl From<AttributeSource> for AttributeDefinition {
    fn from(source: AttributeSource) -> Self {
        AttributeDefinition::new(
            source.name,
            source.attr_type,
            source.mandatory,
            source.default_value,
            source.documentation,
        )
    }
}

/// Immutable description of a build rule and its documented attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleDefinition {
    pub name: String,
    /// Not exhaustive: only documented attributes plus `name`
    attributes: BTreeMap<String, AttributeDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl RuleDefinition {
    /// Build a rule definition from its schema source.
    ///
    /// The `name` attribute is added when the source omits it.
    pub fn from_source(source: RuleSource) -> Result<Self> {
        if source.name.is_empty() {
            return Err(Error::SchemaError("Rule definition without a name".to_string()));
        }

        let mut attributes = BTreeMap::new();
        for attr in source.attributes {
            if attributes.contains_key(&attr.name) {
                return Err(Error::SchemaError(format!(
                    "Duplicate attribute '{}' in rule {}",
                    attr.name, source.name
                )));
            }
            attributes.insert(attr.name.clone(), AttributeDefinition::from(attr));
        }

        if !attributes.contains_key("name") {
            let name_attr = AttributeDefinition::implicit_name();
            attributes.insert(name_attr.name.clone(), name_attr);
        }

        Ok(Self {
            name: source.name,
            attributes,
            documentation: source.documentation,
        })
    }

    /// Look up an attribute; absent names resolve to `None`
    pub fn get_attribute(&self, attribute_name: Option<&str>) -> Option<&AttributeDefinition> {
        attribute_name.and_then(|name| self.attributes.get(name))
    }

    pub fn known_attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes.values()
    }

    /// Attributes a rule instance must set, `name` included
    pub fn mandatory_attributes(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes.values().filter(|attr| attr.mandatory)
    }
}
