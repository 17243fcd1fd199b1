//! Attribute metadata for build rules

use serde::{Deserialize, Serialize};

/// Attribute type discriminator, mirroring Bazel's `Attribute.Discriminator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeType {
    Integer,
    String,
    Label,
    Output,
    StringList,
    LabelList,
    OutputList,
    DistributionSet,
    License,
    StringDictUnary,
    FilesetEntryList,
    LabelListDict,
    StringListDict,
    Boolean,
    Tristate,
    IntegerList,
    StringDict,
    LabelDictUnary,
    SelectorList,
    LabelKeyedStringDict,
    /// Discriminators this crate does not know about yet
    #[serde(other)]
    Unknown,
}

impl AttributeType {
    /// Whether values of this type are lists
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            AttributeType::StringList
                | AttributeType::LabelList
                | AttributeType::OutputList
                | AttributeType::IntegerList
                | AttributeType::FilesetEntryList
                | AttributeType::DistributionSet
        )
    }

    /// Whether values of this type reference other targets
    pub fn is_label(&self) -> bool {
        matches!(
            self,
            AttributeType::Label
                | AttributeType::LabelList
                | AttributeType::LabelListDict
                | AttributeType::LabelDictUnary
                | AttributeType::LabelKeyedStringDict
        )
    }
}

/// Metadata for a single documented rule attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
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

impl AttributeDefinition {
    pub fn new(
        name: impl Into<String>,
        attr_type: AttributeType,
        mandatory: bool,
        default_value: Option<serde_json::Value>,
        documentation: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attr_type,
            mandatory,
            default_value,
            documentation,
        }
    }

    /// The `name` attribute every rule instance carries.
    ///
    /// Older Bazel releases left it out of the rule schema.
    pub fn implicit_name() -> Self {
        Self::new("name", AttributeType::String, true, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_type_wire_names() {
        let parsed: AttributeType = serde_json::from_str("\"LABEL_LIST\"").unwrap();
        assert_eq!(parsed, AttributeType::LabelList);

        let json = serde_json::to_string(&AttributeType::StringDictUnary).unwrap();
        assert_eq!(json, "\"STRING_DICT_UNARY\"");
    }

    #[test]
    fn test_unknown_discriminator_is_tolerated() {
        let parsed: AttributeType = serde_json::from_str("\"SOME_FUTURE_TYPE\"").unwrap();
        assert_eq!(parsed, AttributeType::Unknown);
    }

    #[test]
    fn test_type_classification() {
        assert!(AttributeType::LabelList.is_list());
        assert!(AttributeType::LabelList.is_label());
        assert!(!AttributeType::String.is_list());
        assert!(!AttributeType::Boolean.is_label());
    }

    #[test]
    fn test_implicit_name_attribute() {
        let attr = AttributeDefinition::implicit_name();
        assert_eq!(attr.name, "name");
        assert_eq!(attr.attr_type, AttributeType::String);
        assert!(attr.mandatory);
        assert!(attr.default_value.is_none());
        assert!(attr.documentation.is_none());
    }
}
