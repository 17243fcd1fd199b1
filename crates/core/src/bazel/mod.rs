//! Bazel build language schema: rule and attribute definitions

pub mod attribute_definition;
pub mod build_language;
pub mod rule_definition;

pub use attribute_definition::{AttributeDefinition, AttributeType};
pub use build_language::RuleSchema;
pub use rule_definition::{AttributeSource, RuleDefinition, RuleSource};
