//! The rule schema of a whole build language

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::rule_definition::{RuleDefinition, RuleSource};

#[derive(Debug, Deserialize)]
struct BuildLanguageSource {
    #[serde(default, alias = "rule")]
    rules: Vec<RuleSource>,
}

/// All rule definitions known to the build system, keyed by rule name
#[derive(Debug, Clone, Default)]
pub struct RuleSchema {
    rules: BTreeMap<String, RuleDefinition>,
}

impl RuleSchema {
    pub fn from_rules(rules: impl IntoIterator<Item = RuleDefinition>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for rule in rules {
            if map.contains_key(&rule.name) {
                return Err(Error::SchemaError(format!("Duplicate rule definition: {}", rule.name)));
            }
            map.insert(rule.name.clone(), rule);
        }
        Ok(Self { rules: map })
    }

    /// Decode a schema from its JSON rendering (`{"rule": [...]}`)
    pub fn from_json(contents: &str) -> Result<Self> {
        let source: BuildLanguageSource = serde_json::from_str(contents)
            .map_err(|e| Error::SchemaError(format!("Failed to parse build language schema: {e}")))?;

        let rules = source
            .rules
            .into_iter()
            .map(RuleDefinition::from_source)
            .collect::<Result<Vec<_>>>()?;

        let schema = Self::from_rules(rules)?;
        tracing::debug!("Loaded build language schema with {} rules", schema.rules.len());
        Ok(schema)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn rule(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.get(name)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
