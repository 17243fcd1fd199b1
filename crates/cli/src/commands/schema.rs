use anyhow::{Context, Result, bail};
use blaze_libsync_core::RuleSchema;
use std::path::Path;

use crate::display::{print_attribute, print_rule};

pub fn schema_command(file: &Path, rule: Option<&str>, attribute: Option<&str>) -> Result<()> {
    let schema = RuleSchema::load_from_file(file)
        .with_context(|| format!("Failed to load schema {}", file.display()))?;

    let Some(rule_name) = rule else {
        println!("📚 {} rules in {}", schema.len(), file.display());
        for name in schema.rule_names() {
            println!("   • {name}");
        }
        return Ok(());
    };

    let Some(rule) = schema.rule(rule_name) else {
        bail!("Unknown rule: {rule_name}");
    };

    match attribute {
        Some(attribute_name) => match rule.get_attribute(Some(attribute_name)) {
            Some(attr) => print_attribute(attr),
            None => println!("❌ {rule_name} has no documented attribute '{attribute_name}'"),
        },
        None => print_rule(rule),
    }

    Ok(())
}
