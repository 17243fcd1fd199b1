use blaze_libsync_core::{
    AttributeDefinition, DependencyList, OrderEntry, ReconcileReport, RuleDefinition,
};

pub fn print_report(report: &ReconcileReport) {
    for name in &report.created {
        println!("   ➕ {name}");
    }
    for name in &report.updated {
        println!("   🔁 {name}");
    }
    for name in &report.removed {
        println!("   ➖ {name}");
    }
    for name in &report.retained_external {
        println!("   🔒 {name} (externally added)");
    }
    println!("\n✅ {report}");
}

pub fn print_dependency_list(deps: &DependencyList) {
    if deps.is_empty() {
        println!("No dependencies.");
        return;
    }

    for (index, entry) in deps.entries().iter().enumerate() {
        match entry {
            OrderEntry::Module(name) => println!("{:>3}. module  {}", index + 1, name),
            OrderEntry::Library(name) => println!("{:>3}. library {}", index + 1, name),
        }
    }
}

pub fn print_rule(rule: &RuleDefinition) {
    println!("📐 {}", rule.name);
    if let Some(doc) = &rule.documentation {
        println!("   {doc}");
    }
    for attr in rule.attributes() {
        println!(
            "   • {}: {:?}{}{}",
            attr.name,
            attr.attr_type,
            value_shape(attr),
            if attr.mandatory { " (mandatory)" } else { "" }
        );
    }
}

fn value_shape(attr: &AttributeDefinition) -> &'static str {
    match (attr.attr_type.is_list(), attr.attr_type.is_label()) {
        (true, true) => " [label list]",
        (true, false) => " [list]",
        (false, true) => " [label]",
        (false, false) => "",
    }
}

pub fn print_attribute(attr: &AttributeDefinition) {
    println!("🔖 {}", attr.name);
    println!("   type:      {:?}", attr.attr_type);
    println!("   mandatory: {}", attr.mandatory);
    match &attr.default_value {
        Some(value) => println!("   default:   {value}"),
        None => println!("   default:   <none>"),
    }
    if let Some(doc) = &attr.documentation {
        println!("   {doc}");
    }
}
