pub mod formatter;

pub use formatter::{print_attribute, print_dependency_list, print_report, print_rule};
