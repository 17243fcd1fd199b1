use anyhow::{Context, Result};
use blaze_libsync_core::{DependencyList, DependencyWirer, JsonLibraryTable, WireOptions};

use crate::cli::SyncArgs;
use crate::commands::sync::load_sync_inputs;
use crate::display::print_dependency_list;

pub fn wire_command(sync: &SyncArgs, modules: &[String], external: bool) -> Result<()> {
    let inputs = load_sync_inputs(sync)?;
    let table = JsonLibraryTable::open(&sync.table)
        .with_context(|| format!("Failed to open library table {}", sync.table.display()))?;

    let modules = modules.to_vec();
    let options = if external || inputs.config.wire_external_modules {
        WireOptions::with_external_modules(&modules)
            .external_prefix(&inputs.config.external_module_prefix)
    } else {
        WireOptions::default()
    };

    let mut deps = DependencyList::new();
    let report = DependencyWirer::new(&table).wire(&mut deps, &inputs.desired, &options);

    print_dependency_list(&deps);

    if !report.is_consistent() {
        eprintln!();
        for key in &report.missing {
            eprintln!("❌ Library missing: {key}. Please resync project to resolve.");
        }
    }

    Ok(())
}
