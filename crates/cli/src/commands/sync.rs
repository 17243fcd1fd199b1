use anyhow::{Context, Result};
use blaze_libsync_core::{
    BlazeLibrary, ExternallyAddedLibraries, JsonLibraryTable, LibraryReconciler, LibraryTable,
    SyncConfig, reconcile,
};
use std::collections::BTreeSet;
use std::env;
use tracing::debug;

use crate::cli::SyncArgs;
use crate::display::print_report;

/// Config, desired libraries, and ownership for one sync pass
pub struct SyncInputs {
    pub config: SyncConfig,
    pub desired: Vec<BlazeLibrary>,
    pub ownership: ExternallyAddedLibraries,
}

pub fn load_sync_inputs(sync: &SyncArgs) -> Result<SyncInputs> {
    let config = match &sync.config {
        Some(path) => SyncConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            SyncConfig::discover(&cwd)?
        }
    };

    let desired = BlazeLibrary::load_jar_libraries(&sync.desired)
        .with_context(|| format!("Failed to load libraries {}", sync.desired.display()))?;
    debug!("Loaded {} desired libraries", desired.len());

    let ownership = ExternallyAddedLibraries::collect(&[&config]);

    Ok(SyncInputs {
        config,
        desired,
        ownership,
    })
}

pub fn plan_command(sync: &SyncArgs, json: bool) -> Result<()> {
    let inputs = load_sync_inputs(sync)?;
    let table = JsonLibraryTable::open(&sync.table)
        .with_context(|| format!("Failed to open library table {}", sync.table.display()))?;

    let current: BTreeSet<String> = table.library_names().into_iter().collect();
    let mutations = reconcile::plan(&current, &inputs.desired, &inputs.ownership);

    if json {
        println!("{}", serde_json::to_string_pretty(&mutations)?);
        return Ok(());
    }

    println!("📋 Plan for {}", sync.table.display());
    println!("{}", "=".repeat(80));
    println!("{}", reconcile::format_plan(&mutations));

    Ok(())
}

pub fn reconcile_command(sync: &SyncArgs) -> Result<()> {
    let inputs = load_sync_inputs(sync)?;
    let mut table = JsonLibraryTable::open(&sync.table)
        .with_context(|| format!("Failed to open library table {}", sync.table.display()))?;

    let reconciler = LibraryReconciler::new(inputs.config.artifact_decoder());
    let report = reconciler
        .reconcile(&mut table, &inputs.desired, &inputs.ownership)
        .context("Library sync failed; run a full sync again")?;

    println!("🔄 Synced {}", sync.table.display());
    println!("{}", "=".repeat(80));
    print_report(&report);

    Ok(())
}
