use anyhow::{Context, Result};
use blaze_libsync_core::GlobalSettings;
use std::path::Path;
use tracing::info;

#[allow(deprecated)]
pub fn settings_command(dir: &Path, set_local_sdk: Option<String>) -> Result<()> {
    let mut settings = GlobalSettings::load(dir)
        .with_context(|| format!("Failed to load global settings from {}", dir.display()))?;

    if let Some(location) = set_local_sdk {
        settings.set_local_sdk_location(Some(location));
        settings
            .save(dir)
            .with_context(|| format!("Failed to save global settings to {}", dir.display()))?;
        info!("Saved global settings to {}", dir.display());
    }

    println!("⚙️  Global settings");
    println!(
        "   • local_sdk_location (deprecated): {}",
        settings.local_sdk_location().unwrap_or("<unset>")
    );

    Ok(())
}
