//! Configuration management for blaze-libsync

pub mod global;
mod settings;

// Re-export main types
pub use global::{GLOBAL_SETTINGS_FILE, GlobalSettings};
pub use settings::SyncConfig;
