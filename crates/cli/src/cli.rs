use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    plan_command, reconcile_command, schema_command, settings_command, wire_command,
};

#[derive(Parser, Debug)]
#[command(name = "blaze-libsync")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Inputs shared by every command that touches the library table
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Library table (JSON); created on first commit if missing
    #[arg(short, long)]
    pub table: PathBuf,

    /// Libraries produced by the build (JSON array of jar libraries)
    #[arg(short, long)]
    pub desired: PathBuf,

    /// Sync configuration; defaults to the nearest .blaze-libsync.json
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the library changes a sync would make
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        sync: SyncArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Bring the library table in line with the build's libraries
    #[command(visible_alias = "r")]
    Reconcile {
        #[command(flatten)]
        sync: SyncArgs,
    },
    /// Print the dependency order of a module
    #[command(visible_alias = "w")]
    Wire {
        #[command(flatten)]
        sync: SyncArgs,

        /// Modules of the project (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        modules: Vec<String>,

        /// Put external modules ahead of libraries
        #[arg(short, long)]
        external: bool,
    },
    /// Inspect a build language schema
    Schema {
        /// Schema file (JSON)
        #[arg(short, long)]
        file: PathBuf,

        /// Show a single rule
        #[arg(short, long)]
        rule: Option<String>,

        /// Show a single attribute of the rule
        #[arg(short, long, requires = "rule")]
        attribute: Option<String>,
    },
    /// Show or update global settings
    Settings {
        /// Directory holding the global settings file
        #[arg(short, long)]
        dir: PathBuf,

        /// Set the deprecated local SDK location
        #[arg(long)]
        set_local_sdk: Option<String>,
    },
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Plan { sync, json } => plan_command(&sync, json),
            Commands::Reconcile { sync } => reconcile_command(&sync),
            Commands::Wire {
                sync,
                modules,
                external,
            } => wire_command(&sync, &modules, external),
            Commands::Schema {
                file,
                rule,
                attribute,
            } => schema_command(&file, rule.as_deref(), attribute.as_deref()),
            Commands::Settings { dir, set_local_sdk } => settings_command(&dir, set_local_sdk),
        }
    }
}
