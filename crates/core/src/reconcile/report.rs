//! Outcome of a reconciliation pass

use serde::Serialize;
use std::fmt;

/// Library names touched by a pass, grouped by what happened to them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub removed: Vec<String>,
    /// Stale libraries left alone because another subsystem owns them
    pub retained_external: Vec<String>,
}

impl ReconcileReport {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

impl fmt::Display for ReconcileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {}, updated {}, removed {} libraries",
            self.created.len(),
            self.updated.len(),
            self.removed.len()
        )?;
        if !self.retained_external.is_empty() {
            write!(f, " (kept {} externally added)", self.retained_external.len())?;
        }
        Ok(())
    }
}
