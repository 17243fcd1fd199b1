//! Library reconciliation: converge the library table to the build's libraries

pub mod plan;
pub mod reconciler;
pub mod report;

pub use plan::{StoreMutation, format_plan, plan};
pub use reconciler::LibraryReconciler;
pub use report::ReconcileReport;
