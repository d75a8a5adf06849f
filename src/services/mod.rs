//! Remote diary operations: draft reconciliation and album photos

mod drafts;
mod photos;

pub use drafts::{DraftReconciler, Reconciliation};
pub use photos::PhotoLister;
