//! DTOs for the landing page.

use serde::Serialize;

/// One record awaiting review on the pending-items queue.
#[derive(Debug, Clone, Serialize)]
pub struct PendingItem {
    /// Entity label shown in the queue ("Affinity Program", ...).
    pub kind: &'static str,
    /// Natural-key display value.
    pub key: String,
    /// Display title (customer or program name).
    pub title: String,
    /// Route to the record's edit screen.
    pub url: String,
    /// Workflow stage that submitted the record.
    pub stage: String,
}

/// Data required to render the landing page.
#[derive(Debug)]
pub struct IndexPageData {
    pub pending: Vec<PendingItem>,
}
