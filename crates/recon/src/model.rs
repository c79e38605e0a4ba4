use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Handle values meaning "no GitHub account on file". Compared
/// case-insensitively after trimming.
const NO_ACCOUNT_SENTINELS: &[&str] = &["-", "n/a", "none", "no github account"];

/// One internally-known maintainer record. Supplied fresh per call;
/// the engine never mutates or persists roster entries.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub id: String,
    pub handle: String,
}

impl RosterEntry {
    /// The entry's lowercased GitHub handle, or `None` when the entry
    /// has no usable account (empty or a sentinel value). Entries
    /// without a usable handle can never be matched.
    pub fn usable_handle(&self) -> Option<String> {
        let handle = self.handle.trim().to_lowercase();
        if handle.is_empty() || NO_ACCOUNT_SENTINELS.contains(&handle.as_str()) {
            return None;
        }
        Some(handle)
    }
}

// ---------------------------------------------------------------------------
// Reference document
// ---------------------------------------------------------------------------

/// Outcome of resolving and fetching the external maintainer file.
#[derive(Debug, Clone)]
pub enum DocumentStatus {
    /// No reference URL configured; no fetch was attempted.
    Missing,
    /// The file was retrieved.
    Fetched {
        raw_text: String,
        fetched_at: DateTime<Utc>,
    },
    /// URL normalization or the fetch itself failed.
    Error,
}

/// The external maintainer file, as seen by one reconciliation call.
/// Immutable once constructed, discarded after the call.
#[derive(Debug, Clone)]
pub struct ReferenceDocument {
    pub source_url: String,
    pub status: DocumentStatus,
}

// ---------------------------------------------------------------------------
// Harvest
// ---------------------------------------------------------------------------

/// Handle → first-seen source line (trimmed, otherwise verbatim).
/// First writer wins across the harvest strategies.
pub type HarvestResult = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Three-valued fetch status surfaced to callers. The underlying error
/// kind never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    Missing,
    Fetched,
    Error,
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Fetched => write!(f, "fetched"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Result of diffing a roster against a reference document.
///
/// Invariants: `matched_ids` and `missing_ids` are disjoint; when
/// `status == Fetched` their union is the full roster id set; when not
/// fetched, `matched_ids` is empty and every roster id is missing.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciliationResult {
    pub status: FetchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    pub matched_ids: BTreeSet<String>,
    pub missing_ids: BTreeSet<String>,
    /// Harvested handles with no roster record, ascending.
    pub ref_only_handles: Vec<String>,
    /// Context lines for `ref_only_handles` only.
    pub context_lines: BTreeMap<String, String>,
}
