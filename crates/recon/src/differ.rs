use std::collections::{BTreeMap, BTreeSet};

use crate::contains::contains_handle;
use crate::harvest::harvest;
use crate::model::{
    DocumentStatus, FetchStatus, ReconciliationResult, ReferenceDocument, RosterEntry,
};

/// Diff a roster against a reference document. Pure function: the
/// roster is never mutated and the document is consumed read-only.
///
/// Matching is intentionally asymmetric: matched/missing uses the
/// lenient containment check, ref-only candidates come from the strict
/// harvester. A handle recognized only by a loose heuristic can
/// therefore be counted on both sides at once.
pub fn diff(roster: &[RosterEntry], doc: &ReferenceDocument) -> ReconciliationResult {
    match &doc.status {
        DocumentStatus::Missing => unfetched(roster, FetchStatus::Missing),
        DocumentStatus::Error => unfetched(roster, FetchStatus::Error),
        DocumentStatus::Fetched {
            raw_text,
            fetched_at,
        } => {
            let mut matched_ids = BTreeSet::new();
            let mut missing_ids = BTreeSet::new();
            let mut known_handles = BTreeSet::new();

            for entry in roster {
                match entry.usable_handle() {
                    Some(handle) => {
                        if contains_handle(raw_text, &handle) {
                            matched_ids.insert(entry.id.clone());
                        } else {
                            missing_ids.insert(entry.id.clone());
                        }
                        known_handles.insert(handle);
                    }
                    // No usable handle: can never match.
                    None => {
                        missing_ids.insert(entry.id.clone());
                    }
                }
            }

            let mut ref_only_handles = Vec::new();
            let mut context_lines = BTreeMap::new();
            for (handle, line) in harvest(raw_text) {
                if !known_handles.contains(&handle) {
                    ref_only_handles.push(handle.clone());
                    context_lines.insert(handle, line);
                }
            }
            // BTreeMap iteration keeps ref_only_handles ascending.

            ReconciliationResult {
                status: FetchStatus::Fetched,
                fetched_at: Some(*fetched_at),
                matched_ids,
                missing_ids,
                ref_only_handles,
                context_lines,
            }
        }
    }
}

/// Result shape shared by `Missing` and `Error`: nothing matched,
/// every roster id missing, harvester not run.
fn unfetched(roster: &[RosterEntry], status: FetchStatus) -> ReconciliationResult {
    ReconciliationResult {
        status,
        fetched_at: None,
        matched_ids: BTreeSet::new(),
        missing_ids: roster.iter().map(|e| e.id.clone()).collect(),
        ref_only_handles: Vec::new(),
        context_lines: BTreeMap::new(),
    }
}
