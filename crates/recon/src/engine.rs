use crate::differ::diff;
use crate::error::EngineError;
use crate::fetch::ReferenceFetcher;
use crate::model::{DocumentStatus, ReconciliationResult, ReferenceDocument, RosterEntry};
use crate::normalize::normalize_reference_url;

/// Build the reference document for a URL, reporting the failure cause
/// alongside the degraded status so callers can log it before it is
/// collapsed to the three-valued result.
///
/// An empty (or whitespace) URL means no reference file is configured:
/// no fetch is attempted and the document is `Missing`.
pub fn resolve_document(
    reference_url: &str,
    fetcher: &dyn ReferenceFetcher,
) -> (ReferenceDocument, Option<EngineError>) {
    let url = reference_url.trim();
    if url.is_empty() {
        return (
            ReferenceDocument {
                source_url: String::new(),
                status: DocumentStatus::Missing,
            },
            None,
        );
    }

    let normalized = match normalize_reference_url(url) {
        Ok(u) => u,
        Err(e) => {
            return (
                ReferenceDocument {
                    source_url: url.to_string(),
                    status: DocumentStatus::Error,
                },
                Some(e),
            );
        }
    };

    match fetcher.fetch(&normalized) {
        Ok(fetched) => (
            ReferenceDocument {
                source_url: normalized,
                status: DocumentStatus::Fetched {
                    raw_text: fetched.body,
                    fetched_at: fetched.fetched_at,
                },
            },
            None,
        ),
        Err(e) => (
            ReferenceDocument {
                source_url: normalized,
                status: DocumentStatus::Error,
            },
            Some(e),
        ),
    }
}

/// Run one reconciliation end to end. Never fails: URL or fetch
/// problems degrade the result status to `Error` and the diff proceeds
/// as if the document were absent.
pub fn reconcile(
    roster: &[RosterEntry],
    reference_url: &str,
    fetcher: &dyn ReferenceFetcher,
) -> ReconciliationResult {
    let (doc, _cause) = resolve_document(reference_url, fetcher);
    diff(roster, &doc)
}
