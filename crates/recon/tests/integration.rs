//! End-to-end reconciliation against synthetic reference documents.
//! No network: fetching is stubbed through the `ReferenceFetcher` trait.

use std::collections::BTreeSet;

use rosterdiff_recon::{
    harvest, reconcile, EngineError, FetchStatus, FetchedBody, ReferenceFetcher, RosterEntry,
};

struct StubFetcher {
    body: &'static str,
}

impl ReferenceFetcher for StubFetcher {
    fn fetch(&self, _url: &str) -> Result<FetchedBody, EngineError> {
        Ok(FetchedBody {
            body: self.body.to_string(),
            fetched_at: chrono::Utc::now(),
        })
    }
}

struct FailingFetcher;

impl ReferenceFetcher for FailingFetcher {
    fn fetch(&self, _url: &str) -> Result<FetchedBody, EngineError> {
        Err(EngineError::FetchTimeout)
    }
}

fn entry(id: &str, handle: &str) -> RosterEntry {
    RosterEntry {
        id: id.into(),
        handle: handle.into(),
    }
}

const OWNERS_MD: &str = "\
# Widget maintainers

| Maintainer | GitHub ID | Affiliation |
|---|---|---|
| Alex Hart | alex-h | Acme |
| Bree Okafor | bree | Unaffiliated |

Emeritus:
- zoe-q

Thanks @Mira-L for the docs overhaul.
See https://github.com/organizations/acme for the org page.
";

#[test]
fn fetched_result_partitions_roster() {
    let roster = vec![
        entry("m1", "alex-h"),
        entry("m2", "bree"),
        entry("m3", "carlos-v"),
        entry("m4", ""),
    ];
    let result = reconcile(
        &roster,
        "https://example.com/OWNERS.md",
        &StubFetcher { body: OWNERS_MD },
    );

    assert_eq!(result.status, FetchStatus::Fetched);
    assert!(result.matched_ids.is_disjoint(&result.missing_ids));

    let all: BTreeSet<String> = roster.iter().map(|e| e.id.clone()).collect();
    let union: BTreeSet<String> = result
        .matched_ids
        .union(&result.missing_ids)
        .cloned()
        .collect();
    assert_eq!(union, all);

    assert!(result.matched_ids.contains("m1"));
    assert!(result.matched_ids.contains("m2"));
    assert!(result.missing_ids.contains("m3"));
    assert!(result.missing_ids.contains("m4"));
}

#[test]
fn unfetched_result_has_no_matches() {
    let roster = vec![entry("m1", "alex-h"), entry("m2", "")];

    let timed_out = reconcile(&roster, "https://example.com/OWNERS.md", &FailingFetcher);
    assert_eq!(timed_out.status, FetchStatus::Error);
    assert!(timed_out.matched_ids.is_empty());
    assert_eq!(timed_out.missing_ids.len(), 2);
    assert!(timed_out.ref_only_handles.is_empty());

    let missing = reconcile(&roster, "", &FailingFetcher);
    assert_eq!(missing.status, FetchStatus::Missing);
    assert!(missing.matched_ids.is_empty());
    assert_eq!(missing.missing_ids.len(), 2);
}

#[test]
fn ref_only_handles_sorted_and_exclude_roster() {
    let roster = vec![entry("m1", "ALEX-H")];
    let result = reconcile(
        &roster,
        "https://example.com/OWNERS.md",
        &StubFetcher { body: OWNERS_MD },
    );

    // bree and mira-l and zoe-q are harvested; alex-h is known (case
    // insensitive); "organizations" is reserved and never appears.
    assert_eq!(result.ref_only_handles, vec!["bree", "mira-l", "zoe-q"]);
    assert!(result
        .context_lines
        .keys()
        .all(|h| result.ref_only_handles.contains(h)));
    assert_eq!(
        result.context_lines["bree"],
        "| Bree Okafor | bree | Unaffiliated |"
    );
    assert_eq!(result.context_lines["zoe-q"], "- zoe-q");
}

#[test]
fn reserved_words_never_harvested() {
    let result = harvest("See https://github.com/organizations/acme\n@orgs\n- repos\n");
    assert!(result.is_empty());
}

#[test]
fn golden_table_harvest() {
    let text = "\
| Maintainer | GitHub ID | Affiliation |
|---|---|---|
| Alex Hart | alex-h | Acme |
";
    let result = harvest(text);
    assert_eq!(result.len(), 1);
    assert_eq!(result["alex-h"], "| Alex Hart | alex-h | Acme |");
}

#[test]
fn handle_length_boundary_through_harvest() {
    let ok = "a".repeat(39);
    let text = format!("| GitHub |\n|---|\n| {ok} |\n");
    assert!(harvest(&text).contains_key(&ok));

    let too_long = "a".repeat(40);
    let text = format!("| GitHub |\n|---|\n| {too_long} |\n");
    assert!(harvest(&text).is_empty());
}

#[test]
fn reconcile_is_idempotent() {
    let roster = vec![entry("m1", "alex-h"), entry("m2", "nobody-here")];
    let fetcher = StubFetcher { body: OWNERS_MD };
    let first = reconcile(&roster, "https://example.com/OWNERS.md", &fetcher);
    let second = reconcile(&roster, "https://example.com/OWNERS.md", &fetcher);

    assert_eq!(first.matched_ids, second.matched_ids);
    assert_eq!(first.missing_ids, second.missing_ids);
    assert_eq!(first.ref_only_handles, second.ref_only_handles);
    assert_eq!(first.context_lines, second.context_lines);
}

#[test]
fn empty_document_yields_empty_harvest_and_all_missing() {
    let roster = vec![entry("m1", "alex-h")];
    let result = reconcile(
        &roster,
        "https://example.com/OWNERS.md",
        &StubFetcher { body: "" },
    );
    assert_eq!(result.status, FetchStatus::Fetched);
    assert!(result.matched_ids.is_empty());
    assert!(result.missing_ids.contains("m1"));
    assert!(result.ref_only_handles.is_empty());
}

#[test]
fn result_serializes_for_transport() {
    let result = reconcile(
        &[entry("m1", "alex-h")],
        "https://example.com/OWNERS.md",
        &StubFetcher { body: OWNERS_MD },
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "fetched");
    assert!(json["matched_ids"].is_array());
    assert!(json["ref_only_handles"].is_array());
    assert!(json["context_lines"].is_object());
}
