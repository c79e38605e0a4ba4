use crate::heuristics::{
    extract_at_mentions, extract_key_values, extract_list_items, extract_url_mentions,
};
use crate::model::HarvestResult;
use crate::table::extract_table_handles;

type Extractor = fn(&[&str]) -> Vec<(String, String)>;

/// Fixed strategy order. The table scan runs to completion before any
/// line heuristic, so a structured table cell always owns a handle's
/// context line; within a strategy, earlier lines win.
const STRATEGIES: &[Extractor] = &[
    extract_table_handles,
    extract_at_mentions,
    extract_url_mentions,
    extract_list_items,
    extract_key_values,
];

/// Scan raw text with every strategy and return a deduplicated
/// handle → first-context-line map. Malformed or oversized tokens are
/// dropped, never reported — harvesting is lossy by design.
pub fn harvest(text: &str) -> HarvestResult {
    let lines: Vec<&str> = text.lines().collect();
    let mut result = HarvestResult::new();
    for extract in STRATEGIES {
        for (handle, line) in extract(&lines) {
            result.entry(handle).or_insert(line);
        }
    }
    result
}
