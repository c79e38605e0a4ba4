//! Roster CSV loading (`id,handle` columns, header row required).

use std::path::Path;

use rosterdiff_recon::RosterEntry;

use crate::exit_codes::EXIT_USAGE;
use crate::CliError;

/// Parse roster CSV data. The header must name an `id` and a `handle`
/// column (any order, extra columns ignored). Handles may be empty —
/// such entries are carried through and reported as missing.
pub fn parse_roster_csv(data: &str) -> Result<Vec<RosterEntry>, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| roster_err(format!("cannot read roster header: {e}")))?
        .clone();

    let idx = |name: &str| -> Result<usize, CliError> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| roster_err(format!("roster is missing a '{name}' column")))
    };
    let id_idx = idx("id")?;
    let handle_idx = idx("handle")?;

    let mut entries = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| roster_err(format!("roster row {}: {e}", row + 2)))?;
        let id = record.get(id_idx).unwrap_or("").to_string();
        if id.is_empty() {
            return Err(roster_err(format!("roster row {}: empty id", row + 2)));
        }
        entries.push(RosterEntry {
            id,
            handle: record.get(handle_idx).unwrap_or("").to_string(),
        });
    }
    Ok(entries)
}

/// Read and parse a roster CSV file.
pub fn load_roster_file(path: &Path) -> Result<Vec<RosterEntry>, CliError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| roster_err(format!("cannot read {}: {e}", path.display())))?;
    parse_roster_csv(&data)
}

fn roster_err(message: String) -> CliError {
    CliError {
        code: EXIT_USAGE,
        message,
        hint: Some("expected a CSV with 'id' and 'handle' columns".into()),
    }
}
