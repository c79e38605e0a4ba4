use crate::handle::normalize_token;

/// Header cell names (case-insensitive) that mark a GitHub column.
const GITHUB_HEADERS: &[&str] = &[
    "github",
    "github id",
    "github username",
    "github handle",
    "github account",
];

/// Split a markdown pipe row into trimmed cells. `None` when the line
/// contains no `|` at all — such lines are not rows.
fn parse_pipe_row(line: &str) -> Option<Vec<String>> {
    if !line.contains('|') {
        return None;
    }
    let inner = line.trim();
    let inner = inner.strip_prefix('|').unwrap_or(inner);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    Some(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}

/// A separator row has only `-` and `:` characters in every non-empty
/// cell (`|---|:---:|` and friends).
fn is_separator_row(cells: &[String]) -> bool {
    cells
        .iter()
        .filter(|cell| !cell.is_empty())
        .all(|cell| cell.chars().all(|c| c == '-' || c == ':'))
}

/// Find the GitHub column in a header row, if any.
fn github_column(header: &[String]) -> Option<usize> {
    header
        .iter()
        .position(|cell| GITHUB_HEADERS.contains(&cell.to_lowercase().as_str()))
}

/// Pass A: markdown table scan.
///
/// Each line is tried as a table header with the following line as the
/// separator. When a table with a GitHub column is found, its data rows
/// are consumed until the first line that is not a pipe row or is
/// itself a separator; the outer scan then resumes past the table so
/// the separator is never reinterpreted as a new header.
pub fn extract_table_handles(lines: &[&str]) -> Vec<(String, String)> {
    let mut found = Vec::new();
    let mut i = 0;

    while i + 1 < lines.len() {
        let header = match parse_pipe_row(lines[i]) {
            Some(cells) => cells,
            None => {
                i += 1;
                continue;
            }
        };
        let separator = match parse_pipe_row(lines[i + 1]) {
            Some(cells) => cells,
            None => {
                i += 1;
                continue;
            }
        };
        if !is_separator_row(&separator) {
            i += 1;
            continue;
        }

        let column = match github_column(&header) {
            Some(c) => c,
            None => {
                // A table, but no usable column. Keep scanning from the
                // separator candidate.
                i += 1;
                continue;
            }
        };

        // Data rows start after the separator.
        let mut j = i + 2;
        while j < lines.len() {
            let cells = match parse_pipe_row(lines[j]) {
                Some(cells) if !is_separator_row(&cells) => cells,
                _ => break,
            };
            if let Some(cell) = cells.get(column) {
                let token = cell.trim_matches('`');
                let token = token.strip_prefix('@').unwrap_or(token);
                if let Some(handle) = normalize_token(token) {
                    found.push((handle, lines[j].trim().to_string()));
                }
            }
            j += 1;
        }

        i = j.max(i + 2);
    }

    found
}
