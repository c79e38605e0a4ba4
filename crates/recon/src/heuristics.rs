use regex::Regex;

use crate::handle::normalize_token;

/// Pass B: `@handle` mentions. The `@` must not be preceded by an
/// identifier character, so emails (`alex@acme.io`) don't fire. A name
/// character after the capture means the token ran past 39 chars; such
/// tokens are dropped whole rather than truncated.
pub fn extract_at_mentions(lines: &[&str]) -> Vec<(String, String)> {
    let re = Regex::new(r"(?:^|[^A-Za-z0-9_-])@([A-Za-z0-9-]{1,39})([A-Za-z0-9-]?)").unwrap();
    let mut found = Vec::new();
    for line in lines {
        for caps in re.captures_iter(line) {
            if !caps[2].is_empty() {
                continue;
            }
            if let Some(handle) = normalize_token(&caps[1]) {
                found.push((handle, line.trim().to_string()));
            }
        }
    }
    found
}

/// Pass B: `github.com/<user>` mentions. A trailing `/` means the
/// segment is part of a deeper repo path, not a user/org page; a
/// trailing name character means an over-long segment.
pub fn extract_url_mentions(lines: &[&str]) -> Vec<(String, String)> {
    let re = Regex::new(r"github\.com/([A-Za-z0-9-]{1,39})([A-Za-z0-9-/]?)").unwrap();
    let mut found = Vec::new();
    for line in lines {
        for caps in re.captures_iter(line) {
            if !caps[2].is_empty() {
                continue;
            }
            if let Some(handle) = normalize_token(&caps[1]) {
                found.push((handle, line.trim().to_string()));
            }
        }
    }
    found
}

/// Pass B: bare list items (`- handle` / `* handle`).
pub fn extract_list_items(lines: &[&str]) -> Vec<(String, String)> {
    let re = Regex::new(r"^[-*]\s*([A-Za-z0-9-]{1,39})\b").unwrap();
    let mut found = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if let Some(caps) = re.captures(trimmed) {
            if let Some(handle) = normalize_token(&caps[1]) {
                found.push((handle, trimmed.to_string()));
            }
        }
    }
    found
}

/// Pass B: `github: handle` key-value lines.
pub fn extract_key_values(lines: &[&str]) -> Vec<(String, String)> {
    let re = Regex::new(r"(?i)github\s*:\s*([A-Za-z0-9-]{1,39})\b").unwrap();
    let mut found = Vec::new();
    for line in lines {
        if let Some(caps) = re.captures(line) {
            if let Some(handle) = normalize_token(&caps[1]) {
                found.push((handle, line.trim().to_string()));
            }
        }
    }
    found
}
