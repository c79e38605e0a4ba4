use regex::Regex;

/// Lenient single-handle presence check against the full raw text.
///
/// Case-insensitive; requires a non-identifier character (or text
/// start) before the handle, allows one `@` directly in front, and
/// requires a non-identifier character (or text end) after. No
/// markdown structure is required — a maintainer mentioned only in
/// prose still counts as present, which is deliberately looser than
/// the harvester.
pub fn contains_handle(text: &str, handle: &str) -> bool {
    if handle.is_empty() {
        return false;
    }
    let pattern = format!(
        r"(?i)(?:^|[^A-Za-z0-9_-])@?{}(?:[^A-Za-z0-9_-]|$)",
        regex::escape(handle)
    );
    // The escaped pattern always compiles; fall back to "absent" if not.
    Regex::new(&pattern)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_mention() {
        assert!(contains_handle(
            "Thanks @Alice-Example for reviewing",
            "alice-example"
        ));
    }

    #[test]
    fn plain_prose_counts() {
        assert!(contains_handle("alex-h owns the release process.", "alex-h"));
    }

    #[test]
    fn start_and_end_of_text() {
        assert!(contains_handle("alex-h", "alex-h"));
        assert!(contains_handle("ping alex-h", "alex-h"));
        assert!(contains_handle("alex-h ping", "alex-h"));
    }

    #[test]
    fn substring_does_not_count() {
        assert!(!contains_handle("xalex-h", "alex-h"));
        assert!(!contains_handle("alex-hart", "alex-h"));
        assert!(!contains_handle("alex_h-extra", "alex-h"));
    }

    #[test]
    fn at_prefix_allowed() {
        assert!(contains_handle("(@alex-h)", "alex-h"));
        assert!(contains_handle("@alex-h", "alex-h"));
    }

    #[test]
    fn empty_handle_never_contained() {
        assert!(!contains_handle("anything", ""));
    }

    #[test]
    fn table_cell_counts() {
        assert!(contains_handle("| Alex Hart | alex-h | Acme |", "alex-h"));
    }
}
