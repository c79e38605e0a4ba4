/// Maximum GitHub username length.
pub const MAX_HANDLE_LEN: usize = 39;

/// Path segments on github.com that look like usernames but never are.
const RESERVED_WORDS: &[&str] = &["organizations", "orgs", "repos"];

/// Lowercase and validate a captured token. Returns the normalized
/// handle, or `None` when the token can never be a GitHub username.
pub fn normalize_token(token: &str) -> Option<String> {
    let handle = token.to_lowercase();
    if handle.is_empty() || handle.len() > MAX_HANDLE_LEN {
        return None;
    }
    if !handle
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return None;
    }
    if RESERVED_WORDS.contains(&handle.as_str()) {
        return None;
    }
    // The charset above already excludes '_'; guard the first char anyway.
    if handle.starts_with('_') {
        return None;
    }
    Some(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_handle_lowercased() {
        assert_eq!(normalize_token("Alice-Example"), Some("alice-example".into()));
        assert_eq!(normalize_token("bob42"), Some("bob42".into()));
        assert_eq!(normalize_token("a"), Some("a".into()));
    }

    #[test]
    fn length_boundary() {
        let ok = "a".repeat(39);
        assert_eq!(normalize_token(&ok), Some(ok.clone()));
        let too_long = "a".repeat(40);
        assert_eq!(normalize_token(&too_long), None);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(normalize_token(""), None);
    }

    #[test]
    fn bad_charset_rejected() {
        assert_eq!(normalize_token("alice.example"), None);
        assert_eq!(normalize_token("alice_example"), None);
        assert_eq!(normalize_token("alice example"), None);
        assert_eq!(normalize_token("ålice"), None);
    }

    #[test]
    fn reserved_words_rejected() {
        assert_eq!(normalize_token("organizations"), None);
        assert_eq!(normalize_token("Orgs"), None);
        assert_eq!(normalize_token("repos"), None);
    }
}
