use url::Url;

use crate::error::EngineError;

/// Rewrite a GitHub "blob" URL into its raw-content equivalent.
///
/// `https://github.com/org/repo/blob/branch/path...` becomes
/// `https://raw.githubusercontent.com/org/repo/branch/path...`. Every
/// other http(s) URL — already-raw URLs, non-blob GitHub URLs, third
/// party hosts — passes through byte-for-byte unchanged. Non-http(s)
/// schemes and unparseable URLs are rejected.
pub fn normalize_reference_url(raw: &str) -> Result<String, EngineError> {
    let parsed =
        Url::parse(raw).map_err(|e| EngineError::InvalidUrl(format!("{raw}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(EngineError::InvalidUrl(format!(
                "unsupported scheme '{other}' in {raw}"
            )));
        }
    }

    let is_github = parsed
        .host_str()
        .map(|h| h.eq_ignore_ascii_case("github.com"))
        .unwrap_or(false);
    if !is_github {
        return Ok(raw.to_string());
    }

    let segments: Vec<&str> = match parsed.path_segments() {
        Some(s) => s.collect(),
        None => return Ok(raw.to_string()),
    };
    // Pattern: /org/repo/blob/branch/path...
    if segments.len() < 5 || segments[2] != "blob" {
        return Ok(raw.to_string());
    }

    let mut rewritten = parsed.clone();
    rewritten
        .set_host(Some("raw.githubusercontent.com"))
        .map_err(|e| EngineError::InvalidUrl(format!("{raw}: {e}")))?;

    let mut path = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i == 2 {
            continue; // drop the "blob" segment
        }
        path.push('/');
        path.push_str(segment);
    }
    rewritten.set_path(&path);

    Ok(rewritten.to_string())
}
