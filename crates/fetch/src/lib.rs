//! Bounded HTTP fetcher for external maintainer files.
//!
//! Blocking reqwest client (no Tokio runtime required). One GET per
//! call: no retries, default redirect handling, 5 s timeout, 1 MiB
//! body cap with excess bytes silently discarded.

use std::io::Read;
use std::time::Duration;

use rosterdiff_recon::{EngineError, FetchedBody, ReferenceFetcher};

/// Default request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default response-size cap: 1 MiB. Bytes past the cap are dropped,
/// which also bounds downstream regex/scan cost.
pub const MAX_BODY_BYTES: u64 = 1 << 20;

const USER_AGENT: &str = concat!("rosterdiff/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP implementation of [`ReferenceFetcher`].
pub struct HttpFetcher {
    http: reqwest::blocking::Client,
    max_body_bytes: u64,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_limits(DEFAULT_TIMEOUT, MAX_BODY_BYTES)
    }

    pub fn with_limits(timeout: Duration, max_body_bytes: u64) -> Result<Self, EngineError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| EngineError::FetchTransport(e.to_string()))?;
        Ok(Self {
            http,
            max_body_bytes,
        })
    }
}

impl ReferenceFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedBody, EngineError> {
        let resp = self.http.get(url).send().map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EngineError::FetchNonSuccessStatus(status.as_u16()));
        }

        // Read at most the cap; an oversized body is truncated, never
        // an error by itself.
        let mut buf = Vec::new();
        resp.take(self.max_body_bytes)
            .read_to_end(&mut buf)
            .map_err(|e| EngineError::FetchTransport(e.to_string()))?;

        Ok(FetchedBody {
            body: String::from_utf8_lossy(&buf).into_owned(),
            fetched_at: chrono::Utc::now(),
        })
    }
}

fn classify(e: reqwest::Error) -> EngineError {
    if e.is_timeout() {
        EngineError::FetchTimeout
    } else {
        EngineError::FetchTransport(e.to_string())
    }
}
