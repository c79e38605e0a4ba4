use chrono::{DateTime, Utc};

use crate::error::EngineError;

/// A successfully fetched reference body.
#[derive(Debug, Clone)]
pub struct FetchedBody {
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

/// Bounded retrieval of a reference document.
///
/// Implementations enforce their own timeout and size cap; excess
/// bytes are discarded, not an error. The engine treats any `Err` as a
/// degraded `Error` status, never as a failure of the reconciliation
/// call itself.
pub trait ReferenceFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedBody, EngineError>;
}
