use std::fmt;

/// Engine-level failures. All fetch-related kinds collapse to a
/// three-valued status at the differ boundary; callers that want the
/// cause must log it before diffing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bad scheme or unparseable URL during normalization.
    InvalidUrl(String),
    /// The fetch exceeded its deadline.
    FetchTimeout,
    /// Connection, DNS, or TLS failure.
    FetchTransport(String),
    /// The server answered with a non-2xx status.
    FetchNonSuccessStatus(u16),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(msg) => write!(f, "invalid reference URL: {msg}"),
            Self::FetchTimeout => write!(f, "fetch timed out"),
            Self::FetchTransport(msg) => write!(f, "fetch transport error: {msg}"),
            Self::FetchNonSuccessStatus(code) => write!(f, "fetch returned HTTP {code}"),
        }
    }
}

impl std::error::Error for EngineError {}
