//! `rosterdiff-recon` — maintainer roster reconciliation engine.
//!
//! Pure engine crate: resolves a reference-file URL to its raw content
//! location, harvests candidate GitHub handles from the fetched text,
//! and diffs them against an internally-known roster. Network access
//! lives behind the [`ReferenceFetcher`] trait, so everything here is
//! testable with synthetic documents.

pub mod contains;
pub mod differ;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod handle;
pub mod harvest;
pub mod heuristics;
pub mod model;
pub mod normalize;
pub mod table;

pub use contains::contains_handle;
pub use differ::diff;
pub use engine::{reconcile, resolve_document};
pub use error::EngineError;
pub use fetch::{FetchedBody, ReferenceFetcher};
pub use harvest::harvest;
pub use model::{
    DocumentStatus, FetchStatus, HarvestResult, ReconciliationResult, ReferenceDocument,
    RosterEntry,
};
pub use normalize::normalize_reference_url;
