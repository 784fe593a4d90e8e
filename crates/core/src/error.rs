use thiserror::Error;

/// Data-integrity problems found in a fetched snapshot.
///
/// `PassState::init` never fails on these; it drops the offending entry and
/// records the problem so rendering can continue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("stamped entry references unknown station `{name}`")]
    UnknownStation { name: String },

    #[error("station `{name}` appears more than once in the catalog")]
    DuplicateStation { name: String },
}
