#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod progress;
pub mod state;

pub use error::SnapshotError;
pub use model::{
    LevelTag, PassSnapshot, StampedSet, Station, UnlockResult, User, null_as_default,
};
pub use progress::{completion_pct, derive_level, progress_glyph};
pub use state::{PassState, UnlockApplied, validate_snapshot};
