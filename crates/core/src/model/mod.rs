mod level;
mod snapshot;
mod station;
mod user;
mod wire;

pub use level::LevelTag;
pub use snapshot::{PassSnapshot, UnlockResult};
pub use station::{StampedSet, Station};
pub use user::User;
pub use wire::null_as_default;
