use crate::model::level::LevelTag;

/// The passport holder.
///
/// `level` mirrors the backend on load and is only rewritten locally as a
/// side effect of `PassState::apply_unlock`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub level: LevelTag,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, level: LevelTag) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            level,
        }
    }
}
