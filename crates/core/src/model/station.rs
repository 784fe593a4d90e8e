use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::wire::null_as_default;

//
// ─── STATION ──────────────────────────────────────────────────────────────────
//

/// A named unit of content with a locked and an unlocked icon.
///
/// Stations are supplied once at load and never change during a session.
/// The name is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_locked: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_unlocked: String,
}

impl Station {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        icon_locked: impl Into<String>,
        icon_unlocked: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon_locked: icon_locked.into(),
            icon_unlocked: icon_unlocked.into(),
        }
    }

    /// Icon matching the given lock state.
    #[must_use]
    pub fn icon(&self, unlocked: bool) -> &str {
        if unlocked {
            &self.icon_unlocked
        } else {
            &self.icon_locked
        }
    }
}

//
// ─── STAMPED SET ──────────────────────────────────────────────────────────────
//

/// Names of the stations a user has unlocked.
///
/// Insertion is idempotent. Membership against the catalog is enforced by
/// `PassState`, the only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StampedSet {
    names: BTreeSet<String>,
}

impl StampedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the name was not present before.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for StampedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
