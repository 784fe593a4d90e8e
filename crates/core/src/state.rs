use std::collections::HashSet;

use tracing::warn;

use crate::error::SnapshotError;
use crate::model::{LevelTag, PassSnapshot, StampedSet, Station, UnlockResult, User};
use crate::progress;

//
// ─── UNLOCK OUTCOME ───────────────────────────────────────────────────────────
//

/// What `PassState::apply_unlock` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockApplied {
    /// The station moved from locked to unlocked; level was recomputed.
    Stamped,
    /// The station was already unlocked. Nothing changed.
    AlreadyStamped,
    /// The result was not a success, or named no station. Nothing changed.
    NotConfirmed,
    /// The result named a station outside the catalog. Nothing changed.
    UnknownStation,
}

impl UnlockApplied {
    #[must_use]
    pub fn changed_state(self) -> bool {
        matches!(self, Self::Stamped)
    }
}

//
// ─── PASS STATE ───────────────────────────────────────────────────────────────
//

/// The single in-memory model for a passport session.
///
/// Built once from a fetched snapshot. `apply_unlock` is the only writer of
/// the stamped set and the user's level, so `stamped ⊆ station names` holds
/// for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassState {
    user: User,
    stations: Vec<Station>,
    stamped: StampedSet,
    snapshot_issues: Vec<SnapshotError>,
}

impl PassState {
    /// Builds the session state from a fetched snapshot.
    ///
    /// Integrity problems (duplicate catalog names, stamped names without a
    /// station) are logged and the offending entries dropped. They remain
    /// available through [`PassState::snapshot_issues`].
    #[must_use]
    pub fn init(snapshot: PassSnapshot) -> Self {
        let PassSnapshot {
            user,
            stations: raw_stations,
            stamped: raw_stamped,
        } = snapshot;

        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        let mut stations = Vec::with_capacity(raw_stations.len());
        for station in raw_stations {
            if seen.insert(station.name.clone()) {
                stations.push(station);
            } else {
                warn!(station = %station.name, "dropping duplicate station from catalog");
                issues.push(SnapshotError::DuplicateStation { name: station.name });
            }
        }

        let mut stamped = StampedSet::new();
        for name in raw_stamped.iter() {
            if seen.contains(name) {
                stamped.insert(name);
            } else {
                warn!(station = %name, "dropping stamped entry for unknown station");
                issues.push(SnapshotError::UnknownStation {
                    name: name.to_owned(),
                });
            }
        }

        Self {
            user,
            stations,
            stamped,
            snapshot_issues: issues,
        }
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Catalog in display order.
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    #[must_use]
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.iter().find(|station| station.name == name)
    }

    #[must_use]
    pub fn stamped(&self) -> &StampedSet {
        &self.stamped
    }

    /// Entries dropped while building this state.
    #[must_use]
    pub fn snapshot_issues(&self) -> &[SnapshotError] {
        &self.snapshot_issues
    }

    #[must_use]
    pub fn is_unlocked(&self, station_name: &str) -> bool {
        self.stamped.contains(station_name)
    }

    #[must_use]
    pub fn stamped_count(&self) -> usize {
        self.stamped.len()
    }

    #[must_use]
    pub fn total_stations(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn completion_pct(&self) -> f64 {
        progress::completion_pct(self.stamped_count(), self.total_stations())
    }

    #[must_use]
    pub fn level(&self) -> LevelTag {
        self.user.level
    }

    #[must_use]
    pub fn progress_glyph(&self) -> &'static str {
        progress::progress_glyph(self.stamped_count())
    }

    /// Applies a server-confirmed unlock.
    ///
    /// Only successful results naming a known, still-locked station change
    /// anything. Repeated confirmations for the same station are no-ops.
    pub fn apply_unlock(&mut self, result: &UnlockResult) -> UnlockApplied {
        if !result.success {
            return UnlockApplied::NotConfirmed;
        }
        let Some(name) = result.unlocked_station.as_deref() else {
            return UnlockApplied::NotConfirmed;
        };
        if self.station(name).is_none() {
            warn!(station = %name, "ignoring unlock for unknown station");
            return UnlockApplied::UnknownStation;
        }
        if !self.stamped.insert(name) {
            return UnlockApplied::AlreadyStamped;
        }

        self.user.level = progress::derive_level(self.completion_pct());
        UnlockApplied::Stamped
    }
}

/// Checks a snapshot without repairing it.
///
/// # Errors
///
/// Returns the first `SnapshotError` found, in catalog order then stamped
/// order.
pub fn validate_snapshot(snapshot: &PassSnapshot) -> Result<(), SnapshotError> {
    let mut names = HashSet::new();
    for station in &snapshot.stations {
        if !names.insert(station.name.as_str()) {
            return Err(SnapshotError::DuplicateStation {
                name: station.name.clone(),
            });
        }
    }
    if let Some(name) = snapshot.stamped.iter().find(|name| !names.contains(name)) {
        return Err(SnapshotError::UnknownStation {
            name: name.to_owned(),
        });
    }
    Ok(())
}
