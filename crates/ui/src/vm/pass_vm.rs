use passport_core::{PassState, Station};

/// Level indicator. Hidden while the user has no level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeVm {
    pub visible: bool,
    pub label: String,
    pub class: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub pct: f64,
    pub label: String,
    pub glyph: &'static str,
}

impl ProgressVm {
    #[must_use]
    pub fn fill_style(&self) -> String {
        format!("width: {}%;", self.pct)
    }

    #[must_use]
    pub fn marker_style(&self) -> String {
        format!("left: {}%;", self.pct)
    }
}

/// One clickable station in the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationBubbleVm {
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    pub icon: String,
}

impl StationBubbleVm {
    fn from_station(station: &Station, unlocked: bool) -> Self {
        Self {
            name: station.name.clone(),
            description: station.description.clone(),
            unlocked,
            icon: station.icon(unlocked).to_string(),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.unlocked {
            "station-container unlocked"
        } else {
            "station-container locked"
        }
    }

    #[must_use]
    pub fn image_style(&self) -> String {
        format!("background-image: url('{}');", self.icon)
    }

    #[must_use]
    pub fn detail(&self) -> StationDetailVm {
        StationDetailVm {
            title: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Content of the station details popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationDetailVm {
    pub title: String,
    pub description: String,
}

/// Everything the passport page shows, derived from a `PassState`.
#[derive(Clone, Debug, PartialEq)]
pub struct PassVm {
    pub title: String,
    pub badge: BadgeVm,
    pub progress: ProgressVm,
    pub stations: Vec<StationBubbleVm>,
}

impl PassVm {
    /// Replaces the parts covered by `patch`, leaving the other bubbles as they are.
    pub fn apply_patch(&mut self, patch: StationPatchVm) {
        if let Some(slot) = self
            .stations
            .iter_mut()
            .find(|bubble| bubble.name == patch.station.name)
        {
            *slot = patch.station;
        }
        self.badge = patch.badge;
        self.progress = patch.progress;
    }
}

/// Incremental update after a single unlock.
#[derive(Clone, Debug, PartialEq)]
pub struct StationPatchVm {
    pub station: StationBubbleVm,
    pub badge: BadgeVm,
    pub progress: ProgressVm,
}

#[must_use]
pub fn render_pass(state: &PassState) -> PassVm {
    PassVm {
        title: format!("Passport for {}", state.user().name),
        badge: render_badge(state),
        progress: render_progress(state),
        stations: render_station_gallery(state),
    }
}

#[must_use]
pub fn render_badge(state: &PassState) -> BadgeVm {
    let level = state.level();
    let class = match level.css_class() {
        Some(tier) => format!("level-badge {tier}"),
        None => "level-badge".to_string(),
    };
    BadgeVm {
        visible: level.is_visible(),
        label: level.label().to_string(),
        class,
    }
}

#[must_use]
pub fn render_progress(state: &PassState) -> ProgressVm {
    ProgressVm {
        pct: state.completion_pct(),
        label: format!(
            "{} of {} stations visited",
            state.stamped_count(),
            state.total_stations()
        ),
        glyph: state.progress_glyph(),
    }
}

/// Bubbles in catalog order.
#[must_use]
pub fn render_station_gallery(state: &PassState) -> Vec<StationBubbleVm> {
    state
        .stations()
        .iter()
        .map(|station| StationBubbleVm::from_station(station, state.is_unlocked(&station.name)))
        .collect()
}

/// Patch for `station_name`, or `None` if the catalog has no such station.
#[must_use]
pub fn render_station_patch(state: &PassState, station_name: &str) -> Option<StationPatchVm> {
    let station = state.station(station_name)?;
    Some(StationPatchVm {
        station: StationBubbleVm::from_station(station, state.is_unlocked(station_name)),
        badge: render_badge(state),
        progress: render_progress(state),
    })
}
