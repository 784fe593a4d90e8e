//
// ─── LEVEL TAG ────────────────────────────────────────────────────────────────
//

/// Badge tier derived from completion percentage.
///
/// Ordered from lowest to highest so comparisons follow tier rank:
/// - `NoLevel`: nothing unlocked yet, badge hidden
/// - `Explorer`: some progress, below 40%
/// - `AdvancedExplorer`: 40% up to (excluding) 80%
/// - `FutureExplorer`: 80% and above
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelTag {
    #[default]
    NoLevel,
    Explorer,
    AdvancedExplorer,
    FutureExplorer,
}

impl LevelTag {
    /// Parses a backend-supplied level label.
    ///
    /// The backend sends free-form labels ("KI Future Explorer", ...), so the
    /// tier is picked by keyword, most specific first. Empty or unrecognised
    /// labels map to `NoLevel`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.contains("Future") {
            Self::FutureExplorer
        } else if label.contains("Advanced") {
            Self::AdvancedExplorer
        } else if label.contains("Explorer") {
            Self::Explorer
        } else {
            Self::NoLevel
        }
    }

    /// Human-readable badge text. Empty for `NoLevel`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NoLevel => "",
            Self::Explorer => "Explorer",
            Self::AdvancedExplorer => "Advanced Explorer",
            Self::FutureExplorer => "Future Explorer",
        }
    }

    /// Style hook for the badge element.
    #[must_use]
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::NoLevel => None,
            Self::Explorer => Some("explorer"),
            Self::AdvancedExplorer => Some("advanced"),
            Self::FutureExplorer => Some("future"),
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self != Self::NoLevel
    }
}
