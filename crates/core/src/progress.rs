//! Pure derivations from the stamped count.
//!
//! Everything the UI shows about progress is computed here, so every caller
//! agrees on the same numbers.

use crate::model::LevelTag;

const FUTURE_EXPLORER_PCT: f64 = 80.0;
const ADVANCED_EXPLORER_PCT: f64 = 40.0;

/// Percentage of stations unlocked, in `[0, 100]`.
///
/// Defined as 0 when there are no stations.
#[must_use]
pub fn completion_pct(stamped: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let stamped = stamped.min(total);
    stamped as f64 * 100.0 / total as f64
}

/// Maps a completion percentage to a badge tier.
///
/// Thresholds are inclusive of the higher tier.
#[must_use]
pub fn derive_level(pct: f64) -> LevelTag {
    if pct >= FUTURE_EXPLORER_PCT {
        LevelTag::FutureExplorer
    } else if pct >= ADVANCED_EXPLORER_PCT {
        LevelTag::AdvancedExplorer
    } else if pct > 0.0 {
        LevelTag::Explorer
    } else {
        LevelTag::NoLevel
    }
}

/// Marker glyph for the progress bar, based on the raw stamped count.
#[must_use]
pub fn progress_glyph(stamped: usize) -> &'static str {
    match stamped {
        0 => "",
        1..=2 => "⭐",
        3..=4 => "🔥",
        _ => "🚀",
    }
}
