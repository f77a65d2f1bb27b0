//! Navigation bar appearance derived from the scroll offset.

use serde::Serialize;

/// Visual mode of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavMode {
    /// Blends into the page; used at the very top
    #[default]
    Transparent,
    /// Solid background with a bottom border
    Elevated,
}

impl NavMode {
    /// Lowercase name, as used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::Elevated => "elevated",
        }
    }
}

/// Threshold filter with a hysteresis band.
///
/// The target mode is `Elevated` above `threshold` and `Transparent` at or
/// below it. The emitted mode only changes when the target differs and the
/// offset has moved more than `hysteresis` away from the offset of the last
/// change.
#[derive(Debug, Clone, PartialEq)]
pub struct NavModeFilter {
    threshold: f64,
    hysteresis: f64,
    mode: NavMode,
    anchor: f64,
}

impl NavModeFilter {
    /// Starts transparent, anchored at offset zero.
    pub const fn new(threshold: f64, hysteresis: f64) -> Self {
        Self {
            threshold,
            hysteresis,
            mode: NavMode::Transparent,
            anchor: 0.0,
        }
    }

    /// Currently emitted mode.
    pub const fn mode(&self) -> NavMode {
        self.mode
    }

    /// Feeds one sample and returns the emitted mode.
    pub fn update(&mut self, offset: f64) -> NavMode {
        let target = if offset > self.threshold {
            NavMode::Elevated
        } else {
            NavMode::Transparent
        };

        if target != self.mode && (offset - self.anchor).abs() > self.hysteresis {
            tracing::trace!(
                from = self.mode.as_str(),
                to = target.as_str(),
                offset,
                "nav mode flip"
            );
            self.mode = target;
            self.anchor = offset;
        }

        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(samples: &[f64]) -> Vec<NavMode> {
        let mut filter = NavModeFilter::new(10.0, 5.0);
        samples.iter().map(|&y| filter.update(y)).collect()
    }

    #[test]
    fn test_no_flicker_inside_band() {
        use NavMode::{Elevated as E, Transparent as T};
        assert_eq!(run(&[0.0, 8.0, 12.0, 9.0]), vec![T, T, E, E]);
    }

    #[test]
    fn test_returns_to_transparent_after_leaving_band() {
        use NavMode::{Elevated as E, Transparent as T};
        assert_eq!(run(&[0.0, 40.0, 9.0, 0.0]), vec![T, E, T, T]);
    }

    #[test]
    fn test_small_jitter_near_top_stays_transparent() {
        assert!(run(&[3.0, 7.0, 10.0, 2.0])
            .iter()
            .all(|m| *m == NavMode::Transparent));
    }

    #[test]
    fn test_crossing_threshold_close_to_anchor_waits() {
        use NavMode::{Elevated as E, Transparent as T};
        // Flip back to transparent at 8 moves the anchor there; 12 is
        // only 4 away so the bar stays transparent until 14.
        assert_eq!(run(&[30.0, 8.0, 12.0, 14.0]), vec![E, T, T, E]);
    }
}
