use folio_domain::constants::{CARD_STAGGER, REVEAL_THRESHOLD};
use std::time::Duration;

/// Base transition applied to every revealing element.
pub const TRANSITION: &str = "transition-all duration-700";

/// One-shot visibility latch for a single element.
///
/// Fed with intersection ratios, it turns `revealed` on the first time the
/// ratio reaches the threshold and ignores everything after that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTracker {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    /// `threshold` is clamped to `[0, 1]`; zero means any overlap at all.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { REVEAL_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        Self { threshold, revealed: false }
    }

    /// A tracker that starts out revealed and therefore never observes.
    #[must_use]
    pub fn revealed(threshold: f64) -> Self {
        Self { revealed: true, ..Self::new(threshold) }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Once revealed the tracker no longer needs observations.
    #[must_use]
    pub const fn is_disconnected(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection ratio. Returns `true` only for the observation
    /// that flipped the tracker.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.revealed || ratio.is_nan() {
            return false;
        }
        let hit = if self.threshold <= 0.0 { ratio > 0.0 } else { ratio >= self.threshold };
        if hit {
            self.revealed = true;
        }
        hit
    }
}

/// Visible fraction of an element spanning `[top, top + height)` inside a
/// viewport of `viewport_height`, in `[0, 1]`.
#[must_use]
pub fn intersection_ratio(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height.is_nan() || viewport_height.is_nan() || height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Where an element comes from while it is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// Small lift used by the hero on mount.
    Rise,
    Up,
    FromLeft,
    FromRight,
}

impl Slide {
    #[must_use]
    pub const fn hidden(self) -> &'static str {
        match self {
            Self::Rise => "opacity-0 translate-y-4",
            Self::Up => "opacity-0 translate-y-8",
            Self::FromLeft => "opacity-0 -translate-x-8",
            Self::FromRight => "opacity-0 translate-x-8",
        }
    }

    #[must_use]
    pub const fn shown(self) -> &'static str {
        match self {
            Self::Rise | Self::Up => "opacity-100 translate-y-0",
            Self::FromLeft | Self::FromRight => "opacity-100 translate-x-0",
        }
    }

    #[must_use]
    pub const fn state(self, revealed: bool) -> &'static str {
        if revealed { self.shown() } else { self.hidden() }
    }
}

/// Cascade delay for the `index`-th card; nothing is delayed while hidden.
#[must_use]
pub fn stagger_delay(index: usize, revealed: bool) -> Duration {
    if revealed {
        CARD_STAGGER.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn flips_once_at_threshold() {
        let mut tracker = RevealTracker::new(0.1);
        assert!(!tracker.observe(0.05));
        assert!(tracker.observe(0.1));
        assert!(tracker.is_disconnected());
        assert!(!tracker.observe(1.0));
        assert!(!tracker.observe(0.0));
        assert!(tracker.is_revealed());
    }

    #[test]
    fn zero_threshold_needs_some_overlap() {
        let mut tracker = RevealTracker::new(0.0);
        assert!(!tracker.observe(0.0));
        assert!(tracker.observe(0.001));
    }

    #[test]
    fn pre_revealed_tracker_ignores_input() {
        let mut tracker = RevealTracker::revealed(0.5);
        assert!(tracker.is_revealed());
        assert!(!tracker.observe(1.0));
    }

    #[test]
    fn ratio_cases() {
        assert!((intersection_ratio(0.0, 100.0, 800.0) - 1.0).abs() < f64::EPSILON);
        assert!((intersection_ratio(750.0, 100.0, 800.0) - 0.5).abs() < f64::EPSILON);
        assert!((intersection_ratio(-50.0, 100.0, 800.0) - 0.5).abs() < f64::EPSILON);
        assert!(intersection_ratio(900.0, 100.0, 800.0).abs() < f64::EPSILON);
        assert!(intersection_ratio(-200.0, 100.0, 800.0).abs() < f64::EPSILON);
        assert!(intersection_ratio(0.0, 0.0, 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stagger_is_index_times_hundred_ms() {
        assert_eq!(stagger_delay(0, true), Duration::ZERO);
        assert_eq!(stagger_delay(3, true), Duration::from_millis(300));
        assert_eq!(stagger_delay(3, false), Duration::ZERO);
    }

    #[test]
    fn slide_classes() {
        assert_eq!(Slide::FromLeft.state(false), "opacity-0 -translate-x-8");
        assert_eq!(Slide::FromLeft.state(true), "opacity-100 translate-x-0");
        assert_eq!(Slide::Up.state(true), "opacity-100 translate-y-0");
    }

    proptest! {
        #[test]
        fn ratio_is_a_fraction(
            top in -5000.0f64..5000.0,
            height in 0.0f64..5000.0,
            viewport in 0.0f64..3000.0,
        ) {
            let ratio = intersection_ratio(top, height, viewport);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }

        #[test]
        fn revealed_never_reverts(ratios in proptest::collection::vec(0.0f64..=1.0, 0..64)) {
            let mut tracker = RevealTracker::default();
            let mut seen = false;
            let mut flips = 0;
            for ratio in ratios {
                if tracker.observe(ratio) {
                    flips += 1;
                }
                prop_assert!(!seen || tracker.is_revealed());
                seen = tracker.is_revealed();
            }
            prop_assert!(flips <= 1);
        }
    }
}
