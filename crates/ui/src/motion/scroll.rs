use folio_domain::constants::{BACK_TO_TOP_OFFSET, NAV_SOLID_OFFSET};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
}

/// Window scroll state as published to the page chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSnapshot {
    /// Vertical scroll offset in px.
    pub offset: f64,
    /// Full document height.
    pub scroll_height: f64,
    /// Viewport height.
    pub client_height: f64,
    pub direction: ScrollDirection,
}

impl ScrollSnapshot {
    /// How far through the scrollable height the viewport is, in `[0, 100]`.
    /// A page that does not scroll reports 0.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let scrollable = self.scroll_height - self.client_height;
        if scrollable.is_nan() || scrollable <= 0.0 || self.offset.is_nan() {
            return 0.0;
        }
        (self.offset / scrollable * 100.0).clamp(0.0, 100.0)
    }

    #[must_use]
    pub fn nav_is_solid(&self) -> bool {
        self.offset > NAV_SOLID_OFFSET
    }

    #[must_use]
    pub fn show_back_to_top(&self) -> bool {
        self.offset > BACK_TO_TOP_OFFSET
    }
}

/// Turns raw scroll readings into snapshots, remembering the last offset to
/// tell the direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn observe(&mut self, offset: f64, scroll_height: f64, client_height: f64) -> ScrollSnapshot {
        let direction =
            if offset > self.last_offset { ScrollDirection::Down } else { ScrollDirection::Up };
        self.last_offset = offset;
        ScrollSnapshot { offset, scroll_height, client_height, direction }
    }
}
