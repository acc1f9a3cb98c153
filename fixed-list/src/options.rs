use crate::OptionsError;

/// Items rendered beyond each edge of the viewport unless configured otherwise.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Quiet period after the last scroll event before `is_scrolling` resets.
pub const DEFAULT_SCROLLING_DELAY_MS: u64 = 150;

/// Geometry and behavior of a uniform-height list.
///
/// Options are plain data and cheap to copy: adapters typically keep one value around, tweak a
/// field (e.g. `count` after the data set changes) and recompute the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListOptions {
    /// Total number of items in the list.
    pub count: usize,

    /// Height of every item in the scroll axis.
    pub item_height: u32,

    /// Height of the scrollable viewport (aka `listHeight`).
    pub viewport_height: u32,

    /// Extra items rendered above and below the visible range.
    pub overscan: usize,

    /// Debounce duration for resetting `is_scrolling` after the last scroll event.
    pub scrolling_delay_ms: u64,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            count: 0,
            item_height: 1,
            viewport_height: 0,
            overscan: DEFAULT_OVERSCAN,
            scrolling_delay_ms: DEFAULT_SCROLLING_DELAY_MS,
        }
    }
}

impl ListOptions {
    /// Creates options with the default overscan and scrolling delay.
    pub fn new(count: usize, item_height: u32, viewport_height: u32) -> Self {
        Self {
            count,
            item_height,
            viewport_height,
            ..Self::default()
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_scrolling_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scrolling_delay_ms = delay_ms;
        self
    }

    /// Checks that the geometry is usable.
    ///
    /// The window computation itself never fails; with a zero item height it simply yields an
    /// empty window. Call this at configuration boundaries to surface the mistake early.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.item_height == 0 {
            return Err(OptionsError::ZeroItemHeight);
        }
        if self.viewport_height == 0 {
            return Err(OptionsError::ZeroViewportHeight);
        }
        Ok(())
    }
}
