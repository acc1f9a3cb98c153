use core::cmp;

use crate::{DEFAULT_SCROLLING_DELAY_MS, ScrollDirection, ScrollState};

/// Tracks a surface's scroll offset and a debounced `is_scrolling` flag.
///
/// The tracker owns a single countdown. Every scroll event sets `is_scrolling` and re-arms the
/// countdown to `now_ms + scrolling_delay_ms`; the flag only resets once [`Self::update_scrolling`]
/// observes a time at or past that deadline. The caller supplies time, so the tracker stays
/// deterministic and never touches a real clock.
///
/// Every mutating method returns `true` when the observable state changed, which lets adapters
/// skip recomputation and notifications on no-op events.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    offset: i64,
    is_scrolling: bool,
    direction: Option<ScrollDirection>,
    scrolling_delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLING_DELAY_MS)
    }
}

impl ScrollTracker {
    pub fn new(scrolling_delay_ms: u64) -> Self {
        Self {
            offset: 0,
            is_scrolling: false,
            direction: None,
            scrolling_delay_ms,
            deadline_ms: None,
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn scrolling_delay_ms(&self) -> u64 {
        self.scrolling_delay_ms
    }

    /// Changes the debounce duration. An already armed deadline keeps its original expiry.
    pub fn set_scrolling_delay_ms(&mut self, delay_ms: u64) {
        self.scrolling_delay_ms = delay_ms;
    }

    /// The time at which `is_scrolling` will reset, if a countdown is armed.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Publishes an offset without marking the surface as scrolling.
    ///
    /// Used when (re)attaching to a surface so the first window matches its current position.
    pub fn set_offset(&mut self, offset: i64) -> bool {
        if self.offset == offset {
            return false;
        }
        let prev = self.offset;
        self.offset = offset;
        self.direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.direction,
        };
        true
    }

    /// Applies a scroll notification observed at `now_ms`.
    pub fn on_scroll_event(&mut self, offset: i64, now_ms: u64) -> bool {
        vtrace!(offset, now_ms, "ScrollTracker::on_scroll_event");
        let moved = self.set_offset(offset);
        let started = !self.is_scrolling;
        self.is_scrolling = true;
        self.deadline_ms = Some(now_ms.saturating_add(self.scrolling_delay_ms));
        moved || started
    }

    /// Delivers timer expiry: resets `is_scrolling` once the deadline has passed.
    pub fn update_scrolling(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.deadline_ms else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        vtrace!(now_ms, deadline, "ScrollTracker: scrolling settled");
        self.settle()
    }

    /// Disarms the countdown and clears `is_scrolling`. Idempotent.
    pub fn cancel(&mut self) -> bool {
        if self.deadline_ms.is_none() && !self.is_scrolling {
            return false;
        }
        self.settle()
    }

    /// Cancels the countdown and forgets the offset, as if no surface had ever been observed.
    pub fn reset(&mut self) -> bool {
        vdebug!(offset = self.offset, "ScrollTracker::reset");
        let changed = self.cancel();
        let moved = self.offset != 0;
        self.offset = 0;
        self.direction = None;
        changed || moved
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// When `state.is_scrolling` is `true`, the countdown is re-armed as if a scroll event
    /// happened at `now_ms`.
    pub fn restore(&mut self, state: ScrollState, now_ms: u64) -> bool {
        if state.is_scrolling {
            return self.on_scroll_event(state.offset, now_ms);
        }
        let settled = self.cancel();
        let moved = self.set_offset(state.offset);
        settled || moved
    }

    fn settle(&mut self) -> bool {
        let was_scrolling = self.is_scrolling;
        self.deadline_ms = None;
        self.is_scrolling = false;
        self.direction = None;
        was_scrolling
    }
}
