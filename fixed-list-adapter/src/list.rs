use alloc::boxed::Box;
use core::fmt;

use fixed_list::{
    Align, ListOptions, OptionsError, ScrollDirection, ScrollState, ScrollTracker, Window,
};

use crate::ListSnapshot;
use crate::surface::{Attachment, ScrollSurface};

/// Resolves the surface to window against, or `None` while it is not mounted yet.
pub type ScrollElementProvider<S> = Box<dyn Fn() -> Option<S>>;

/// A callback fired when the rendered window or `is_scrolling` changes.
pub type OnChangeCallback = Box<dyn Fn(&ListSnapshot)>;

/// A fixed-size list bound to a scroll surface.
///
/// This type does not hold any UI objects beyond the surface handle. Adapters drive it by
/// calling:
/// - `attach` / `sync_surface` when the scroll element is mounted, replaced or removed
/// - `on_scroll(now_ms)` for every scroll notification of the attached surface
/// - `tick(now_ms)` when the wakeup reported by `next_wakeup_ms` is due
///
/// The window is recomputed synchronously on every input change, so `snapshot()` always
/// reflects the latest scroll offset. Only `is_scrolling` is debounced.
///
/// Everything here runs on the thread that dispatches UI events; the type is not `Sync`.
pub struct FixedSizeList<S: ScrollSurface> {
    options: ListOptions,
    tracker: ScrollTracker,
    published: ListSnapshot,
    attachment: Option<Attachment<S>>,
    get_scroll_element: Option<ScrollElementProvider<S>>,
    on_change: Option<OnChangeCallback>,
    notify_depth: usize,
    notify_pending: bool,
}

impl<S: ScrollSurface> FixedSizeList<S> {
    /// Creates a detached list.
    ///
    /// Invalid geometry is accepted (a zero item height renders an empty window); use
    /// [`Self::try_new`] to reject it instead.
    pub fn new(options: ListOptions) -> Self {
        if options.validate().is_err() {
            vwarn!(
                item_height = options.item_height,
                viewport_height = options.viewport_height,
                "FixedSizeList::new: invalid geometry"
            );
        }
        vdebug!(
            count = options.count,
            item_height = options.item_height,
            viewport_height = options.viewport_height,
            overscan = options.overscan,
            "FixedSizeList::new"
        );
        let tracker = ScrollTracker::new(options.scrolling_delay_ms);
        let published = ListSnapshot {
            window: options.window_at(tracker.offset()),
            is_scrolling: false,
        };
        Self {
            options,
            tracker,
            published,
            attachment: None,
            get_scroll_element: None,
            on_change: None,
            notify_depth: 0,
            notify_pending: false,
        }
    }

    pub fn try_new(options: ListOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    /// Sets the provider consulted by [`Self::sync_surface`].
    pub fn with_scroll_element(
        mut self,
        get_scroll_element: impl Fn() -> Option<S> + 'static,
    ) -> Self {
        self.get_scroll_element = Some(Box::new(get_scroll_element));
        self
    }

    pub fn with_on_change(mut self, on_change: impl Fn(&ListSnapshot) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&ListSnapshot) + 'static>) {
        self.on_change = on_change.map(|f| Box::new(f) as _);
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ListOptions) {
        vdebug!(
            count = options.count,
            item_height = options.item_height,
            viewport_height = options.viewport_height,
            overscan = options.overscan,
            "FixedSizeList::set_options"
        );
        self.options = options;
        self.tracker.set_scrolling_delay_ms(options.scrolling_delay_ms);
        self.refresh();
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ListOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_count(&mut self, count: usize) {
        self.update_options(|o| o.count = count);
    }

    pub fn set_item_height(&mut self, item_height: u32) {
        self.update_options(|o| o.item_height = item_height);
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.update_options(|o| o.viewport_height = viewport_height);
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.update_options(|o| o.overscan = overscan);
    }

    pub fn set_scrolling_delay_ms(&mut self, delay_ms: u64) {
        self.update_options(|o| o.scrolling_delay_ms = delay_ms);
    }

    pub fn surface(&self) -> Option<&S> {
        self.attachment.as_ref().map(Attachment::surface)
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Binds the list to `surface`, releasing the previous one first.
    ///
    /// The previous surface's listener is removed and any pending `is_scrolling` countdown is
    /// cancelled before the new surface is touched. A new surface's current offset is published
    /// immediately, so the first window is correct before any scrolling happens. Attaching
    /// `None` leaves the list detached.
    pub fn attach(&mut self, surface: Option<S>) {
        self.batch_update(|list| {
            list.release();
            if let Some(surface) = surface {
                let attachment = Attachment::new(surface);
                let offset = attachment.surface().scroll_offset();
                vdebug!(offset, "FixedSizeList::attach");
                list.tracker.set_offset(offset);
                list.attachment = Some(attachment);
            }
            list.refresh();
        });
    }

    /// Re-resolves the surface through the provider and re-attaches if the handle changed.
    ///
    /// Returns `true` when the attachment changed. Without a provider this is a no-op.
    pub fn sync_surface(&mut self) -> bool
    where
        S: PartialEq,
    {
        let Some(provider) = &self.get_scroll_element else {
            return false;
        };
        let next = provider();
        if next.as_ref() == self.surface() {
            return false;
        }
        self.attach(next);
        true
    }

    /// Removes the surface listener and cancels the pending countdown. Idempotent.
    pub fn detach(&mut self) {
        if self.attachment.is_none() && !self.tracker.is_scrolling() {
            return;
        }
        self.batch_update(|list| {
            list.release();
            list.refresh();
        });
    }

    /// Handles a scroll notification from the attached surface.
    ///
    /// Reads the surface's current offset, marks the list as scrolling and recomputes the
    /// window before returning. Ignored while detached.
    pub fn on_scroll(&mut self, now_ms: u64) {
        let Some(attachment) = &self.attachment else {
            return;
        };
        let offset = attachment.surface().scroll_offset();
        vtrace!(offset, now_ms, "FixedSizeList::on_scroll");
        if self.tracker.on_scroll_event(offset, now_ms) {
            self.refresh();
        }
    }

    /// Delivers timer expiry for `is_scrolling` debouncing.
    ///
    /// Returns `true` when `is_scrolling` was reset by this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.tracker.update_scrolling(now_ms) {
            return false;
        }
        vtrace!(now_ms, "FixedSizeList::tick: scrolling settled");
        self.refresh();
        true
    }

    /// When the host should call [`Self::tick`] next, if a countdown is pending.
    pub fn next_wakeup_ms(&self) -> Option<u64> {
        self.tracker.deadline_ms()
    }

    pub fn scroll_offset(&self) -> i64 {
        self.tracker.offset()
    }

    pub fn is_scrolling(&self) -> bool {
        self.tracker.is_scrolling()
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.tracker.scroll_direction()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    pub fn window(&self) -> Window {
        self.published.window
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.published
    }

    /// Computes the offset the host should scroll the surface to so that `index` is in view.
    ///
    /// The list does not move by itself: once the host scrolls the surface, the resulting
    /// scroll notification updates the window as usual.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        self.options
            .scroll_to_index_offset(index, align, self.tracker.offset())
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.notify_depth = self.notify_depth.saturating_add(1);

        f(self);

        debug_assert!(self.notify_depth > 0, "notify_depth underflow");
        self.notify_depth = self.notify_depth.saturating_sub(1);

        if self.notify_depth == 0 && core::mem::take(&mut self.notify_pending) {
            self.notify_now();
        }
    }

    fn release(&mut self) {
        if self.attachment.take().is_some() {
            vdebug!(offset = self.tracker.offset(), "FixedSizeList::detach");
        }
        self.tracker.cancel();
    }

    fn refresh(&mut self) {
        let next = ListSnapshot {
            window: self.options.window_at(self.tracker.offset()),
            is_scrolling: self.tracker.is_scrolling(),
        };
        if next == self.published {
            return;
        }
        self.published = next;
        self.notify();
    }

    fn notify(&mut self) {
        if self.notify_depth > 0 {
            self.notify_pending = true;
            return;
        }
        self.notify_now();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(&self.published);
        }
    }
}

impl<S: ScrollSurface> fmt::Debug for FixedSizeList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedSizeList")
            .field("options", &self.options)
            .field("tracker", &self.tracker)
            .field("published", &self.published)
            .field("attached", &self.attachment.is_some())
            .finish_non_exhaustive()
    }
}
