use crate::{Align, ListOptions, VirtualItem, VisibleRange, Window};

/// Computes the window of items to render for a uniform-height list.
///
/// This is a pure function: identical inputs always produce an identical [`Window`].
///
/// The scroll offset is first clamped into `[0, total_size - viewport_height]`, so negative
/// (elastic overscroll) offsets render the top of the list and offsets past the end render the
/// last viewport. The visible rows are then `floor(offset / item_height)` through
/// `ceil((offset + viewport_height) / item_height)`, widened by `overscan` on both sides and
/// clamped to `[0, count - 1]`.
pub fn compute_window(
    scroll_offset: i64,
    item_height: u32,
    viewport_height: u32,
    count: usize,
    overscan: usize,
) -> Window {
    let total_size = (count as u64).saturating_mul(item_height as u64);
    if count == 0 || item_height == 0 {
        if count > 0 {
            vwarn!(count, "compute_window: zero item height, rendering nothing");
        }
        return Window {
            range: None,
            item_height,
            total_size,
        };
    }

    // Wide arithmetic: every intermediate below fits in i128 without saturation.
    let height = item_height as i128;
    let max_scroll = total_size.saturating_sub(viewport_height as u64) as i128;
    let visible_start = (scroll_offset as i128).clamp(0, max_scroll);
    let visible_end = visible_start + viewport_height as i128;

    let raw_start = visible_start.div_euclid(height);
    let raw_end = -(-visible_end).div_euclid(height); // ceil

    let overscan = overscan as i128;
    let last = (count - 1) as i128;
    let end = (raw_end + overscan).clamp(0, last);
    let start = (raw_start - overscan).clamp(0, end);

    let start_index = start as usize;
    let end_index = end as usize;
    vtrace!(scroll_offset, start_index, end_index, "compute_window");

    Window {
        range: Some(VisibleRange {
            start_index,
            end_index,
        }),
        item_height,
        total_size,
    }
}

impl ListOptions {
    /// Computes the window for `scroll_offset` with these options.
    pub fn window_at(&self, scroll_offset: i64) -> Window {
        compute_window(
            scroll_offset,
            self.item_height,
            self.viewport_height,
            self.count,
            self.overscan,
        )
    }

    /// Height of the whole list content (`count * item_height`).
    pub fn total_size(&self) -> u64 {
        (self.count as u64).saturating_mul(self.item_height as u64)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size().saturating_sub(self.viewport_height as u64)
    }

    /// Clamps a raw surface offset into the scrollable range `[0, max_scroll_offset]`.
    pub fn clamp_scroll_offset(&self, offset: i64) -> u64 {
        if offset <= 0 {
            return 0;
        }
        (offset as u64).min(self.max_scroll_offset())
    }

    /// Returns the index of the item covering `offset`, clamped to the list bounds.
    pub fn index_at_offset(&self, offset: i64) -> Option<usize> {
        if self.count == 0 || self.item_height == 0 {
            return None;
        }
        let offset = offset.max(0) as u64;
        let index = offset / self.item_height as u64;
        Some(index.min((self.count - 1) as u64) as usize)
    }

    pub fn item(&self, index: usize) -> Option<VirtualItem> {
        (index < self.count).then(|| VirtualItem {
            index,
            offset_top: (index as u64).saturating_mul(self.item_height as u64),
            size: self.item_height,
        })
    }

    pub fn item_offset(&self, index: usize) -> Option<u64> {
        self.item(index).map(|it| it.offset_top)
    }

    /// Computes the scroll offset that brings `index` into view.
    ///
    /// `current_offset` is only consulted for [`Align::Auto`], which keeps the current offset
    /// when the item is already fully visible. The result is clamped to the scrollable range.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align, current_offset: i64) -> u64 {
        if self.count == 0 {
            return 0;
        }
        let index = index.min(self.count - 1);
        let Some(item) = self.item(index) else {
            return 0;
        };
        let view = self.viewport_height as u64;

        let target = match align {
            Align::Start => item.offset_top,
            Align::End => item.end().saturating_sub(view),
            Align::Center => {
                let center = item.offset_top.saturating_add(item.size as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.clamp_scroll_offset(current_offset);
                let cur_end = cur.saturating_add(view);
                if item.offset_top >= cur && item.end() <= cur_end {
                    cur
                } else if item.offset_top < cur {
                    item.offset_top
                } else {
                    item.end().saturating_sub(view)
                }
            }
        };

        target.min(self.max_scroll_offset())
    }
}
