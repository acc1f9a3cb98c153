use alloc::vec::Vec;
use core::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Index bounds of the rendered window, overscan included.
///
/// Both bounds are inclusive and always satisfy `start_index <= end_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl VisibleRange {
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.end_index
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualItem {
    pub index: usize,
    /// Distance from the top of the list content to the item's top edge.
    pub offset_top: u64,
    /// Size in the scroll axis (always the list's item height).
    pub size: u32,
}

impl VirtualItem {
    pub fn end(&self) -> u64 {
        self.offset_top.saturating_add(self.size as u64)
    }
}

/// The result of a window computation.
///
/// A `Window` is plain data: it is recomputed whenever scroll position or geometry changes and
/// carries no identity of its own. Virtual items are produced lazily from the range, so holding
/// a window never allocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    /// `None` when the list is empty.
    pub range: Option<VisibleRange>,
    pub item_height: u32,
    /// Height of the whole list content (`count * item_height`).
    pub total_size: u64,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    pub fn len(&self) -> usize {
        self.range.map_or(0, |r| r.len())
    }

    pub fn start_index(&self) -> Option<usize> {
        self.range.map(|r| r.start_index)
    }

    pub fn end_index(&self) -> Option<usize> {
        self.range.map(|r| r.end_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range.is_some_and(|r| r.contains(index))
    }

    /// Iterates the window's virtual items in ascending index order.
    pub fn iter(&self) -> VirtualItems {
        let (next, end) = match self.range {
            Some(r) => (r.start_index, r.end_index + 1),
            None => (0, 0),
        };
        VirtualItems {
            next,
            end,
            item_height: self.item_height,
        }
    }

    pub fn for_each_virtual_item(&self, mut f: impl FnMut(VirtualItem)) {
        for item in self.iter() {
            f(item);
        }
    }

    /// Collects virtual items into `out` (clears `out` first).
    ///
    /// Reuse the same buffer across frames to avoid reallocating on every scroll event.
    pub fn collect_virtual_items(&self, out: &mut Vec<VirtualItem>) {
        out.clear();
        out.reserve(self.len());
        out.extend(self.iter());
    }
}

impl IntoIterator for &Window {
    type Item = VirtualItem;
    type IntoIter = VirtualItems;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the virtual items of a [`Window`].
#[derive(Clone, Debug)]
pub struct VirtualItems {
    next: usize,
    end: usize, // exclusive
    item_height: u32,
}

impl VirtualItems {
    fn item(&self, index: usize) -> VirtualItem {
        VirtualItem {
            index,
            offset_top: (index as u64).saturating_mul(self.item_height as u64),
            size: self.item_height,
        }
    }
}

impl Iterator for VirtualItems {
    type Item = VirtualItem;

    fn next(&mut self) -> Option<VirtualItem> {
        if self.next >= self.end {
            return None;
        }
        let item = self.item(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl DoubleEndedIterator for VirtualItems {
    fn next_back(&mut self) -> Option<VirtualItem> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.item(self.end))
    }
}

impl ExactSizeIterator for VirtualItems {}

impl FusedIterator for VirtualItems {}
