use fixed_list::{VirtualItems, Window};

/// Everything a rendering layer needs for one frame.
///
/// Render a container of height [`Self::total_list_height`], then exactly the items of
/// [`Self::virtual_items`], each positioned at its `offset_top`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListSnapshot {
    pub window: Window,
    pub is_scrolling: bool,
}

impl ListSnapshot {
    pub fn virtual_items(&self) -> VirtualItems {
        self.window.iter()
    }

    /// `None` when the list is empty.
    pub fn start_index(&self) -> Option<usize> {
        self.window.start_index()
    }

    /// Inclusive. `None` when the list is empty.
    pub fn end_index(&self) -> Option<usize> {
        self.window.end_index()
    }

    pub fn total_list_height(&self) -> u64 {
        self.window.total_size
    }
}
