//! A headless windowing engine for uniform-height lists.
//!
//! For surface attachment and listener lifecycle, see the `fixed-list-adapter` crate.
//!
//! Rendering a list of 10 000 rows is cheap only if you don't render 10 000 rows. This crate
//! computes which rows a viewport can actually see (plus a small overscan buffer) and where
//! each of them sits, so a UI layer only materializes that window:
//!
//! - [`compute_window`] / [`ListOptions::window_at`]: scroll offset → inclusive index range
//!   and per-item `offset_top`, plus the full content height for the scroll container.
//! - [`ScrollTracker`]: the current offset and a debounced `is_scrolling` flag that adapters
//!   can use to render cheap placeholders during fast scroll.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport height and item height
//! - scroll offset and scroll notifications
//! - the current time (`now_ms`) for `is_scrolling` debouncing
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod state;
mod tracker;
mod types;
mod window;


pub use error::OptionsError;
pub use options::{DEFAULT_OVERSCAN, DEFAULT_SCROLLING_DELAY_MS, ListOptions};
pub use state::ScrollState;
pub use tracker::ScrollTracker;
pub use types::{Align, ScrollDirection, VirtualItem, VirtualItems, VisibleRange, Window};
pub use window::compute_window;
