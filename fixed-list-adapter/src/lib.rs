//! Adapter utilities for the `fixed-list` crate.
//!
//! The `fixed-list` crate is UI-agnostic and focuses on the window math and the scroll state
//! machine. This crate binds them to a scrollable surface:
//!
//! - [`ScrollSurface`]: the handle a UI layer provides (current offset + listener hooks)
//! - [`FixedSizeList`]: attaches to a surface, recomputes the window on every scroll
//!   notification and debounces `is_scrolling`
//! - [`ListSnapshot`]: what the rendering layer consumes each frame
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod list;
mod snapshot;
mod surface;

#[cfg(test)]
mod tests;

pub use list::{FixedSizeList, OnChangeCallback, ScrollElementProvider};
pub use snapshot::ListSnapshot;
pub use surface::ScrollSurface;
