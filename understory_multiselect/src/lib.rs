// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Multiselect: a toolkit-agnostic multi-select gesture engine for item grids.
//!
//! ## Overview
//!
//! This crate gives grid-of-items UIs file-manager-style selection: click,
//! ctrl/cmd-click to toggle, shift-click for ranges, and a touch-friendly
//! long-press that selects an item and then extends the range as the pointer
//! hovers across the grid.
//! It does not listen to any toolkit.
//! Instead, the host forwards pointer, hover, click, and timer events into a
//! [`SelectionEngine`](crate::engine::SelectionEngine), and the engine mutates a
//! host-owned [`SelectionState`](crate::state::SelectionState) in place.
//!
//! ## Inputs
//!
//! - Pointer-down and pointer-move as [`PointerEvent`](crate::types::PointerEvent)
//!   (position, button, [`Modifiers`](crate::types::Modifiers)).
//! - Hover over an item index, optionally tagged with a [`GroupKey`](crate::types::GroupKey).
//! - Clicks as [`ClickEvent`](crate::types::ClickEvent) plus a [`ClickTarget`](crate::types::ClickTarget).
//! - Elapsed long-press timers, as the [`PressTimer`](crate::types::PressTimer) token the host was asked to schedule.
//! - Window-level pointer-up / key-up, via [`SelectionEngine::end_gesture`](crate::engine::SelectionEngine::end_gesture).
//!
//! The host implements [`SelectionHost`](crate::host::SelectionHost) to supply the
//! current item order, flash feedback, and timer scheduling.
//! Hosts without a scheduler can use [`TimerQueue`](crate::timer::TimerQueue).
//!
//! ## Gesture lifecycle
//!
//! 1) Pointer-down on an unselected item arms a press and schedules the long-press timer.
//! 2) If the timer elapses before the pointer moves past the threshold, the press
//!    becomes a gesture: the item is selected alone, the host is asked to flash it,
//!    and it becomes the anchor.
//!    With drag-to-select enabled, moving past the threshold starts the gesture early;
//!    otherwise the movement cancels the press.
//! 3) Hovers move the end of the range; the selection is always the inclusive slice
//!    of the current order between the start and end indices.
//! 4) Pointer-up or key-up ends the gesture. The one-shot click suppression flag
//!    tells the host to ignore the click that follows.
//!
//! Modifier clicks never go through the press tracker; see [`click`](crate::click).
//!
//! ## Several grids
//!
//! Each grid owns its own engine and state. Grids that share a window register on a
//! [`GestureBoard`](crate::board::GestureBoard), which keeps a gesture in one grid
//! from being disturbed by presses in another. Registration is released on drop.
//!
//! ## Example
//!
//! ```
//! use std::borrow::Cow;
//! use std::time::{Duration, Instant};
//!
//! use understory_multiselect::engine::SelectionEngine;
//! use understory_multiselect::host::SelectionHost;
//! use understory_multiselect::state::SelectionState;
//! use understory_multiselect::timer::TimerQueue;
//! use understory_multiselect::types::{GroupKey, ItemId, PointerEvent, PressTimer};
//!
//! struct Grid {
//!     items: Vec<ItemId>,
//!     timers: TimerQueue,
//! }
//!
//! impl SelectionHost for Grid {
//!     fn order(&self, _group: Option<&GroupKey>) -> Cow<'_, [ItemId]> {
//!         Cow::Borrowed(self.items.as_slice())
//!     }
//!     fn flash_selection(&mut self, _id: &ItemId) {}
//!     fn schedule_press_timer(&mut self, delay: Duration) -> PressTimer {
//!         self.timers.schedule(delay)
//!     }
//!     fn cancel_press_timer(&mut self, timer: PressTimer) {
//!         self.timers.cancel(timer);
//!     }
//! }
//!
//! let mut grid = Grid {
//!     items: (1_u32..=6).map(ItemId::from).collect(),
//!     timers: TimerQueue::new(Instant::now()),
//! };
//! let mut state = SelectionState::new();
//! let mut engine = SelectionEngine::default();
//!
//! // Press and hold item 2 (index 1).
//! let press = PointerEvent::primary((5.0, 5.0));
//! engine.handle_pointer_down(&mut state, &mut grid, &press, 1, 2_u32, None);
//! for timer in grid.timers.advance(Duration::from_millis(300)) {
//!     engine.handle_press_timeout(&mut state, &mut grid, timer);
//! }
//! assert!(state.selecting);
//!
//! // Drag across to item 4 (index 3), then release.
//! engine.handle_select_hover(&mut state, &mut grid, 3, None);
//! engine.end_gesture(&mut state, &mut grid);
//!
//! let selected: Vec<&str> = state.selection.iter().map(ItemId::as_str).collect();
//! assert_eq!(selected, ["2", "3", "4"]);
//! assert!(state.take_suppress_click());
//! ```

extern crate alloc;

pub mod board;
pub mod click;
pub mod config;
pub mod engine;
pub mod host;
pub mod press;
pub mod range;
pub mod state;
pub mod timer;
pub mod types;

#[cfg(test)]
mod testing;

pub use board::{GestureBoard, GridId, Registration};
pub use config::{ConfigError, SelectionConfig};
pub use engine::SelectionEngine;
pub use host::SelectionHost;
pub use state::{PendingPress, SelectionState};
pub use timer::TimerQueue;
pub use types::{
    ClickEvent, ClickOutcome, ClickTarget, GroupKey, ItemId, Modifiers, PointerButton,
    PointerEvent, PressTimer,
};
