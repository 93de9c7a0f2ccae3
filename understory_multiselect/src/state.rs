// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-owned selection state.
//!
//! ## Ownership
//!
//! Each mounted grid owns one [`SelectionState`] and lends it to the engine by
//! `&mut` for the duration of each call. The engine mutates it in place and
//! never keeps a reference, so the host can read and render it freely between
//! events, and may also mutate [`SelectionState::selection`] directly (for
//! example "select all" or a server-driven reset).
//!
//! ## Invariants
//!
//! - `selection` never contains duplicates; the set type enforces it.
//! - `selecting` implies `start_index` and `end_index` are set.
//! - At most one [`PendingPress`] exists at a time.

use indexmap::IndexSet;
use kurbo::Point;

use crate::types::{ItemId, PressTimer};

/// Bookkeeping for the one in-flight press.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingPress {
    /// Pointer position at pointer-down.
    pub origin: Point,
    /// Index of the pressed item in the current order.
    pub index: usize,
    /// Identifier of the pressed item.
    pub id: ItemId,
    /// Long-press timer, until it fires or the press escalates.
    pub timer: Option<PressTimer>,
}

/// Selection fields shared between a grid host and the engine.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    /// Currently selected identifiers, in range or append order.
    pub selection: IndexSet<ItemId>,
    /// `true` while a long-press-initiated range gesture is live.
    pub selecting: bool,
    /// Index in the current order where the range gesture began.
    pub start_index: Option<usize>,
    /// Live end of the range gesture.
    pub end_index: Option<usize>,
    /// The in-flight press, if any.
    pub press: Option<PendingPress>,
    /// `true` once a press escalated into a selection gesture.
    pub long_press_triggered: bool,
    /// One-shot request to ignore the next click on the pressed item.
    pub suppress_click: bool,
}

impl SelectionState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is selected.
    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selection.contains(id)
    }

    /// Returns `true` while a press is being tracked.
    pub fn press_active(&self) -> bool {
        self.press.is_some()
    }

    /// Returns a copy of the selection in its current order.
    pub fn selection_vec(&self) -> Vec<ItemId> {
        self.selection.iter().cloned().collect()
    }

    /// Consume the one-shot click-suppression flag.
    ///
    /// Hosts call this from their plain-click handler; a `true` result means
    /// the click ended a press gesture and should be ignored.
    pub fn take_suppress_click(&mut self) -> bool {
        core::mem::take(&mut self.suppress_click)
    }
}
