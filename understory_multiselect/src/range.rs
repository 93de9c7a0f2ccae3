// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range selection for live gestures.
//!
//! ## Overview
//!
//! Once a press has escalated, the gesture has a fixed start index and a live
//! end index into the grid's current order. Every hover that moves the end
//! index recomputes the selection as the inclusive slice between the two, so
//! the result depends only on the final end index and never on the path the
//! pointer took.
//!
//! The order is fetched from the host on every recompute rather than cached,
//! because grids can reorder or repaginate between and during gestures.
//!
//! ## Groups
//!
//! Hosts that render several sub-grids under one component tag pointer-down
//! and hover calls with a [`GroupKey`]. Hovers from a group other than the one
//! recorded at pointer-down are dropped, so drifting across a sub-grid boundary
//! cannot mix indices from two different orders.

use crate::engine::SelectionEngine;
use crate::host::SelectionHost;
use crate::state::SelectionState;
use crate::types::{GroupKey, ItemId};

impl SelectionEngine {
    /// Extend the live gesture to the item at `index`.
    ///
    /// Does nothing unless a gesture is live, the hover comes from the gesture's
    /// group, and `index` differs from the current end index.
    pub fn handle_select_hover<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
        index: usize,
        group: Option<&GroupKey>,
    ) {
        if !state.selecting {
            return;
        }
        if group != self.group.as_ref() {
            log::trace!(
                "hover from group {group:?} ignored during gesture in {:?}",
                self.group
            );
            return;
        }
        if state.end_index == Some(index) {
            return;
        }
        state.end_index = Some(index);
        self.update_selection(state, host, None);
    }

    /// Recompute the selection from the gesture's start and end indices.
    ///
    /// Resolves against `order` when given, otherwise against the host's order
    /// for the gesture's group. Unset indices or an empty order leave the
    /// selection untouched. Indices past the end of a shrunken order are
    /// clamped to its last item.
    pub fn update_selection<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
        order: Option<&[ItemId]>,
    ) {
        let (Some(start), Some(end)) = (state.start_index, state.end_index) else {
            return;
        };
        let fetched;
        let order = match order {
            Some(order) => order,
            None => {
                fetched = host.order(self.group.as_ref());
                &*fetched
            }
        };
        let Some(range) = inclusive_range(order, start, end) else {
            return;
        };

        state.selection = range.iter().cloned().collect();
        self.anchor = if state.selection.is_empty() {
            None
        } else {
            order.get(start.min(order.len() - 1)).cloned()
        };
    }

    /// Empty the selection and forget the anchor.
    ///
    /// Gesture state (`selecting`, indices) is left alone; gestures end through
    /// [`SelectionEngine::end_gesture`].
    pub fn clear_selection(&mut self, state: &mut SelectionState) {
        state.selection.clear();
        self.anchor = None;
    }
}

/// The inclusive slice of `order` between `a` and `b`, in either direction.
///
/// Both ends are clamped to the last index. Returns `None` for an empty order.
pub(crate) fn inclusive_range(order: &[ItemId], a: usize, b: usize) -> Option<&[ItemId]> {
    let last = order.len().checked_sub(1)?;
    let low = a.min(b).min(last);
    let high = a.max(b).min(last);
    Some(&order[low..=high])
}
