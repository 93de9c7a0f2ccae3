// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier clicks: ctrl/cmd toggles and shift ranges.
//!
//! ## Semantics
//!
//! | Modifiers      | Effect                                                     |
//! |----------------|------------------------------------------------------------|
//! | none           | not handled; the host applies its own click semantics      |
//! | ctrl/cmd       | toggle the clicked item                                    |
//! | shift          | replace the selection with anchor..=clicked                |
//! | ctrl/cmd+shift | add anchor..=clicked to the selection                      |
//!
//! Ranges resolve against the order given in the
//! [`ClickTarget`](crate::types::ClickTarget), or the host's order for the
//! target's group. The clicked index comes from the order when the id is found
//! there and from the target's own index otherwise. When neither yields a
//! usable index, shift replaces the selection with the clicked id and
//! ctrl/cmd+shift toggles it.
//!
//! ## Anchor
//!
//! - Range clicks move the anchor to the clicked item.
//! - Adding by toggle moves it to the clicked item.
//! - Removing by toggle moves it to the last item still selected.
//! - An empty selection has no anchor, so a range click then starts at the
//!   clicked item itself.

use indexmap::IndexSet;

use crate::engine::SelectionEngine;
use crate::host::SelectionHost;
use crate::range::inclusive_range;
use crate::state::SelectionState;
use crate::types::{ClickEvent, ClickOutcome, ClickTarget, ItemId};

impl SelectionEngine {
    /// Resolve a click carrying ctrl/cmd and/or shift.
    ///
    /// Returns an unhandled outcome when no selection modifier is held.
    /// Otherwise updates the selection, clears click suppression, prevents the
    /// event's default action, and reports whether membership changed. The
    /// host's selection is only replaced when it changed, so hosts that
    /// re-render on assignment do not do so spuriously.
    pub fn handle_click_selection<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
        event: &mut ClickEvent,
        target: ClickTarget<'_>,
    ) -> ClickOutcome {
        let toggle = event.modifiers.is_toggle();
        let range = event.modifiers.is_range();
        if !toggle && !range {
            return ClickOutcome::unhandled(state.selection_vec());
        }

        if state.selection.is_empty() {
            self.anchor = None;
        }

        let fetched;
        let order = match target.order {
            Some(order) => order,
            None => {
                fetched = host.order(target.group.as_ref());
                &*fetched
            }
        };
        let click_index = position_of(order, &target.id)
            .or(target.index.filter(|&index| index < order.len()));

        let id = target.id;
        let mut next = state.selection.clone();
        if range {
            match click_index {
                Some(click_index) => {
                    let anchor_index = self
                        .anchor
                        .as_ref()
                        .and_then(|anchor| position_of(order, anchor))
                        .unwrap_or(click_index);
                    let span = inclusive_range(order, anchor_index, click_index).unwrap_or(&[]);
                    if toggle {
                        next.extend(span.iter().cloned());
                    } else {
                        next = span.iter().cloned().collect();
                    }
                }
                None if toggle => {
                    if !next.shift_remove(&id) {
                        next.insert(id.clone());
                    }
                }
                None => {
                    next.clear();
                    next.insert(id.clone());
                }
            }
            self.anchor = Some(id);
        } else if next.shift_remove(&id) {
            self.anchor = next.last().cloned();
        } else {
            next.insert(id.clone());
            self.anchor = Some(id);
        }

        let changed = !same_members(&state.selection, &next);
        if changed {
            state.selection = next;
        }
        log::debug!(
            "modifier click (toggle: {toggle}, range: {range}) -> {} item(s), changed: {changed}",
            state.selection.len()
        );
        state.suppress_click = false;
        event.prevent_default();
        ClickOutcome {
            handled: true,
            changed,
            selection: state.selection_vec(),
        }
    }
}

fn position_of(order: &[ItemId], id: &ItemId) -> Option<usize> {
    order.iter().position(|candidate| candidate == id)
}

/// Membership equality; order is not significant to consumers.
fn same_members(a: &IndexSet<ItemId>, b: &IndexSet<ItemId>) -> bool {
    a.len() == b.len() && a.iter().all(|id| b.contains(id))
}
