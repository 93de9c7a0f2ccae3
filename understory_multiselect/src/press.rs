// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press tracking: hold vs. release vs. drag.
//!
//! ## Overview
//!
//! A primary-button pointer-down on an unselected item arms a press and asks
//! the host to schedule the long-press timer. From there the press ends in
//! one of three ways:
//!
//! - The timer elapses while the press is still armed: the press escalates
//!   into a selection gesture via [`SelectionEngine::start_selection`].
//! - The pointer travels farther than the movement threshold (Manhattan
//!   distance) first: in drag-to-select mode the press escalates immediately,
//!   otherwise it is cancelled so the host can treat the drag as an item drag.
//! - The pointer is released first: the host calls
//!   [`SelectionEngine::end_gesture`], which cancels the press, and the click
//!   is the host's to interpret.
//!
//! Pointer-downs carrying shift, ctrl, or cmd bypass the tracker entirely;
//! those are resolved on click by
//! [`SelectionEngine::handle_click_selection`].

use kurbo::Point;

use crate::engine::SelectionEngine;
use crate::host::SelectionHost;
use crate::state::{PendingPress, SelectionState};
use crate::types::{GroupKey, ItemId, PointerButton, PointerEvent, PressTimer};

impl SelectionEngine {
    /// Begin tracking a press on the item at `index` with identifier `id`.
    ///
    /// Ignored when another grid on the board is drag-selecting or when the
    /// primary button was not used. A press with a selection modifier cancels
    /// any pending press, clears click suppression, and otherwise does nothing.
    ///
    /// Pressing an already-selected item does not start a new press: the anchor
    /// moves to it and the next click is suppressed, so a drag can start from
    /// the selection without deselecting on release.
    pub fn handle_pointer_down<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
        event: &PointerEvent,
        index: usize,
        id: impl Into<ItemId>,
        group: Option<GroupKey>,
    ) {
        if self.other_grid_selecting() {
            log::trace!("pointer-down ignored: another grid is drag-selecting");
            return;
        }
        if event.button != PointerButton::Primary {
            log::trace!("pointer-down ignored: {:?} button", event.button);
            return;
        }
        if event.modifiers.is_selection_modifier() {
            self.cancel_press_state(state, host);
            state.suppress_click = false;
            return;
        }

        self.cancel_press_state(state, host);
        self.group = group;

        let id = id.into();
        if state.is_selected(&id) {
            self.anchor = Some(id);
            state.suppress_click = true;
            return;
        }

        let timer = host.schedule_press_timer(self.config.long_press_delay);
        log::trace!("press armed on {id} at index {index}");
        state.suppress_click = false;
        state.press = Some(PendingPress {
            origin: event.position,
            index,
            id,
            timer: Some(timer),
        });
    }

    /// Feed a pointer move into the press tracker.
    ///
    /// Does nothing unless a press is armed and no range gesture is live yet.
    /// Constant time: one distance check, plus at most one escalation or
    /// cancellation.
    pub fn handle_pointer_move<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
        event: &PointerEvent,
    ) {
        if state.selecting {
            return;
        }
        let Some(press) = &state.press else {
            return;
        };
        if manhattan(press.origin, event.position) <= self.config.move_threshold {
            return;
        }

        if self.config.drag_to_select {
            let (index, id) = (press.index, press.id.clone());
            self.start_selection(state, host, index, id);
        } else {
            log::trace!("press on {} cancelled by movement", press.id);
            self.cancel_press_state(state, host);
        }
    }

    /// Deliver an elapsed long-press timer.
    ///
    /// Escalates the press into a selection gesture if `timer` belongs to the
    /// press that is still armed. Stale tokens (from cancelled or superseded
    /// presses) are ignored.
    pub fn handle_press_timeout<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
        timer: PressTimer,
    ) {
        let Some(press) = state.press.as_mut() else {
            return;
        };
        if press.timer != Some(timer) {
            log::trace!("ignoring stale press timer {timer:?}");
            return;
        }
        // Already fired; there is nothing left for the host to cancel.
        press.timer = None;
        if state.selecting {
            return;
        }
        let (index, id) = (press.index, press.id.clone());
        self.start_selection(state, host, index, id);
    }

    /// Forget the in-flight press, cancelling its timer.
    ///
    /// Also clears `long_press_triggered`. Safe to call when nothing is pending.
    pub fn cancel_press_state<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
    ) {
        if let Some(timer) = state.press.take().and_then(|press| press.timer) {
            host.cancel_press_timer(timer);
        }
        state.long_press_triggered = false;
    }

    /// Turn a press on `id` at `index` into a live range gesture.
    ///
    /// If `id` is already selected (for example because the selection changed
    /// while the press was pending) only the anchor moves. Otherwise the
    /// gesture starts with a one-item range, the host is asked to flash `id`,
    /// and this grid claims the board.
    pub fn start_selection<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
        index: usize,
        id: impl Into<ItemId>,
    ) {
        let id = id.into();
        if state.is_selected(&id) {
            self.anchor = Some(id);
            return;
        }

        if let Some(timer) = state.press.as_mut().and_then(|press| press.timer.take()) {
            host.cancel_press_timer(timer);
        }
        state.long_press_triggered = true;
        state.selecting = true;
        state.start_index = Some(index);
        state.end_index = Some(index);
        state.suppress_click = true;
        host.flash_selection(&id);
        log::debug!("selection gesture started on {id} at index {index}");
        self.anchor = Some(id);
        if let Some(registration) = &self.registration {
            registration.claim();
        }
        self.update_selection(state, host, None);
    }
}

fn manhattan(a: Point, b: Point) -> f64 {
    let d = b - a;
    d.x.abs() + d.y.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GestureBoard;
    use crate::config::SelectionConfig;
    use crate::testing::{GridHost, LONG_PRESS, ids};
    use crate::types::Modifiers;
    use core::time::Duration;

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::primary((x, y))
    }

    fn setup() -> (SelectionEngine, SelectionState, GridHost) {
        (
            SelectionEngine::default(),
            SelectionState::new(),
            GridHost::new(ids(["a", "b", "c", "d", "e"])),
        )
    }

    #[test]
    fn pointer_down_arms_press_and_schedules_timer() {
        let (mut engine, mut state, mut host) = setup();
        engine.handle_pointer_down(&mut state, &mut host, &down(10.0, 20.0), 2, "c", None);
        let press = state.press.as_ref().expect("press armed");
        assert_eq!(press.origin, Point::new(10.0, 20.0));
        assert_eq!(press.index, 2);
        assert_eq!(press.id, ItemId::from("c"));
        assert_eq!(host.timers.len(), 1);
        assert!(!state.selecting);
    }

    #[test]
    fn new_press_cancels_prior_timer() {
        let (mut engine, mut state, mut host) = setup();
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 0, "a", None);
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 1, "b", None);
        assert_eq!(host.timers.len(), 1);
        host.elapse(&mut engine, &mut state, LONG_PRESS);
        assert_eq!(state.selection_vec(), ids(["b"]));
        assert_eq!(host.flashed, ids(["b"]));
    }

    #[test]
    fn non_primary_button_is_ignored() {
        let (mut engine, mut state, mut host) = setup();
        let ev = down(0.0, 0.0).with_button(PointerButton::Secondary);
        engine.handle_pointer_down(&mut state, &mut host, &ev, 0, "a", None);
        assert!(!state.press_active());
        assert!(host.timers.is_empty());
    }

    #[test]
    fn modifier_press_cancels_pending_press_and_clears_suppression() {
        let (mut engine, mut state, mut host) = setup();
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 0, "a", None);
        state.suppress_click = true;
        let ev = down(0.0, 0.0).with_modifiers(Modifiers::CTRL);
        engine.handle_pointer_down(&mut state, &mut host, &ev, 1, "b", None);
        assert!(!state.press_active());
        assert!(host.timers.is_empty());
        assert!(!state.suppress_click);
    }

    #[test]
    fn alt_does_not_bypass_the_press_tracker() {
        let (mut engine, mut state, mut host) = setup();
        let ev = down(0.0, 0.0).with_modifiers(Modifiers::ALT);
        engine.handle_pointer_down(&mut state, &mut host, &ev, 0, "a", None);
        assert!(state.press_active());
    }

    #[test]
    fn small_movement_keeps_press() {
        let (mut engine, mut state, mut host) = setup();
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 0, "a", None);
        // Manhattan distance of exactly the threshold does not exceed it.
        engine.handle_pointer_move(&mut state, &mut host, &down(3.0, -3.0));
        assert!(state.press_active());
        host.elapse(&mut engine, &mut state, LONG_PRESS);
        assert!(state.selecting);
    }

    #[test]
    fn drag_to_select_escalates_on_movement() {
        let (_, mut state, mut host) = setup();
        let mut engine = SelectionEngine::new(SelectionConfig::default().with_drag_to_select(true));
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 3, "d", None);
        engine.handle_pointer_move(&mut state, &mut host, &down(4.0, 4.0));
        assert!(state.selecting);
        assert!(state.long_press_triggered);
        assert!(state.suppress_click);
        assert_eq!(state.selection_vec(), ids(["d"]));
        assert_eq!(engine.anchor(), Some(&ItemId::from("d")));
        // The escalation cancelled the long-press timer.
        assert!(host.timers.is_empty());
        host.elapse(&mut engine, &mut state, LONG_PRESS);
        assert_eq!(host.flashed, ids(["d"]));
    }

    #[test]
    fn moves_during_live_gesture_are_ignored() {
        let (mut engine, mut state, mut host) = setup();
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 0, "a", None);
        host.elapse(&mut engine, &mut state, LONG_PRESS);
        engine.handle_pointer_move(&mut state, &mut host, &down(500.0, 500.0));
        assert!(state.selecting);
        assert!(state.press_active());
    }

    #[test]
    fn timer_before_delay_does_nothing() {
        let (mut engine, mut state, mut host) = setup();
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 0, "a", None);
        host.elapse(&mut engine, &mut state, LONG_PRESS - Duration::from_millis(1));
        assert!(!state.selecting);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn stale_timer_token_is_ignored() {
        let (mut engine, mut state, mut host) = setup();
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 0, "a", None);
        let stale = state.press.as_ref().and_then(|p| p.timer).expect("timer");
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 1, "b", None);
        engine.handle_press_timeout(&mut state, &mut host, stale);
        assert!(!state.selecting);
        assert!(host.flashed.is_empty());
    }

    #[test]
    fn cancel_press_state_is_idempotent() {
        let (mut engine, mut state, mut host) = setup();
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 0, "a", None);
        state.long_press_triggered = true;
        engine.cancel_press_state(&mut state, &mut host);
        engine.cancel_press_state(&mut state, &mut host);
        assert!(!state.press_active());
        assert!(!state.long_press_triggered);
        assert!(host.timers.is_empty());
    }

    #[test]
    fn start_selection_on_selected_item_only_moves_anchor() {
        let (mut engine, mut state, mut host) = setup();
        state.selection.extend(ids(["b", "c"]));
        engine.start_selection(&mut state, &mut host, 2, "c");
        assert!(!state.selecting);
        assert!(!state.long_press_triggered);
        assert!(host.flashed.is_empty());
        assert_eq!(engine.anchor(), Some(&ItemId::from("c")));
        assert_eq!(state.selection_vec(), ids(["b", "c"]));
    }

    #[test]
    fn late_selection_change_turns_escalation_into_anchor_update() {
        let (mut engine, mut state, mut host) = setup();
        engine.handle_pointer_down(&mut state, &mut host, &down(0.0, 0.0), 4, "e", None);
        // The host selects "e" by other means while the press is pending.
        state.selection.insert(ItemId::from("e"));
        host.elapse(&mut engine, &mut state, LONG_PRESS);
        assert!(!state.selecting);
        assert_eq!(engine.anchor(), Some(&ItemId::from("e")));
        assert_eq!(state.selection_vec(), ids(["e"]));
    }

    #[test]
    fn gesture_claims_board_and_blocks_other_grids() {
        let board = GestureBoard::new();
        let mut left = SelectionEngine::mounted(SelectionConfig::default(), &board);
        let mut right = SelectionEngine::mounted(SelectionConfig::default(), &board);
        let (mut left_state, mut right_state) = (SelectionState::new(), SelectionState::new());
        let mut left_host = GridHost::new(ids(["a", "b"]));
        let mut right_host = GridHost::new(ids(["x", "y"]));

        left.handle_pointer_down(
            &mut left_state,
            &mut left_host,
            &down(0.0, 0.0),
            0,
            "a",
            None,
        );
        left_host.elapse(&mut left, &mut left_state, LONG_PRESS);
        assert_eq!(board.active(), left.grid_id());

        right.handle_pointer_down(
            &mut right_state,
            &mut right_host,
            &down(0.0, 0.0),
            0,
            "x",
            None,
        );
        assert!(!right_state.press_active());
        assert!(right_host.timers.is_empty());

        left.end_gesture(&mut left_state, &mut left_host);
        assert_eq!(board.active(), None);
        right.handle_pointer_down(
            &mut right_state,
            &mut right_host,
            &down(0.0, 0.0),
            0,
            "x",
            None,
        );
        assert!(right_state.press_active());
    }
}
