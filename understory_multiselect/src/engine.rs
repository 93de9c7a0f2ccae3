// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection engine.
//!
//! ## Overview
//!
//! [`SelectionEngine`] turns forwarded pointer, hover, click, and timer events
//! into mutations of a host-owned [`SelectionState`]. Its operations are split
//! by responsibility:
//!
//! - Press tracking (`handle_pointer_down`, `handle_pointer_move`,
//!   `handle_press_timeout`, `cancel_press_state`, `start_selection`) lives in
//!   [`press`](crate::press).
//! - Range selection (`handle_select_hover`, `update_selection`,
//!   `clear_selection`) lives in [`range`](crate::range).
//! - Modifier clicks (`handle_click_selection`) live in [`click`](crate::click).
//!
//! This module holds the engine itself, its anchor, and gesture teardown.
//!
//! ## Anchor
//!
//! The anchor is the identifier the next shift-click range starts from. It
//! moves whenever an operation meaningfully changes the selection: a long-press
//! start, a range extension (always to the item at the gesture's start index),
//! a toggle, or a range click. Hovering within a gesture never moves it away
//! from the initiating item. Clearing the selection clears it.

use crate::board::{GestureBoard, GridId, Registration};
use crate::config::{ConfigError, SelectionConfig};
use crate::host::SelectionHost;
use crate::state::SelectionState;
use crate::types::{GroupKey, ItemId};

/// Per-grid multi-select gesture engine.
///
/// ## Usage
///
/// - Construct with [`SelectionEngine::new`] for a standalone grid, or with
///   [`SelectionEngine::mounted`] to take part in cross-grid exclusion through a
///   shared [`GestureBoard`].
/// - Forward pointer-down, pointer-move, hover, and click events from the
///   toolkit, plus elapsed long-press timers.
/// - Call [`SelectionEngine::end_gesture`] from window-level pointer-up and
///   key-up handlers, and [`SelectionEngine::unmount`] when the grid goes away.
#[derive(Debug)]
pub struct SelectionEngine {
    pub(crate) config: SelectionConfig,
    pub(crate) anchor: Option<ItemId>,
    /// Group recorded at the most recent accepted pointer-down.
    pub(crate) group: Option<GroupKey>,
    pub(crate) registration: Option<Registration>,
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

impl SelectionEngine {
    /// Create a standalone engine.
    ///
    /// The configuration is not validated; use [`SelectionEngine::try_new`] for
    /// untrusted values.
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            anchor: None,
            group: None,
            registration: None,
        }
    }

    /// Create a standalone engine after validating `config`.
    pub fn try_new(config: SelectionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create an engine registered on `board`.
    ///
    /// The registration lasts until [`SelectionEngine::unmount`] or drop.
    pub fn mounted(config: SelectionConfig, board: &GestureBoard) -> Self {
        Self {
            registration: Some(board.register()),
            ..Self::new(config)
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect from the next press.
    pub fn set_config(&mut self, config: SelectionConfig) {
        self.config = config;
    }

    /// Identifier the next shift-click range will start from.
    pub fn anchor(&self) -> Option<&ItemId> {
        self.anchor.as_ref()
    }

    /// Group recorded at the most recent accepted pointer-down.
    pub fn group(&self) -> Option<&GroupKey> {
        self.group.as_ref()
    }

    /// This grid's identifier on its board, if mounted on one.
    pub fn grid_id(&self) -> Option<GridId> {
        self.registration.as_ref().map(Registration::id)
    }

    /// End the current gesture, if any.
    ///
    /// Call from window-level pointer-up and key-up handlers. Cancels any
    /// pending press, leaves selecting mode, and releases this grid's claim on
    /// the board. The selection and the click-suppression flag are kept.
    /// Safe to call repeatedly.
    pub fn end_gesture<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
    ) {
        let was_selecting = state.selecting;
        self.cancel_press_state(state, host);
        state.selecting = false;
        if let Some(registration) = &self.registration {
            registration.release();
        }
        if was_selecting {
            log::debug!(
                "selection gesture ended with {} item(s) selected",
                state.selection.len()
            );
        }
    }

    /// Tear down for an unmounting grid.
    ///
    /// Ends any gesture (clearing a pending timer so it cannot fire against a
    /// destroyed host) and leaves the board.
    pub fn unmount<H: SelectionHost + ?Sized>(
        &mut self,
        state: &mut SelectionState,
        host: &mut H,
    ) {
        self.end_gesture(state, host);
        self.registration = None;
    }

    /// Returns `true` if another grid on the board owns the live gesture.
    pub(crate) fn other_grid_selecting(&self) -> bool {
        self.registration
            .as_ref()
            .is_some_and(Registration::other_active)
    }
}
