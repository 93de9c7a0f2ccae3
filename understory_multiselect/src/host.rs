// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The callback contract between a grid host and the engine.

use alloc::borrow::Cow;
use core::time::Duration;

use crate::types::{GroupKey, ItemId, PressTimer};

/// Callbacks the engine needs from the grid that owns it.
///
/// The engine never listens to toolkit events itself. Hosts forward pointer,
/// hover, click, and timer events into
/// [`SelectionEngine`](crate::engine::SelectionEngine) and implement this trait
/// so the engine can read the live layout, request visual feedback, and manage
/// the long-press timer.
pub trait SelectionHost {
    /// Current visual order of items for `group` (or the whole grid for `None`).
    ///
    /// Called fresh every time a range is resolved, possibly several times per
    /// gesture, so it must reflect live reordering and repagination.
    fn order(&self, group: Option<&GroupKey>) -> Cow<'_, [ItemId]>;

    /// Acknowledge that a selection gesture started on `id`.
    ///
    /// Called exactly once per gesture start. Timing and styling of the
    /// feedback belong to the host.
    fn flash_selection(&mut self, id: &ItemId);

    /// Schedule the long-press timer to elapse after `delay`.
    ///
    /// When it elapses, the host calls
    /// [`SelectionEngine::handle_press_timeout`](crate::engine::SelectionEngine::handle_press_timeout)
    /// with the returned token.
    fn schedule_press_timer(&mut self, delay: Duration) -> PressTimer;

    /// Cancel a timer previously returned by [`Self::schedule_press_timer`].
    ///
    /// Called at most once per token, and never for a token whose timeout was
    /// already delivered.
    fn cancel_press_timer(&mut self, timer: PressTimer);
}
