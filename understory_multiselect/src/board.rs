// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-grid gesture exclusion.
//!
//! ## Overview
//!
//! Several grids can be mounted in the same window, each with its own engine
//! and state. Only one pointer is physically in flight, so at most one grid may
//! own a drag-select gesture at a time. A [`GestureBoard`] is shared by all
//! grids of a window; each engine registers on mount and receives a
//! [`Registration`] guard.
//!
//! - Starting a gesture claims the board for that grid.
//! - Pointer-downs on any other grid are ignored while the claim is held.
//! - Ending the gesture releases the claim. Dropping the guard (unmount) releases
//!   it too and removes the grid from the board.
//!
//! Window-level pointer-up and key-up handlers can ask [`GestureBoard::active`]
//! which grid to end the gesture for.
//!
//! The board is single-threaded (`Rc`), matching the event loop it serves.

use alloc::rc::Rc;
use core::cell::RefCell;

/// Identifier of a grid registered on a [`GestureBoard`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridId(u32);

#[derive(Debug, Default)]
struct BoardInner {
    next_id: u32,
    mounted: Vec<GridId>,
    active: Option<GridId>,
}

/// Shared record of mounted grids and which one owns the live gesture.
///
/// Cloning yields another handle to the same board.
#[derive(Clone, Debug, Default)]
pub struct GestureBoard {
    inner: Rc<RefCell<BoardInner>>,
}

impl GestureBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a grid. The grid stays mounted until the guard is dropped.
    pub fn register(&self) -> Registration {
        let mut inner = self.inner.borrow_mut();
        let id = GridId(inner.next_id);
        inner.next_id += 1;
        inner.mounted.push(id);
        log::trace!("grid {id:?} mounted");
        Registration {
            id,
            inner: Rc::clone(&self.inner),
        }
    }

    /// Grid currently owning a drag-select gesture, if any.
    pub fn active(&self) -> Option<GridId> {
        self.inner.borrow().active
    }

    /// Returns `true` if `grid` is registered.
    pub fn is_mounted(&self, grid: GridId) -> bool {
        self.inner.borrow().mounted.contains(&grid)
    }

    /// Number of registered grids.
    pub fn mounted_len(&self) -> usize {
        self.inner.borrow().mounted.len()
    }
}

/// RAII guard for one grid's membership on a [`GestureBoard`].
#[derive(Debug)]
pub struct Registration {
    id: GridId,
    inner: Rc<RefCell<BoardInner>>,
}

impl Registration {
    /// Identifier of the registered grid.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Returns `true` if a different grid owns the live gesture.
    pub fn other_active(&self) -> bool {
        self.inner
            .borrow()
            .active
            .is_some_and(|active| active != self.id)
    }

    /// Returns `true` if this grid owns the live gesture.
    pub fn holds_claim(&self) -> bool {
        self.inner.borrow().active == Some(self.id)
    }

    /// Claim the board for this grid.
    pub(crate) fn claim(&self) {
        self.inner.borrow_mut().active = Some(self.id);
    }

    /// Release the claim if this grid holds it.
    pub(crate) fn release(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.active == Some(self.id) {
            inner.active = None;
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if inner.active == Some(self.id) {
            inner.active = None;
        }
        inner.mounted.retain(|&id| id != self.id);
        log::trace!("grid {:?} unmounted", self.id);
    }
}
