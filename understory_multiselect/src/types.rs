// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the selection engine: identifiers, group keys, modifiers, and events.
//!
//! ## Overview
//!
//! These types describe what a host forwards into the engine and what the
//! engine hands back. They are referenced by
//! [`SelectionEngine`](crate::engine::SelectionEngine) and by the
//! [`SelectionHost`](crate::host::SelectionHost) callbacks.
//!
//! ## Identifiers
//!
//! Item identifiers often arrive as numbers at one call site and as strings at
//! another (for example a numeric database key versus a `data-id` attribute).
//! [`ItemId`] and [`GroupKey`] normalize every input to a canonical string key
//! at construction, so `ItemId::from(7_u32) == ItemId::from("7")` and both hash
//! identically. All membership checks in the engine go through these keys.

use alloc::sync::Arc;
use core::fmt;

use kurbo::Point;

macro_rules! canonical_key {
    (@ints $name:ident: $($int:ty),*) => {
        $(
            impl From<$int> for $name {
                fn from(value: $int) -> Self {
                    Self(Arc::from(alloc::format!("{value}")))
                }
            }
        )*
    };
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Returns the canonical string form of this key.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(Arc::from(value))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Arc::from(value))
            }
        }

        impl From<&String> for $name {
            fn from(value: &String) -> Self {
                Self(Arc::from(value.as_str()))
            }
        }

        canonical_key!(@ints $name: u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
    };
}

canonical_key!(
    /// Identifier of one selectable item, stored as a canonical string key.
    ///
    /// Cloning is cheap (reference counted), which matters because range
    /// selections copy slices of the current order.
    ItemId
);

canonical_key!(
    /// Tag isolating a gesture to the sub-grid where it began.
    ///
    /// Hosts that render several independent sub-grids under one logical
    /// component pass a group key with pointer-down and hover calls; hover
    /// events from a different group than the active gesture are ignored.
    GroupKey
);

bitflags::bitflags! {
    /// Keyboard modifiers held while a pointer or click event occurred.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key: extend a range from the anchor.
        const SHIFT = 0b0000_0001;
        /// Control key: toggle membership.
        const CTRL  = 0b0000_0010;
        /// Alt / Option key. Not interpreted by the engine.
        const ALT   = 0b0000_0100;
        /// Meta / Command key: toggle membership (macOS equivalent of `CTRL`).
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if ctrl or cmd is held.
    pub fn is_toggle(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }

    /// Returns `true` if shift is held.
    pub fn is_range(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns `true` if any modifier the engine interprets is held.
    ///
    /// Such presses bypass the long-press tracker and are resolved on click.
    pub fn is_selection_modifier(self) -> bool {
        self.is_toggle() || self.is_range()
    }
}

/// Pointer button that produced a pointer-down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (left mouse button, touch contact, pen tip).
    #[default]
    Primary,
    /// Secondary button (right mouse button).
    Secondary,
    /// Auxiliary button (middle mouse button).
    Auxiliary,
    /// Any other button, by toolkit-specific number.
    Other(u16),
}

/// A pointer-down or pointer-move forwarded from the host toolkit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in client coordinates (logical pixels).
    pub position: Point,
    /// Button that changed state; ignored for moves.
    pub button: PointerButton,
    /// Modifiers held at the time of the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a primary-button event without modifiers at `position`.
    pub fn primary(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns this event with `button` instead of the current button.
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Returns this event with `modifiers` instead of the current modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A click forwarded from the host toolkit.
///
/// The engine calls [`ClickEvent::prevent_default`] whenever it handles the
/// click, so the host can skip its own default action.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Modifiers held at the time of the click.
    pub modifiers: Modifiers,
    /// Whether the default action was prevented.
    pub default_prevented: bool,
}

impl ClickEvent {
    /// Create a click with the given modifiers.
    pub fn new(modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            default_prevented: false,
        }
    }

    /// Mark the default action as prevented.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// The item a click landed on, plus the order to resolve ranges against.
#[derive(Clone, Debug)]
pub struct ClickTarget<'a> {
    /// Identifier of the clicked item.
    pub id: ItemId,
    /// Index of the clicked item as known by the caller; used when `id` is not found in the order.
    pub index: Option<usize>,
    /// Explicit order override; when absent the host's order for `group` is used.
    pub order: Option<&'a [ItemId]>,
    /// Sub-grid the click happened in.
    pub group: Option<GroupKey>,
}

impl<'a> ClickTarget<'a> {
    /// Create a target for `id` without index, order, or group.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            index: None,
            order: None,
            group: None,
        }
    }

    /// Set the caller-known index.
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Resolve ranges against `order` instead of asking the host.
    pub fn in_order(mut self, order: &'a [ItemId]) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the sub-grid the click happened in.
    pub fn in_group(mut self, group: impl Into<GroupKey>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Result of [`SelectionEngine::handle_click_selection`](crate::engine::SelectionEngine::handle_click_selection).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    /// `false` if no selection modifier was held; the host applies its own click semantics.
    pub handled: bool,
    /// Whether the selection membership changed.
    pub changed: bool,
    /// The selection after the click.
    pub selection: Vec<ItemId>,
}

impl ClickOutcome {
    pub(crate) fn unhandled(selection: Vec<ItemId>) -> Self {
        Self {
            handled: false,
            changed: false,
            selection,
        }
    }
}

/// Opaque token for a scheduled long-press timer.
///
/// Hosts that own their own scheduler mint tokens with [`PressTimer::from_raw`];
/// [`TimerQueue`](crate::timer::TimerQueue) mints them itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PressTimer(u64);

impl PressTimer {
    /// Wrap a host-specific timer handle.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the host-specific timer handle.
    pub const fn raw(self) -> u64 {
        self.0
    }
}
