// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window identities, handles, and the style/state bit sets.

use core::fmt;

/// Application-chosen identifier of a window.
///
/// IDs are small integers that only need to be unique among siblings: two
/// windows with different parents may share an ID. [`WindowId::RESERVED`]
/// cannot be used for a window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u16);

impl WindowId {
    /// Reserved sentinel; rejected by the window factory.
    pub const RESERVED: Self = Self(0);
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a window living in a [`WindowManager`](crate::WindowManager).
///
/// A handle is a slot index plus a generation counter, so it stays cheap to
/// copy and store in parent/child links.
///
/// - On creation, a window takes a free slot; reused slots get a bumped generation.
/// - On destruction, the slot is released and any handle to it becomes stale.
/// - Stale handles never alias a newer window because the generation must match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub(crate) u32, pub(crate) u32);

impl WindowHandle {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Capability and category flags of a window.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Style: u32 {
        /// Window is shown.
        const VISIBLE      = 1 << 0;
        /// Window is the child of another window.
        const CHILD        = 1 << 1;
        /// Draw a frame around the window.
        const FRAME        = 1 << 2;
        /// Draw a drop shadow under the window.
        const SHADOW       = 1 << 3;
        /// Window is a top-level window (no parent, own pixel buffer).
        const TOP_LEVEL    = 1 << 4;
        /// Size the window from its content at creation and on text change.
        const AUTO_SIZE    = 1 << 5;
        /// Force the window to cover the whole display.
        const FULL_SCREEN  = 1 << 6;

        /// Widget kind: push button.
        const BUTTON       = 1 << 16;
        /// Widget kind: static text.
        const LABEL        = 1 << 17;
        /// Widget kind: check box.
        const CHECKBOX     = 1 << 18;
        /// Widget kind: progress bar.
        const PROGRESS_BAR = 1 << 19;
        /// Widget kind: modal prompt.
        const PROMPT       = 1 << 20;
    }
}

impl Style {
    /// Every widget-kind marker.
    pub const WIDGET_KINDS: Self = Self::BUTTON
        .union(Self::LABEL)
        .union(Self::CHECKBOX)
        .union(Self::PROGRESS_BAR)
        .union(Self::PROMPT);
}

impl Default for Style {
    fn default() -> Self {
        Self::VISIBLE
    }
}

bitflags::bitflags! {
    /// Runtime state of a window.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct State: u8 {
        /// Window was created and not yet destroyed.
        const ALIVE   = 1 << 0;
        /// Toggle state (check boxes, latched buttons).
        const CHECKED = 1 << 1;
        /// Window content must be repainted.
        const DIRTY   = 1 << 2;
    }
}
