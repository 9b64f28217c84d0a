// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recoverable error types and the fatal-geometry escape hatch.
//!
//! Configuration mistakes (bad IDs, style/parent mismatches, vetoed creation)
//! are ordinary `Result` errors. Corrupted geometry is not: see [`fatal_invariant`].

use core::fmt;

use crate::types::WindowId;

/// Why the window factory refused to create a window.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreateError {
    /// [`WindowId::RESERVED`] was requested.
    #[error("window id {0} is reserved")]
    ReservedId(WindowId),
    /// `Style::CHILD` was requested without a parent.
    #[error("child style requires a parent window")]
    ChildWithoutParent,
    /// `Style::TOP_LEVEL` was requested together with a parent.
    #[error("top-level style cannot have a parent window")]
    TopLevelWithParent,
    /// The parent handle is stale or the parent is not alive.
    #[error("parent window is not alive")]
    ParentNotAlive,
    /// A sibling already uses this ID.
    #[error(transparent)]
    DuplicateId(#[from] ContainerError),
    /// The pre-create hook rejected the window.
    #[error("pre-create hook rejected window {0}")]
    Rejected(WindowId),
    /// The behavior's create handler vetoed the window.
    #[error("create handler failed for window {0}")]
    CreateFailed(WindowId),
}

/// Errors raised by [`WindowContainer`](crate::WindowContainer) mutation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// A window with this ID is already a member.
    #[error("duplicate window id {0} among siblings")]
    DuplicateId(WindowId),
}

/// A display or touch peripheral failed to come up.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    /// The display controller did not respond.
    #[error("display controller not responding")]
    NoDisplay,
    /// The touch controller did not respond.
    #[error("touch controller not responding")]
    NoTouch,
    /// Driver-specific failure.
    #[error("display driver error: {0}")]
    Driver(&'static str),
}

/// Logs a geometry or bookkeeping invariant violation and halts.
///
/// Continuing after corrupted geometry would silently scribble over the
/// display, so there is no recovery path.
#[cold]
#[track_caller]
pub(crate) fn fatal_invariant(what: fmt::Arguments<'_>) -> ! {
    tracing::error!(%what, "compositor invariant violated");
    panic!("compositor invariant violated: {what}");
}
