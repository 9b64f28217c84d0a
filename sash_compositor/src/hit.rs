// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch routing: point-to-window resolution, topmost first.
//!
//! A hit test never delivers input directly. The claiming window gets a tap
//! queued and sees it on the next [`WindowManager::process_queues`] pass.

use sash_rect::Point;

use crate::driver::{Clock, Display, TouchInput};
use crate::manager::WindowManager;
use crate::message::PackagedMessage;
use crate::theme::Theme;
use crate::tree::WindowTree;
use crate::types::WindowHandle;

impl<D: Display, C: Clock, T: Theme> WindowManager<D, C, T> {
    /// Resolves a touch at a display-global point.
    ///
    /// Calls closer together than [`hit_test_debounce_ms`] are ignored. While
    /// the screensaver is up, a touch only wakes the display. Otherwise the
    /// topmost drawable window under the point, preferring its deepest
    /// claiming child, gets a tap queued. At most one window claims a touch.
    ///
    /// [`hit_test_debounce_ms`]: crate::ManagerConfig::hit_test_debounce_ms
    pub fn hit_test(&mut self, at: Point) -> Option<WindowHandle> {
        let now = self.clock.now_ms();
        if let Some(last) = self.last_hit_ms
            && now.saturating_sub(last) < self.config.hit_test_debounce_ms
        {
            tracing::trace!(x = at.x, y = at.y, "touch debounced");
            return None;
        }
        self.last_hit_ms = Some(now);

        if self.screensaver.touch(now) {
            tracing::debug!("screensaver dismissed by touch");
            return None;
        }

        let claimant = self
            .tree
            .top_level()
            .iter()
            .rev()
            .find_map(|top| claim(&self.tree, top, at))?;
        self.tree.queue_message(claimant, PackagedMessage::tap(at));
        tracing::trace!(x = at.x, y = at.y, ?claimant, "touch claimed");
        Some(claimant)
    }

    /// Reads one point from `touch` and hit-tests it.
    pub fn poll_touch(&mut self, touch: &mut dyn TouchInput) -> Option<WindowHandle> {
        let at = touch.read_touch()?;
        self.hit_test(at)
    }
}

/// The deepest drawable window of `handle`'s subtree containing `at`, with
/// later siblings tried first.
fn claim(tree: &WindowTree, handle: WindowHandle, at: Point) -> Option<WindowHandle> {
    if !tree.is_drawable(handle) || !tree.visible_clip(handle).contains_point(at.x, at.y) {
        return None;
    }
    let window = tree.get(handle)?;
    window
        .children()
        .iter()
        .rev()
        .find_map(|child| claim(tree, child, at))
        .or(Some(handle))
}
