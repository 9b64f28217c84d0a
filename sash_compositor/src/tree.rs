// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The window arena: slot storage, the top-level registry and structural queries.

use alloc::vec::Vec;

use sash_rect::Rect;

use crate::container::WindowContainer;
use crate::message::PackagedMessage;
use crate::types::{Style, WindowHandle};
use crate::window::Window;

#[derive(Debug)]
struct Slot {
    generation: u32,
    window: Option<Window>,
}

/// Every window, addressed by generational handle.
///
/// The tree exclusively owns all windows. Parent links, child lists and the
/// top-level registry only hold [`WindowHandle`]s.
#[derive(Debug)]
pub struct WindowTree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    top_level: WindowContainer,
    display: Rect,
    /// Display area uncovered by a top-level window and not yet repainted.
    background_damage: Rect,
    live: usize,
    /// Messages queued across all windows.
    pending: usize,
}

impl WindowTree {
    pub(crate) fn new(display: Rect) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            top_level: WindowContainer::new(),
            display,
            background_damage: Rect::EMPTY,
            live: 0,
            pending: 0,
        }
    }

    /// Display bounds used for the on-screen test.
    pub fn display(&self) -> Rect {
        self.display
    }

    /// The top-level registry, back to front.
    pub fn top_level(&self) -> &WindowContainer {
        &self.top_level
    }

    /// Number of windows in the arena.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no window exists.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns `true` if `handle` refers to an existing window.
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Window behind a handle, if it is not stale.
    pub fn get(&self, handle: WindowHandle) -> Option<&Window> {
        let slot = self.slots.get(handle.idx())?;
        (slot.generation == handle.generation())
            .then_some(slot.window.as_ref())
            .flatten()
    }

    /// Mutable window behind a handle, if it is not stale.
    pub fn get_mut(&mut self, handle: WindowHandle) -> Option<&mut Window> {
        let slot = self.slots.get_mut(handle.idx())?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.window.as_mut()
    }

    pub(crate) fn insert(&mut self, window: Window) -> WindowHandle {
        self.live += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx];
            slot.generation = slot.generation.wrapping_add(1);
            slot.window = Some(window);
            return WindowHandle::new(slot_index(idx), slot.generation);
        }
        self.slots.push(Slot {
            generation: 1,
            window: Some(window),
        });
        WindowHandle::new(slot_index(self.slots.len() - 1), 1)
    }

    pub(crate) fn release(&mut self, handle: WindowHandle) -> Option<Window> {
        let slot = self.slots.get_mut(handle.idx())?;
        if slot.generation != handle.generation() {
            return None;
        }
        let window = slot.window.take()?;
        self.free.push(handle.idx());
        self.live -= 1;
        self.pending -= window.queue.len();
        Some(window)
    }

    /// The sibling list a window with this parent belongs to.
    pub(crate) fn siblings(&self, parent: Option<WindowHandle>) -> Option<&WindowContainer> {
        match parent {
            None => Some(&self.top_level),
            Some(p) => self.get(p).map(|w| &w.children),
        }
    }

    pub(crate) fn siblings_mut(
        &mut self,
        parent: Option<WindowHandle>,
    ) -> Option<&mut WindowContainer> {
        match parent {
            None => Some(&mut self.top_level),
            Some(p) => self.get_mut(p).map(|w| &mut w.children),
        }
    }

    /// Nearest parentless ancestor (or the window itself).
    pub fn top_level_of(&self, handle: WindowHandle) -> Option<WindowHandle> {
        let mut current = handle;
        loop {
            match self.get(current)?.parent {
                Some(p) => current = p,
                None => return Some(current),
            }
        }
    }

    /// Visible ∧ alive ∧ parent drawable ∧ on-screen.
    pub fn is_drawable(&self, handle: WindowHandle) -> bool {
        let mut current = Some(handle);
        while let Some(h) = current {
            let Some(w) = self.get(h) else {
                return false;
            };
            if !w.is_alive() || !w.is_visible() || !w.rect.intersects(&self.display) {
                return false;
            }
            current = w.parent;
        }
        true
    }

    /// Display-global area the window can paint: its rect clipped by every
    /// ancestor and the display.
    pub fn visible_clip(&self, handle: WindowHandle) -> Rect {
        let mut clip = self.display;
        let mut current = Some(handle);
        while let Some(h) = current {
            let Some(w) = self.get(h) else {
                return Rect::EMPTY;
            };
            clip = clip.intersection(&w.rect);
            current = w.parent;
        }
        clip
    }

    /// Reassigns `0..N` to the top-level windows in registry order.
    pub(crate) fn recalculate_z_order(&mut self) {
        let order = self.top_level.to_vec();
        for (z, h) in order.into_iter().enumerate() {
            if let Some(w) = self.get_mut(h) {
                w.z_order = z;
            }
        }
    }

    pub(crate) fn set_foreground(&mut self, handle: WindowHandle) -> bool {
        if !self.top_level.bring_to_front(handle) {
            return false;
        }
        self.recalculate_z_order();
        let clip = self.visible_clip(handle);
        if let Some(w) = self.get_mut(handle) {
            w.dirty_rect.merge(&clip);
        }
        true
    }

    /// Marks `rect` (display-global) as needing a blit from every drawable
    /// top-level window below stacking position `below`, and as exposed
    /// background.
    pub(crate) fn expose(&mut self, rect: Rect, below: usize) {
        let rect = rect.intersection(&self.display);
        if rect.is_empty() {
            return;
        }
        self.background_damage.merge(&rect);
        for h in self.top_level.to_vec().into_iter().take(below) {
            if let Some(w) = self.get_mut(h) {
                let hit = rect.intersection(&w.rect);
                w.dirty_rect.merge(&hit);
            }
        }
    }

    pub(crate) fn set_display(&mut self, display: Rect) {
        self.display = display;
    }

    /// Forces every top-level window and the background to be recomposited.
    pub(crate) fn invalidate_display(&mut self) {
        let display = self.display;
        self.background_damage = display;
        for h in self.top_level.to_vec() {
            if let Some(w) = self.get_mut(h) {
                w.dirty_rect = w.rect.intersection(&display);
            }
        }
    }

    pub(crate) fn take_background_damage(&mut self) -> Rect {
        core::mem::replace(&mut self.background_damage, Rect::EMPTY)
    }

    /// Requests a repaint.
    pub fn mark_dirty(&mut self, handle: WindowHandle) -> bool {
        match self.get_mut(handle) {
            Some(w) => {
                w.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Merges the window's visible area into its top-level ancestor's dirty rect.
    pub(crate) fn propagate_dirty(&mut self, handle: WindowHandle) {
        let clip = self.visible_clip(handle);
        if let Some(top) = self.top_level_of(handle)
            && let Some(w) = self.get_mut(top)
        {
            w.dirty_rect.merge(&clip);
        }
    }

    /// Shows a window and schedules its repaint.
    pub fn show(&mut self, handle: WindowHandle) -> bool {
        let Some(w) = self.get_mut(handle) else {
            return false;
        };
        if w.is_visible() {
            return false;
        }
        w.style.insert(Style::VISIBLE);
        w.mark_dirty();
        true
    }

    /// Hides a window and schedules repaint of whatever it covered.
    pub fn hide(&mut self, handle: WindowHandle) -> bool {
        let was_drawable = self.is_drawable(handle);
        let clip = self.visible_clip(handle);
        let Some(w) = self.get_mut(handle) else {
            return false;
        };
        if !w.is_visible() {
            return false;
        }
        w.style.remove(Style::VISIBLE);
        w.dirty_rect = Rect::EMPTY;
        let parent = w.parent;
        if was_drawable {
            self.uncover(handle, parent, clip);
        }
        true
    }

    /// Schedules repaint of the area a window no longer covers.
    pub(crate) fn uncover(&mut self, handle: WindowHandle, parent: Option<WindowHandle>, area: Rect) {
        match parent {
            Some(p) => {
                self.mark_dirty(p);
            }
            None => {
                let below = self.top_level.position(handle).unwrap_or(self.top_level.len());
                self.expose(area, below);
            }
        }
    }

    /// Returns `true` if any window has queued messages.
    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }

    /// Takes the oldest message queued on a window.
    pub(crate) fn pop_message(&mut self, handle: WindowHandle) -> Option<PackagedMessage> {
        let msg = self.get_mut(handle)?.queue.pop_front()?;
        self.pending -= 1;
        Some(msg)
    }

    /// Moves every descendant of `handle` by `(dx, dy)`.
    pub(crate) fn translate_children(&mut self, handle: WindowHandle, dx: i32, dy: i32) {
        let Some(children) = self.get(handle).map(|w| w.children.to_vec()) else {
            return;
        };
        for child in children {
            if let Some(w) = self.get_mut(child) {
                w.rect = w.rect.offset(dx, dy);
            }
            self.translate_children(child, dx, dy);
        }
    }

    /// Appends a message to a window's queue.
    pub fn queue_message(&mut self, handle: WindowHandle, msg: PackagedMessage) -> bool {
        match self.get_mut(handle) {
            Some(w) if w.is_alive() => {
                w.queue.push_back(msg);
                self.pending += 1;
                true
            }
            _ => false,
        }
    }
}

fn slot_index(idx: usize) -> u32 {
    u32::try_from(idx).unwrap_or_else(|_| {
        crate::error::fatal_invariant(format_args!("window arena exceeded u32 slots"))
    })
}
