// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The window manager: factory, per-window operations and message plumbing.
//!
//! Hit testing and the render pass extend [`WindowManager`] from their own modules.

use alloc::boxed::Box;
use alloc::vec::Vec;

use sash_rect::Rect;

use crate::buffer::PixelBuffer;
use crate::container::WindowContainer;
use crate::config::{ConcurrencyMode, ManagerConfig, TouchInbox};
use crate::dispatch;
use crate::driver::{Clock, Display, Rotation};
use crate::error::{ContainerError, CreateError, DisplayError};
use crate::message::{MessageKind, PackagedMessage};
use crate::screensaver::Screensaver;
use crate::theme::{ColorId, FlatTheme, Theme};
use crate::tree::WindowTree;
use crate::types::{State, Style, WindowHandle, WindowId};
use crate::window::{Window, WindowBehavior};

/// Owns every window, the display and the collaborators that drive them.
///
/// The application calls [`hit_test`](Self::hit_test) (or
/// [`poll_touch`](Self::poll_touch)) when a touch arrives and
/// [`update`](Self::update) once per loop iteration.
pub struct WindowManager<D, C, T = FlatTheme> {
    pub(crate) tree: WindowTree,
    pub(crate) display: D,
    pub(crate) clock: C,
    pub(crate) theme: T,
    pub(crate) config: ManagerConfig,
    pub(crate) screensaver: Screensaver,
    pub(crate) inbox: Option<TouchInbox>,
    pub(crate) last_hit_ms: Option<u64>,
}

impl<D, C, T> core::fmt::Debug for WindowManager<D, C, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowManager")
            .field("tree", &self.tree)
            .field("config", &self.config)
            .field("screensaver", &self.screensaver)
            .finish_non_exhaustive()
    }
}

impl<D: Display, C: Clock, T: Theme> WindowManager<D, C, T> {
    /// Brings the display up and builds an empty manager.
    pub fn new(mut display: D, clock: C, theme: T, config: ManagerConfig) -> Result<Self, DisplayError> {
        display.begin()?;
        let bounds = display.bounds();
        let inbox = match config.concurrency {
            ConcurrencyMode::SingleThreaded => None,
            ConcurrencyMode::Guarded => Some(TouchInbox::new(config.inbox_capacity)),
        };
        tracing::debug!(?bounds, mode = ?config.concurrency, "window manager up");
        Ok(Self {
            tree: WindowTree::new(bounds),
            display,
            clock,
            theme,
            config,
            screensaver: Screensaver::default(),
            inbox,
            last_hit_ms: None,
        })
    }

    /// The window arena.
    pub fn tree(&self) -> &WindowTree {
        &self.tree
    }

    /// The display driver.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display driver.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The theme.
    pub fn theme(&self) -> &T {
        &self.theme
    }

    /// Settings this manager was built with.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Inbox for interrupt-side touches; present in [`ConcurrencyMode::Guarded`] mode.
    pub fn touch_inbox(&self) -> Option<TouchInbox> {
        self.inbox.clone()
    }

    /// Creates a window. See [`create_window_with`](Self::create_window_with).
    pub fn create_window<B: WindowBehavior>(
        &mut self,
        parent: Option<WindowHandle>,
        id: WindowId,
        style: Style,
        rect: Rect,
        text: &str,
        behavior: B,
    ) -> Result<WindowHandle, CreateError> {
        self.create_window_with(parent, id, style, rect, text, behavior, |_| true)
    }

    /// Creates a window, running `pre_create` before the Create message.
    ///
    /// `style` may omit [`Style::CHILD`] and [`Style::TOP_LEVEL`]; the one
    /// matching `parent` is added. Creation fails, leaving the tree as it was,
    /// when:
    ///
    /// - `id` is [`WindowId::RESERVED`],
    /// - a child style has no parent or a top-level style has one,
    /// - the parent is not alive,
    /// - a sibling already uses `id`,
    /// - `pre_create` returns `false`,
    /// - the behavior's create handler returns `false`.
    pub fn create_window_with<B: WindowBehavior>(
        &mut self,
        parent: Option<WindowHandle>,
        id: WindowId,
        style: Style,
        rect: Rect,
        text: &str,
        behavior: B,
        pre_create: impl FnOnce(&mut Window) -> bool,
    ) -> Result<WindowHandle, CreateError> {
        let result = self.try_create(parent, id, style, rect, text, Box::new(behavior), pre_create);
        if let Err(err) = &result {
            tracing::warn!(%id, %err, "window creation refused");
        }
        result
    }

    fn try_create(
        &mut self,
        parent: Option<WindowHandle>,
        id: WindowId,
        style: Style,
        rect: Rect,
        text: &str,
        behavior: Box<dyn WindowBehavior>,
        pre_create: impl FnOnce(&mut Window) -> bool,
    ) -> Result<WindowHandle, CreateError> {
        if id == WindowId::RESERVED {
            return Err(CreateError::ReservedId(id));
        }
        match parent {
            None if style.contains(Style::CHILD) => return Err(CreateError::ChildWithoutParent),
            Some(_) if style.contains(Style::TOP_LEVEL) => {
                return Err(CreateError::TopLevelWithParent);
            }
            Some(p) if !self.tree.get(p).is_some_and(Window::is_alive) => {
                return Err(CreateError::ParentNotAlive);
            }
            _ => {}
        }
        if self
            .tree
            .siblings(parent)
            .is_some_and(|s| s.find(id).is_some())
        {
            return Err(ContainerError::DuplicateId(id).into());
        }

        let placement = if parent.is_some() {
            Style::CHILD
        } else {
            Style::TOP_LEVEL
        };
        let style = style | placement | behavior.kind();
        let rect = if style.contains(Style::FULL_SCREEN) {
            self.tree.display()
        } else {
            rect
        };

        let mut window = Window::new(id, style, rect, parent, text, behavior);
        if !pre_create(&mut window) {
            return Err(CreateError::Rejected(id));
        }
        if parent.is_none() {
            let fill = window.color(ColorId::WindowBackground, &self.theme);
            window.buffer = Some(PixelBuffer::new(rect.width(), rect.height(), fill));
        }

        let handle = self.tree.insert(window);
        let create = PackagedMessage::new(MessageKind::Create);
        if !dispatch::route_message(&mut self.tree, &self.theme, handle, create) {
            self.tree.release(handle);
            return Err(CreateError::CreateFailed(id));
        }
        let added = self
            .tree
            .siblings_mut(parent)
            .map(|s| s.add(id, handle))
            .unwrap_or(Err(ContainerError::DuplicateId(id)));
        if let Err(err) = added {
            self.tree.release(handle);
            return Err(err.into());
        }

        if let Some(w) = self.tree.get_mut(handle) {
            w.state.insert(State::ALIVE);
            w.mark_dirty();
        }
        if parent.is_none() {
            self.tree.recalculate_z_order();
        }
        if style.contains(Style::AUTO_SIZE) {
            self.auto_size(handle);
        }
        tracing::debug!(%id, ?handle, ?parent, "window created");
        Ok(handle)
    }

    /// Destroys a window and its whole subtree.
    ///
    /// The area it covered is scheduled for repaint. Returns `false` for a
    /// stale handle.
    pub fn destroy(&mut self, handle: WindowHandle) -> bool {
        let Some(window) = self.tree.get(handle) else {
            return false;
        };
        let (id, parent) = (window.id, window.parent);
        self.tree.hide(handle);
        dispatch::route_message(
            &mut self.tree,
            &self.theme,
            handle,
            PackagedMessage::new(MessageKind::Destroy),
        );
        self.destroy_subtree(handle);
        if let Some(siblings) = self.tree.siblings_mut(parent) {
            siblings.remove(handle);
        }
        self.tree.release(handle);
        if parent.is_none() {
            self.tree.recalculate_z_order();
        }
        tracing::debug!(%id, ?handle, "window destroyed");
        true
    }

    fn destroy_subtree(&mut self, handle: WindowHandle) {
        let Some(children) = self.tree.get(handle).map(|w| w.children.to_vec()) else {
            return;
        };
        for child in children {
            dispatch::route_message(
                &mut self.tree,
                &self.theme,
                child,
                PackagedMessage::new(MessageKind::Destroy),
            );
            self.destroy_subtree(child);
            self.tree.release(child);
        }
        if let Some(w) = self.tree.get_mut(handle) {
            w.state.remove(State::ALIVE);
            w.children = WindowContainer::new();
        }
    }

    /// A window, if the handle is live.
    pub fn window(&self, handle: WindowHandle) -> Option<&Window> {
        self.tree.get(handle)
    }

    /// Mutable access to a window, if the handle is live.
    pub fn window_mut(&mut self, handle: WindowHandle) -> Option<&mut Window> {
        self.tree.get_mut(handle)
    }

    /// Finds a window by ID among the children of `parent` (or the top level).
    pub fn find(&self, parent: Option<WindowHandle>, id: WindowId) -> Option<WindowHandle> {
        self.tree.siblings(parent)?.find(id)
    }

    /// Returns `true` if the handle refers to a live window.
    pub fn is_alive(&self, handle: WindowHandle) -> bool {
        self.tree.get(handle).is_some_and(Window::is_alive)
    }

    /// Visible ∧ alive ∧ parent drawable ∧ on-screen.
    pub fn is_drawable(&self, handle: WindowHandle) -> bool {
        self.tree.is_drawable(handle)
    }

    /// Shows a window.
    pub fn show(&mut self, handle: WindowHandle) -> bool {
        self.tree.show(handle)
    }

    /// Hides a window, scheduling repaint of what it covered.
    pub fn hide(&mut self, handle: WindowHandle) -> bool {
        self.tree.hide(handle)
    }

    /// Paints a window and its subtree into the top-level buffer now.
    ///
    /// Without `force`, a window that is not dirty is skipped, so calling this
    /// twice in a row paints at most once. Returns the number of windows painted.
    pub fn redraw(&mut self, handle: WindowHandle, force: bool) -> usize {
        dispatch::redraw(&mut self.tree, &self.theme, handle, force)
    }

    /// Moves or resizes a window.
    ///
    /// Descendants move along. Uncovered area is scheduled for repaint and a
    /// Resize message follows a size change.
    pub fn set_rect(&mut self, handle: WindowHandle, rect: Rect) -> bool {
        let Some(old) = self.tree.get(handle).map(|w| (w.rect, w.parent)) else {
            return false;
        };
        let (old_rect, parent) = old;
        if old_rect == rect {
            return true;
        }
        if self.tree.is_drawable(handle) {
            let clip = self.tree.visible_clip(handle);
            self.tree.uncover(handle, parent, clip);
        }
        self.tree
            .translate_children(handle, rect.left - old_rect.left, rect.top - old_rect.top);
        if let Some(w) = self.tree.get_mut(handle) {
            w.rect = rect;
            w.mark_dirty();
        }
        if old_rect.width() != rect.width() || old_rect.height() != rect.height() {
            dispatch::route_message(
                &mut self.tree,
                &self.theme,
                handle,
                PackagedMessage::new(MessageKind::Resize),
            );
        }
        true
    }

    /// Replaces the window text, resizing [`Style::AUTO_SIZE`] windows.
    pub fn set_text(&mut self, handle: WindowHandle, text: &str) -> bool {
        let Some(w) = self.tree.get_mut(handle) else {
            return false;
        };
        if w.text != text {
            w.text.clear();
            w.text.push_str(text);
            w.mark_dirty();
            if w.style.contains(Style::AUTO_SIZE) {
                self.auto_size(handle);
            }
        }
        true
    }

    /// Replaces the presentation flags of a window.
    ///
    /// Placement and widget-kind flags are fixed at creation and kept;
    /// [`Style::VISIBLE`] goes through [`show`](Self::show) / [`hide`](Self::hide).
    pub fn set_style(&mut self, handle: WindowHandle, style: Style) -> bool {
        let fixed = Style::CHILD | Style::TOP_LEVEL | Style::WIDGET_KINDS;
        let Some(w) = self.tree.get_mut(handle) else {
            return false;
        };
        let keep = w.style & (fixed | Style::VISIBLE);
        w.style = keep | (style - fixed - Style::VISIBLE);
        w.mark_dirty();
        let auto = w.style.contains(Style::AUTO_SIZE);
        if style.contains(Style::VISIBLE) {
            self.tree.show(handle);
        } else {
            self.tree.hide(handle);
        }
        if auto {
            self.auto_size(handle);
        }
        true
    }

    fn auto_size(&mut self, handle: WindowHandle) {
        let Some(w) = self.tree.get(handle) else {
            return;
        };
        let (width, height) = w.preferred_size(&self.theme);
        let rect = Rect::from_origin_size(w.rect.left, w.rect.top, width, height);
        self.set_rect(handle, rect);
    }

    /// Rotates the panel and adopts its new bounds.
    ///
    /// [`Style::FULL_SCREEN`] top-level windows are resized to the new
    /// bounds and the whole display is recomposited on the next render.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.display.set_rotation(rotation);
        let bounds = self.display.bounds();
        self.tree.set_display(bounds);
        let full_screen: Vec<WindowHandle> = self
            .tree
            .top_level()
            .iter()
            .filter(|&h| {
                self.tree
                    .get(h)
                    .is_some_and(|w| w.style().contains(Style::FULL_SCREEN))
            })
            .collect();
        for h in full_screen {
            self.set_rect(h, bounds);
        }
        self.tree.invalidate_display();
        tracing::debug!(?rotation, ?bounds, "display rotated");
    }

    /// Raises a top-level window above every other.
    ///
    /// Returns `false` for child windows and stale handles.
    pub fn set_foreground_window(&mut self, handle: WindowHandle) -> bool {
        if !self.tree.get(handle).is_some_and(Window::is_top_level) {
            return false;
        }
        let raised = self.tree.set_foreground(handle);
        if raised {
            tracing::debug!(?handle, "window raised to foreground");
        }
        raised
    }

    /// Stacking position of a top-level window.
    pub fn z_order(&self, handle: WindowHandle) -> Option<usize> {
        self.tree.top_level().position(handle)
    }

    /// Union of the rects of drawable top-level windows stacked above `handle`.
    pub fn obscuring_rect(&self, handle: WindowHandle) -> Rect {
        let Some(pos) = self.tree.top_level().position(handle) else {
            return Rect::EMPTY;
        };
        self.tree
            .top_level()
            .iter()
            .skip(pos + 1)
            .filter(|&h| self.tree.is_drawable(h))
            .filter_map(|h| self.tree.get(h))
            .fold(Rect::EMPTY, |acc, w| acc.union(&w.rect))
    }

    /// Delivers a message immediately.
    pub fn route_message(&mut self, handle: WindowHandle, msg: PackagedMessage) -> bool {
        dispatch::route_message(&mut self.tree, &self.theme, handle, msg)
    }

    /// Queues a message for the next processing pass.
    pub fn queue_message(&mut self, handle: WindowHandle, msg: PackagedMessage) -> bool {
        self.tree.queue_message(handle, msg)
    }

    /// Drains every queue until no window has pending messages.
    ///
    /// Messages queued while draining are delivered in a further pass, up
    /// to [`ManagerConfig::max_queue_passes`]. Returns `true` if all queues
    /// ended empty.
    pub fn process_queues(&mut self) -> bool {
        for _ in 0..self.config.max_queue_passes {
            if !self.tree.has_pending() {
                return true;
            }
            for top in self.tree.top_level().to_vec() {
                dispatch::process_queue(&mut self.tree, &self.theme, top);
            }
        }
        let settled = !self.tree.has_pending();
        if !settled {
            tracing::warn!(
                passes = self.config.max_queue_passes,
                "message queues did not settle"
            );
        }
        settled
    }

    /// The behavior of a window, if it has type `B`.
    pub fn behavior<B: WindowBehavior>(&self, handle: WindowHandle) -> Option<&B> {
        self.tree.get(handle)?.behavior_as::<B>()
    }

    /// Runs `f` on the behavior of a window if it has type `B`, then marks
    /// the window dirty.
    pub fn update_behavior<B: WindowBehavior, R>(
        &mut self,
        handle: WindowHandle,
        f: impl FnOnce(&mut B) -> R,
    ) -> Option<R> {
        let w = self.tree.get_mut(handle)?;
        let r = f(w.behavior_as_mut::<B>()?);
        w.mark_dirty();
        Some(r)
    }

    /// Arms the screensaver with an inactivity timeout.
    pub fn enable_screensaver(&mut self, timeout_ms: u64) {
        let now = self.clock.now_ms();
        self.screensaver.enable(timeout_ms, now);
        tracing::debug!(timeout_ms, "screensaver enabled");
    }

    /// Disarms the screensaver, restoring the display if it was showing.
    pub fn disable_screensaver(&mut self) {
        if self.screensaver.disable() {
            self.tree.invalidate_display();
        }
        tracing::debug!("screensaver disabled");
    }

    /// Returns `true` while the overlay is up.
    pub fn is_screensaver_active(&self) -> bool {
        self.screensaver.is_active()
    }

    /// Returns `true` if a screensaver is armed.
    pub fn is_screensaver_enabled(&self) -> bool {
        self.screensaver.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{ManualClock, MemoryDisplay};
    use crate::window::{Plain, WindowCx};

    type Wm = WindowManager<MemoryDisplay, ManualClock>;

    fn wm() -> Wm {
        WindowManager::new(
            MemoryDisplay::new(200, 200),
            ManualClock::default(),
            FlatTheme,
            ManagerConfig::default(),
        )
        .unwrap()
    }

    fn top(wm: &mut Wm, id: u16, rect: Rect) -> WindowHandle {
        wm.create_window(None, WindowId(id), Style::VISIBLE, rect, "", Plain)
            .unwrap()
    }

    struct Veto;
    impl WindowBehavior for Veto {
        fn on_create(&mut self, _cx: &mut WindowCx<'_>) -> bool {
            false
        }
    }

    #[test]
    fn begin_failure_propagates() {
        let mut display = MemoryDisplay::new(10, 10);
        display.fail_begin = true;
        let r = WindowManager::new(display, ManualClock::default(), FlatTheme, ManagerConfig::default());
        assert_eq!(r.err(), Some(DisplayError::NoDisplay));
    }

    #[test]
    fn factory_rejections() {
        let mut wm = wm();
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(
            wm.create_window(None, WindowId::RESERVED, Style::VISIBLE, r, "", Plain),
            Err(CreateError::ReservedId(WindowId::RESERVED))
        );
        assert_eq!(
            wm.create_window(None, WindowId(1), Style::VISIBLE | Style::CHILD, r, "", Plain),
            Err(CreateError::ChildWithoutParent)
        );
        let a = top(&mut wm, 1, r);
        assert_eq!(
            wm.create_window(Some(a), WindowId(2), Style::TOP_LEVEL, r, "", Plain),
            Err(CreateError::TopLevelWithParent)
        );
        assert_eq!(
            wm.create_window_with(None, WindowId(3), Style::VISIBLE, r, "", Plain, |_| false),
            Err(CreateError::Rejected(WindowId(3)))
        );
        assert_eq!(
            wm.create_window(None, WindowId(4), Style::VISIBLE, r, "", Veto),
            Err(CreateError::CreateFailed(WindowId(4)))
        );
        assert_eq!(wm.tree().len(), 1);
        assert_eq!(wm.tree().top_level().len(), 1);
    }

    #[test]
    fn stale_parent_is_rejected() {
        let mut wm = wm();
        let a = top(&mut wm, 1, Rect::new(0, 0, 10, 10));
        assert!(wm.destroy(a));
        assert_eq!(
            wm.create_window(Some(a), WindowId(2), Style::VISIBLE, Rect::new(0, 0, 5, 5), "", Plain),
            Err(CreateError::ParentNotAlive)
        );
    }

    #[test]
    fn placement_flags_are_inferred() {
        let mut wm = wm();
        let a = top(&mut wm, 1, Rect::new(0, 0, 50, 50));
        let c = wm
            .create_window(Some(a), WindowId(1), Style::VISIBLE, Rect::new(0, 0, 10, 10), "", Plain)
            .unwrap();
        assert!(wm.window(a).unwrap().style().contains(Style::TOP_LEVEL));
        assert!(wm.window(c).unwrap().style().contains(Style::CHILD));
        assert!(wm.window(a).unwrap().buffer().is_some());
        assert!(wm.window(c).unwrap().buffer().is_none());
    }

    #[test]
    fn destroyed_handles_go_stale() {
        let mut wm = wm();
        let a = top(&mut wm, 1, Rect::new(0, 0, 50, 50));
        let c = wm
            .create_window(Some(a), WindowId(1), Style::VISIBLE, Rect::new(0, 0, 10, 10), "", Plain)
            .unwrap();
        assert!(wm.destroy(a));
        assert!(wm.window(a).is_none());
        assert!(wm.window(c).is_none());
        let b = top(&mut wm, 1, Rect::new(0, 0, 50, 50));
        assert_ne!(a, b);
        assert!(wm.window(a).is_none());
        assert!(!wm.tree().is_empty());
    }

    #[test]
    fn full_screen_covers_display() {
        let mut wm = wm();
        let a = wm
            .create_window(
                None,
                WindowId(1),
                Style::VISIBLE | Style::FULL_SCREEN,
                Rect::new(5, 5, 6, 6),
                "",
                Plain,
            )
            .unwrap();
        assert_eq!(wm.window(a).unwrap().rect(), Rect::new(0, 0, 200, 200));
        assert_eq!(wm.window(a).unwrap().buffer().unwrap().width(), 200);
    }

    #[test]
    fn auto_size_follows_text() {
        let mut wm = wm();
        let a = wm
            .create_window(
                None,
                WindowId(1),
                Style::VISIBLE | Style::AUTO_SIZE,
                Rect::new(10, 10, 11, 11),
                "OK",
                Plain,
            )
            .unwrap();
        // 2 glyphs * 6 + 2 * 4 padding, 8 + 2 * 4.
        assert_eq!(wm.window(a).unwrap().rect(), Rect::new(10, 10, 30, 26));
        wm.set_text(a, "OKAY");
        assert_eq!(wm.window(a).unwrap().rect(), Rect::new(10, 10, 42, 26));
        assert_eq!(wm.window(a).unwrap().buffer().unwrap().width(), 32);
    }

    #[test]
    fn moving_a_parent_moves_children() {
        let mut wm = wm();
        let a = top(&mut wm, 1, Rect::new(0, 0, 50, 50));
        let c = wm
            .create_window(Some(a), WindowId(1), Style::VISIBLE, Rect::new(10, 10, 20, 20), "", Plain)
            .unwrap();
        wm.set_rect(a, Rect::new(100, 100, 150, 150));
        assert_eq!(wm.window(c).unwrap().rect(), Rect::new(110, 110, 120, 120));
    }

    #[test]
    fn set_style_keeps_placement() {
        let mut wm = wm();
        let a = top(&mut wm, 1, Rect::new(0, 0, 50, 50));
        wm.set_style(a, Style::VISIBLE | Style::FRAME | Style::CHILD);
        let s = wm.window(a).unwrap().style();
        assert!(s.contains(Style::TOP_LEVEL | Style::FRAME | Style::VISIBLE));
        assert!(!s.contains(Style::CHILD));
        wm.set_style(a, Style::FRAME);
        assert!(!wm.is_drawable(a));
    }

    #[test]
    fn foreground_rejects_children() {
        let mut wm = wm();
        let a = top(&mut wm, 1, Rect::new(0, 0, 50, 50));
        let c = wm
            .create_window(Some(a), WindowId(1), Style::VISIBLE, Rect::new(0, 0, 5, 5), "", Plain)
            .unwrap();
        assert!(!wm.set_foreground_window(c));
        assert!(wm.set_foreground_window(a));
    }

    #[test]
    fn arena_counts_follow_creation_queueing_and_destruction() {
        let mut wm = wm();
        assert!(wm.tree().is_empty());
        let r = Rect::new(0, 0, 10, 10);
        let a = top(&mut wm, 1, r);
        let b = top(&mut wm, 2, r);
        assert_eq!(wm.tree().len(), 2);
        assert!(!wm.tree().has_pending());

        let tap = PackagedMessage::tap(sash_rect::Point::new(1, 1));
        assert!(wm.queue_message(a, tap));
        assert!(wm.queue_message(a, tap));
        assert!(wm.queue_message(b, tap));
        assert!(wm.tree().has_pending());

        // Messages queued on a destroyed window no longer count.
        assert!(wm.destroy(b));
        assert_eq!(wm.tree().len(), 1);
        assert!(wm.tree().has_pending());
        assert!(wm.process_queues());
        assert!(!wm.tree().has_pending());
        assert!(wm.destroy(a));
        assert!(wm.tree().is_empty());
    }
}
