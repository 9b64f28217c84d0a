// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window nodes and the pluggable behavior interface.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::String;
use core::any::Any;
use core::fmt;

use hashbrown::HashMap;
use sash_rect::{Point, Rect};

use crate::buffer::{Canvas, Color, PixelBuffer};
use crate::container::WindowContainer;
use crate::dispatch;
use crate::error::fatal_invariant;
use crate::message::{Event, EventKind, PackagedMessage};
use crate::theme::{Chrome, ColorId, Metric, MetricId, Theme};
use crate::tree::WindowTree;
use crate::types::{State, Style, WindowHandle, WindowId};

/// Per-kind window logic.
///
/// Every window carries one behavior object. The compositor owns geometry,
/// state, queues and chrome; the behavior supplies what differs between
/// widget kinds. All hooks have no-op defaults.
pub trait WindowBehavior: Any {
    /// Widget-kind style markers merged into the window's style at creation.
    fn kind(&self) -> Style {
        Style::empty()
    }

    /// Handles [`MessageKind::Create`](crate::MessageKind::Create). Returning
    /// `false` vetoes creation.
    fn on_create(&mut self, cx: &mut WindowCx<'_>) -> bool {
        let _ = cx;
        true
    }

    /// Handles [`MessageKind::Destroy`](crate::MessageKind::Destroy).
    fn on_destroy(&mut self, cx: &mut WindowCx<'_>) {
        let _ = cx;
    }

    /// Paints content on top of the window chrome.
    ///
    /// The canvas takes display-global coordinates and is already clipped to
    /// the window's visible area.
    fn on_draw(&mut self, window: &Window, canvas: &mut Canvas<'_>, theme: &dyn Theme) {
        let _ = (window, canvas, theme);
    }

    /// Runs after a successful draw, once the dirty region was propagated.
    fn on_post_draw(&mut self, cx: &mut WindowCx<'_>) {
        let _ = cx;
    }

    /// Handles a queued tap at a display-global point.
    fn on_tapped(&mut self, cx: &mut WindowCx<'_>, at: Point) {
        let _ = (cx, at);
    }

    /// Handles a notification from a child. Returns `true` if handled.
    fn on_event(&mut self, cx: &mut WindowCx<'_>, event: Event) -> bool {
        let _ = (cx, event);
        false
    }

    /// Handles [`MessageKind::Resize`](crate::MessageKind::Resize).
    fn on_resize(&mut self, cx: &mut WindowCx<'_>) {
        let _ = cx;
    }

    /// Size requested by [`Style::AUTO_SIZE`] windows.
    ///
    /// `None` falls back to the text size plus padding on every side.
    fn preferred_size(&self, window: &Window, theme: &dyn Theme) -> Option<(i32, i32)> {
        let _ = (window, theme);
        None
    }
}

/// A behavior with no content beyond the window chrome.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl WindowBehavior for Plain {}

/// A node of the window tree.
///
/// Windows are created by [`WindowManager::create_window`](crate::WindowManager::create_window)
/// and live in the manager's arena; parents and children refer to each other
/// by [`WindowHandle`].
pub struct Window {
    pub(crate) id: WindowId,
    pub(crate) style: Style,
    pub(crate) state: State,
    pub(crate) rect: Rect,
    pub(crate) dirty_rect: Rect,
    pub(crate) z_order: usize,
    pub(crate) queue: VecDeque<PackagedMessage>,
    pub(crate) children: WindowContainer,
    pub(crate) parent: Option<WindowHandle>,
    pub(crate) text: String,
    pub(crate) colors: HashMap<ColorId, Color>,
    pub(crate) metrics: HashMap<MetricId, Metric>,
    pub(crate) buffer: Option<PixelBuffer>,
    pub(crate) behavior: Option<Box<dyn WindowBehavior>>,
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("style", &self.style)
            .field("state", &self.state)
            .field("rect", &self.rect)
            .field("dirty_rect", &self.dirty_rect)
            .field("z_order", &self.z_order)
            .field("queued", &self.queue.len())
            .field("children", &self.children.len())
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

impl Window {
    pub(crate) fn new(
        id: WindowId,
        style: Style,
        rect: Rect,
        parent: Option<WindowHandle>,
        text: &str,
        behavior: Box<dyn WindowBehavior>,
    ) -> Self {
        Self {
            id,
            style,
            state: State::empty(),
            rect,
            dirty_rect: Rect::EMPTY,
            z_order: 0,
            queue: VecDeque::new(),
            children: WindowContainer::new(),
            parent,
            text: String::from(text),
            colors: HashMap::new(),
            metrics: HashMap::new(),
            buffer: None,
            behavior: Some(behavior),
        }
    }

    /// Sibling-unique ID.
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Style flags.
    pub fn style(&self) -> Style {
        self.style
    }

    /// State flags.
    pub fn state(&self) -> State {
        self.state
    }

    /// Rect in display-global coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Display-global region awaiting a blit (top-level windows only).
    pub fn dirty_rect(&self) -> Rect {
        self.dirty_rect
    }

    /// Stacking position among top-level windows; `0` for children.
    pub fn z_order(&self) -> usize {
        self.z_order
    }

    /// Parent window, if any.
    pub fn parent(&self) -> Option<WindowHandle> {
        self.parent
    }

    /// Owned children, back to front.
    pub fn children(&self) -> &WindowContainer {
        &self.children
    }

    /// Window text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` for parentless windows.
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` between creation and destruction.
    pub fn is_alive(&self) -> bool {
        self.state.contains(State::ALIVE)
    }

    /// Returns `true` if the window itself is shown (ignores ancestors).
    pub fn is_visible(&self) -> bool {
        self.style.contains(Style::VISIBLE)
    }

    /// Returns `true` if content must be repainted.
    pub fn is_dirty(&self) -> bool {
        self.state.contains(State::DIRTY)
    }

    /// Toggle state.
    pub fn is_checked(&self) -> bool {
        self.state.contains(State::CHECKED)
    }

    /// Number of queued messages.
    pub fn pending_messages(&self) -> usize {
        self.queue.len()
    }

    /// Queued messages, oldest first.
    pub fn queued(&self) -> impl Iterator<Item = &PackagedMessage> + '_ {
        self.queue.iter()
    }

    /// The off-screen buffer (top-level windows only).
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Requests a repaint.
    pub fn mark_dirty(&mut self) {
        self.state.insert(State::DIRTY);
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.state.remove(State::DIRTY);
    }

    /// Sets the toggle state, marking the window dirty on change.
    pub fn set_checked(&mut self, checked: bool) {
        if self.is_checked() != checked {
            self.state.set(State::CHECKED, checked);
            self.mark_dirty();
        }
    }

    /// Overrides a theme color for this window.
    pub fn set_color(&mut self, id: ColorId, color: Color) {
        if self.colors.insert(id, color) != Some(color) {
            self.mark_dirty();
        }
    }

    /// Overrides a theme metric for this window.
    pub fn set_metric(&mut self, id: MetricId, metric: Metric) {
        if self.metrics.insert(id, metric) != Some(metric) {
            self.mark_dirty();
        }
    }

    /// Drops every color and metric override.
    pub fn clear_overrides(&mut self) {
        if !self.colors.is_empty() || !self.metrics.is_empty() {
            self.colors.clear();
            self.metrics.clear();
            self.mark_dirty();
        }
    }

    /// Color for a slot: the window override, else the theme's.
    pub fn color(&self, id: ColorId, theme: &dyn Theme) -> Color {
        self.colors.get(&id).copied().unwrap_or_else(|| theme.color(id))
    }

    /// Metric for a slot: the window override, else the theme's.
    pub fn metric(&self, id: MetricId, theme: &dyn Theme) -> Metric {
        self.metrics
            .get(&id)
            .copied()
            .unwrap_or_else(|| theme.metric(id))
    }

    /// Chrome parameters resolved through overrides.
    pub fn chrome(&self, theme: &dyn Theme) -> Chrome {
        Chrome {
            background: self.color(ColorId::WindowBackground, theme),
            frame: self.color(ColorId::WindowFrame, theme),
            shadow: self.color(ColorId::WindowShadow, theme),
            radius: self.metric(MetricId::CornerRadius, theme).as_coord(),
            shadow_offset: self.metric(MetricId::ShadowOffset, theme).as_coord(),
        }
    }

    /// Content size for [`Style::AUTO_SIZE`].
    pub(crate) fn preferred_size(&self, theme: &dyn Theme) -> (i32, i32) {
        if let Some(size) = self
            .behavior
            .as_deref()
            .and_then(|b| b.preferred_size(self, theme))
        {
            return size;
        }
        let pad = self.metric(MetricId::Padding, theme).as_coord();
        let (w, h) = theme.text_size(&self.text);
        (w + 2 * pad, h + 2 * pad)
    }

    pub(crate) fn behavior_as<B: WindowBehavior>(&self) -> Option<&B> {
        let b: &dyn Any = self.behavior.as_deref()?;
        b.downcast_ref()
    }

    pub(crate) fn behavior_as_mut<B: WindowBehavior>(&mut self) -> Option<&mut B> {
        let b: &mut dyn Any = self.behavior.as_deref_mut()?;
        b.downcast_mut()
    }
}

/// Access a behavior hook gets to its window and the rest of the tree.
pub struct WindowCx<'a> {
    pub(crate) tree: &'a mut WindowTree,
    pub(crate) theme: &'a dyn Theme,
    pub(crate) handle: WindowHandle,
}

impl fmt::Debug for WindowCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowCx")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl WindowCx<'_> {
    /// Handle of the window being dispatched to.
    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    /// The window being dispatched to.
    pub fn window(&self) -> &Window {
        self.tree
            .get(self.handle)
            .unwrap_or_else(|| fatal_invariant(format_args!("dispatch target {:?} vanished", self.handle)))
    }

    /// Mutable access to the window being dispatched to.
    pub fn window_mut(&mut self) -> &mut Window {
        let handle = self.handle;
        self.tree
            .get_mut(handle)
            .unwrap_or_else(|| fatal_invariant(format_args!("dispatch target {handle:?} vanished")))
    }

    /// Another window of the tree.
    pub fn window_of(&self, handle: WindowHandle) -> Option<&Window> {
        self.tree.get(handle)
    }

    /// The active theme.
    pub fn theme(&self) -> &dyn Theme {
        self.theme
    }

    /// Parent of the dispatched window.
    pub fn parent(&self) -> Option<WindowHandle> {
        self.window().parent
    }

    /// Child of the dispatched window with the given ID.
    pub fn child(&self, id: WindowId) -> Option<WindowHandle> {
        self.window().children.find(id)
    }

    /// Requests a repaint of the dispatched window.
    pub fn mark_dirty(&mut self) {
        self.window_mut().mark_dirty();
    }

    /// Flips the toggle state and returns the new value.
    pub fn toggle_checked(&mut self) -> bool {
        let w = self.window_mut();
        let checked = !w.is_checked();
        w.set_checked(checked);
        checked
    }

    /// Hides the dispatched window.
    pub fn hide(&mut self) -> bool {
        self.tree.hide(self.handle)
    }

    /// Shows the dispatched window.
    pub fn show(&mut self) -> bool {
        self.tree.show(self.handle)
    }

    /// Synchronously routes an event to the parent.
    ///
    /// Returns `true` if the parent handled it.
    pub fn notify_parent(&mut self, kind: EventKind, value: u16) -> bool {
        let Some(parent) = self.parent() else {
            return false;
        };
        let msg = PackagedMessage::event(kind, self.window().id, value);
        dispatch::route_message(self.tree, self.theme, parent, msg)
    }

    /// Synchronously routes a message to any window.
    pub fn route(&mut self, target: WindowHandle, msg: PackagedMessage) -> bool {
        dispatch::route_message(self.tree, self.theme, target, msg)
    }

    /// Queues a message for the next processing pass.
    pub fn queue(&mut self, target: WindowHandle, msg: PackagedMessage) -> bool {
        self.tree.queue_message(target, msg)
    }
}
