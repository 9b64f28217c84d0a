// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Message dispatch: immediate routing, queue draining and the paint pass.
//!
//! A window's behavior is taken out of its slot for the duration of a hook so
//! the hook can borrow the whole tree through [`WindowCx`]. A message routed
//! to a window whose behavior is already running is dropped.

use alloc::boxed::Box;
use alloc::vec::Vec;

use sash_rect::Point;

use crate::buffer::{Canvas, PixelBuffer};
use crate::message::{MessageKind, PackagedMessage};
use crate::theme::{ColorId, Theme};
use crate::tree::WindowTree;
use crate::types::WindowHandle;
use crate::window::{WindowBehavior, WindowCx};

/// Immediately delivers `msg` to `handle`. Returns the handler's result.
pub(crate) fn route_message(
    tree: &mut WindowTree,
    theme: &dyn Theme,
    handle: WindowHandle,
    msg: PackagedMessage,
) -> bool {
    let Some((id, alive)) = tree.get(handle).map(|w| (w.id, w.is_alive())) else {
        return false;
    };
    match msg.kind {
        MessageKind::Draw => return redraw(tree, theme, handle, true) > 0,
        MessageKind::Create => {}
        MessageKind::Input if !tree.is_drawable(handle) => {
            tracing::trace!(%id, "input dropped, window not drawable");
            return false;
        }
        _ if !alive => return false,
        _ => {}
    }

    if msg.kind == MessageKind::Resize {
        resize_buffer(tree, theme, handle);
    }
    if msg.kind == MessageKind::PostDraw {
        tree.propagate_dirty(handle);
        if let Some(w) = tree.get_mut(handle) {
            w.clear_dirty();
        }
    }

    let Some(mut behavior) = take_behavior(tree, handle) else {
        tracing::trace!(?handle, kind = ?msg.kind, "re-entrant dispatch dropped");
        return false;
    };
    let mut cx = WindowCx {
        tree: &mut *tree,
        theme,
        handle,
    };
    let handled = match msg.kind {
        MessageKind::Create => behavior.on_create(&mut cx),
        MessageKind::Destroy => {
            behavior.on_destroy(&mut cx);
            true
        }
        MessageKind::PostDraw => {
            behavior.on_post_draw(&mut cx);
            true
        }
        MessageKind::Input => match msg.as_tap() {
            Some(at) => {
                behavior.on_tapped(&mut cx, at);
                true
            }
            None => false,
        },
        MessageKind::Event => match msg.as_event() {
            Some(event) => behavior.on_event(&mut cx, event),
            None => false,
        },
        MessageKind::Resize => {
            behavior.on_resize(&mut cx);
            cx.mark_dirty();
            true
        }
        MessageKind::Draw => false,
    };
    put_behavior(tree, handle, behavior);
    handled
}

/// Delivers every message queued on `handle` when the call started, then
/// recurses into the children. Returns `true` if anything was delivered.
pub(crate) fn process_queue(tree: &mut WindowTree, theme: &dyn Theme, handle: WindowHandle) -> bool {
    let Some(pending) = tree.get(handle).map(|w| w.queue.len()) else {
        return false;
    };
    let mut delivered = false;
    for _ in 0..pending {
        let Some(msg) = tree.pop_message(handle) else {
            break;
        };
        route_message(tree, theme, handle, msg);
        delivered = true;
    }
    let children = match tree.get(handle) {
        Some(w) => w.children.to_vec(),
        None => return delivered,
    };
    for child in children {
        delivered |= process_queue(tree, theme, child);
    }
    delivered
}

/// Paints `handle` and its subtree into the top-level buffer.
///
/// A window repaints when forced or dirty. Children of a repainted window
/// repaint too since their pixels were overwritten; children of a skipped
/// window are still visited. Returns the number of windows painted.
pub(crate) fn redraw(
    tree: &mut WindowTree,
    theme: &dyn Theme,
    handle: WindowHandle,
    force: bool,
) -> usize {
    if !tree.is_drawable(handle) {
        return 0;
    }
    let Some(top) = tree.top_level_of(handle) else {
        return 0;
    };
    let Some((mut buffer, origin)) = tree
        .get_mut(top)
        .and_then(|w| w.buffer.take().map(|b| (b, w.rect.origin())))
    else {
        tracing::trace!(?top, "buffer in use, redraw skipped");
        return 0;
    };

    let mut painted = Vec::new();
    paint_subtree(tree, theme, &mut buffer, origin, handle, force, &mut painted);
    if let Some(w) = tree.get_mut(top) {
        w.buffer = Some(buffer);
    }

    for &h in &painted {
        route_message(tree, theme, h, PackagedMessage::new(MessageKind::PostDraw));
    }
    if !painted.is_empty() {
        tracing::trace!(?handle, painted = painted.len(), "redraw");
    }
    painted.len()
}

fn paint_subtree(
    tree: &mut WindowTree,
    theme: &dyn Theme,
    buffer: &mut PixelBuffer,
    origin: Point,
    handle: WindowHandle,
    force: bool,
    painted: &mut Vec<WindowHandle>,
) {
    if !tree.is_drawable(handle) {
        return;
    }
    let Some(window) = tree.get(handle) else {
        return;
    };
    let paint = force || window.is_dirty();
    if paint {
        let clip = tree.visible_clip(handle);
        let behavior = take_behavior(tree, handle);
        if let Some(window) = tree.get(handle) {
            let mut canvas = Canvas::new(buffer, origin);
            let mut canvas = canvas.clipped(clip);
            theme.draw_window_chrome(&mut canvas, window.rect, window.style, &window.chrome(theme));
            if let Some(mut behavior) = behavior {
                behavior.on_draw(window, &mut canvas, theme);
                put_behavior(tree, handle, behavior);
            }
        }
        painted.push(handle);
    }
    let children = match tree.get(handle) {
        Some(w) => w.children.to_vec(),
        None => return,
    };
    for child in children {
        paint_subtree(tree, theme, buffer, origin, child, paint, painted);
    }
}

/// Matches a top-level buffer to its window rect.
fn resize_buffer(tree: &mut WindowTree, theme: &dyn Theme, handle: WindowHandle) {
    let Some(w) = tree.get_mut(handle) else {
        return;
    };
    let (width, height) = (w.rect.width(), w.rect.height());
    let fill = w.color(ColorId::WindowBackground, theme);
    if let Some(buffer) = w.buffer.as_mut()
        && (buffer.width() != width || buffer.height() != height)
    {
        buffer.resize(width, height, fill);
    }
}

fn take_behavior(tree: &mut WindowTree, handle: WindowHandle) -> Option<Box<dyn WindowBehavior>> {
    tree.get_mut(handle).and_then(|w| w.behavior.take())
}

fn put_behavior(tree: &mut WindowTree, handle: WindowHandle, behavior: Box<dyn WindowBehavior>) {
    if let Some(w) = tree.get_mut(handle) {
        w.behavior = Some(behavior);
    }
}
