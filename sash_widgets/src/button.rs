// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sash_compositor::{
    Align, Canvas, ColorId, EventKind, MetricId, Style, Theme, Window, WindowBehavior, WindowCx,
};
use sash_rect::Point;

/// A push button.
///
/// A tap raises [`EventKind::ChildTapped`] on the parent. A latching button
/// also flips its checked state and draws pressed while checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct Button {
    latching: bool,
}

impl Button {
    /// A momentary button.
    pub fn new() -> Self {
        Self::default()
    }

    /// A button that stays pressed until tapped again.
    pub fn latching() -> Self {
        Self { latching: true }
    }
}

impl WindowBehavior for Button {
    fn kind(&self) -> Style {
        Style::BUTTON
    }

    fn on_draw(&mut self, window: &Window, canvas: &mut Canvas<'_>, theme: &dyn Theme) {
        let fill = if window.is_checked() {
            ColorId::ButtonPressed
        } else {
            ColorId::ButtonBackground
        };
        let radius = window.metric(MetricId::CornerRadius, theme).as_coord();
        canvas.fill_round_rect(window.rect(), radius, window.color(fill, theme));
        theme.draw_text(
            canvas,
            window.rect(),
            window.text(),
            window.color(ColorId::ButtonText, theme),
            Align::Center,
        );
    }

    fn on_tapped(&mut self, cx: &mut WindowCx<'_>, _at: Point) {
        if self.latching {
            cx.toggle_checked();
        }
        let id = cx.window().id();
        tracing::trace!(%id, "button tapped");
        cx.notify_parent(EventKind::ChildTapped, u16::from(cx.window().is_checked()));
    }

    fn preferred_size(&self, window: &Window, theme: &dyn Theme) -> Option<(i32, i32)> {
        let pad = window.metric(MetricId::Padding, theme).as_coord();
        let (w, h) = theme.text_size(window.text());
        let min_w = window.metric(MetricId::ButtonWidth, theme).as_coord();
        let min_h = window.metric(MetricId::ButtonHeight, theme).as_coord();
        Some(((w + 2 * pad).max(min_w), (h + 2 * pad).max(min_h)))
    }
}
