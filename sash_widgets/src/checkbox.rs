// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sash_compositor::{
    Align, Canvas, ColorId, EventKind, MetricId, Style, Theme, Window, WindowBehavior, WindowCx,
};
use sash_rect::{Point, Rect};

/// A box that toggles on tap, followed by the window text.
///
/// Each toggle raises [`EventKind::ChildToggled`] on the parent with value
/// `1` when checked and `0` when cleared.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckBox;

impl CheckBox {
    fn box_rect(window: &Window, theme: &dyn Theme) -> Rect {
        let size = window.metric(MetricId::CheckBoxSize, theme).as_coord();
        let r = window.rect();
        let top = r.top + (r.height() - size) / 2;
        Rect::from_origin_size(r.left, top, size, size)
    }
}

impl WindowBehavior for CheckBox {
    fn kind(&self) -> Style {
        Style::CHECKBOX
    }

    fn on_draw(&mut self, window: &Window, canvas: &mut Canvas<'_>, theme: &dyn Theme) {
        let b = Self::box_rect(window, theme);
        canvas.fill_rect(b, window.color(ColorId::CheckBoxBackground, theme));
        canvas.stroke_rect(b, window.color(ColorId::WindowFrame, theme));
        if window.is_checked() {
            canvas.fill_rect(b.inset(3), window.color(ColorId::CheckBoxCheck, theme));
        }
        let r = window.rect();
        let text = Rect::new(b.right, r.top, r.right, r.bottom);
        theme.draw_text(
            canvas,
            text,
            window.text(),
            window.color(ColorId::WindowText, theme),
            Align::Left,
        );
    }

    fn on_tapped(&mut self, cx: &mut WindowCx<'_>, _at: Point) {
        let checked = cx.toggle_checked();
        cx.notify_parent(EventKind::ChildToggled, u16::from(checked));
    }

    fn preferred_size(&self, window: &Window, theme: &dyn Theme) -> Option<(i32, i32)> {
        let size = window.metric(MetricId::CheckBoxSize, theme).as_coord();
        let pad = window.metric(MetricId::Padding, theme).as_coord();
        let (w, h) = theme.text_size(window.text());
        Some((size + w + 2 * pad, size.max(h + 2 * pad)))
    }
}
