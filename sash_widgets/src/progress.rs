// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sash_compositor::{
    Align, Canvas, Clock, ColorId, CreateError, Display, MetricId, Style, Theme, Window,
    WindowBehavior, WindowHandle, WindowId, WindowManager,
};
use sash_rect::Rect;

/// A horizontal bar filled to a percentage, with the window text centered on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressBar {
    value: u8,
}

impl ProgressBar {
    /// Largest value; a full bar.
    pub const MAX: u8 = 100;

    /// A bar at `value` percent, clamped to [`ProgressBar::MAX`].
    pub fn new(value: u8) -> Self {
        Self {
            value: value.min(Self::MAX),
        }
    }

    /// Current percentage.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Sets the percentage, clamped to [`ProgressBar::MAX`]. Returns `true` on change.
    pub fn set_value(&mut self, value: u8) -> bool {
        let value = value.min(Self::MAX);
        let changed = self.value != value;
        self.value = value;
        changed
    }

    fn fill_width(&self, width: i32) -> i32 {
        width * i32::from(self.value) / i32::from(Self::MAX)
    }
}

impl WindowBehavior for ProgressBar {
    fn kind(&self) -> Style {
        Style::PROGRESS_BAR
    }

    fn on_draw(&mut self, window: &Window, canvas: &mut Canvas<'_>, theme: &dyn Theme) {
        let r = window.rect();
        canvas.fill_rect(r, window.color(ColorId::ProgressBackground, theme));
        let filled = Rect::new(r.left, r.top, r.left + self.fill_width(r.width()), r.bottom);
        canvas.fill_rect(filled, window.color(ColorId::ProgressFill, theme));
        if window.style().contains(Style::FRAME) {
            canvas.stroke_rect(r, window.color(ColorId::WindowFrame, theme));
        }
        theme.draw_text(
            canvas,
            r,
            window.text(),
            window.color(ColorId::WindowText, theme),
            Align::Center,
        );
    }
}

/// Creates a framed progress bar.
///
/// A rect with zero height gets the theme's default bar height.
pub fn create_progress_bar<D: Display, C: Clock, T: Theme>(
    wm: &mut WindowManager<D, C, T>,
    parent: Option<WindowHandle>,
    id: WindowId,
    rect: Rect,
    text: &str,
    value: u8,
) -> Result<WindowHandle, CreateError> {
    let rect = if rect.height() == 0 {
        let h = wm.theme().metric(MetricId::ProgressHeight).as_coord();
        Rect::from_origin_size(rect.left, rect.top, rect.width(), h)
    } else {
        rect
    };
    wm.create_window(
        parent,
        id,
        Style::VISIBLE | Style::FRAME,
        rect,
        text,
        ProgressBar::new(value),
    )
}

/// Updates a progress bar, repainting only if the value changed.
///
/// Returns `false` if `handle` is not a progress bar.
pub fn set_progress<D: Display, C: Clock, T: Theme>(
    wm: &mut WindowManager<D, C, T>,
    handle: WindowHandle,
    value: u8,
) -> bool {
    match wm.behavior::<ProgressBar>(handle) {
        Some(bar) if bar.value() == value.min(ProgressBar::MAX) => true,
        Some(_) => wm
            .update_behavior::<ProgressBar, _>(handle, |bar| bar.set_value(value))
            .is_some(),
        None => false,
    }
}

/// Current value of a progress bar.
pub fn progress<D: Display, C: Clock, T: Theme>(
    wm: &WindowManager<D, C, T>,
    handle: WindowHandle,
) -> Option<u8> {
    wm.behavior::<ProgressBar>(handle).map(ProgressBar::value)
}
