// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The theme collaborator: semantic colors, typed metrics, and chrome/text drawing.
//!
//! Windows look up colors and metrics by semantic ID. A per-window override
//! (see [`Window::set_color`](crate::Window::set_color)) wins over the theme.
//! [`FlatTheme`] is a dependency-free default suitable for headless use; real
//! applications plug in their own font rendering by implementing [`Theme`].

use sash_rect::{Point, Rect};

use crate::buffer::{Canvas, Color};
use crate::types::Style;

/// Semantic color slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorId {
    /// Window fill.
    WindowBackground,
    /// Window frame stroke.
    WindowFrame,
    /// Window drop shadow.
    WindowShadow,
    /// Generic window text.
    WindowText,
    /// Button fill.
    ButtonBackground,
    /// Button fill while latched or pressed.
    ButtonPressed,
    /// Button text.
    ButtonText,
    /// Label text.
    LabelText,
    /// Check box fill.
    CheckBoxBackground,
    /// Check mark.
    CheckBoxCheck,
    /// Progress bar track.
    ProgressBackground,
    /// Progress bar fill.
    ProgressFill,
    /// Screensaver overlay.
    Screensaver,
}

/// Semantic metric slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MetricId {
    /// Inner padding between chrome and content.
    Padding,
    /// Corner radius of framed windows.
    CornerRadius,
    /// Drop shadow offset.
    ShadowOffset,
    /// Default button width.
    ButtonWidth,
    /// Default button height.
    ButtonHeight,
    /// Check box square size.
    CheckBoxSize,
    /// Default progress bar height.
    ProgressHeight,
}

/// A typed metric value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// A length in pixels.
    Coord(i32),
    /// A count.
    Count(u32),
}

impl Metric {
    /// The value as a pixel length; counts convert saturating.
    pub fn as_coord(self) -> i32 {
        match self {
            Self::Coord(v) => v,
            Self::Count(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }

    /// The value as a count; negative lengths become zero.
    pub fn as_count(self) -> u32 {
        match self {
            Self::Coord(v) => u32::try_from(v).unwrap_or(0),
            Self::Count(n) => n,
        }
    }
}

/// Horizontal text alignment inside a rect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Flush left after padding.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right before padding.
    Right,
}

/// Resolved chrome parameters for one window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Chrome {
    /// Fill color.
    pub background: Color,
    /// Frame color, used with [`Style::FRAME`].
    pub frame: Color,
    /// Shadow color, used with [`Style::SHADOW`].
    pub shadow: Color,
    /// Corner radius of the frame.
    pub radius: i32,
    /// Shadow offset.
    pub shadow_offset: i32,
}

/// Colors, metrics and the drawing routines for window chrome and text.
pub trait Theme {
    /// Color for a semantic slot.
    fn color(&self, id: ColorId) -> Color;

    /// Metric for a semantic slot.
    fn metric(&self, id: MetricId) -> Metric;

    /// Pixel size of `text` rendered in the theme font.
    fn text_size(&self, text: &str) -> (i32, i32);

    /// Draws `text` inside `rect`, vertically centered.
    fn draw_text(&self, canvas: &mut Canvas<'_>, rect: Rect, text: &str, color: Color, align: Align);

    /// Paints window background, frame and shadow according to `style`.
    fn draw_window_chrome(&self, canvas: &mut Canvas<'_>, rect: Rect, style: Style, chrome: &Chrome) {
        let body = if style.contains(Style::SHADOW) {
            let off = chrome.shadow_offset.max(0);
            let body = Rect::new(rect.left, rect.top, rect.right - off, rect.bottom - off);
            canvas.fill_round_rect(body.offset(off, off), chrome.radius, chrome.shadow);
            body
        } else {
            rect
        };
        if style.contains(Style::FRAME) {
            canvas.fill_round_rect(body, chrome.radius, chrome.background);
            canvas.stroke_round_rect(body, chrome.radius, chrome.frame);
        } else {
            canvas.fill_rect(body, chrome.background);
        }
    }
}

/// A flat, dependency-free theme.
///
/// Text uses a fixed 6x8 cell and each glyph is drawn as an outlined 5x7
/// box, which keeps layout observable without shipping font data.
#[derive(Clone, Debug, Default)]
pub struct FlatTheme;

const CELL_W: i32 = 6;
const CELL_H: i32 = 8;
const BOX_GLYPH: [u8; 7] = [
    0b1111_1000,
    0b1000_1000,
    0b1000_1000,
    0b1000_1000,
    0b1000_1000,
    0b1000_1000,
    0b1111_1000,
];

impl Theme for FlatTheme {
    fn color(&self, id: ColorId) -> Color {
        match id {
            ColorId::WindowBackground => Color::rgb(0xF0, 0xF0, 0xF0),
            ColorId::WindowFrame => Color::rgb(0x40, 0x40, 0x40),
            ColorId::WindowShadow => Color::rgb(0x80, 0x80, 0x80),
            ColorId::WindowText | ColorId::LabelText => Color::BLACK,
            ColorId::ButtonBackground => Color::rgb(0x30, 0x60, 0xC0),
            ColorId::ButtonPressed => Color::rgb(0x20, 0x40, 0x80),
            ColorId::ButtonText => Color::WHITE,
            ColorId::CheckBoxBackground => Color::WHITE,
            ColorId::CheckBoxCheck => Color::rgb(0x30, 0x60, 0xC0),
            ColorId::ProgressBackground => Color::rgb(0xC0, 0xC0, 0xC0),
            ColorId::ProgressFill => Color::rgb(0x30, 0xA0, 0x40),
            ColorId::Screensaver => Color::BLACK,
        }
    }

    fn metric(&self, id: MetricId) -> Metric {
        match id {
            MetricId::Padding => Metric::Coord(4),
            MetricId::CornerRadius => Metric::Coord(4),
            MetricId::ShadowOffset => Metric::Coord(2),
            MetricId::ButtonWidth => Metric::Coord(60),
            MetricId::ButtonHeight => Metric::Coord(24),
            MetricId::CheckBoxSize => Metric::Coord(16),
            MetricId::ProgressHeight => Metric::Coord(12),
        }
    }

    fn text_size(&self, text: &str) -> (i32, i32) {
        let glyphs = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        if glyphs == 0 {
            return (0, 0);
        }
        (glyphs.saturating_mul(CELL_W), CELL_H)
    }

    fn draw_text(&self, canvas: &mut Canvas<'_>, rect: Rect, text: &str, color: Color, align: Align) {
        let (w, h) = self.text_size(text);
        let pad = self.metric(MetricId::Padding).as_coord();
        let x = match align {
            Align::Left => rect.left + pad,
            Align::Center => rect.left + (rect.width() - w) / 2,
            Align::Right => rect.right - pad - w,
        };
        let y = rect.top + (rect.height() - h) / 2;
        let mut canvas = canvas.clipped(rect);
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let Ok(i) = i32::try_from(i) else { break };
            canvas.draw_glyph(Point::new(x + i * CELL_W, y), 5, 7, &BOX_GLYPH, color);
        }
    }
}
