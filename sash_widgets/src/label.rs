// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use sash_compositor::{Align, Canvas, ColorId, Style, Theme, Window, WindowBehavior};

/// Static text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Label {
    /// Horizontal placement of the text.
    pub align: Align,
}

impl Label {
    /// A label with the given alignment.
    pub fn new(align: Align) -> Self {
        Self { align }
    }
}

impl WindowBehavior for Label {
    fn kind(&self) -> Style {
        Style::LABEL
    }

    fn on_draw(&mut self, window: &Window, canvas: &mut Canvas<'_>, theme: &dyn Theme) {
        theme.draw_text(
            canvas,
            window.rect(),
            window.text(),
            window.color(ColorId::LabelText, theme),
            self.align,
        );
    }
}
