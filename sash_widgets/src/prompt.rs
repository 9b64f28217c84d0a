// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use sash_compositor::{
    Align, Clock, CreateError, Display, Event, EventKind, MetricId, Style, Theme, WindowBehavior,
    WindowCx, WindowHandle, WindowId, WindowManager,
};
use sash_rect::Rect;
use smallvec::SmallVec;

use crate::{Button, Label};

/// ID of the message label inside a prompt; buttons must not use it.
pub const PROMPT_LABEL_ID: WindowId = WindowId(u16::MAX);

type ChoiceCallback = Box<dyn FnMut(WindowId)>;

/// A framed top-level window with a message and a row of buttons.
///
/// Tapping a button records its ID as the choice, runs the callback and
/// hides the prompt. Build one with [`create_prompt`].
#[derive(Default)]
pub struct Prompt {
    choice: Option<WindowId>,
    on_choice: Option<ChoiceCallback>,
}

impl fmt::Debug for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompt")
            .field("choice", &self.choice)
            .field("on_choice", &self.on_choice.is_some())
            .finish()
    }
}

impl Prompt {
    /// A prompt without a callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// A prompt that calls `f` with the ID of the chosen button.
    pub fn with_callback(f: impl FnMut(WindowId) + 'static) -> Self {
        Self {
            choice: None,
            on_choice: Some(Box::new(f)),
        }
    }

    /// The button chosen last, if any.
    pub fn choice(&self) -> Option<WindowId> {
        self.choice
    }

    /// Forgets the last choice.
    pub fn reset(&mut self) {
        self.choice = None;
    }
}

impl WindowBehavior for Prompt {
    fn kind(&self) -> Style {
        Style::PROMPT
    }

    fn on_event(&mut self, cx: &mut WindowCx<'_>, event: Event) -> bool {
        if event.kind != EventKind::ChildTapped || event.source == PROMPT_LABEL_ID {
            return false;
        }
        self.choice = Some(event.source);
        if let Some(f) = self.on_choice.as_mut() {
            f(event.source);
        }
        tracing::debug!(choice = %event.source, "prompt answered");
        cx.hide();
        true
    }
}

/// Creates a prompt: a top-level window holding `message` above a row of
/// buttons laid out right to left from the bottom-right corner.
///
/// On any failure the partially built prompt is destroyed.
pub fn create_prompt<D: Display, C: Clock, T: Theme>(
    wm: &mut WindowManager<D, C, T>,
    id: WindowId,
    rect: Rect,
    message: &str,
    buttons: &[(WindowId, &str)],
    prompt: Prompt,
) -> Result<WindowHandle, CreateError> {
    let handle = wm.create_window(
        None,
        id,
        Style::VISIBLE | Style::FRAME | Style::SHADOW,
        rect,
        "",
        prompt,
    )?;
    match layout_prompt(wm, handle, rect, message, buttons) {
        Ok(()) => {
            wm.set_foreground_window(handle);
            Ok(handle)
        }
        Err(err) => {
            wm.destroy(handle);
            Err(err)
        }
    }
}

fn layout_prompt<D: Display, C: Clock, T: Theme>(
    wm: &mut WindowManager<D, C, T>,
    handle: WindowHandle,
    rect: Rect,
    message: &str,
    buttons: &[(WindowId, &str)],
) -> Result<(), CreateError> {
    let theme = wm.theme();
    let pad = theme.metric(MetricId::Padding).as_coord();
    let shadow = theme.metric(MetricId::ShadowOffset).as_coord().max(0);
    let bw = theme.metric(MetricId::ButtonWidth).as_coord();
    let bh = theme.metric(MetricId::ButtonHeight).as_coord();

    let body = Rect::new(rect.left, rect.top, rect.right - shadow, rect.bottom - shadow).inset(pad);
    let row_top = (body.bottom - bh).max(body.top);
    let label = Rect::new(body.left, body.top, body.right, (row_top - pad).max(body.top));

    let mut slots: SmallVec<[Rect; 4]> = SmallVec::new();
    let mut right = body.right;
    for _ in buttons {
        let left = right - bw;
        slots.push(Rect::new(left.max(body.left), row_top, right.max(body.left), body.bottom));
        right = left - pad;
    }

    wm.create_window(
        Some(handle),
        PROMPT_LABEL_ID,
        Style::VISIBLE,
        label,
        message,
        Label::new(Align::Center),
    )?;
    // Rightmost slot takes the last button so the row reads left to right.
    for (&(button_id, text), slot) in buttons.iter().zip(slots.iter().rev()) {
        wm.create_window(
            Some(handle),
            button_id,
            Style::VISIBLE,
            *slot,
            text,
            Button::new(),
        )?;
    }
    Ok(())
}

/// The choice recorded by a prompt.
pub fn prompt_choice<D: Display, C: Clock, T: Theme>(
    wm: &WindowManager<D, C, T>,
    handle: WindowHandle,
) -> Option<WindowId> {
    wm.behavior::<Prompt>(handle)?.choice()
}
