// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-tick compositing pass.
//!
//! Windows paint into their top-level buffer; compositing copies only the
//! dirty, unobscured parts of each buffer to the display.

use sash_rect::{Rect, Region};
use smallvec::smallvec;

use crate::dispatch;
use crate::driver::{Clock, Display};
use crate::error::fatal_invariant;
use crate::manager::WindowManager;
use crate::screensaver::SaverTick;
use crate::theme::{ColorId, Theme};
use crate::types::WindowHandle;

/// What one [`WindowManager::render`] call did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Windows repainted into their buffers.
    pub painted: usize,
    /// Top-level windows that reached the display.
    pub composited: usize,
    /// Rectangular partial writes issued to the display.
    pub blits: usize,
    /// Whether the frame was presented.
    pub presented: bool,
}

impl<D: Display, C: Clock, T: Theme> WindowManager<D, C, T> {
    /// Drains touches from the inbox, if any, then renders.
    pub fn update(&mut self) -> RenderStats {
        if let Some(inbox) = self.inbox.clone() {
            while let Some(at) = inbox.pop() {
                self.hit_test(at);
            }
        }
        self.render()
    }

    /// Runs one compositing tick.
    ///
    /// 1. Pending messages are delivered until every queue is empty.
    /// 2. An active screensaver paints its overlay once and suppresses the rest.
    /// 3. Dirty windows repaint into their buffers.
    /// 4. Each top-level window, back to front, writes the parts of its dirty
    ///    rect not covered by a drawable window above it.
    /// 5. The frame is presented if anything was written.
    pub fn render(&mut self) -> RenderStats {
        let mut stats = RenderStats::default();
        self.process_queues();

        match self.screensaver.tick(self.clock.now_ms()) {
            SaverTick::Inactive => {}
            SaverTick::Draw => {
                tracing::debug!("screensaver activated");
                let bounds = self.tree.display();
                let color = self.theme.color(ColorId::Screensaver);
                self.display.fill_rect(bounds, color);
                self.display.present();
                stats.presented = true;
                return stats;
            }
            SaverTick::Hold => return stats,
            SaverTick::Resumed => {
                tracing::debug!("screensaver deactivated, full redraw");
                self.tree.invalidate_display();
            }
        }

        let tops = self.tree.top_level().to_vec();
        for &top in &tops {
            stats.painted += dispatch::redraw(&mut self.tree, &self.theme, top, false);
        }
        let drawable: smallvec::SmallVec<[WindowHandle; 8]> = tops
            .iter()
            .copied()
            .filter(|&h| self.tree.is_drawable(h))
            .collect();

        let mut wrote = self.fill_background(&drawable);
        for (i, &top) in drawable.iter().enumerate() {
            let blits = self.composite(top, &drawable[i + 1..]);
            if blits > 0 {
                stats.composited += 1;
                stats.blits += blits;
                wrote = true;
            }
        }
        for &top in &tops {
            if let Some(w) = self.tree.get_mut(top) {
                w.dirty_rect = Rect::EMPTY;
            }
        }

        if wrote {
            self.display.present();
            stats.presented = true;
        }
        stats
    }

    /// Fills exposed display area no window covers.
    fn fill_background(&mut self, drawable: &[WindowHandle]) -> bool {
        let damage = self.tree.take_background_damage();
        if damage.is_empty() {
            return false;
        }
        let pieces = self.uncovered(damage, drawable);
        for piece in &pieces {
            self.display.fill_rect(*piece, self.config.background_color);
        }
        !pieces.is_empty()
    }

    /// Blits the visible part of one window's dirty rect. Returns the blit count.
    fn composite(&mut self, top: WindowHandle, above: &[WindowHandle]) -> usize {
        let Some(window) = self.tree.get(top) else {
            return 0;
        };
        let dirty = window
            .dirty_rect
            .intersection(&window.rect)
            .intersection(&self.tree.display());
        if dirty.is_empty() {
            return 0;
        }
        let pieces = self.uncovered(dirty, above);
        if pieces.is_empty() {
            tracing::trace!(id = %window.id, "fully obscured");
            return 0;
        }

        let Some(window) = self.tree.get(top) else {
            return 0;
        };
        let Some(buffer) = window.buffer.as_ref() else {
            fatal_invariant(format_args!("top-level window {} has no buffer", window.id));
        };
        let origin = window.rect.origin();
        for piece in &pieces {
            let local = piece.relative_to(origin);
            if !buffer.bounds().contains(&local) {
                fatal_invariant(format_args!(
                    "dirty piece {piece:?} of window {} maps outside its buffer",
                    window.id
                ));
            }
            tracing::trace!(id = %window.id, ?piece, "blit");
            self.display.write_region(piece.origin(), buffer, local);
        }
        pieces.len()
    }

    /// `rect` minus the rect of every window in `covering`, one at a time.
    fn uncovered(&self, rect: Rect, covering: &[WindowHandle]) -> Region {
        let mut pieces: Region = smallvec![rect];
        for &h in covering {
            let Some(cover) = self.tree.get(h).map(|w| w.rect) else {
                continue;
            };
            pieces = pieces.iter().flat_map(|p| p.subtract(&cover)).collect();
            if pieces.is_empty() {
                break;
            }
        }
        pieces
    }
}
