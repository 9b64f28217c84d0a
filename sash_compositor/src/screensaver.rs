// Copyright 2026 the Sash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inactivity tracking for the screensaver overlay.

/// What the render loop must do this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SaverTick {
    /// Composite normally.
    Inactive,
    /// Just activated: paint the overlay, skip compositing.
    Draw,
    /// Overlay already painted: skip compositing.
    Hold,
    /// Just deactivated: invalidate the display, then composite.
    Resumed,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Screensaver {
    enabled: bool,
    active: bool,
    drawn: bool,
    threshold_ms: u64,
    last_activity_ms: u64,
    /// Set by activity while active, consumed by the next tick.
    resumed: bool,
}

impl Screensaver {
    pub(crate) fn enable(&mut self, threshold_ms: u64, now_ms: u64) {
        self.enabled = true;
        self.threshold_ms = threshold_ms;
        self.last_activity_ms = now_ms;
    }

    /// Turns the screensaver off. Returns `true` if the overlay was showing.
    pub(crate) fn disable(&mut self) -> bool {
        let was_active = self.active;
        self.enabled = false;
        self.active = false;
        self.drawn = false;
        self.resumed = false;
        was_active
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    /// Records user activity. Returns `true` if this woke the display.
    pub(crate) fn touch(&mut self, now_ms: u64) -> bool {
        self.last_activity_ms = now_ms;
        if self.active {
            self.active = false;
            self.drawn = false;
            self.resumed = true;
            return true;
        }
        false
    }

    pub(crate) fn tick(&mut self, now_ms: u64) -> SaverTick {
        if core::mem::take(&mut self.resumed) {
            return SaverTick::Resumed;
        }
        if !self.enabled {
            return SaverTick::Inactive;
        }
        if !self.active && now_ms.saturating_sub(self.last_activity_ms) >= self.threshold_ms {
            self.active = true;
        }
        if !self.active {
            return SaverTick::Inactive;
        }
        if self.drawn {
            SaverTick::Hold
        } else {
            self.drawn = true;
            SaverTick::Draw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_never_activates() {
        let mut s = Screensaver::default();
        assert_eq!(s.tick(1_000_000), SaverTick::Inactive);
    }

    #[test]
    fn activates_draws_once_then_resumes() {
        let mut s = Screensaver::default();
        s.enable(1000, 0);
        assert_eq!(s.tick(999), SaverTick::Inactive);
        assert_eq!(s.tick(1000), SaverTick::Draw);
        assert_eq!(s.tick(1500), SaverTick::Hold);
        assert!(s.touch(1600));
        assert_eq!(s.tick(1601), SaverTick::Resumed);
        assert_eq!(s.tick(1602), SaverTick::Inactive);
        assert_eq!(s.tick(2600), SaverTick::Draw);
    }

    #[test]
    fn activity_rearms_threshold() {
        let mut s = Screensaver::default();
        s.enable(100, 0);
        assert!(!s.touch(90));
        assert_eq!(s.tick(150), SaverTick::Inactive);
        assert_eq!(s.tick(190), SaverTick::Draw);
    }
}
