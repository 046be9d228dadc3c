//! Switcher highlight breathing animation.
//!
//! The highlight fades dim → bright → dim several times over one timeline.
//! Re-triggering while the highlight flag is still set continues from the
//! stored position instead of flashing back to fully dim.

use super::timeline::Timeline;
use crate::config::PulseConfig;
use crate::model::VisualState;
use std::f64::consts::PI;
use tracing::trace;

/// Peak opacity the breathing curve reaches.
const PULSE_PEAK: f64 = 127.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulsePhase {
    Stopped,
    Playing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitcherPulse {
    timeline: Timeline,
    pulses: u32,
}

impl SwitcherPulse {
    pub fn new(config: &PulseConfig) -> Self {
        Self {
            timeline: Timeline::new(config.duration_ms()),
            pulses: config.pulses,
        }
    }

    pub fn phase(&self) -> PulsePhase {
        if self.timeline.is_playing() {
            PulsePhase::Playing
        } else {
            PulsePhase::Stopped
        }
    }

    /// Fraction of the whole animation played so far.
    pub fn progress(&self) -> f64 {
        self.timeline.progress()
    }

    /// Handle a pulse-on request against the caller's requested state.
    ///
    /// Returns the requested state with the highlight flag set. Does nothing
    /// if already playing.
    pub fn start(&mut self, requested: VisualState) -> VisualState {
        if self.timeline.is_playing() {
            return requested;
        }

        if requested.contains(VisualState::BTN_SWITCHER_HIGHLIGHT) {
            // A finished animation has nothing left to resume.
            if self.timeline.progress() >= 1.0 {
                self.timeline.rewind();
            }
            trace!(progress = self.timeline.progress(), "resuming switcher pulse");
        } else {
            self.timeline.rewind();
            trace!("starting switcher pulse");
        }

        self.timeline.start();
        requested | VisualState::BTN_SWITCHER_HIGHLIGHT
    }

    /// Handle a pulse-off request. The caller forces the highlight transparent.
    pub fn stop(&mut self) {
        self.timeline.stop();
    }

    /// Advance by one frame and return the new highlight opacity, if any.
    ///
    /// `switcher_visible` gates the curve; `display_off` skips it and pins
    /// the highlight fully opaque.
    pub fn tick(&mut self, delta_ms: u64, switcher_visible: bool, display_off: bool) -> Option<u8> {
        let elapsed = self.timeline.advance(delta_ms)?;

        if display_off {
            return Some(u8::MAX);
        }
        if !switcher_visible {
            return None;
        }

        let duration = self.timeline.duration_ms();
        let amt = if duration == 0 {
            0.0
        } else {
            elapsed as f64 / duration as f64 * f64::from(self.pulses) / 2.0
        };
        let opacity = breathing_opacity(amt);
        trace!(elapsed, opacity, "switcher pulse frame");
        Some(opacity)
    }
}

/// Opacity for phase `amt`: zero at whole numbers, peaking at halves.
pub fn breathing_opacity(amt: f64) -> u8 {
    let value = (1.0 - (amt * 2.0 * PI).cos()) * PULSE_PEAK;
    value.clamp(0.0, f64::from(u8::MAX)) as u8
}
