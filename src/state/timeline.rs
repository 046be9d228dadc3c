//! Frame-driven animation timeline.
//!
//! Time only moves when the main loop feeds a frame delta in, so animations
//! are deterministic under test.

/// Position within a fixed-length animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    duration_ms: u64,
    elapsed_ms: u64,
    playing: bool,
    looping: bool,
}

impl Timeline {
    /// A one-shot timeline that stops at its end.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0,
            playing: false,
            looping: false,
        }
    }

    /// A timeline that wraps around forever.
    pub fn looping(duration_ms: u64) -> Self {
        Self {
            looping: true,
            ..Self::new(duration_ms)
        }
    }

    pub fn start(&mut self) {
        self.playing = true;
    }

    /// Pause, keeping the current position.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn rewind(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Fraction of the duration elapsed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.elapsed_ms as f64 / self.duration_ms as f64
    }

    /// Advance by `delta_ms`. Returns the new elapsed time if a frame fired.
    ///
    /// A one-shot timeline fires a final frame at its end and then stops.
    pub fn advance(&mut self, delta_ms: u64) -> Option<u64> {
        if !self.playing {
            return None;
        }

        let elapsed = self.elapsed_ms.saturating_add(delta_ms);
        if elapsed >= self.duration_ms {
            if self.looping && self.duration_ms > 0 {
                self.elapsed_ms = elapsed % self.duration_ms;
            } else {
                self.elapsed_ms = self.duration_ms;
                self.playing = false;
            }
        } else {
            self.elapsed_ms = elapsed;
        }
        Some(self.elapsed_ms)
    }
}
