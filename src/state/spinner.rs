//! Busy indicator sprite animation.

use super::timeline::Timeline;
use crate::config::Metrics;

/// Looping frame counter over the progress sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Spinner {
    timeline: Timeline,
    frames: u32,
}

impl Spinner {
    pub fn new(metrics: &Metrics) -> Self {
        Self {
            timeline: Timeline::looping(metrics.progress_loop_ms()),
            frames: metrics.progress_frames,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.timeline.is_playing()
    }

    /// Play while the indicator is shown; stopping rewinds to the first frame.
    pub fn set_running(&mut self, running: bool) {
        if running {
            self.timeline.start();
        } else {
            self.timeline.stop();
            self.timeline.rewind();
        }
    }

    /// Sprite frame currently displayed.
    pub fn frame(&self) -> u32 {
        let duration = self.timeline.duration_ms();
        if duration == 0 || self.frames == 0 {
            return 0;
        }
        let frame = self.timeline.elapsed_ms() * u64::from(self.frames) / duration;
        u32::try_from(frame)
            .unwrap_or(u32::MAX)
            .min(self.frames - 1)
    }

    /// Advance by one frame delta; returns the new sprite frame if playing.
    pub fn tick(&mut self, delta_ms: u64) -> Option<u32> {
        self.timeline.advance(delta_ms).map(|_| self.frame())
    }
}
