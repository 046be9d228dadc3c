//! Theme geometry, animation timing and label text.

use serde::{Deserialize, Serialize};

/// Fixed theme geometry used by the layout algorithm.
///
/// All values are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Metrics {
    /// Height of the whole bar.
    pub bar_height: i32,
    pub top_left_button_width: i32,
    pub top_left_button_height: i32,
    pub top_right_button_width: i32,
    pub top_right_button_height: i32,
    /// Button width in small-button (portrait) mode.
    pub top_right_button_width_small: i32,
    /// Gap between the left cluster and the title text.
    pub title_margin: i32,
    pub title_margin_small: i32,
    /// Horizontal padding either side of a text-label button.
    pub text_label_margin: i32,
    /// Gap between the end of the title text and an indicator.
    pub progress_margin: i32,
    pub progress_size: i32,
    pub progress_frames: u32,
    pub progress_fps: u32,
    pub menu_indicator_size: i32,
    pub separator_width: i32,
    /// Natural width of the edit-mode menu image.
    pub menu_button_width: i32,
    /// Offset applied when anchoring a legacy application menu to the title.
    pub menu_anchor_adjust: i32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            bar_height: 56,
            top_left_button_width: 112,
            top_left_button_height: 56,
            top_right_button_width: 112,
            top_right_button_height: 56,
            top_right_button_width_small: 80,
            title_margin: 24,
            title_margin_small: 8,
            text_label_margin: 24,
            progress_margin: 8,
            progress_size: 48,
            progress_frames: 8,
            progress_fps: 10,
            menu_indicator_size: 16,
            separator_width: 2,
            menu_button_width: 112,
            menu_anchor_adjust: 14,
        }
    }
}

impl Metrics {
    /// Length of one spinner loop in milliseconds.
    pub fn progress_loop_ms(&self) -> u64 {
        if self.progress_fps == 0 {
            return 0;
        }
        1000 * u64::from(self.progress_frames) / u64::from(self.progress_fps)
    }
}

/// Switcher breathing animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PulseConfig {
    /// Duration of a single pulse.
    pub pulse_ms: u64,
    /// Breaths per animation.
    pub pulses: u32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            pulse_ms: 1000,
            pulses: 5,
        }
    }
}

impl PulseConfig {
    /// Total timeline length.
    pub fn duration_ms(&self) -> u64 {
        self.pulse_ms * u64::from(self.pulses)
    }
}

/// Localized fixed strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    /// Title shown in desktop edit mode.
    pub desktop_menu: String,
    /// Text of the done button.
    pub done: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            desktop_menu: "Desktop menu".to_string(),
            done: "Done".to_string(),
        }
    }
}
