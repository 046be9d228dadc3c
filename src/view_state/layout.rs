//! Background, separator and button geometry.
//!
//! Two background styles exist. Full-width mode draws an opaque tiled strip
//! across the whole screen with thin separators between clusters. Tab mode
//! (not full-width, or full-width while lifted into the foreground) draws a
//! rounded floating tab behind the left cluster and status area, and another
//! behind the right cluster.

use super::element::ElementSet;
use crate::config::Metrics;
use crate::model::{ButtonFlags, ButtonKind, RenderMode, VisualState};
use crate::shell::StatusArea;

/// Everything the layout reads for one pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    pub metrics: &'a Metrics,
    pub state: VisualState,
    pub screen_width: i32,
    pub status_area: Option<StatusArea>,
    pub render_mode: RenderMode,
}

impl LayoutInput<'_> {
    /// Width of one button slot.
    ///
    /// Right-cluster buttons use this same accessor, so outside small-button
    /// mode they report the top-left width even if the right width differs.
    pub fn button_width(&self) -> i32 {
        if self.state.contains(VisualState::SMALL_BUTTONS) {
            self.metrics.top_right_button_width_small
        } else {
            self.metrics.top_left_button_width
        }
    }

    pub fn status_area_visible(&self) -> bool {
        self.status_area.is_some_and(|sa| sa.visible)
    }

    pub fn status_area_width(&self) -> i32 {
        match self.status_area {
            Some(sa) if sa.visible => sa.width,
            _ => 0,
        }
    }

    /// How far image content is pulled off-screen in small-button mode.
    fn small_offset(&self) -> i32 {
        self.metrics.top_left_button_width - self.button_width()
    }
}

/// Place every edge-aligned element for the current button width and screen.
///
/// Runs on every state change and on every screen resize.
pub fn position_buttons(elements: &mut ElementSet, input: &LayoutInput<'_>) {
    let offset = input.small_offset();

    for kind in ButtonKind::ALL {
        let flags = kind.spec().flags;
        let button_offset = if flags.contains(ButtonFlags::CENTRE) {
            offset / 2
        } else {
            offset
        };

        if flags.contains(ButtonFlags::ALIGN_LEFT) {
            elements.set_x(kind, -button_offset);
        }
        if flags.contains(ButtonFlags::ALIGN_RIGHT) {
            let width = elements.width(kind);
            elements.set_x(kind, button_offset + input.screen_width - width);
        }
    }

    // The generic rule leaves a seam between these during rotation.
    elements.set_x(ButtonKind::BgLeftAttachedPressed, -offset);
    elements.set_x(ButtonKind::BgAttached, 0);
    let done_width = elements.width(ButtonKind::Done);
    elements.set_x(ButtonKind::Done, input.screen_width - done_width);
}

/// Lay out backgrounds and separators.
///
/// Button visibility must already reflect `input.state`: the full-width
/// separators snap to the menu and done buttons only when those are shown.
pub fn layout_backgrounds(elements: &mut ElementSet, input: &LayoutInput<'_>) {
    let m = input.metrics;
    let state = input.state;
    let full_width = state.contains(VisualState::FULL_WIDTH);
    let foreground = state.contains(VisualState::FOREGROUND);
    let button_width = input.button_width();

    position_buttons(elements, input);

    if full_width {
        layout_full_width(elements, input);
    } else {
        elements.title_bg.visible = false;
        elements.progress.visible = false;
        elements.hide(ButtonKind::MenuIndicator);
    }

    if !full_width || foreground {
        let mut left_width = 0;
        if state.has_any_left_button() {
            left_width = button_width;
        }

        // The status area is never shown in foreground mode.
        if input.status_area_visible() && !foreground {
            left_width += input.status_area_width();
            elements.show(ButtonKind::SeparatorLeft);
            elements.set_x(ButtonKind::SeparatorLeft, button_width);
        } else {
            elements.hide(ButtonKind::SeparatorLeft);
        }

        elements.hide(ButtonKind::SeparatorStatus);
        elements.hide(ButtonKind::SeparatorRight);

        // Rounded end sits at the furthest-right edge of the left tab.
        elements.show(ButtonKind::BgLeftEnd);
        elements.set_x(ButtonKind::BgLeftEnd, left_width - m.top_left_button_width);

        if left_width > m.top_left_button_width {
            let attached = elements.get_mut(ButtonKind::BgAttached);
            attached.visible = true;
            attached.width = left_width - m.top_left_button_width;
        } else {
            elements.hide(ButtonKind::BgAttached);
        }

        elements.set_visible(ButtonKind::BgRightEnd, state.has_any_right_button());
    }
}

fn layout_full_width(elements: &mut ElementSet, input: &LayoutInput<'_>) {
    let m = input.metrics;
    let state = input.state;
    let button_width = input.button_width();
    let portrait_edit = input.render_mode == RenderMode::HomeEditPortrait;

    elements.hide(ButtonKind::BgLeftEnd);
    elements.hide(ButtonKind::BgRightEnd);
    elements.hide(ButtonKind::BgAttached);
    elements.title_bg.visible = true;
    elements.title_bg.width = input.screen_width.max(0);

    // In portrait edit the menu image is pushed partly off-screen so its
    // visible part matches a small button.
    let menu_x = if portrait_edit {
        (m.top_right_button_width_small - m.top_right_button_width) / 2
    } else {
        0
    };
    elements.set_x(ButtonKind::Menu, menu_x);

    let separator_width = elements.width(ButtonKind::SeparatorLeft);
    if state.has_any_left_button() {
        elements.show(ButtonKind::SeparatorLeft);
        let x = if elements.is_visible(ButtonKind::Menu) {
            let portrait_correction = if portrait_edit {
                m.top_right_button_width - m.top_right_button_width_small
            } else {
                0
            };
            // +2 overlaps the separator with the menu image's own edge.
            elements.width(ButtonKind::Menu) - separator_width - portrait_correction + 2
        } else {
            button_width - separator_width
        };
        elements.set_x(ButtonKind::SeparatorLeft, x);
    } else {
        elements.hide(ButtonKind::SeparatorLeft);
    }

    if input.status_area_visible() {
        elements.show(ButtonKind::SeparatorStatus);
        let left = if state.has_any_left_button() {
            button_width
        } else {
            0
        };
        elements.set_x(ButtonKind::SeparatorStatus, left + input.status_area_width());
    } else {
        elements.hide(ButtonKind::SeparatorStatus);
    }

    if state.has_any_right_button() {
        elements.show(ButtonKind::SeparatorRight);
        let x = if elements.is_visible(ButtonKind::Done) {
            input.screen_width - elements.width(ButtonKind::Done)
        } else {
            input.screen_width - button_width
        };
        elements.set_x(ButtonKind::SeparatorRight, x);
    } else {
        elements.hide(ButtonKind::SeparatorRight);
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
