//! Pressed feedback and the two interaction zones.

use super::title_bar::TitleBar;
use crate::model::{ButtonKind, RenderMode, VisualState};
use crate::shell::{ButtonSignal, ShellContext, ShellNotifier, Side};
use crate::view_state::hit_test;

impl TitleBar {
    /// Show or clear pressed feedback on the left cluster.
    pub fn left_pressed(&mut self, pressed: bool) {
        if self.is_torn_down() {
            return;
        }
        let state = self.requested_state();
        let elements = self.elements_mut();

        if pressed {
            let attached = elements.is_visible(ButtonKind::BgAttached);
            elements.set_visible(ButtonKind::BgLeftPressed, !attached);
            elements.set_visible(ButtonKind::BgLeftAttachedPressed, attached);
            if state.contains(VisualState::BTN_LAUNCHER) {
                elements.show(ButtonKind::LauncherPressed);
            }
            if state.contains(VisualState::BTN_SWITCHER) {
                elements.show(ButtonKind::SwitcherPressed);
            }
        } else {
            for kind in [
                ButtonKind::BgLeftPressed,
                ButtonKind::BgLeftAttachedPressed,
                ButtonKind::LauncherPressed,
                ButtonKind::SwitcherPressed,
            ] {
                elements.hide(kind);
            }
        }
    }

    /// Show or clear pressed feedback on the right cluster.
    pub fn right_pressed(&mut self, pressed: bool) {
        if self.is_torn_down() {
            return;
        }
        let state = self.requested_state();
        let elements = self.elements_mut();

        if pressed {
            elements.show(ButtonKind::BgRightPressed);
            if state.contains(VisualState::BTN_BACK) {
                elements.show(ButtonKind::BackPressed);
            }
            if state.contains(VisualState::BTN_CLOSE) {
                elements.show(ButtonKind::ClosePressed);
            }
        } else {
            for kind in [
                ButtonKind::BgRightPressed,
                ButtonKind::BackPressed,
                ButtonKind::ClosePressed,
            ] {
                elements.hide(kind);
            }
        }
    }

    /// Interaction zone under `(x, y)`, if any.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<Side> {
        if self.is_torn_down() {
            return None;
        }
        hit_test(self.elements(), x, y, self.title_bg_reactive())
    }

    /// Pointer went down in `side`.
    ///
    /// The right zone doubles as the way out of desktop edit mode.
    pub fn press(&mut self, side: Side, ctx: &ShellContext, notifier: &mut dyn ShellNotifier) {
        if self.is_torn_down() {
            return;
        }
        match side {
            Side::Left => {
                if !ctx.render_mode.is_editing_family() {
                    self.left_pressed(true);
                }
            }
            Side::Right => {
                self.right_pressed(true);
                if ctx.render_mode.is_edit_mode() {
                    let home = if ctx.portrait_capable {
                        RenderMode::HomePortrait
                    } else {
                        RenderMode::Home
                    };
                    notifier.request_render_mode(home);
                }
            }
        }
        notifier.button_signal(ButtonSignal::Press(side));
    }

    /// Pointer released inside `side`.
    pub fn release(&mut self, side: Side, notifier: &mut dyn ShellNotifier) {
        if self.is_torn_down() {
            return;
        }
        notifier.button_signal(ButtonSignal::Clicked(side));
    }

    /// Pointer left `side`; drops pressed feedback.
    pub fn leave(&mut self, side: Side, notifier: &mut dyn ShellNotifier) {
        if self.is_torn_down() {
            return;
        }
        match side {
            Side::Left => self.left_pressed(false),
            Side::Right => self.right_pressed(false),
        }
        notifier.button_signal(ButtonSignal::Leave(side));
    }
}
