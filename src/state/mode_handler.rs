//! The three mutually exclusive mode handlers.
//!
//! Each handler is a pure function of the requested state and a read-only
//! view of the shell. It returns the full visual state to apply plus what to
//! show in the title area; the caller owns all mutation.

use crate::config::Labels;
use crate::model::{DecorButtonKind, DecorButtonState, ModeHandler, RenderMode, VisualState, WindowInfo};
use crate::view_state::TitleRequest;

/// Read-only inputs of one handler run.
#[derive(Debug, Clone, Copy)]
pub struct HandlerInput<'a> {
    /// Requested state at the start of the pass.
    pub requested: VisualState,
    pub render_mode: RenderMode,
    pub window: Option<&'a WindowInfo>,
    pub labels: &'a Labels,
    pub loading_title: Option<&'a str>,
}

/// What a handler decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutcome {
    pub handler: ModeHandler,
    pub state: VisualState,
    pub title: TitleRequest,
    /// New menu-indicator flag, or `None` to keep the current one.
    pub has_menu_indicator: Option<bool>,
    /// Pressed feedback for the right cluster, when the handler drives it.
    pub right_pressed: Option<bool>,
    /// The title background accepts taps (edit mode).
    pub title_bg_reactive: bool,
}

/// Pick and run the handler for `input.render_mode`.
pub fn run_mode_handler(input: &HandlerInput<'_>) -> HandlerOutcome {
    match ModeHandler::from(input.render_mode) {
        ModeHandler::Edit => edit_mode(input),
        ModeHandler::Loading => loading_mode(input),
        ModeHandler::Normal => normal_mode(input),
    }
}

/// Desktop edit mode: menu on the left, done on the right.
pub fn edit_mode(input: &HandlerInput<'_>) -> HandlerOutcome {
    let state = (VisualState::BTN_MENU | VisualState::BTN_DONE | VisualState::FULL_WIDTH)
        | (input.requested & VisualState::SMALL_BUTTONS);

    HandlerOutcome {
        handler: ModeHandler::Edit,
        state,
        title: TitleRequest::text(input.labels.desktop_menu.as_str()),
        has_menu_indicator: Some(true),
        right_pressed: None,
        title_bg_reactive: true,
    }
}

/// Application start-up: busy indicator next to the loading title.
pub fn loading_mode(input: &HandlerInput<'_>) -> HandlerOutcome {
    let state = (input.requested | VisualState::FULL_WIDTH) - VisualState::FOREGROUND;

    HandlerOutcome {
        handler: ModeHandler::Loading,
        state,
        title: TitleRequest {
            text: input.loading_title.map(str::to_string),
            markup: false,
            waiting: true,
        },
        has_menu_indicator: None,
        right_pressed: None,
        title_bg_reactive: false,
    }
}

/// Everything else: mirror the foreground application's decoration.
pub fn normal_mode(input: &HandlerInput<'_>) -> HandlerOutcome {
    let window = input.window.filter(|_| input.render_mode.is_app());
    let waiting = window.is_some_and(|w| w.waiting);
    let has_menu_indicator = window.is_some_and(|w| w.has_menu_indicator);

    let decorated = window.and_then(|w| w.decoration.as_ref().map(|d| (w, d)));
    let Some((window, decoration)) = decorated else {
        // Editing chrome may still carry a back button.
        let cleared = if input.render_mode.is_editing_family() {
            VisualState::FULL_WIDTH
        } else {
            VisualState::FULL_WIDTH | VisualState::BTN_CLOSE | VisualState::BTN_BACK
        };
        return HandlerOutcome {
            handler: ModeHandler::Normal,
            state: input.requested - cleared,
            title: TitleRequest::default(),
            has_menu_indicator: Some(has_menu_indicator),
            right_pressed: None,
            title_bg_reactive: false,
        };
    };

    let title = match window.display_title() {
        Some(name) => TitleRequest {
            text: Some(name.to_string()),
            markup: window.name_has_markup,
            waiting,
        },
        None => TitleRequest::default().waiting(waiting),
    };

    let mut state = input.requested - VisualState::right_mask();
    let mut pressed = false;
    for button in &decoration.buttons {
        match button.kind {
            DecorButtonKind::Close => state |= VisualState::BTN_CLOSE,
            DecorButtonKind::Back => state |= VisualState::BTN_BACK,
            DecorButtonKind::Other => {}
        }
        pressed |= button.state != DecorButtonState::Inactive;
    }
    state |= VisualState::FULL_WIDTH;

    HandlerOutcome {
        handler: ModeHandler::Normal,
        state,
        title,
        has_menu_indicator: Some(has_menu_indicator),
        right_pressed: Some(pressed),
        title_bg_reactive: false,
    }
}

#[cfg(test)]
#[path = "mode_handler_tests.rs"]
mod tests;
