//! Title label, busy indicator and menu indicator placement.

use super::element::ElementSet;
use super::layout::LayoutInput;
use super::measure::TextMeasure;
use crate::model::{ButtonKind, VisualState};

/// What a mode handler wants shown in the title area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleRequest {
    pub text: Option<String>,
    pub markup: bool,
    /// Show the busy indicator.
    pub waiting: bool,
}

impl TitleRequest {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn waiting(mut self, waiting: bool) -> Self {
        self.waiting = waiting;
        self
    }
}

/// Place the title, busy indicator and menu indicator.
///
/// Must run after [`layout_backgrounds`](super::layout::layout_backgrounds)
/// for the same pass; the indicators are positioned relative to the title.
pub fn place_title(
    elements: &mut ElementSet,
    input: &LayoutInput<'_>,
    request: &TitleRequest,
    has_menu_indicator: bool,
    measure: &dyn TextMeasure,
) {
    let m = input.metrics;
    let button_width = input.button_width();

    let mut x_start = 0;
    if input.state.has_any_left_button() {
        x_start += button_width;
    }
    x_start += input.status_area_width();
    let margin = if input.state.contains(VisualState::SMALL_BUTTONS) {
        m.title_margin_small
    } else {
        m.title_margin
    };

    // The origin is kept even without text: the busy indicator hangs off it.
    let title = &mut elements.title;
    title.element.x = x_start + margin;
    match request.text.as_deref() {
        Some(text) => {
            let busy_width = if request.waiting { m.progress_size } else { 0 };
            let x_end = input.screen_width - button_width - busy_width;

            let extents = measure.measure(text, request.markup);
            title.text = Some(text.to_string());
            title.markup = request.markup;
            title.text_width = extents.width;
            title.element.width = (x_end - (x_start + margin)).max(0);
            title.element.height = extents.height;
            title.element.y = (m.bar_height - extents.height) / 2;
            title.element.visible = true;
        }
        None => {
            title.text = None;
            title.markup = false;
            title.text_width = 0;
            title.element.width = 0;
            title.element.height = 0;
            title.element.y = 0;
            title.element.visible = false;
        }
    }

    let busy_x = end_of_title(elements, input, m.progress_size, true);
    let progress = &mut elements.progress;
    if request.waiting && busy_x >= 0 {
        progress.visible = true;
        progress.x = busy_x;
        progress.y = (m.bar_height - m.progress_size) / 2;
    } else {
        // Too narrow for the indicator anywhere on screen.
        progress.visible = false;
    }

    // No title usually means a loading screen; keep the indicator away.
    if has_menu_indicator && request.text.is_some() && !request.waiting {
        let size = m.menu_indicator_size;
        let x = end_of_title(elements, input, size, false);
        let indicator = elements.get_mut(ButtonKind::MenuIndicator);
        if x >= 0 {
            indicator.visible = true;
            indicator.x = x;
            indicator.y = (m.bar_height - size) / 2;
        } else {
            indicator.visible = false;
        }
    } else {
        elements.hide(ButtonKind::MenuIndicator);
    }
}

/// X position just after the title text for an indicator `width` wide.
///
/// When the indicator would run into the right cluster, returns the last
/// position that fits if `allow_overlap`, or a negative value otherwise.
pub fn end_of_title(
    elements: &ElementSet,
    input: &LayoutInput<'_>,
    width: i32,
    allow_overlap: bool,
) -> i32 {
    let title = &elements.title;
    let x = title.element.x + title.text_width + input.metrics.progress_margin;
    let max_x = input.screen_width - (width + input.button_width());

    if x > max_x {
        if allow_overlap {
            max_x
        } else {
            -width.max(1)
        }
    } else {
        x
    }
}
