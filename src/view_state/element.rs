//! Visual element registry.
//!
//! One [`Element`] per [`ButtonKind`], plus the tiled title background, the
//! title text and the busy indicator. These are plain records; the layout
//! functions mutate them and an external renderer reads them.

use crate::config::Metrics;
use crate::model::{ButtonFlags, ButtonKind, BUTTON_COUNT};
use crate::shell::GroupParent;
use serde::Serialize;
use tracing::trace;

/// Width of the tiled title background image.
pub const TITLE_BG_TILE_WIDTH: i32 = 112;

/// Geometry and visibility of one visual node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Element {
    pub visible: bool,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub opacity: u8,
    /// Receives pointer events when visible.
    pub reactive: bool,
}

impl Element {
    pub fn hidden(width: i32, height: i32) -> Self {
        Self {
            visible: false,
            x: 0,
            y: 0,
            width,
            height,
            opacity: u8::MAX,
            reactive: false,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The title label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleText {
    pub text: Option<String>,
    pub markup: bool,
    /// Measured logical width of `text`, independent of the element width.
    pub text_width: i32,
    #[serde(flatten)]
    pub element: Element,
}

/// All elements owned by one title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSet {
    buttons: [Element; BUTTON_COUNT],
    pub title_bg: Element,
    pub title: TitleText,
    pub progress: Element,
    foreground_parent: GroupParent,
}

impl ElementSet {
    /// Build the registry with every element hidden.
    ///
    /// `done_label_width` is the measured width of the done label text.
    pub fn new(metrics: &Metrics, done_label_width: i32) -> Self {
        let buttons = ButtonKind::ALL.map(|kind| {
            let flags = kind.spec().flags;
            let (width, height) = if flags.contains(ButtonFlags::SET_SIZE) {
                if flags.contains(ButtonFlags::ALIGN_RIGHT) {
                    (metrics.top_right_button_width, metrics.top_right_button_height)
                } else {
                    (metrics.top_left_button_width, metrics.top_left_button_height)
                }
            } else {
                natural_size(kind, metrics, done_label_width)
            };
            let mut element = Element::hidden(width, height);
            element.reactive = matches!(
                kind,
                ButtonKind::Switcher
                    | ButtonKind::Launcher
                    | ButtonKind::Menu
                    | ButtonKind::Back
                    | ButtonKind::Done
            );
            element
        });

        Self {
            buttons,
            title_bg: Element::hidden(TITLE_BG_TILE_WIDTH, metrics.bar_height),
            title: TitleText {
                text: None,
                markup: false,
                text_width: 0,
                element: Element::hidden(0, 0),
            },
            progress: Element::hidden(metrics.progress_size, metrics.progress_size),
            foreground_parent: GroupParent::TitleBar,
        }
    }

    pub fn get(&self, kind: ButtonKind) -> &Element {
        &self.buttons[kind.index()]
    }

    pub fn get_mut(&mut self, kind: ButtonKind) -> &mut Element {
        &mut self.buttons[kind.index()]
    }

    pub fn is_visible(&self, kind: ButtonKind) -> bool {
        self.get(kind).visible
    }

    pub fn show(&mut self, kind: ButtonKind) {
        self.get_mut(kind).visible = true;
    }

    pub fn hide(&mut self, kind: ButtonKind) {
        self.get_mut(kind).visible = false;
    }

    pub fn set_visible(&mut self, kind: ButtonKind, visible: bool) {
        self.get_mut(kind).visible = visible;
    }

    pub fn set_x(&mut self, kind: ButtonKind, x: i32) {
        self.get_mut(kind).x = x;
    }

    pub fn width(&self, kind: ButtonKind) -> i32 {
        self.get(kind).width
    }

    /// Iterate `(kind, element)` in stacking order, bottom first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ButtonKind, &Element)> + '_ {
        ButtonKind::ALL.into_iter().zip(self.buttons.iter())
    }

    pub fn foreground_parent(&self) -> GroupParent {
        self.foreground_parent
    }

    /// Move the foreground group under `target`.
    ///
    /// Returns `false` without doing anything when it is already there.
    pub fn relocate_foreground(&mut self, target: GroupParent) -> bool {
        if self.foreground_parent == target {
            return false;
        }
        trace!(from = ?self.foreground_parent, to = ?target, "relocating foreground group");
        self.foreground_parent = target;
        true
    }

    /// Hide everything, used on teardown.
    pub fn hide_all(&mut self) {
        for element in &mut self.buttons {
            element.visible = false;
        }
        self.title_bg.visible = false;
        self.title.element.visible = false;
        self.progress.visible = false;
    }
}

/// Size of images that are not given an explicit size.
fn natural_size(kind: ButtonKind, metrics: &Metrics, done_label_width: i32) -> (i32, i32) {
    match kind {
        ButtonKind::SeparatorLeft | ButtonKind::SeparatorStatus | ButtonKind::SeparatorRight => {
            (metrics.separator_width, metrics.bar_height)
        }
        ButtonKind::Menu => (metrics.menu_button_width, metrics.bar_height),
        ButtonKind::MenuIndicator => (metrics.menu_indicator_size, metrics.menu_indicator_size),
        ButtonKind::Done => (
            done_label_width.max(0) + 2 * metrics.text_label_margin,
            metrics.bar_height,
        ),
        _ => (metrics.top_left_button_width, metrics.top_left_button_height),
    }
}
