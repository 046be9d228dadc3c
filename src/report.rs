//! Geometry dump of a reconciled title bar.
//!
//! Used by the command-line front end and by snapshot tests.

use crate::model::{ButtonKind, RenderMode};
use crate::shell::{EventLog, ShellEvent};
use crate::state::TitleBar;
use crate::view_state::Element;
use serde::Serialize;
use std::fmt;

/// One element row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementRow {
    pub name: &'static str,
    pub visible: bool,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub opacity: u8,
}

impl ElementRow {
    fn new(name: &'static str, element: &Element) -> Self {
        Self {
            name,
            visible: element.visible,
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            opacity: element.opacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub screen_width: i32,
    pub render_mode: RenderMode,
    pub requested: String,
    pub applied: String,
    pub title: Option<String>,
    pub menu_anchor: (i32, i32),
    pub elements: Vec<ElementRow>,
    pub events: Vec<ShellEvent>,
}

impl LayoutReport {
    pub fn capture(bar: &TitleBar, log: &EventLog) -> Self {
        let elements = bar.elements();
        let mut rows: Vec<ElementRow> = elements
            .iter()
            .map(|(kind, element)| ElementRow::new(kind.name(), element))
            .collect();
        rows.push(ElementRow::new("title-bg", &elements.title_bg));
        rows.push(ElementRow::new("title", &elements.title.element));
        rows.push(ElementRow::new("progress", &elements.progress));

        Self {
            screen_width: bar.screen_width(),
            render_mode: bar.render_mode(),
            requested: bar.requested_state().to_string(),
            applied: bar.applied_state().to_string(),
            title: elements.title.text.clone(),
            menu_anchor: bar.menu_anchor(),
            elements: rows,
            events: log.events.clone(),
        }
    }

    /// Rows of visible elements only.
    pub fn visible(&self) -> impl Iterator<Item = &ElementRow> {
        self.elements.iter().filter(|row| row.visible)
    }

    pub fn row(&self, kind: ButtonKind) -> Option<&ElementRow> {
        self.elements.iter().find(|row| row.name == kind.name())
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "screen {} mode {:?}", self.screen_width, self.render_mode)?;
        writeln!(f, "requested {}", self.requested)?;
        writeln!(f, "applied   {}", self.applied)?;
        if let Some(title) = &self.title {
            writeln!(f, "title     {title:?}")?;
        }
        writeln!(
            f,
            "{:<26} {:>6} {:>4} {:>6} {:>6} {:>4}",
            "element", "x", "y", "width", "height", "alpha"
        )?;
        for row in self.visible() {
            writeln!(
                f,
                "{:<26} {:>6} {:>4} {:>6} {:>6} {:>4}",
                row.name, row.x, row.y, row.width, row.height, row.opacity
            )?;
        }
        Ok(())
    }
}
