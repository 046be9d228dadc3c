//! Text measurement seam.
//!
//! Shaping and rendering are out of scope; the layout only needs the logical
//! extents of a string in pixels.

use unicode_width::UnicodeWidthStr;

/// Logical text extents in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtents {
    pub width: i32,
    pub height: i32,
}

/// Measures a string as the renderer would lay it out.
pub trait TextMeasure {
    /// `markup` means `text` contains inline markup tags that do not render.
    fn measure(&self, text: &str, markup: bool) -> TextExtents;
}

/// Fixed-advance measurement: every terminal cell is `cell_width` pixels.
///
/// Wide (east-asian) characters take two cells. Used by the CLI preview and
/// in tests where exact pixel widths must be predictable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMeasure {
    pub cell_width: i32,
    pub line_height: i32,
}

impl Default for CellMeasure {
    fn default() -> Self {
        Self {
            cell_width: 12,
            line_height: 30,
        }
    }
}

impl CellMeasure {
    pub fn new(cell_width: i32, line_height: i32) -> Self {
        Self {
            cell_width,
            line_height,
        }
    }
}

impl TextMeasure for CellMeasure {
    fn measure(&self, text: &str, markup: bool) -> TextExtents {
        let cells = if markup {
            strip_markup(text).width()
        } else {
            text.width()
        };
        let cells = i32::try_from(cells).unwrap_or(i32::MAX);
        TextExtents {
            width: cells.saturating_mul(self.cell_width),
            height: self.line_height,
        }
    }
}

/// Remove `<tag>` markup and decode the five predefined entities.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            rest = &rest[c.len_utf8()..];
            continue;
        }
        match c {
            '<' => in_tag = true,
            '&' => {
                let decoded = [
                    ("&amp;", '&'),
                    ("&lt;", '<'),
                    ("&gt;", '>'),
                    ("&quot;", '"'),
                    ("&apos;", '\''),
                ]
                .into_iter()
                .find(|(entity, _)| rest.starts_with(entity));
                if let Some((entity, ch)) = decoded {
                    out.push(ch);
                    rest = &rest[entity.len()..];
                    continue;
                }
                out.push('&');
            }
            _ => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}
