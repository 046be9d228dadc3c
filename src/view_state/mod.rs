//! View-state layer: element geometry for the title bar.
//!
//! Everything here is a pure function of the visual state, the screen and
//! the theme metrics. Nothing is drawn; a renderer reads the resulting
//! [`ElementSet`].
//!
//! # Module Structure
//!
//! - `element`: Element registry, one record per button kind plus title/progress
//! - `layout`: Backgrounds, separators and edge-aligned button offsets
//! - `title_text`: Title label and indicator placement
//! - `hit_test`: Which interaction zone a point falls in
//! - `measure`: Text measurement seam

pub mod element;
pub mod layout;
pub mod measure;
pub mod title_text;

pub use element::{Element, ElementSet, TitleText, TITLE_BG_TILE_WIDTH};
pub use hit_test::{hit_test, zone};
pub use layout::{layout_backgrounds, position_buttons, LayoutInput};
pub use measure::{strip_markup, CellMeasure, TextExtents, TextMeasure};
pub use title_text::{end_of_title, place_title, TitleRequest};
