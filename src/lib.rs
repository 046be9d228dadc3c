//! Title bar visual reconciliation engine.
//!
//! Owns a bitmask describing what the shell's top title bar should show and
//! turns it, one deferred pass per frame, into visibility and geometry for a
//! fixed set of elements: background segments, separators, buttons, the
//! title, a busy indicator and a breathing switcher highlight.
//!
//! Pure core (`model`, `view_state`, `state`) and impure shell (`shell`,
//! `config`, `logging`). Rendering is out of scope; a renderer reads the
//! [`view_state::ElementSet`] after each pass.

pub mod config;
pub mod logging;
pub mod model;
pub mod report;
pub mod shell;
pub mod state;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
