//! Title bar state machines.
//!
//! The reconciler, the mode handlers and the two animations. Time and
//! scheduling come in from the shell; nothing here blocks or sleeps.

pub mod interaction;
pub mod mode_handler;
pub mod pulse;
pub mod spinner;
pub mod timeline;
pub mod title_bar;

pub use mode_handler::{run_mode_handler, HandlerInput, HandlerOutcome};
pub use pulse::{breathing_opacity, PulsePhase, SwitcherPulse};
pub use spinner::Spinner;
pub use timeline::Timeline;
pub use title_bar::TitleBar;
