//! Domain model (pure data).

pub mod button;
pub mod error;
pub mod render_mode;
pub mod visual_state;
pub mod window;

pub use button::{ButtonContent, ButtonFlags, ButtonKind, ButtonSpec, BUTTON_COUNT};
pub use error::AppError;
pub use render_mode::{ModeHandler, RenderMode};
pub use visual_state::VisualState;
pub use window::{DecorButton, DecorButtonKind, DecorButtonState, Decoration, WindowInfo};
