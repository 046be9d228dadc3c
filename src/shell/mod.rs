//! Seams to the surrounding shell (impure side).
//!
//! The title bar never queries globals. Everything it reads about the outside
//! world arrives as a [`ShellContext`] snapshot, everything it tells the
//! outside world goes through [`ShellNotifier`], and deferred work is queued
//! through a [`Scheduler`].

pub mod main_loop;

pub use main_loop::{FrameReport, MainLoop};

use crate::model::{RenderMode, WindowInfo};
use serde::Serialize;

/// Geometry of the externally owned status area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusArea {
    pub width: i32,
    /// Mapped, on-screen and not pushed off the top-left corner.
    pub visible: bool,
}

/// Snapshot of the shell state a reconciliation pass reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellContext {
    pub screen_width: i32,
    pub render_mode: RenderMode,
    /// Mode before the transition currently in flight.
    pub previous_render_mode: RenderMode,
    /// A rotation transition is animating.
    pub rotating: bool,
    /// `None` if the shell has no status area at all.
    pub status_area: Option<StatusArea>,
    /// Foreground application window, if any.
    pub window: Option<WindowInfo>,
    /// The display is blanked; animations should not redraw.
    pub display_off: bool,
    /// The home view can be shown in portrait.
    pub portrait_capable: bool,
}

impl Default for ShellContext {
    fn default() -> Self {
        Self {
            screen_width: 800,
            render_mode: RenderMode::Home,
            previous_render_mode: RenderMode::Home,
            rotating: false,
            status_area: None,
            window: None,
            display_off: false,
            portrait_capable: false,
        }
    }
}

impl ShellContext {
    pub fn new(screen_width: i32, render_mode: RenderMode) -> Self {
        Self {
            screen_width,
            render_mode,
            previous_render_mode: render_mode,
            ..Self::default()
        }
    }
}

/// One of the two interaction zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Left,
    Right,
}

/// Payload-free interaction notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSignal {
    Press(Side),
    Clicked(Side),
    Leave(Side),
}

/// Which container currently owns the foreground group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupParent {
    #[default]
    TitleBar,
    /// The shell's front-most overlay layer.
    FrontLayer,
}

/// Notifications produced by the title bar.
///
/// All methods default to no-ops so embedders implement only what they use.
pub trait ShellNotifier {
    /// Left-button or small-button bits changed; re-place dependent overlays.
    fn place_titlebar_elements(&mut self) {}

    /// Hit-testable regions may have changed.
    fn set_input_viewport(&mut self) {}

    /// The foreground group was re-parented and raised to the top of `parent`.
    fn raise_foreground(&mut self, _parent: GroupParent) {}

    /// Raise the status area above the foreground group.
    fn raise_status_area(&mut self) {}

    fn button_signal(&mut self, _signal: ButtonSignal) {}

    /// Ask the shell to switch render mode.
    fn request_render_mode(&mut self, _mode: RenderMode) {}
}

/// Recorded notification, for logs, the CLI report and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "event")]
pub enum ShellEvent {
    PlaceTitlebarElements,
    SetInputViewport,
    RaiseForeground { parent: GroupParent },
    RaiseStatusArea,
    Button { signal: ButtonSignal },
    RequestRenderMode { mode: RenderMode },
}

/// [`ShellNotifier`] that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<ShellEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, event: ShellEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ShellNotifier for EventLog {
    fn place_titlebar_elements(&mut self) {
        self.events.push(ShellEvent::PlaceTitlebarElements);
    }

    fn set_input_viewport(&mut self) {
        self.events.push(ShellEvent::SetInputViewport);
    }

    fn raise_foreground(&mut self, parent: GroupParent) {
        self.events.push(ShellEvent::RaiseForeground { parent });
    }

    fn raise_status_area(&mut self) {
        self.events.push(ShellEvent::RaiseStatusArea);
    }

    fn button_signal(&mut self, signal: ButtonSignal) {
        self.events.push(ShellEvent::Button { signal });
    }

    fn request_render_mode(&mut self, mode: RenderMode) {
        self.events.push(ShellEvent::RequestRenderMode { mode });
    }
}

/// Handle to a queued deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskToken(pub u64);

/// Dispatch priority; lower values run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(pub i32);

impl Priority {
    pub const DEFAULT: Priority = Priority(0);
    /// Title-bar reconciliation. Must precede [`Priority::TIMELINE`].
    pub const TITLEBAR_UPDATE: Priority = Priority(20);
    /// Animation timeline frames.
    pub const TIMELINE: Priority = Priority(30);
}

/// Queue for one-shot deferred tasks.
pub trait Scheduler {
    fn schedule_deferred(&mut self, priority: Priority) -> TaskToken;

    /// Drop a queued task. Unknown or already-run tokens are ignored.
    fn cancel(&mut self, token: TaskToken);
}
