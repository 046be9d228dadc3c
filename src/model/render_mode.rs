//! Shell render modes as seen by the title bar.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What the shell is currently showing.
///
/// The title bar never owns this; it is passed into every reconciliation pass
/// and selects which mode handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    #[default]
    Home,
    HomePortrait,
    HomeEdit,
    HomeEditPortrait,
    HomeEditDialog,
    HomeEditDialogPortrait,
    Loading,
    LoadingSubwin,
    App,
    AppPortrait,
    TaskNavigator,
    Launcher,
}

impl RenderMode {
    /// Desktop edit mode proper (the edit handler runs).
    pub const fn is_edit_mode(self) -> bool {
        matches!(self, RenderMode::HomeEdit | RenderMode::HomeEditPortrait)
    }

    /// Any edit variant, including the edit dialogs.
    pub const fn is_editing_family(self) -> bool {
        matches!(
            self,
            RenderMode::HomeEdit
                | RenderMode::HomeEditPortrait
                | RenderMode::HomeEditDialog
                | RenderMode::HomeEditDialogPortrait
        )
    }

    pub const fn is_loading(self) -> bool {
        matches!(self, RenderMode::Loading | RenderMode::LoadingSubwin)
    }

    /// An application window is in front.
    pub const fn is_app(self) -> bool {
        matches!(self, RenderMode::App | RenderMode::AppPortrait)
    }

    pub const fn is_portrait(self) -> bool {
        matches!(
            self,
            RenderMode::HomePortrait
                | RenderMode::HomeEditPortrait
                | RenderMode::HomeEditDialogPortrait
                | RenderMode::AppPortrait
        )
    }
}

/// Which of the three mode handlers a pass dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeHandler {
    Edit,
    Loading,
    Normal,
}

impl From<RenderMode> for ModeHandler {
    fn from(mode: RenderMode) -> Self {
        if mode.is_edit_mode() {
            ModeHandler::Edit
        } else if mode.is_loading() {
            ModeHandler::Loading
        } else {
            ModeHandler::Normal
        }
    }
}
