//! Read-only view of the foreground application window.

/// Kind of a button in the window's title decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorButtonKind {
    Close,
    Back,
    /// Any other decoration button; contributes pressed state only.
    Other,
}

/// Interaction state of a decoration button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorButtonState {
    #[default]
    Inactive,
    Prelight,
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorButton {
    pub kind: DecorButtonKind,
    pub state: DecorButtonState,
}

impl DecorButton {
    pub fn new(kind: DecorButtonKind) -> Self {
        Self {
            kind,
            state: DecorButtonState::Inactive,
        }
    }

    pub fn pressed(kind: DecorButtonKind) -> Self {
        Self {
            kind,
            state: DecorButtonState::Pressed,
        }
    }
}

/// The window's north decoration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoration {
    /// Whether the theme shows titles in this decoration.
    pub show_title: bool,
    pub buttons: Vec<DecorButton>,
}

/// Everything the normal mode handler reads about the foreground window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowInfo {
    pub name: Option<String>,
    pub name_has_markup: bool,
    /// The application signalled it is busy.
    pub waiting: bool,
    pub has_menu_indicator: bool,
    /// `None` when the window has no north decoration.
    pub decoration: Option<Decoration>,
}

impl WindowInfo {
    /// A decorated window with the given name and buttons.
    pub fn decorated(name: &str, buttons: Vec<DecorButton>) -> Self {
        Self {
            name: Some(name.to_string()),
            decoration: Some(Decoration {
                show_title: true,
                buttons,
            }),
            ..Self::default()
        }
    }

    /// Title to display, if the decoration allows it and the name is non-empty.
    pub fn display_title(&self) -> Option<&str> {
        let decoration = self.decoration.as_ref()?;
        if !decoration.show_title {
            return None;
        }
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
