//! Static registry of title-bar button kinds.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Declarative layout flags attached to each button kind.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ButtonFlags: u8 {
        /// Pinned to the right edge of the screen.
        const ALIGN_RIGHT = 1 << 0;
        /// Pinned to the left edge of the screen.
        const ALIGN_LEFT  = 1 << 1;
        /// Gets an explicit size (images that fail to load still lay out).
        const SET_SIZE    = 1 << 2;
        /// Member of the foreground group.
        const FOREGROUND  = 1 << 3;
        /// Centred within its allocated area instead of edge-aligned.
        const CENTRE      = 1 << 4;
    }
}

/// Every visual element kind the title bar owns, in stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonKind {
    BgAttached,
    BgLeftEnd,
    BgRightEnd,
    BgLeftPressed,
    BgLeftAttachedPressed,
    BgRightPressed,
    SeparatorLeft,
    SeparatorStatus,
    SeparatorRight,
    Switcher,
    SwitcherHighlight,
    SwitcherPressed,
    Launcher,
    LauncherPressed,
    Back,
    BackPressed,
    Close,
    ClosePressed,
    Menu,
    Done,
    MenuIndicator,
}

/// Number of button kinds.
pub const BUTTON_COUNT: usize = 21;

impl ButtonKind {
    /// All kinds in stacking order.
    pub const ALL: [ButtonKind; BUTTON_COUNT] = [
        ButtonKind::BgAttached,
        ButtonKind::BgLeftEnd,
        ButtonKind::BgRightEnd,
        ButtonKind::BgLeftPressed,
        ButtonKind::BgLeftAttachedPressed,
        ButtonKind::BgRightPressed,
        ButtonKind::SeparatorLeft,
        ButtonKind::SeparatorStatus,
        ButtonKind::SeparatorRight,
        ButtonKind::Switcher,
        ButtonKind::SwitcherHighlight,
        ButtonKind::SwitcherPressed,
        ButtonKind::Launcher,
        ButtonKind::LauncherPressed,
        ButtonKind::Back,
        ButtonKind::BackPressed,
        ButtonKind::Close,
        ButtonKind::ClosePressed,
        ButtonKind::Menu,
        ButtonKind::Done,
        ButtonKind::MenuIndicator,
    ];

    /// Position in [`ButtonKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The immutable spec for this kind.
    pub const fn spec(self) -> &'static ButtonSpec {
        &BUTTON_SPECS[self.index()]
    }

    /// Stable kebab-case name, as serialized.
    pub const fn name(self) -> &'static str {
        match self {
            ButtonKind::BgAttached => "bg-attached",
            ButtonKind::BgLeftEnd => "bg-left-end",
            ButtonKind::BgRightEnd => "bg-right-end",
            ButtonKind::BgLeftPressed => "bg-left-pressed",
            ButtonKind::BgLeftAttachedPressed => "bg-left-attached-pressed",
            ButtonKind::BgRightPressed => "bg-right-pressed",
            ButtonKind::SeparatorLeft => "separator-left",
            ButtonKind::SeparatorStatus => "separator-status",
            ButtonKind::SeparatorRight => "separator-right",
            ButtonKind::Switcher => "switcher",
            ButtonKind::SwitcherHighlight => "switcher-highlight",
            ButtonKind::SwitcherPressed => "switcher-pressed",
            ButtonKind::Launcher => "launcher",
            ButtonKind::LauncherPressed => "launcher-pressed",
            ButtonKind::Back => "back",
            ButtonKind::BackPressed => "back-pressed",
            ButtonKind::Close => "close",
            ButtonKind::ClosePressed => "close-pressed",
            ButtonKind::Menu => "menu",
            ButtonKind::Done => "done",
            ButtonKind::MenuIndicator => "menu-indicator",
        }
    }
}

/// How a button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonContent {
    /// Themed image looked up by resource key.
    Image(&'static str),
    /// Translucent localized text label.
    Label,
}

/// Immutable per-kind description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub kind: ButtonKind,
    pub content: ButtonContent,
    pub flags: ButtonFlags,
}

impl ButtonSpec {
    /// Image resource key, or `None` for a text label.
    pub fn image_key(&self) -> Option<&'static str> {
        match self.content {
            ButtonContent::Image(key) => Some(key),
            ButtonContent::Label => None,
        }
    }

    pub fn is_foreground(&self) -> bool {
        self.flags.contains(ButtonFlags::FOREGROUND)
    }
}

const fn image(kind: ButtonKind, key: &'static str, flags: ButtonFlags) -> ButtonSpec {
    ButtonSpec {
        kind,
        content: ButtonContent::Image(key),
        flags,
    }
}

const SIZED_FG: ButtonFlags = ButtonFlags::SET_SIZE.union(ButtonFlags::FOREGROUND);
const RIGHT_SIZED: ButtonFlags = ButtonFlags::ALIGN_RIGHT.union(ButtonFlags::SET_SIZE);
const LEFT_ICON: ButtonFlags = ButtonFlags::ALIGN_LEFT
    .union(ButtonFlags::SET_SIZE)
    .union(ButtonFlags::FOREGROUND)
    .union(ButtonFlags::CENTRE);
const RIGHT_ICON: ButtonFlags = RIGHT_SIZED.union(ButtonFlags::CENTRE);

static BUTTON_SPECS: [ButtonSpec; BUTTON_COUNT] = [
    image(ButtonKind::BgAttached, "wmLeftAttached", SIZED_FG),
    image(ButtonKind::BgLeftEnd, "wmLeftEnd", SIZED_FG),
    image(ButtonKind::BgRightEnd, "wmRightEnd", RIGHT_SIZED),
    image(
        ButtonKind::BgLeftPressed,
        "wmLeftPressed",
        ButtonFlags::ALIGN_LEFT.union(SIZED_FG),
    ),
    image(ButtonKind::BgLeftAttachedPressed, "wmLeftAttachedPressed", SIZED_FG),
    image(ButtonKind::BgRightPressed, "wmRightPressed", RIGHT_SIZED),
    image(ButtonKind::SeparatorLeft, "wmSeparator", ButtonFlags::FOREGROUND),
    image(ButtonKind::SeparatorStatus, "wmSeparator", ButtonFlags::empty()),
    image(ButtonKind::SeparatorRight, "wmSeparator", ButtonFlags::empty()),
    image(ButtonKind::Switcher, "wmTaskSwitcherIcon", LEFT_ICON),
    image(ButtonKind::SwitcherHighlight, "wmTaskSwitcherHighlight", LEFT_ICON),
    image(ButtonKind::SwitcherPressed, "wmTaskSwitcherIconPressed", LEFT_ICON),
    image(ButtonKind::Launcher, "wmTaskLauncherIcon", LEFT_ICON),
    image(ButtonKind::LauncherPressed, "wmTaskLauncherIconPressed", LEFT_ICON),
    image(ButtonKind::Back, "wmBackIcon", RIGHT_ICON),
    image(ButtonKind::BackPressed, "wmBackIconPressed", RIGHT_ICON),
    image(ButtonKind::Close, "wmCloseIcon", RIGHT_ICON),
    image(ButtonKind::ClosePressed, "wmCloseIconPressed", RIGHT_ICON),
    image(ButtonKind::Menu, "wmEditIcon", ButtonFlags::empty()),
    ButtonSpec {
        kind: ButtonKind::Done,
        content: ButtonContent::Label,
        flags: ButtonFlags::ALIGN_RIGHT,
    },
    image(ButtonKind::MenuIndicator, "wmMenuIndicator", ButtonFlags::empty()),
];
