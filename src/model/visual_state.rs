//! Visual state bitmask.
//!
//! [`VisualState`] is the single source of truth for what the title bar
//! should show. Callers only ever write a whole mask; the reconciler turns it
//! into element visibility and geometry.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Independent visibility and layout flags for the title bar.
    ///
    /// Every flag owns exactly one bit. The left and right button groups are
    /// exposed as computed masks ([`VisualState::left_mask`],
    /// [`VisualState::right_mask`]) rather than stored constants.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct VisualState: u32 {
        /// Task launcher button (top-left).
        const BTN_LAUNCHER           = 1 << 0;
        /// Task switcher button (top-left).
        const BTN_SWITCHER           = 1 << 1;
        /// Breathing highlight over the switcher button.
        const BTN_SWITCHER_HIGHLIGHT = 1 << 2;
        /// Edit-mode menu button (top-left).
        const BTN_MENU               = 1 << 3;
        /// Back button (top-right).
        const BTN_BACK               = 1 << 4;
        /// Close button (top-right).
        const BTN_CLOSE              = 1 << 5;
        /// Text "done" button (top-right).
        const BTN_DONE               = 1 << 6;
        /// Opaque full-width background instead of floating tabs.
        const FULL_WIDTH             = 1 << 7;
        /// Foreground group lifted above other overlay content.
        const FOREGROUND             = 1 << 8;
        /// Reduced button width (portrait).
        const SMALL_BUTTONS          = 1 << 9;
    }
}

impl VisualState {
    /// Mask of all top-left buttons.
    pub const fn left_mask() -> Self {
        Self::BTN_LAUNCHER
            .union(Self::BTN_SWITCHER)
            .union(Self::BTN_MENU)
    }

    /// Mask of all top-right buttons.
    pub const fn right_mask() -> Self {
        Self::BTN_BACK.union(Self::BTN_CLOSE).union(Self::BTN_DONE)
    }

    /// True if any top-left button is requested.
    pub const fn has_any_left_button(self) -> bool {
        self.intersects(Self::left_mask())
    }

    /// True if any top-right button is requested.
    pub const fn has_any_right_button(self) -> bool {
        self.intersects(Self::right_mask())
    }

    /// Bits whose change moves the status area and other dependent overlays.
    pub const fn placement_bits(self) -> Self {
        self.intersection(Self::left_mask().union(Self::SMALL_BUTTONS))
    }

    /// Copy of `self` with `flag` forced to `on`.
    #[must_use]
    pub fn with(mut self, flag: VisualState, on: bool) -> Self {
        self.set(flag, on);
        self
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
