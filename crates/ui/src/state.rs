/// Scroll offset (px) past which the header switches to its condensed style.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// View state of the fixed header.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    condensed: bool,
    menu_open: bool,
}

impl HeaderState {
    pub fn on_scroll(&mut self, offset: f64) {
        self.condensed = offset > SCROLL_THRESHOLD;
    }

    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }

    #[must_use]
    pub const fn is_condensed(&self) -> bool {
        self.condensed
    }

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub const fn class(&self) -> &'static str {
        if self.condensed { "site-header is-condensed" } else { "site-header" }
    }

    #[must_use]
    pub const fn toggle_class(&self) -> &'static str {
        if self.menu_open { "menu-toggle is-open" } else { "menu-toggle" }
    }
}
