//! Navigation bar and mobile menu state.

/// Class shared by the hamburger button and the menu while it is open.
pub const ACTIVE_CLASS: &str = "active";
/// Class on the navbar once the page is scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Class changes to apply to the DOM after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavChange {
    None,
    MenuOpened,
    MenuClosed,
    ScrolledOn,
    ScrolledOff,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
    threshold: f64,
}

impl NavState {
    pub fn new(threshold: f64) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            threshold,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Hamburger click.
    pub fn toggle_menu(&mut self) -> NavChange {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            NavChange::MenuOpened
        } else {
            NavChange::MenuClosed
        }
    }

    /// Nav link click: always leaves the menu closed.
    pub fn close_menu(&mut self) -> NavChange {
        if std::mem::replace(&mut self.menu_open, false) {
            NavChange::MenuClosed
        } else {
            NavChange::None
        }
    }

    /// Window scroll. The navbar is `scrolled` strictly past the threshold.
    pub fn update_scroll(&mut self, scroll_y: f64) -> NavChange {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return NavChange::None;
        }
        self.scrolled = scrolled;
        if scrolled {
            NavChange::ScrolledOn
        } else {
            NavChange::ScrolledOff
        }
    }
}
