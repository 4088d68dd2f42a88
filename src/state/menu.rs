//! Mobile navigation menu state.

/// Open/closed state of the collapsible navigation menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation link was followed.
    pub fn link_activated(&mut self) {
        self.open = false;
    }

    /// A click landed outside both the toggle and the menu.
    pub fn click_outside(&mut self) {
        self.open = false;
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }
}
