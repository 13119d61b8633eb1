//! Menu navigation
//!
//! A single cursor over the fixed list of settings pages. The menu button
//! advances it; the adjustment buttons act on whichever page it points at.

use crate::config::SettingsPage;

/// Cursor over the settings pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuNavigator {
    page: SettingsPage,
}

impl Default for MenuNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuNavigator {
    /// Start on the first page
    pub const fn new() -> Self {
        Self {
            page: SettingsPage::HoldDuration,
        }
    }

    /// Currently selected page
    pub fn page(&self) -> SettingsPage {
        self.page
    }

    /// Move to the next page, wrapping after the last
    pub fn advance(&mut self) -> SettingsPage {
        self.page = self.page.next();
        self.page
    }

    /// Return to the first page
    pub fn reset(&mut self) {
        self.page = SettingsPage::HoldDuration;
    }
}
