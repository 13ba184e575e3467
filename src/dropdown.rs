use crate::model::{InteractionStatus, PageContext};

/// Entry of the "Library" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Page(PageContext),
    /// Library page on the web app, optionally filtered by status.
    Library(Option<InteractionStatus>),
}

impl MenuItem {
    pub const ALL: [MenuItem; 8] = [
        MenuItem::Page(PageContext::Listing),
        MenuItem::Page(PageContext::Recommendations),
        MenuItem::Library(None),
        MenuItem::Library(Some(InteractionStatus::Watched)),
        MenuItem::Library(Some(InteractionStatus::Liked)),
        MenuItem::Library(Some(InteractionStatus::WantToWatch)),
        MenuItem::Library(Some(InteractionStatus::Dropped)),
        MenuItem::Library(Some(InteractionStatus::Watching)),
    ];

    pub fn label(self) -> String {
        match self {
            MenuItem::Page(PageContext::Listing) => "All movies".to_string(),
            MenuItem::Page(PageContext::Recommendations) => "Recommendations".to_string(),
            MenuItem::Library(None) => "Library: everything".to_string(),
            MenuItem::Library(Some(status)) => format!("Library: {}", status.label()),
        }
    }

    /// Web path of a library page for `user_id`.
    pub fn library_path(self, user_id: i64) -> Option<String> {
        match self {
            MenuItem::Page(_) => None,
            MenuItem::Library(None) => Some(format!("/users/{}/interactions/", user_id)),
            MenuItem::Library(Some(status)) => Some(format!(
                "/users/{}/interactions/{}",
                user_id,
                status.value()
            )),
        }
    }
}

/// Visibility and cursor of the "Library" menu panel.
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    active: bool,
    selected: usize,
}

impl Dropdown {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next(&mut self) {
        if self.selected + 1 < MenuItem::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select(&mut self, index: usize) {
        if index < MenuItem::ALL.len() {
            self.selected = index;
        }
    }

    /// Take the highlighted entry and close the panel.
    pub fn activate(&mut self) -> MenuItem {
        self.active = false;
        MenuItem::ALL[self.selected]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut dropdown = Dropdown::default();
        assert!(!dropdown.is_active());
        dropdown.toggle();
        assert!(dropdown.is_active());
        dropdown.toggle();
        assert!(!dropdown.is_active());
        dropdown.toggle();
        dropdown.close();
        assert!(!dropdown.is_active());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut dropdown = Dropdown::default();
        dropdown.toggle();
        dropdown.prev();
        assert_eq!(dropdown.selected(), 0);
        for _ in 0..20 {
            dropdown.next();
        }
        assert_eq!(dropdown.selected(), MenuItem::ALL.len() - 1);
        dropdown.select(100);
        assert_eq!(dropdown.selected(), MenuItem::ALL.len() - 1);
    }

    #[test]
    fn test_activate_closes() {
        let mut dropdown = Dropdown::default();
        dropdown.toggle();
        dropdown.next();
        assert_eq!(
            dropdown.activate(),
            MenuItem::Page(PageContext::Recommendations)
        );
        assert!(!dropdown.is_active());
    }

    #[test]
    fn test_library_paths() {
        assert_eq!(
            MenuItem::Library(None).library_path(1).as_deref(),
            Some("/users/1/interactions/")
        );
        assert_eq!(
            MenuItem::Library(Some(InteractionStatus::WantToWatch))
                .library_path(7)
                .as_deref(),
            Some("/users/7/interactions/want_to_watch")
        );
        assert_eq!(MenuItem::Page(PageContext::Listing).library_path(1), None);
    }
}
