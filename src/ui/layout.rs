use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::dropdown::MenuItem;

pub const TITLE: &str = "RecoFilm";
pub const LIBRARY_LINK: &str = "Library ▾";
pub const THEME_WIDTH: u16 = 12;
pub const DROPDOWN_WIDTH: u16 = 28;
pub const CLOSE_LABEL: &str = "[x]";

/// Screen areas shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub library_link: Rect,
    pub theme_toggle: Rect,
    pub address: Rect,
    pub search: Rect,
    pub list: Rect,
    pub status: Rect,
    pub dropdown: Rect,
    pub modal: Rect,
    pub modal_close: Rect,
}

impl Regions {
    pub fn compute(area: Rect) -> Self {
        // header(3) + search(3) + list(min) + status(1)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);
        let header = chunks[0];

        let library_link = Rect {
            x: header.x + TITLE.len() as u16 + 4,
            y: header.y,
            width: LIBRARY_LINK.chars().count() as u16,
            height: 1,
        }
        .intersection(area);
        let theme_toggle = Rect {
            x: header.right().saturating_sub(THEME_WIDTH + 1),
            y: header.y,
            width: THEME_WIDTH,
            height: 1,
        }
        .intersection(area);
        let address = Rect {
            x: header.x + 1,
            y: header.y + 1,
            width: header.width.saturating_sub(2),
            height: 1,
        }
        .intersection(area);

        let dropdown = Rect {
            x: library_link.x,
            y: library_link.y + 1,
            width: DROPDOWN_WIDTH,
            height: MenuItem::ALL.len() as u16 + 2,
        }
        .intersection(area);

        let modal = centered_rect(70, 70, area);
        let modal_close = Rect {
            x: modal.right().saturating_sub(CLOSE_LABEL.len() as u16 + 2),
            y: modal.y,
            width: CLOSE_LABEL.len() as u16,
            height: 1,
        }
        .intersection(area);

        Self {
            header,
            library_link,
            theme_toggle,
            address,
            search: chunks[1],
            list: chunks[2],
            status: chunks[3],
            dropdown,
            modal,
            modal_close,
        }
    }

    /// Index of the menu entry under `(column, row)`, if any.
    pub fn dropdown_item_at(&self, column: u16, row: u16) -> Option<usize> {
        if !hit(self.dropdown, column, row) || row <= self.dropdown.y {
            return None;
        }
        let index = (row - self.dropdown.y - 1) as usize;
        (index < MenuItem::ALL.len()).then_some(index)
    }
}

pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Create a centered rectangle using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
