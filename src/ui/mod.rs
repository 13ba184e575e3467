mod header;
mod help;
pub mod layout;
mod list;
mod modal;
mod search;

pub use list::card_at;

use crate::app::App;
use layout::Regions;
use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::Block,
};

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    let palette = app.theme.palette();
    let regions = Regions::compute(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        frame.area(),
    );

    header::render(app, frame, &regions);
    search::render(app, frame, regions.search);
    list::render(app, frame, regions.list);
    search::render_status_bar(app, frame, regions.status);

    // Overlays, bottom to top
    if app.dropdown.is_active() {
        header::render_dropdown(app, frame, regions.dropdown);
    }
    if app.modal.is_visible() {
        modal::render(app, frame, &regions);
    }
    if app.show_help {
        help::render(app, frame);
    }
}

/// Color for a status tag, keyed by its style qualifier.
pub fn status_color(class: &str) -> Color {
    match class {
        "status-watched" => Color::Green,
        "status-liked" => Color::LightRed,
        "status-want_to_watch" | "status-want-to-watch" => Color::Yellow,
        "status-dropped" => Color::DarkGray,
        "status-watching" => Color::Cyan,
        _ => Color::Blue,
    }
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        result.push(c);
    }
    result.push('…');
    result
}

/// Greedy word wrap to `max_width` display columns.
pub fn wrap_text(s: &str, max_width: usize) -> Vec<String> {
    use unicode_width::UnicodeWidthStr;

    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in s.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
