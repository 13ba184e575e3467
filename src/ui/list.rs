use crate::app::App;
use crate::card::Card;
use crate::sync::Placeholder;
use crate::theme::Palette;
use crate::ui::{status_color, truncate_str, wrap_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Split off the error line shown above cards kept from an earlier load.
fn split_area(app: &App, area: Rect) -> (Option<Rect>, Rect) {
    match app.list.placeholder() {
        Some(_) if !app.list.is_empty() => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(3)])
                .split(area);
            (Some(chunks[0]), chunks[1])
        }
        _ => (None, area),
    }
}

fn text_width(list_area: Rect) -> usize {
    list_area.width.saturating_sub(6) as usize
}

/// First visible card: the smallest offset that keeps `selected` in view.
fn scroll_offset(heights: &[usize], selected: usize, viewport: usize) -> usize {
    let selected = selected.min(heights.len().saturating_sub(1));
    let mut offset = 0;
    while offset < selected && heights[offset..=selected].iter().sum::<usize>() > viewport {
        offset += 1;
    }
    offset
}

/// Row span of each visible card, as `(card index, area)`.
fn card_rows(app: &App, area: Rect) -> (usize, Vec<(usize, Rect)>) {
    let (_, list_area) = split_area(app, area);
    let inner = list_area.inner(Margin::new(1, 1));
    let palette = app.theme.palette();
    let width = text_width(list_area);
    let heights: Vec<usize> = app
        .list
        .cards()
        .iter()
        .map(|card| card_lines(card, &palette, width).len())
        .collect();
    let offset = scroll_offset(&heights, app.list_selected, inner.height as usize);

    let mut rows = Vec::new();
    let mut y = inner.y;
    for (index, height) in heights.iter().enumerate().skip(offset) {
        if y >= inner.bottom() {
            break;
        }
        let height = (*height as u16).min(inner.bottom() - y);
        rows.push((index, Rect::new(inner.x, y, inner.width, height)));
        y += height;
    }
    (offset, rows)
}

/// Index of the card drawn at `(column, row)` inside the list `area`.
pub fn card_at(app: &App, area: Rect, column: u16, row: u16) -> Option<usize> {
    if app.list.is_empty() {
        return None;
    }
    card_rows(app, area)
        .1
        .into_iter()
        .find(|(_, rect)| super::layout::hit(*rect, column, row))
        .map(|(index, _)| index)
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.theme.palette();
    let (message_area, list_area) = split_area(app, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" {} ", app.context().label()))
        .title_bottom(
            Line::from(format!(" {} shown ", app.list.len())).alignment(Alignment::Right),
        );

    if app.list.is_empty() {
        let text = app
            .list
            .placeholder()
            .map(Placeholder::text)
            .unwrap_or("Loading...");
        let style = match app.list.placeholder() {
            Some(Placeholder::Error) => Style::default().fg(palette.error),
            _ => Style::default().fg(palette.muted),
        };
        let empty = Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, list_area);
        return;
    }

    if let (Some(area), Some(placeholder)) = (message_area, app.list.placeholder()) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", placeholder.text()),
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            )),
            area,
        );
    }

    let width = text_width(list_area);
    let items: Vec<ListItem> = app
        .list
        .cards()
        .iter()
        .map(|card| ListItem::new(card_lines(card, &palette, width)))
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    // Same offset the mouse hit-test uses.
    let (offset, _) = card_rows(app, area);
    let mut list_state = ListState::default()
        .with_offset(offset)
        .with_selected(Some(app.list_selected));
    frame.render_stateful_widget(list_widget, list_area, &mut list_state);
}

/// Lines for one card: title row, tags row, and the description when expanded.
fn card_lines<'a>(card: &'a Card, palette: &Palette, width: usize) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            truncate_str(&card.title, width.saturating_sub(24)),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", card.year), Style::default().fg(palette.muted)),
        Span::styled(format!("  ★ {}", card.rating), Style::default().fg(palette.accent)),
    ])];

    let mut tags: Vec<Span> = card
        .genre_tags
        .iter()
        .map(|g| Span::styled(format!("[{}] ", g), Style::default().fg(palette.genre)))
        .collect();
    if let Some(tag) = &card.status_tag {
        tags.push(Span::styled(
            format!(" {} ", tag.text()),
            Style::default()
                .fg(palette.bg)
                .bg(status_color(tag.class())),
        ));
    }
    lines.push(Line::from(tags));

    if card.expanded {
        for line in wrap_text(&card.description, width) {
            lines.push(Line::from(Span::styled(
                line,
                Style::default().fg(palette.muted),
            )));
        }
    }
    lines
}
