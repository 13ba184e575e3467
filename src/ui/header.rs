use crate::app::App;
use crate::dropdown::MenuItem;
use crate::ui::layout::{LIBRARY_LINK, Regions, TITLE};
use crate::ui::truncate_str;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn render(app: &App, frame: &mut Frame, regions: &Regions) {
    let palette = app.theme.palette();

    frame.render_widget(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border)),
        regions.header,
    );

    // ── Nav row ──
    let title = Paragraph::new(Span::styled(
        format!(" {}", TITLE),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        title,
        Rect {
            height: 1,
            ..regions.header
        },
    );

    let link_style = if app.dropdown.is_active() {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(palette.fg).add_modifier(Modifier::UNDERLINED)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(LIBRARY_LINK, link_style)),
        regions.library_link,
    );

    let loading = if app.pending_loads > 0 { "  ⟳ loading" } else { "" };
    let page = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("  {}", app.context().label()),
            Style::default().fg(palette.muted),
        ),
        Span::styled(loading, Style::default().fg(palette.accent)),
    ]));
    let page_area = Rect {
        x: regions.library_link.right(),
        width: regions
            .theme_toggle
            .x
            .saturating_sub(regions.library_link.right()),
        ..regions.library_link
    };
    frame.render_widget(page, page_area);

    let theme_label = match app.theme {
        crate::theme::Theme::Dark => "[☾ dark]",
        crate::theme::Theme::Light => "[☀ light]",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(theme_label, Style::default().fg(palette.accent))),
        regions.theme_toggle,
    );

    // ── Address bar ──
    let address = app.location.to_string();
    let address_line = Line::from(vec![
        Span::styled("⌂ ", Style::default().fg(palette.muted)),
        Span::styled(
            truncate_str(&address, regions.address.width.saturating_sub(2) as usize),
            Style::default().fg(palette.fg),
        ),
    ]);
    frame.render_widget(Paragraph::new(address_line), regions.address);
}

/// The "Library" panel under its link.
pub fn render_dropdown(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.theme.palette();
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| ListItem::new(item.label()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(Style::default().bg(palette.bg).fg(palette.fg))
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(app.dropdown.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}
