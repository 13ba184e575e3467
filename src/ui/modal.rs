use crate::app::App;
use crate::modal::StatusSelector;
use crate::ui::layout::{CLOSE_LABEL, Regions};
use crate::ui::status_color;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame, regions: &Regions) {
    let Some(body) = app.modal.body() else {
        return;
    };
    let palette = app.theme.palette();
    let area = regions.modal;

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.bg).fg(palette.fg))
        .title(format!(" {} ", body.title))
        .title_bottom(
            Line::from(" ↑↓ choose status  Enter apply  Esc close ")
                .style(Style::default().fg(palette.muted)),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(palette.error))),
        regions.modal_close,
    );

    // info(3) + selector(options + 2) + description(min)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(StatusSelector::LEN as u16 + 2),
            Constraint::Min(1),
        ])
        .split(inner);

    // ── Title, year, rating, genres, status ──
    let mut tags: Vec<Span> = body
        .genre_tags
        .iter()
        .map(|g| Span::styled(format!("[{}] ", g), Style::default().fg(palette.genre)))
        .collect();
    if let Some(tag) = &body.status_tag {
        tags.push(Span::styled(
            format!(" {} ", tag.text()),
            Style::default()
                .fg(palette.bg)
                .bg(status_color(tag.class())),
        ));
    }
    let info = vec![
        Line::from(Span::styled(
            body.title.as_str(),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Year: ", Style::default().fg(palette.muted)),
            Span::raw(body.year.as_str()),
            Span::styled("   Rating: ", Style::default().fg(palette.muted)),
            Span::styled(body.rating.as_str(), Style::default().fg(palette.accent)),
        ]),
        Line::from(tags),
    ];
    frame.render_widget(Paragraph::new(info), chunks[0]);

    // ── Status selector ──
    let options: Vec<ListItem> = (0..StatusSelector::LEN)
        .map(|i| ListItem::new(StatusSelector::option_label(i)))
        .collect();
    let selector = List::new(options)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Status "),
        )
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
    let mut state = ListState::default();
    state.select(Some(app.modal.selector.selected()));
    frame.render_stateful_widget(selector, chunks[1], &mut state);

    // ── Description ──
    let description = Paragraph::new(body.description.as_str())
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(palette.fg));
    frame.render_widget(description, chunks[2]);
}
