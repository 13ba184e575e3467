use crate::app::{App, InputMode};
use crate::location::PAGE_SIZES;
use crate::search::FormField;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const NAME_LABEL: &str = " Name: ";
const YEAR_LABEL: &str = "   Year: ";
const NAME_WIDTH: usize = 28;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.theme.palette();
    let editing = app.input_mode == InputMode::Editing;

    let field_style = |field: FormField| {
        if editing && app.search.focus == field {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.fg)
        }
    };

    let name = format!("{:<width$}", app.search.name, width = NAME_WIDTH);
    let year = format!("{:<4}", app.search.year);
    let sizes: Vec<Span> = PAGE_SIZES
        .iter()
        .map(|s| {
            if *s == app.page_size.value() {
                Span::styled(
                    format!("[{}]", s),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {} ", s), Style::default().fg(palette.muted))
            }
        })
        .collect();

    let mut spans = vec![
        Span::styled(NAME_LABEL, Style::default().fg(palette.muted)),
        Span::styled(name, field_style(FormField::Name)),
        Span::styled(YEAR_LABEL, Style::default().fg(palette.muted)),
        Span::styled(year, field_style(FormField::Year)),
        Span::styled("   Show (+/-): ", Style::default().fg(palette.muted)),
    ];
    spans.extend(sizes);

    let border_style = if editing {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let title = if editing {
        " Search (Tab switch field, Enter submit, Esc cancel) "
    } else {
        " Search (/) "
    };
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(bar, area);

    // Set cursor position when editing
    if editing {
        let (offset, len) = match app.search.focus {
            FormField::Name => (NAME_LABEL.len(), app.search.name.chars().count()),
            FormField::Year => (
                NAME_LABEL.len() + NAME_WIDTH.max(app.search.name.chars().count()) + YEAR_LABEL.len(),
                app.search.year.chars().count(),
            ),
        };
        let cursor_x = (area.x as usize + 1 + offset + len)
            .min(area.right().saturating_sub(2) as usize) as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

pub fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.theme.palette();
    let key = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let status_line = Line::from(vec![
        Span::styled(" ↑↓", key),
        Span::raw(" Navigate  "),
        Span::styled("Enter", key),
        Span::raw(" Detail  "),
        Span::styled("/", key),
        Span::raw(" Search  "),
        Span::styled("l", key),
        Span::raw(" Library  "),
        Span::styled("t", key),
        Span::raw(" Theme  "),
        Span::styled("?", key),
        Span::raw(" Help  "),
        Span::styled("q", key),
        Span::raw(" Quit  "),
        Span::styled(&app.status_msg, Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(status_line), area);
}
