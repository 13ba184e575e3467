use crate::app::App;
use crate::ui::layout::centered_rect;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("?", "Toggle this help"),
            ("q", "Quit application"),
            ("t", "Toggle dark/light theme"),
            ("l", "Open/close the Library menu"),
        ],
    ),
    (
        "List",
        &[
            ("↑/k ↓/j", "Navigate cards"),
            ("Space", "Show/hide description"),
            ("Enter", "Open movie details"),
            ("/", "Edit search (Tab switches field)"),
            ("+/-", "Change page size"),
            ("r", "Reload list"),
            ("o", "Open this search in the browser"),
        ],
    ),
    (
        "Details",
        &[
            ("↑/↓", "Choose status"),
            ("Enter", "Apply status (empty clears it)"),
            ("Esc/x", "Close"),
        ],
    ),
    (
        "Mouse",
        &[
            ("Library", "Toggle menu; click elsewhere to close"),
            ("[x]", "Close details; click outside also closes"),
        ],
    ),
];

pub fn render(app: &App, frame: &mut Frame) {
    let palette = app.theme.palette();
    let area = centered_rect(60, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let mut help_text = vec![Line::from("")];
    for (section, bindings) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            format!("  {}", section),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, action) in *bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("    {:<10}", key), Style::default().fg(palette.genre)),
                Span::raw(*action),
            ]));
        }
        help_text.push(Line::from(""));
    }

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Help — Keybindings ")
                .title_bottom(
                    Line::from(" Press any key to close ").style(Style::default().fg(palette.muted)),
                ),
        )
        .style(Style::default().bg(palette.bg).fg(palette.fg));

    frame.render_widget(help, area);
}
