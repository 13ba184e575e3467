use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{App, InputMode};
use crate::ui::card_at;
use crate::ui::layout::{Regions, hit};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.input_mode == InputMode::Editing {
        handle_search_input(app, key);
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }
    if key.code == KeyCode::Char('?') {
        app.show_help = true;
        return;
    }

    if app.modal.is_visible() {
        handle_modal_key(app, key);
    } else if app.dropdown.is_active() {
        handle_dropdown_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Tab | KeyCode::BackTab => app.search.switch_field(),
        KeyCode::Backspace => app.search.pop(),
        KeyCode::Char(c) => app.search.push(c),
        _ => {}
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => app.close_modal(),
        KeyCode::Down | KeyCode::Char('j') => app.modal.selector.next(),
        KeyCode::Up | KeyCode::Char('k') => app.modal.selector.prev(),
        KeyCode::Enter => app.choose_status(),
        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}

fn handle_dropdown_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('l') => app.dropdown.close(),
        KeyCode::Down | KeyCode::Char('j') => app.dropdown.next(),
        KeyCode::Up | KeyCode::Char('k') => app.dropdown.prev(),
        KeyCode::Enter => app.activate_menu_item(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.list_next(),
        KeyCode::Up | KeyCode::Char('k') => app.list_prev(),
        KeyCode::Char(' ') => app.toggle_expand(),
        KeyCode::Enter => app.open_modal(),
        KeyCode::Char('/') => app.input_mode = InputMode::Editing,
        KeyCode::Char('+') | KeyCode::Char('=') => app.change_page_size(1),
        KeyCode::Char('-') => app.change_page_size(-1),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('l') => app.dropdown.toggle(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('o') => app.open_search_page(),
        _ => {}
    }
}

/// Left clicks: close controls, the Library link, the theme toggle and cards.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let regions = Regions::compute(area);
    let (column, row) = (mouse.column, mouse.row);

    if app.show_help {
        app.show_help = false;
        return;
    }

    // The dialog's backdrop covers the page.
    if app.modal.is_visible() {
        if hit(regions.modal_close, column, row) || !hit(regions.modal, column, row) {
            app.close_modal();
        }
        return;
    }

    if hit(regions.library_link, column, row) {
        app.dropdown.toggle();
        return;
    }
    if app.dropdown.is_active() {
        if hit(regions.dropdown, column, row) {
            if let Some(index) = regions.dropdown_item_at(column, row) {
                app.dropdown.select(index);
                app.activate_menu_item();
            }
            return;
        }
        app.dropdown.close();
    }

    if hit(regions.theme_toggle, column, row) {
        app.toggle_theme();
        return;
    }
    if let Some(index) = card_at(app, regions.list, column, row) {
        app.list_selected = index;
        app.open_modal();
    }
}
