use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 't') {
        app.switch_screen();
        return;
    }

    match app.screen() {
        Screen::Form => handle_form_key(app, key),
        // The query view is read-only.
        Screen::Query => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if app.form().modal_open() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.dismiss_submitted();
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.form_focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form_focus_prev(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
