use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{Action, App, Focus, PopupKind, Screen};

/// Translate a key press into field edits or a dispatched [`Action`],
/// depending on what currently has focus.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.dispatch(Action::Quit);
        return;
    }

    match app.screen() {
        Screen::LoginRequired => handle_login_key(app, key),
        Screen::Todos => {
            if let Some(kind) = app.popup_kind() {
                handle_popup_key(app, kind, key);
            } else if app.edit_session().is_editing() {
                handle_edit_key(app, key);
            } else {
                match app.focus() {
                    Focus::List => handle_list_key(app, key),
                    Focus::AddText | Focus::AddDate => handle_add_key(app, key),
                    Focus::Popup(_) => {}
                }
            }
        }
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.dispatch(Action::Quit),
        KeyCode::Char('r') => app.dispatch(Action::RetryAfterLogin),
        _ => {}
    }
}

fn handle_popup_key(app: &mut App, kind: PopupKind, key: KeyEvent) {
    match kind {
        PopupKind::Alert => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.dispatch(Action::ClosePopup);
            }
        }
        PopupKind::ConfirmDelete => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.dispatch(Action::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Esc => app.dispatch(Action::ClosePopup),
            _ => {}
        },
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.dispatch(Action::Quit),
        KeyCode::Char('r') => app.dispatch(Action::Reload),
        KeyCode::Char('a') => app.enter_add_mode(),
        KeyCode::Char('f') => app.dispatch(Action::CycleFilter),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char(' ') => {
            if let Some(todo) = app.selected_todo() {
                let id = todo.id;
                app.dispatch(Action::Toggle { id });
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(todo) = app.selected_todo() {
                let id = todo.id;
                app.dispatch(Action::StartEdit { id });
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(todo) = app.selected_todo() {
                let id = todo.id;
                app.dispatch(Action::RequestDelete { id });
            }
        }
        _ => {}
    }
}

fn handle_add_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.leave_add_mode(),
        KeyCode::Enter => app.dispatch(Action::SubmitAdd),
        KeyCode::Tab => app.switch_add_field(),
        KeyCode::Backspace => app.add_backspace(),
        KeyCode::Char(c) => app.add_input(c),
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch(Action::CancelEdit),
        KeyCode::Enter => app.dispatch(Action::SaveEdit),
        KeyCode::Tab => app.edit_switch_field(),
        KeyCode::Backspace => app.edit_backspace(),
        KeyCode::Char(c) => app.edit_input(c),
        _ => {}
    }
}
