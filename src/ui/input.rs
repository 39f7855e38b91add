use crate::ui::app::{App, Focus};
use crate::ui::login::LoginIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Forward an intent to the login view-model.
    Dispatch(LoginIntent),
}

impl From<Option<LoginIntent>> for InputAction {
    fn from(intent: Option<LoginIntent>) -> Self {
        intent.map_or(InputAction::None, InputAction::Dispatch)
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return InputAction::None;
    }

    if is_ctrl_char(key, 't') {
        app.toggle_password_visibility();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            InputAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            InputAction::None
        }
        KeyCode::Enter => match app.focus() {
            Focus::Email => {
                app.set_focus(Focus::Password);
                InputAction::None
            }
            Focus::Password | Focus::Submit => submit(app),
        },
        KeyCode::Backspace => app.delete_char().into(),
        KeyCode::Char(' ') if app.focus() == Focus::Submit => submit(app),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(ch).into()
        }
        _ => InputAction::None,
    }
}

fn submit(app: &App) -> InputAction {
    if !app.can_submit() {
        return InputAction::None;
    }
    InputAction::Dispatch(LoginIntent::SubmitLogin)
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
