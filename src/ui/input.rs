use crate::ui::app::App;
use crate::ui::control::Control;
use crate::ui::layout::{body_rect, ComponentLayout};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    if app.focus() == Control::MessageInput {
        edit_message(app, key);
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_focused();
        }
        KeyCode::Right | KeyCode::Down => app.focus_next(),
        KeyCode::Left | KeyCode::Up => app.focus_prev(),
        _ => {}
    }
}

/// Every edit replaces the whole message, like an `input` event would.
fn edit_message(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.set_message("");
        return;
    }

    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut text = app.message().to_string();
            text.push(ch);
            app.set_message(text);
        }
        KeyCode::Backspace => {
            let mut text = app.message().to_string();
            if text.pop().is_some() {
                app.set_message(text);
            }
        }
        _ => {}
    }
}

/// Pasted text goes into the input with line breaks dropped.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.focus() != Control::MessageInput {
        return;
    }
    let pasted: String = text.chars().filter(|ch| !matches!(ch, '\n' | '\r')).collect();
    if pasted.is_empty() {
        return;
    }
    let mut message = app.message().to_string();
    message.push_str(&pasted);
    app.set_message(message);
}

/// Left click focuses the control under the pointer and presses buttons.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };
    let layout = ComponentLayout::new(body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    }));
    let Some(control) = layout.control_at(mouse.column, mouse.row) else {
        return;
    };
    if !app.focus_control(control) {
        return;
    }
    if control.is_button() {
        app.activate(control);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
