//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use click_counter::ui::app::App;
use click_counter::ui::control::Control;
use click_counter::ui::input::{handle_key, handle_mouse};
use click_counter::ui::layout::{body_rect, ComponentLayout};
use click_counter::ui::render::draw;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

/// Mounted component sized to a standard 80x24 terminal.
pub fn make_app() -> App {
    let mut app = App::new();
    app.on_resize(WIDTH, HEIGHT);
    app.mount();
    app
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    key_with(code, KeyModifiers::empty())
}

pub fn press_ctrl(ch: char) -> KeyEvent {
    key_with(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Types `text` one keystroke at a time into whatever has focus.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press_key(KeyCode::Char(ch)));
    }
}

pub fn layout() -> ComponentLayout {
    ComponentLayout::new(body_rect(Rect {
        x: 0,
        y: 0,
        width: WIDTH,
        height: HEIGHT,
    }))
}

/// Left click in the middle of `control`.
pub fn click(app: &mut App, control: Control) {
    let rect = layout().control_rect(control);
    handle_mouse(
        app,
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + rect.width / 2,
            row: rect.y + rect.height / 2,
            modifiers: KeyModifiers::empty(),
        },
    );
}

/// Renders one frame and returns the screen as lines of text.
pub fn render_lines(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

pub fn screen_contains(app: &App, needle: &str) -> bool {
    render_lines(app).iter().any(|line| line.contains(needle))
}
