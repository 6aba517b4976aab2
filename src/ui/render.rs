use crate::ui::app::App;
use crate::ui::control::Control;
use crate::ui::footer::Footer;
use crate::ui::layout::{layout_regions, ComponentLayout};
use crate::ui::theme::{
    ACCENT, ACCENT_DEEP, CLEAR_RED, DISABLED, FOCUS_TEXT, GLOBAL_BORDER, MUTED, TEXT,
};
use crate::ui::view::{
    ViewModel, COUNTER_LABEL, HEADING, INCREMENT_HINT, INPUT_PLACEHOLDER, MESSAGE_HEADING,
    MESSAGE_LABEL,
};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let view = app.view();
    let (body, footer) = layout_regions(frame.area());
    let layout = ComponentLayout::new(body);

    frame.render_widget(Clear, body);
    draw_counter_card(frame, &view, &layout);
    draw_message_card(frame, &view, &layout);
    frame.render_widget(Footer::new().widget(footer), footer);
}

fn draw_counter_card(frame: &mut Frame<'_>, view: &ViewModel, layout: &ComponentLayout) {
    frame.render_widget(card(HEADING), layout.counter_card);

    let counter = Line::from(vec![
        Span::styled(COUNTER_LABEL, Style::default().fg(TEXT)),
        Span::styled(
            view.counter_text.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(counter), layout.counter_line);
    frame.render_widget(button(Control::Increment, view), layout.increment);
    frame.render_widget(
        Paragraph::new(INCREMENT_HINT)
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center),
        layout.hint,
    );
}

fn draw_message_card(frame: &mut Frame<'_>, view: &ViewModel, layout: &ComponentLayout) {
    frame.render_widget(card(MESSAGE_HEADING), layout.message_card);

    frame.render_widget(
        Paragraph::new(Control::MessageInput.label())
            .style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
        layout.input_label,
    );
    draw_input(frame, view, layout.input);

    let display_style = if view.message_is_placeholder {
        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(TEXT).add_modifier(Modifier::ITALIC)
    };
    let message = Line::from(vec![
        Span::styled(MESSAGE_LABEL, Style::default().fg(TEXT)),
        Span::styled(view.message_display.clone(), display_style),
    ]);
    frame.render_widget(Paragraph::new(message), layout.message_line);

    frame.render_widget(button(Control::Reset, view), layout.reset);
    frame.render_widget(button(Control::Clear, view), layout.clear);
}

/// Single-line text input. Scrolls so the end of the text stays visible.
fn draw_input(frame: &mut Frame<'_>, view: &ViewModel, area: Rect) {
    let focused = view.focus == Control::MessageInput;
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let inner_width = area.width.saturating_sub(2) as usize;

    let (line, text_width) = if view.input_text.is_empty() {
        (
            Line::from(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(MUTED).add_modifier(Modifier::DIM),
            )),
            0,
        )
    } else {
        let line = Line::from(Span::styled(view.input_text.clone(), Style::default().fg(TEXT)));
        let width = line.width();
        (line, width)
    };
    // Leave one cell for the cursor after the last character.
    let offset = text_width.saturating_sub(inner_width.saturating_sub(1));

    let input = Paragraph::new(line)
        .scroll((0, offset.min(u16::MAX as usize) as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(input, area);

    if focused && inner_width > 0 && area.height > 2 {
        let column = (text_width - offset).min(inner_width - 1) as u16;
        frame.set_cursor_position(Position::new(area.x + 1 + column, area.y + 1));
    }
}

fn card(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(ACCENT_DEEP).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn button(control: Control, view: &ViewModel) -> Paragraph<'static> {
    let base = match control {
        Control::Clear => CLEAR_RED,
        Control::Reset => TEXT,
        _ => ACCENT,
    };
    let (text_style, border_style) = if !view.is_enabled(control) {
        let style = Style::default().fg(DISABLED).add_modifier(Modifier::DIM);
        (style, style)
    } else if view.focus == control {
        (
            Style::default()
                .fg(FOCUS_TEXT)
                .bg(base)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(base),
        )
    } else {
        (
            Style::default().fg(base).add_modifier(Modifier::BOLD),
            Style::default().fg(base),
        )
    };

    Paragraph::new(Line::from(Span::styled(control.label(), text_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
}
