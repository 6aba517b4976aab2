use crate::ui::control::Control;
use ratatui::layout::Rect;

pub const FOOTER_HEIGHT: u16 = 3;
pub const COUNTER_CARD_HEIGHT: u16 = 7;
pub const MESSAGE_CARD_HEIGHT: u16 = 11;
pub const BUTTON_HEIGHT: u16 = 3;
pub const INCREMENT_WIDTH: u16 = 21;

/// Splits the screen into the component body and the footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).0
}

/// Screen positions of every part of the component.
///
/// Shared by the renderer and mouse hit-testing so a click lands on
/// exactly what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentLayout {
    pub counter_card: Rect,
    pub counter_line: Rect,
    pub increment: Rect,
    pub hint: Rect,
    pub message_card: Rect,
    pub input_label: Rect,
    pub input: Rect,
    pub message_line: Rect,
    pub reset: Rect,
    pub clear: Rect,
}

impl ComponentLayout {
    pub fn new(body: Rect) -> Self {
        let mut rest = body;
        let counter_card = take_rows(&mut rest, COUNTER_CARD_HEIGHT);
        let message_card = take_rows(&mut rest, MESSAGE_CARD_HEIGHT);

        let mut inner = inset(counter_card);
        let counter_line = take_rows(&mut inner, 1);
        let increment_row = take_rows(&mut inner, BUTTON_HEIGHT);
        let increment = centered_rect_by_size(increment_row, INCREMENT_WIDTH, BUTTON_HEIGHT);
        let hint = take_rows(&mut inner, 1);

        let mut inner = inset(message_card);
        let input_label = take_rows(&mut inner, 1);
        let input = take_rows(&mut inner, 3);
        let message_line = take_rows(&mut inner, 1);
        let _spacer = take_rows(&mut inner, 1);
        let buttons = take_rows(&mut inner, BUTTON_HEIGHT);
        let half = buttons.width / 2;
        let reset = Rect {
            width: half,
            ..buttons
        };
        let clear = Rect {
            x: buttons.x + half,
            width: buttons.width - half,
            ..buttons
        };

        Self {
            counter_card,
            counter_line,
            increment,
            hint,
            message_card,
            input_label,
            input,
            message_line,
            reset,
            clear,
        }
    }

    pub fn control_rect(&self, control: Control) -> Rect {
        match control {
            Control::Increment => self.increment,
            Control::MessageInput => self.input,
            Control::Reset => self.reset,
            Control::Clear => self.clear,
        }
    }

    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        Control::TAB_ORDER
            .into_iter()
            .find(|control| contains(self.control_rect(*control), column, row))
    }
}

/// Centers a `width` x `height` box inside `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn take_rows(area: &mut Rect, rows: u16) -> Rect {
    let rows = rows.min(area.height);
    let taken = Rect {
        height: rows,
        ..*area
    };
    area.y += rows;
    area.height -= rows;
    taken
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && u32::from(column) < u32::from(area.x) + u32::from(area.width)
        && u32::from(row) < u32::from(area.y) + u32::from(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn footer_sits_at_bottom() {
        let (body, footer) = layout_regions(screen(80, 24));
        assert_eq!(footer.y, 21);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 21);
    }

    #[test]
    fn tiny_screen_does_not_underflow() {
        let layout = ComponentLayout::new(body_rect(screen(3, 2)));
        assert_eq!(layout.control_at(0, 0), None);
        assert_eq!(layout.reset.height, 0);
    }

    #[test]
    fn hit_test_finds_each_control() {
        let layout = ComponentLayout::new(body_rect(screen(80, 24)));
        for control in Control::TAB_ORDER {
            let rect = layout.control_rect(control);
            assert_eq!(layout.control_at(rect.x, rect.y), Some(control));
        }
    }

    #[test]
    fn increment_is_centered() {
        let layout = ComponentLayout::new(body_rect(screen(80, 24)));
        let left = layout.increment.x - layout.counter_line.x;
        let right = (layout.counter_line.x + layout.counter_line.width)
            - (layout.increment.x + layout.increment.width);
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn centered_rect_clips_to_area() {
        let rect = centered_rect_by_size(screen(10, 2), 21, 3);
        assert_eq!(rect, screen(10, 2));
    }
}
