use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x66, 0x7e, 0xea);
pub const ACCENT_DEEP: Color = Color::Rgb(0x76, 0x4b, 0xa2);
pub const CLEAR_RED: Color = Color::Rgb(0xff, 0x6b, 0x6b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DISABLED: Color = Color::Rgb(0x4a, 0x4a, 0x4a);
pub const FOCUS_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
