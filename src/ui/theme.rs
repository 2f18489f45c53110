use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x7a, 0xa2, 0xf7);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const COMPLETED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const OVERDUE: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const DUE_TODAY: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
