use ratatui::style::Color;

use crate::federation::ToastKind;

pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LOADING_BORDER: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_INFO: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Border/icon color for a toast kind.
pub fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => STATUS_OK,
        ToastKind::Error => STATUS_ERROR,
        ToastKind::Warning => STATUS_WARN,
        ToastKind::Info => STATUS_INFO,
    }
}
