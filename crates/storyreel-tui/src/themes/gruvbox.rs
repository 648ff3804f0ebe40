//! Gruvbox theme
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x28, 0x28),
        bg_alt: Color::Rgb(0x32, 0x30, 0x2f),
        fg: Color::Rgb(0xd4, 0xbe, 0x98),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x89, 0xb4, 0x82), // aqua
        status_bg: Color::Rgb(0x45, 0x40, 0x3d),
    }
}

pub fn light() -> Theme {
    Theme {
        bg: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg_alt: Color::Rgb(0xf2, 0xe5, 0xbc),
        fg: Color::Rgb(0x3c, 0x38, 0x36),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x42, 0x7b, 0x58),
        status_bg: Color::Rgb(0xeb, 0xdb, 0xb2),
    }
}
