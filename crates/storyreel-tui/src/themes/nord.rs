//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg: Color::Rgb(0x2e, 0x34, 0x40),        // nord0
        bg_alt: Color::Rgb(0x3b, 0x42, 0x52),    // nord1
        fg: Color::Rgb(0xec, 0xef, 0xf4),        // nord6
        muted: Color::Rgb(0x5e, 0x68, 0x7a),
        accent: Color::Rgb(0x8f, 0xbc, 0xbb),    // nord7
        status_bg: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
    }
}
