use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Story viewport background
    pub bg: Color,
    /// Nav rail background
    pub bg_alt: Color,
    pub fg: Color,
    /// Inactive nav entries, captions, section counter in the status bar
    pub muted: Color,
    /// Fallback accent for nav entries without a usable section accent
    pub accent: Color,
    pub status_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox_dark()
    }
}
