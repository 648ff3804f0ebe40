use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::animation::EasingType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Width of the nav rail in columns
    #[serde(default = "default_nav_width")]
    pub nav_width: u16,
    /// Smooth scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            nav_width: default_nav_width(),
            scroll: ScrollConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Smooth scrolling parameters for section jumps and line scrolling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scroll requests instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one scroll animation
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve for scroll animations
    #[serde(default)]
    pub easing: EasingType,
    /// Lines moved per line-scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a { name, colors } map
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg: Option<String>,
    pub bg_alt: Option<String>,
    pub fg: Option<String>,
    pub muted: Option<String>,
    /// Fallback nav accent when a section declares none (or an unparsable one)
    pub accent: Option<String>,
    pub status_bg: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-d>" (Ctrl+d), "G" (Shift+g), "<Home>", "<Space>"
///
/// Arrow and page keys always jump between sections and are not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Jump to the next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Jump to the previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// Free scroll by one line
    #[serde(default = "default_key_line_down")]
    pub line_down: String,
    #[serde(default = "default_key_line_up")]
    pub line_up: String,
    #[serde(default = "default_key_half_page_down")]
    pub half_page_down: String,
    #[serde(default = "default_key_half_page_up")]
    pub half_page_up: String,
    /// Jump to the first section
    #[serde(default = "default_key_first_section")]
    pub first_section: String,
    /// Jump to the last section
    #[serde(default = "default_key_last_section")]
    pub last_section: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            line_down: default_key_line_down(),
            line_up: default_key_line_up(),
            half_page_down: default_key_half_page_down(),
            half_page_up: default_key_half_page_up(),
            first_section: default_key_first_section(),
            last_section: default_key_last_section(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_section() -> String { "n".to_string() }
fn default_key_prev_section() -> String { "p".to_string() }
fn default_key_line_down() -> String { "j".to_string() }
fn default_key_line_up() -> String { "k".to_string() }
fn default_key_half_page_down() -> String { "<C-d>".to_string() }
fn default_key_half_page_up() -> String { "<C-u>".to_string() }
fn default_key_first_section() -> String { "<Home>".to_string() }
fn default_key_last_section() -> String { "G".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storyreel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_nav_width() -> u16 {
    18
}

fn default_scroll_duration() -> u64 {
    350
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default config path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration as pretty TOML, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/storyreel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("storyreel")
            .join("config.toml")
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("storyreel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.keymap.quit, "q");
        assert!(config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.easing, EasingType::Cubic);
    }

    #[test]
    fn test_theme_as_string() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_map() {
        let toml = r##"
[ui.theme]
name = "dracula"
unknown = 1

[ui.theme.colors]
accent = "#ff00ff"
"##;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff00ff"));
    }

    #[test]
    fn test_scroll_easing_override() {
        let toml = "[ui.scroll]\neasing = \"quintic\"\nsmooth_enabled = false\n";
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.ui.scroll.easing, EasingType::Quintic);
        assert!(!config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.animation_fps, 60);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let err = AppConfig::from_toml("[ui]\ntick_rate_ms = \"fast\"\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.general.log_level = "debug".to_string();
        config.ui.nav_width = 24;
        config.ui.scroll.easing = EasingType::Quintic;
        config.ui.theme.name = "nord".to_string();
        config.ui.theme.colors.accent = Some("#ff00ff".to_string());
        config.keymap.quit = "<C-q>".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.general.log_level, "debug");
        assert_eq!(loaded.ui.nav_width, 24);
        assert_eq!(loaded.ui.scroll.easing, EasingType::Quintic);
        assert_eq!(loaded.ui.theme.name, "nord");
        assert_eq!(loaded.ui.theme.colors.accent.as_deref(), Some("#ff00ff"));
        assert_eq!(loaded.keymap.quit, "<C-q>");
        assert_eq!(loaded.keymap.next_section, "n");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("storyreel-missing-config-does-not-exist.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.keymap.next_section, "n");
    }
}
