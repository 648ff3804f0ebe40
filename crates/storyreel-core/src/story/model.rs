use serde::{Deserialize, Serialize};

use super::literal::{self, deserialize_literal};

/// One full-viewport block of the story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier, the target of nav entries
    pub id: String,
    /// Theming value mirrored onto the nav entry while this section is active
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub counters: Vec<Counter>,
    /// Set on first entry into view, never cleared
    #[serde(skip)]
    active: bool,
    /// Set when the counters of this section have been started
    #[serde(skip)]
    counters_started: bool,
}

impl Section {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            accent: None,
            title: None,
            body: None,
            counters: Vec::new(),
            active: false,
            counters_started: false,
        }
    }

    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_counter(mut self, counter: Counter) -> Self {
        self.counters.push(counter);
        self
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the section active. Returns true only on the first activation.
    pub fn activate(&mut self) -> bool {
        let first = !self.active;
        self.active = true;
        first
    }

    /// Check-and-set for the one-shot counter animation.
    /// Returns true exactly once per section.
    pub fn claim_counters(&mut self) -> bool {
        if self.counters_started {
            return false;
        }
        self.counters_started = true;
        true
    }

    /// Title shown in the nav rail and viewport, falling back to the id
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

/// An animated number inside a section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    /// Literal text of the target value, e.g. "42.5"
    #[serde(rename = "count", deserialize_with = "deserialize_literal")]
    pub literal: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Caption rendered under the number
    #[serde(default)]
    pub label: Option<String>,
    /// Live text written by the running animation
    #[serde(skip)]
    pub display: Option<String>,
}

impl Counter {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            prefix: String::new(),
            suffix: String::new(),
            label: None,
            display: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Parsed target value (NaN for unparsable text)
    pub fn target(&self) -> f64 {
        literal::parse_float(&self.literal)
    }

    /// Fraction digits inferred from the literal text
    pub fn decimals(&self) -> usize {
        literal::decimals(&self.literal)
    }

    /// Render `value` with this counter's prefix, precision and suffix
    pub fn format(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            literal::format_fixed(value, self.decimals()),
            self.suffix
        )
    }

    /// Text once the animation has finished
    pub fn final_text(&self) -> String {
        self.format(self.target())
    }

    /// Text currently shown; before animating this is the zero frame
    pub fn text(&self) -> String {
        self.display.clone().unwrap_or_else(|| self.format(0.0))
    }
}

/// One entry of the nav rail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
    /// Id of the section this entry scrolls to
    pub target: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(skip)]
    pub active: bool,
    /// Last accent propagated from an activated section
    #[serde(skip)]
    pub accent: Option<String>,
}

impl NavEntry {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: None,
            active: false,
            accent: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.target)
    }
}
