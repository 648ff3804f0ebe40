use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::model::{NavEntry, Section};
use crate::{Error, Result};

/// A loaded story: sections in document order plus the nav rail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Explicit nav rail; derived from the sections when empty
    #[serde(default)]
    pub nav: Vec<NavEntry>,
}

impl Story {
    /// Build a story from sections, deriving one nav entry per section
    pub fn from_sections(sections: Vec<Section>) -> Result<Self> {
        Self {
            title: None,
            sections,
            nav: Vec::new(),
        }
        .finish()
    }

    /// Load a story file; `.json` files are JSON, everything else TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let story = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        debug!(
            "Loaded story {:?}: {} sections, {} nav entries",
            path,
            story.sections.len(),
            story.nav.len()
        );
        Ok(story)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let story: Story = toml::from_str(content)?;
        story.finish()
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let story: Story = serde_json::from_str(content)?;
        story.finish()
    }

    /// Validate ids and fill in the derived nav rail
    fn finish(mut self) -> Result<Self> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(Error::Document("section with empty id".to_string()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(Error::Document(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }

        if self.nav.is_empty() {
            self.nav = self
                .sections
                .iter()
                .map(|s| NavEntry::new(&s.id).with_label(s.display_title()))
                .collect();
        } else {
            for entry in &self.nav {
                if !seen.contains(entry.target.as_str()) {
                    warn!("Nav entry '{}' targets no section", entry.target);
                }
            }
        }

        Ok(self)
    }

    /// Index of the section with `id`, if any
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Nav entries whose target does not resolve
    pub fn unresolved_nav(&self) -> Vec<&NavEntry> {
        self.nav
            .iter()
            .filter(|entry| self.section_index(&entry.target).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
title = "Quarterly"

[[sections]]
id = "a"
accent = "#ff6b35"
title = "Revenue"

[[sections.counters]]
count = "42.5"
prefix = "$"
suffix = "M"

[[sections.counters]]
count = 1000

[[sections]]
id = "b"
"##;

    #[test]
    fn test_parse_toml_story() {
        let story = Story::from_toml(SAMPLE).unwrap();
        assert_eq!(story.title.as_deref(), Some("Quarterly"));
        assert_eq!(story.sections.len(), 2);

        let a = &story.sections[0];
        assert_eq!(a.accent.as_deref(), Some("#ff6b35"));
        assert_eq!(a.counters.len(), 2);
        assert_eq!(a.counters[0].literal, "42.5");
        assert_eq!(a.counters[0].prefix, "$");
        assert_eq!(a.counters[1].literal, "1000");
        assert_eq!(a.counters[1].suffix, "");
        assert!(!a.is_active());
    }

    #[test]
    fn test_nav_derived_from_sections() {
        let story = Story::from_toml(SAMPLE).unwrap();
        let targets: Vec<_> = story.nav.iter().map(|n| n.target.as_str()).collect();
        assert_eq!(targets, vec!["a", "b"]);
        assert_eq!(story.nav[0].display_label(), "Revenue");
        assert_eq!(story.nav[1].display_label(), "b");
    }

    #[test]
    fn test_explicit_nav_kept_even_if_unresolved() {
        let toml = r#"
[[sections]]
id = "a"

[[nav]]
target = "a"

[[nav]]
target = "ghost"
"#;
        let story = Story::from_toml(toml).unwrap();
        assert_eq!(story.nav.len(), 2);
        let unresolved = story.unresolved_nav();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].target, "ghost");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = "[[sections]]\nid = \"a\"\n[[sections]]\nid = \"a\"\n";
        assert!(matches!(Story::from_toml(toml), Err(Error::Document(_))));
    }

    #[test]
    fn test_empty_id_rejected() {
        let toml = "[[sections]]\nid = \" \"\n";
        assert!(matches!(Story::from_toml(toml), Err(Error::Document(_))));
    }

    #[test]
    fn test_parse_json_story() {
        let json = r#"{"sections":[{"id":"x","counters":[{"count":"3.50","suffix":"%"}]}]}"#;
        let story = Story::from_json(json).unwrap();
        assert_eq!(story.sections[0].counters[0].decimals(), 2);
        assert_eq!(story.sections[0].counters[0].final_text(), "3.50%");
    }

    #[test]
    fn test_empty_story_is_valid() {
        let story = Story::from_toml("").unwrap();
        assert!(story.sections.is_empty());
        assert!(story.nav.is_empty());
    }
}
