//! Nav rail synchronisation

use crate::story::{NavEntry, Section};

/// Highlight every entry targeting `active_id` and clear the rest
///
/// Each entry that becomes active takes the section's accent when the section
/// declares one. Entries losing the highlight keep their last accent.
/// Several entries may target the same id; all of them light up.
pub fn sync_nav(entries: &mut [NavEntry], sections: &[Section], active_id: &str) {
    let accent = sections
        .iter()
        .find(|s| s.id == active_id)
        .and_then(|s| s.accent.as_deref())
        .filter(|accent| !accent.is_empty());

    for entry in entries.iter_mut() {
        entry.active = entry.target == active_id;
        if entry.active {
            if let Some(accent) = accent {
                entry.accent = Some(accent.to_string());
            }
        }
    }
}

/// Index of the first highlighted entry
pub fn active_entry(entries: &[NavEntry]) -> Option<usize> {
    entries.iter().position(|e| e.active)
}
