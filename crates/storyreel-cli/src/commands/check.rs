use std::path::Path;

use anyhow::Result;

use storyreel_core::Story;

pub fn run(path: &Path) -> Result<()> {
    let story = Story::load(path)?;

    if story.sections.is_empty() {
        println!("{}: no sections.", path.display());
        return Ok(());
    }

    let title = story.title.as_deref().unwrap_or("(untitled)");
    println!("{} - {} section(s)\n", title, story.sections.len());

    for (i, section) in story.sections.iter().enumerate() {
        let accent = section
            .accent
            .as_deref()
            .map(|a| format!(" [accent {}]", a))
            .unwrap_or_default();
        println!("  {}. {}{}", i + 1, section.id, accent);
        if let Some(title) = &section.title {
            println!("     title: {}", title);
        }
        for counter in &section.counters {
            let target = counter.target();
            let warning = if target.is_nan() { "  (not a number)" } else { "" };
            println!(
                "     counter {:?} -> target {} with {} decimal(s), ends as \"{}\"{}",
                counter.literal,
                target,
                counter.decimals(),
                counter.final_text(),
                warning
            );
        }
    }

    println!("\nNav ({}):", story.nav.len());
    let unresolved = story.unresolved_nav();
    for entry in &story.nav {
        let marker = if unresolved.iter().any(|u| u.target == entry.target) {
            "  (no such section, clicks ignored)"
        } else {
            ""
        };
        println!("  {} -> {}{}", entry.display_label(), entry.target, marker);
    }

    Ok(())
}
