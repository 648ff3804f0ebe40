use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};

use storyreel_core::{CounterAnimation, Story};

pub fn run(path: &Path, section_id: Option<&str>, step_ms: u64) -> Result<()> {
    let story = Story::load(path)?;

    let section = match section_id {
        Some(id) => story
            .sections
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| anyhow!("no section with id '{}'", id))?,
        None => story
            .sections
            .first()
            .ok_or_else(|| anyhow!("story has no sections"))?,
    };

    if section.counters.is_empty() {
        println!("Section '{}' has no counters.", section.id);
        return Ok(());
    }

    let start = Instant::now();
    let mut animations: Vec<CounterAnimation> = section
        .counters
        .iter()
        .map(|c| CounterAnimation::start(c, start))
        .collect();

    let step = step_ms.max(1);
    let mut elapsed = 0u64;
    loop {
        let now = start + Duration::from_millis(elapsed);
        let frames: Vec<_> = animations.iter_mut().map(|a| a.tick(now)).collect();
        let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
        println!("{:>6}ms  {}", elapsed, texts.join("  "));

        if frames.iter().all(|f| f.done) {
            break;
        }
        elapsed += step;
    }

    Ok(())
}
