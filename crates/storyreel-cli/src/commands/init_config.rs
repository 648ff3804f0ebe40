use std::path::Path;

use anyhow::Result;
use tracing::info;

use storyreel_core::AppConfig;

pub fn run(path: Option<&Path>, force: bool) -> Result<()> {
    let target = path
        .map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::config_path);

    if target.exists() && !force {
        println!(
            "Config already exists at {} (use --force to overwrite).",
            target.display()
        );
        return Ok(());
    }

    let config = AppConfig::default();
    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    info!("Wrote default config to {}", target.display());
    println!("Wrote default config to {}", target.display());

    Ok(())
}
