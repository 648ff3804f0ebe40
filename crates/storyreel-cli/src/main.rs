use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storyreel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "storyreel")]
#[command(author, version, about = "A terminal story scroller with animated counters")]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Story file to open (shorthand for `storyreel run <STORY>`)
    story: Option<PathBuf>,

    /// Config file (defaults to ~/.config/storyreel/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a story in the terminal
    Run {
        /// Story file (.toml or .json)
        story: PathBuf,
    },
    /// Validate a story and print what it contains
    Check {
        story: PathBuf,
    },
    /// Print counter animation frames without a terminal UI
    Frames {
        story: PathBuf,
        /// Section id (defaults to the first section)
        #[arg(short, long)]
        section: Option<String>,
        /// Milliseconds between printed frames
        #[arg(long, default_value_t = 100)]
        step_ms: u64,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Install the tracing subscriber. The TUI logs to a file so output never
/// lands on the alternate screen; headless commands log to stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let command = match (cli.command, cli.story) {
        (Some(command), _) => command,
        (None, Some(story)) => Commands::Run { story },
        (None, None) => anyhow::bail!("no story given, see `storyreel --help`"),
    };

    init_logging(&config, matches!(command, Commands::Run { .. }))?;

    match command {
        Commands::Run { story } => commands::run::run(&config, &story),
        Commands::Check { story } => commands::check::run(&story),
        Commands::Frames {
            story,
            section,
            step_ms,
        } => commands::frames::run(&story, section.as_deref(), step_ms),
        Commands::InitConfig { force } => commands::init_config::run(cli.config.as_deref(), force),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_path_is_run_shorthand() {
        let cli = Cli::try_parse_from(["storyreel", "story.toml"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.story, Some(PathBuf::from("story.toml")));
    }

    #[test]
    fn test_frames_options() {
        let cli = Cli::try_parse_from([
            "storyreel", "frames", "story.toml", "--section", "b", "--step-ms", "250",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Frames {
                section, step_ms, ..
            }) => {
                assert_eq!(section.as_deref(), Some("b"));
                assert_eq!(step_ms, 250);
            }
            _ => panic!("expected frames"),
        }
    }

    #[test]
    fn test_init_config_force_flag() {
        let cli = Cli::try_parse_from(["storyreel", "init-config", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::InitConfig { force: true })));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["storyreel", "check", "s.toml", "--config", "c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Some(Commands::Check { .. })));
    }
}
