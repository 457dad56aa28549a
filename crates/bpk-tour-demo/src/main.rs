#![forbid(unsafe_code)]

//! Backpack tour demo.
//!
//! Builds a small sample page, mounts a three-step tour over it and drives
//! the tour from stdin, printing the page state and the rendered tour markup
//! after every command.
//!
//! # Running
//!
//! ```sh
//! cargo run -p bpk-tour-demo
//! cargo run -p bpk-tour-demo -- --script
//! cargo run -p bpk-tour-demo -- --config tour.toml
//! RUST_LOG=bpk_tour=debug cargo run -p bpk-tour-demo -- --script
//! ```

mod story;

use std::error::Error;
use std::io::BufRead;
use std::path::PathBuf;

use bpk_tour::TourConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use story::{Command, HELP, SCRIPT, Story};

/// Walk a sample page through the Backpack tour.
#[derive(Debug, Parser)]
#[command(name = "bpk-tour-demo", version)]
struct Args {
    /// Tour configuration (TOML, or JSON by `.json` extension).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run the built-in walkthrough instead of reading stdin.
    #[arg(long)]
    script: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(story: &Story) {
    println!("{}", story.status());
    println!("{}", story.view().to_markup());
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => TourConfig::from_file(path)?,
        None => TourConfig::default(),
    };
    tracing::info!(message = "demo.start", script = args.script, config = ?args.config);

    let mut story = Story::new(&config);
    render(&story);

    if args.script {
        for &command in SCRIPT {
            println!("> {command:?}");
            if !story.apply(command) {
                break;
            }
            render(&story);
        }
        return Ok(());
    }

    println!("{HELP}");
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = Command::parse(&line) else {
            println!("unknown command {:?}; h for help", line.trim());
            continue;
        };
        if !story.apply(command) {
            break;
        }
        render(&story);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from(["bpk-tour-demo", "--script", "--config", "tour.json"])
            .unwrap();
        assert!(args.script);
        assert_eq!(args.config, Some(PathBuf::from("tour.json")));
    }

    #[test]
    fn defaults_to_interactive_without_config() {
        let args = Args::try_parse_from(["bpk-tour-demo"]).unwrap();
        assert!(!args.script);
        assert!(args.config.is_none());
    }

    #[test]
    fn rejects_missing_config_path() {
        let err = Args::try_parse_from(["bpk-tour-demo", "--config"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = Args::try_parse_from(["bpk-tour-demo", "--fast"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
