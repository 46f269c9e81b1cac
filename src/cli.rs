//! CLI interface for skein.
//!
//! The bare command opens the TUI. Subcommands are non-interactive and
//! print the feed to stdout: text for humans, `--json` for tooling.

mod format;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Timestamp;

use crate::config::{self, Config, ConfigError};
use crate::data::{DataError, Feed};

/// skein — a social feed in your terminal.
#[derive(Debug, Parser)]
#[command(name = "skein")]
pub struct Cli {
    /// Display handle for your own posts and story.
    /// When omitted, resolved from SKEIN_HANDLE or ~/.skein/config.toml.
    #[arg(long, global = true)]
    handle: Option<String>,

    /// Load the feed from a JSON file instead of the built-in sample data.
    #[arg(long, global = true, value_name = "PATH")]
    feed: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the thread feed and exit.
    Feed {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List stories with item counts and seen markers.
    Stories {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Errors surfaced to `main`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Runs the CLI: dispatches a subcommand, or launches the TUI.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::load()?;
    let handle = config::resolve_handle(cli.handle.as_deref(), &config);

    let feed = match &cli.feed {
        Some(path) => Feed::load(path)?,
        None => Feed::sample(),
    };

    match cli.command {
        Some(Command::Feed { json }) => cmd_feed(&feed, json),
        Some(Command::Stories { json }) => cmd_stories(&feed, json),
        None => Ok(crate::tui::run(feed, handle)?),
    }
}

fn cmd_feed(feed: &Feed, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&feed.threads)?);
        return Ok(());
    }

    let now = Timestamp::now();
    for (i, thread) in feed.threads.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", format::format_thread(thread, now));
    }
    Ok(())
}

fn cmd_stories(feed: &Feed, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&feed.stories)?);
        return Ok(());
    }

    println!("{}", format::format_story_line(&feed.stories.own));
    for story in &feed.stories.stories {
        println!("{}", format::format_story_line(story));
    }
    Ok(())
}
