use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::cursor::{CursorStore, FileCursorStore};
use crate::enumerator::{self, Enumerator, PageRequest};
use crate::error::Error;
use crate::order::SortMode;
use crate::output::{self, OutputFormat};
use crate::progress;

#[derive(Parser)]
#[command(name = "pagewalk")]
#[command(version)]
#[command(about = "List the next batch of files under a directory, resuming where the last run stopped")]
#[command(long_about = "Pagewalk walks a directory tree, keeps the files with the given extensions, \
    orders them, and prints the next COUNT of them. The last printed file is remembered per \
    directory, so the following run continues after it.\n\n\
    Examples:\n  \
    pagewalk next --path ~/Videos --count 3 --extension .mkv --sort-mode name\n  \
    mpv $(pagewalk next --path ~/Music -n 10 -e .mp3 -e .flac -s timestamp_creation)\n  \
    pagewalk show --path ~/Videos\n  \
    pagewalk reset --path ~/Videos")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress everything on stderr except errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Keep cursors in this file
    #[arg(long, value_name = "PATH", global = true)]
    pub cursor_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the next files and remember the last one
    #[command(visible_alias = "n")]
    Next {
        /// Directory to list
        #[arg(short = 'p', long, value_name = "PATH")]
        path: PathBuf,

        /// How many files to return
        #[arg(short = 'n', long, value_name = "N", allow_negative_numbers = true)]
        count: i64,

        /// Extension to include, with the leading dot (repeatable)
        #[arg(short = 'e', long = "extension", value_name = "EXT")]
        extensions: Vec<String>,

        /// Ordering: name or timestamp_creation
        #[arg(
            short = 's',
            long,
            alias = "short_mode",
            value_name = "MODE",
            value_parser = parse_sort_mode
        )]
        sort_mode: SortMode,

        /// Print a JSON array instead of space-separated paths
        #[arg(long)]
        json: bool,

        /// Skip files matching this glob (repeatable)
        #[arg(long, value_name = "PATTERN")]
        exclude: Vec<String>,

        /// Descend into symlinked directories
        #[arg(long)]
        follow_links: bool,
    },

    /// Show the stored cursor for a directory
    Show {
        #[arg(short = 'p', long, value_name = "PATH")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget the cursor for a directory so the next run starts over
    Reset {
        #[arg(short = 'p', long, value_name = "PATH")]
        path: PathBuf,
    },
}

fn parse_sort_mode(s: &str) -> Result<SortMode, String> {
    s.parse::<SortMode>().map_err(|e| e.to_string())
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        self.run_with(io::stdout().lock())
    }

    /// Run the command, writing results to `out`
    pub fn run_with<W: Write>(self, mut out: W) -> anyhow::Result<()> {
        let Cli {
            command,
            quiet,
            config: config_path,
            cursor_file,
            ..
        } = self;

        let mut config = match &config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };

        match command {
            Commands::Next {
                path,
                count,
                extensions,
                sort_mode,
                json,
                exclude,
                follow_links,
            } => {
                let count = usize::try_from(count).map_err(|_| {
                    Error::invalid_argument(format!("count must be greater than zero, got {}", count))
                })?;
                config.apply_cli_overrides(cursor_file, follow_links, exclude);
                let options = config.collect_options()?;

                for ext in extensions.iter().filter(|e| !e.starts_with('.')) {
                    tracing::warn!(
                        "extension '{}' has no leading dot and will only match names ending in '.{}'",
                        ext,
                        ext
                    );
                }

                let store = FileCursorStore::new(config.cursor_file());
                let request = PageRequest::new(path, count, extensions, sort_mode);

                let spinner = progress::create_spinner(
                    &format!("Scanning {}...", request.path.display()),
                    !quiet && !json,
                );
                let result = Enumerator::with_options(store, options).next_page(&request);
                progress::finish_and_clear(&spinner);

                let page = result.with_context(|| {
                    format!("Failed to list next files from {}", request.path.display())
                })?;
                output::write_page(&mut out, &page, OutputFormat::from_json_flag(json))
                    .context("Failed to write output")?;
            }

            Commands::Show { path, json } => {
                config.apply_cli_overrides(cursor_file, false, Vec::new());
                let mut store = FileCursorStore::new(config.cursor_file());
                let cursor = store
                    .cursor(enumerator::scope_of(&path)?)
                    .context("Failed to read cursor")?;
                output::write_cursor(&mut out, &cursor, OutputFormat::from_json_flag(json))
                    .context("Failed to write output")?;
            }

            Commands::Reset { path } => {
                config.apply_cli_overrides(cursor_file, false, Vec::new());
                let mut store = FileCursorStore::new(config.cursor_file());
                let scope = enumerator::scope_of(&path)?;
                let cleared = store.clear(scope).context("Failed to reset cursor")?;
                if cleared {
                    writeln!(out, "{} cursor for {}", "Cleared".green(), scope)?;
                } else {
                    writeln!(out, "{} No cursor stored for {}", "Note:".yellow(), scope)?;
                }
            }
        }

        Ok(())
    }
}
