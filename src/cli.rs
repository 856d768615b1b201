//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::paths::resolve_cache_path;
use crate::core::render::{OutputFormat, RenderConfig};

/// anagram - check whether two strings are anagrams, remembering every match.
#[derive(Parser, Debug)]
#[command(name = "anagram")]
#[command(
    author,
    version,
    about,
    long_about = r#"anagram compares two strings as letter multisets (case-insensitive,
ignoring everything but ASCII letters) and records every positive match in a
flat-file cache of equivalence classes. A pair that is already cached is
answered without comparing again.

Output formats:
- text: one console message per result (default)
- jsonl: one JSON object per line
- json: a single JSON array
- md: human-friendly Markdown

Examples:
    anagram check FRIEND FINDER
    anagram --cache /tmp/anagrams.txt check listen silent
    anagram classes --format jsonl
    anagram clear
"#
)]
pub struct Cli {
    /// Root directory holding the default cache file.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
Unless --cache is given, the cache file is ROOT/AnagramCachedSets.txt."
    )]
    pub root: PathBuf,

    /// Cache file to read and update.
    #[arg(
        long,
        global = true,
        env = "ANAGRAM_CACHE",
        value_name = "FILE",
        long_help = "Cache file to read and update. Overrides the default location under ROOT.\n\n\
Each line of the file is one class of anagrams, members separated by commas."
    )]
    pub cache: Option<PathBuf>,

    /// Output format (text/jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default)\n\
- jsonl\n\
- json\n\
- md (markdown)"
    )]
    pub format: String,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr: cache location, load and persist\n\
events, and how each pair was merged. RUST_LOG takes precedence when set."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether two strings are anagrams.
    #[command(
        long_about = "Normalize both inputs, answer from the cache when the pair is already\n\
known, otherwise compare them and record a positive match.\n\n\
Inputs containing whitespace or digits are rejected.\n\n\
Examples:\n\
  anagram check FRIEND FINDER\n\
  anagram check are friend\n\
  anagram check listen silent --dry-run\n"
    )]
    Check {
        /// First string.
        #[arg(value_name = "FIRST")]
        first: String,

        /// Second string.
        #[arg(value_name = "SECOND")]
        second: String,

        /// Consult the cache but never write it.
        #[arg(
            long,
            long_help = "Read the cache file but keep every update in memory. The verdict is\n\
the same as a normal run; the cache file is left untouched."
        )]
        dry_run: bool,
    },

    /// List the cached anagram classes.
    #[command(long_about = "Load the cache and emit one result per equivalence class, in the\n\
order the classes were created.\n\n\
Examples:\n\
  anagram classes --format md\n\
  anagram classes --word Listen\n")]
    Classes {
        /// Only show the class containing this word (normalized first).
        #[arg(long, value_name = "WORD")]
        word: Option<String>,
    },

    /// Delete the cache file.
    Clear,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let cache_path = resolve_cache_path(&cli.root, cli.cache.as_deref());
    tracing::debug!(cache = %cache_path.display(), "Using cache file");

    match cli.command {
        Commands::Check {
            first,
            second,
            dry_run,
        } => crate::flows::check::run_check(&cache_path, &first, &second, dry_run, render_config),

        Commands::Classes { word } => {
            crate::cache::store::run_classes(&cache_path, word.as_deref(), render_config)
        }

        Commands::Clear => crate::cache::store::run_clear(&cache_path, render_config),
    }
}
