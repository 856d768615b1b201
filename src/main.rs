//! anagram - An anagram checker backed by a persistent cache of equivalence classes
//!
//! anagram provides:
//! - Case-insensitive, letters-only anagram comparison
//! - A flat-file cache partitioning known words into anagram classes
//! - Cache-first lookups so known pairs skip comparison
//! - Unified output format (text/jsonl/json/md)

use anyhow::Result;
use clap::Parser;

mod cache;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    crate::core::logging::init_tracing(cli.verbose, cli.quiet);
    cli::run(cli)
}
