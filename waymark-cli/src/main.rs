// Copyright 2025 Waymark Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Waymark CLI
//!
//! Command-line interface for the travel memory journal.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use waymark_core::{JournalConfig, Memory, MemoryId};
use waymark_query::JournalService;

#[derive(Parser)]
#[command(name = "waymark")]
#[command(about = "Waymark - travel memory journal", long_about = None)]
struct Cli {
    /// Storage directory (defaults to ~/.waymark)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Output as JSON (machine-readable)
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new travel memory
    Add {
        /// Where this memory happened
        #[arg(short, long)]
        location: String,

        /// When this happened (YYYY-MM-DD or 'today')
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Describe your memory
        #[arg(long)]
        description: String,

        /// Manual tags (comma-separated)
        #[arg(long)]
        tags: Option<String>,
    },

    /// Browse memories in chronological order
    List {
        /// Maximum number of memories to show
        #[arg(long)]
        limit: Option<usize>,

        /// Only memories carrying this tag (repeatable)
        #[arg(long)]
        tag: Vec<String>,
    },

    /// Show a single memory in full
    Show {
        /// Memory ID
        id: String,
    },

    /// Re-extract tags from memory descriptions
    Retag {
        /// Memory ID to re-process
        id: Option<String>,

        /// Re-process all memories with insufficient tags
        #[arg(long)]
        all: bool,
    },

    /// Show the memory with the most tags
    Top,

    /// Show collection statistics
    Stats,

    /// Search memories by description text
    Search {
        /// Search term
        query: String,

        /// Search locations instead of descriptions
        #[arg(long)]
        location: bool,
    },
}

/// Memories below this tag count are re-processed by `retag --all`
const SPARSE_TAG_THRESHOLD: usize = 2;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = match &cli.data_dir {
        Some(dir) => JournalConfig::with_storage_dir(dir),
        None => JournalConfig::default(),
    };
    let service = JournalService::new(&config.storage_dir, config.backup_count)
        .with_context(|| format!("failed to open journal at {}", config.storage_dir.display()))?;

    match cli.command {
        Commands::Add {
            location,
            date,
            description,
            tags,
        } => {
            let date = parse_date_input(&date)?;
            let manual_tags = parse_tags_input(tags.as_deref().unwrap_or(""));

            let id = service.add_memory(&location, date, &description, &manual_tags)?;
            let memory = service
                .get_memory(&id)?
                .context("memory vanished after save")?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&memory)?);
            } else {
                println!("Memory saved.");
                println!("Tags: {}", format_tags(&memory.tags));
                println!("ID:   {id}");
            }
        }

        Commands::List { limit, tag } => {
            let memories = service.list_memories(limit, &tag)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&memories)?);
            } else if memories.is_empty() {
                println!("No memories found. Add your first with: waymark add");
            } else {
                for memory in &memories {
                    print_memory_row(memory);
                }
                println!("\nShowing {} memories", memories.len());
            }
        }

        Commands::Show { id } => {
            let id = MemoryId::from_string(id);
            match service.get_memory(&id)? {
                Some(memory) if cli.json => {
                    println!("{}", serde_json::to_string_pretty(&memory)?)
                }
                Some(memory) => print_memory_full(&memory),
                None => bail!("memory not found: {id}"),
            }
        }

        Commands::Retag { id, all } => {
            if all {
                let processed = service.retag_sparse(SPARSE_TAG_THRESHOLD)?;
                println!("Processed {processed} memories");
            } else if let Some(id) = id {
                let id = MemoryId::from_string(id);
                match service.retag_memory(&id)? {
                    Some(memory) => {
                        println!("Updated memory tags.");
                        println!("Tags: {}", format_tags(&memory.tags));
                    }
                    None => bail!("memory not found: {id}"),
                }
            } else {
                bail!("specify a memory ID or use --all");
            }
        }

        Commands::Top => match service.top_memory()? {
            Some(memory) if cli.json => {
                println!("{}", serde_json::to_string_pretty(&memory)?)
            }
            Some(memory) => {
                println!("Top memory (most tagged):\n");
                print_memory_full(&memory);
            }
            None => println!("No memories found. Add your first with: waymark add"),
        },

        Commands::Stats => {
            let stats = service.statistics()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Memories:   {}", stats.total_memories);
                println!("Tags:       {} ({} unique)", stats.total_tags, stats.unique_tags);
                if let Some(range) = &stats.date_range {
                    println!("Date range: {} to {}", range.earliest, range.latest);
                }
                if !stats.locations_visited.is_empty() {
                    println!("Locations:  {}", stats.locations_visited.join(", "));
                }
                if !stats.most_common_tags.is_empty() {
                    println!("Top tags:");
                    for (tag, count) in &stats.most_common_tags {
                        println!("  {tag}: {count}");
                    }
                }
            }
        }

        Commands::Search { query, location } => {
            let memories = if location {
                service.search_locations(&query)?
            } else {
                service.search_descriptions(&query)?
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&memories)?);
            } else if memories.is_empty() {
                println!("No memories matched '{query}'");
            } else {
                for memory in &memories {
                    print_memory_row(memory);
                }
                println!("\n{} memories matched", memories.len());
            }
        }
    }

    Ok(())
}

/// Parse a date argument, accepting `YYYY-MM-DD` or `today`
fn parse_date_input(input: &str) -> Result<NaiveDate> {
    if input.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{input}': use YYYY-MM-DD or 'today'"))
}

/// Split a comma-separated tag string, dropping blanks
fn parse_tags_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "none".to_string()
    } else {
        tags.join(", ")
    }
}

fn print_memory_row(memory: &Memory) {
    let mut description = memory.description.clone();
    if description.chars().count() > 40 {
        description = description.chars().take(37).collect();
        description.push_str("...");
    }
    println!(
        "{}  {:<25} {:<40} [{}]",
        memory.date,
        memory.location,
        description,
        format_tags(&memory.tags)
    );
}

fn print_memory_full(memory: &Memory) {
    println!("Date:        {}", memory.date);
    println!("Location:    {}", memory.location);
    println!("Description: {}", memory.description);
    println!("Tags:        {}", format_tags(&memory.tags));
    println!("ID:          {}", memory.id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2024-06-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert!(parse_date_input("today").is_ok());
        assert!(parse_date_input("TODAY").is_ok());
        assert!(parse_date_input("15/06/2024").is_err());
        assert!(parse_date_input("").is_err());
    }

    #[test]
    fn test_parse_tags_input() {
        assert_eq!(
            parse_tags_input("food, wine , culture"),
            vec!["food", "wine", "culture"]
        );
        assert_eq!(parse_tags_input(" , ,"), Vec::<String>::new());
        assert_eq!(parse_tags_input(""), Vec::<String>::new());
    }
}
