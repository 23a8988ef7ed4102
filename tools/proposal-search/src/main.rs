use clap::{Parser, Subcommand};
use portal_search::normalization::{canonical_description, canonical_title};
use portal_search::ranking::rank_entries;
use portal_search::scoring::fuzzy_contains;
use portal_search::types::SearchEntry;
use std::fs;

#[derive(Parser)]
#[command(name = "proposal-search")]
#[command(about = "Rank a JSON proposal catalog against a search query")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank catalog entries by relevance and print them with highlights
    Search {
        /// JSON file containing an array of proposal records
        #[arg(long, short)]
        file: String,
        /// Maximum number of results to print
        #[arg(long, short)]
        limit: Option<usize>,
        /// Search query
        query: String,
    },
    /// Print titles of entries where any field loosely matches the query
    Filter {
        /// JSON file containing an array of proposal records
        #[arg(long, short)]
        file: String,
        /// Search query
        query: String,
    },
}

fn load_catalog(path: &str) -> Result<Vec<SearchEntry>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let entries: Vec<SearchEntry> = serde_json::from_str(&raw)?;
    Ok(entries
        .into_iter()
        .map(|e| SearchEntry {
            title: e.title.as_deref().map(canonical_title),
            description: e.description.as_deref().map(canonical_description),
            author: e.author,
        })
        .collect())
}

fn run_search(
    file: &str,
    query: &str,
    limit: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = load_catalog(file)?;
    let ranked = rank_entries(&entries, query);
    let shown = limit.unwrap_or(ranked.len());

    for result in ranked.iter().take(shown) {
        let title = result
            .highlight
            .as_deref()
            .or(result.entry.title.as_deref())
            .unwrap_or("(untitled)");
        match result.entry.author.as_deref() {
            Some(author) => println!("{:>4}  {}  by {}", result.score, title, author),
            None => println!("{:>4}  {}", result.score, title),
        }
    }
    Ok(())
}

fn run_filter(file: &str, query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let entries = load_catalog(file)?;
    for entry in &entries {
        let matched = [&entry.title, &entry.description, &entry.author]
            .into_iter()
            .flatten()
            .any(|field| fuzzy_contains(query, field));
        if matched {
            println!("{}", entry.title.as_deref().unwrap_or("(untitled)"));
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Search { file, limit, query } => run_search(&file, &query, limit),
        Commands::Filter { file, query } => run_filter(&file, &query),
    }
}
