//! amp-suggest CLI
//!
//! Thin glue over the suggestion manager: build a named collection from a
//! data file, resolve a typed query against it, print the ranked records.

use amp_suggest::{SuggestError, SuggestionManager};
use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;

use cli::{Cli, Commands, QueryArgs, ValidateArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = match cli.command {
        Commands::Query(args) => execute_query(args),
        Commands::Validate(args) => execute_validate(args),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error ({}): {}", e.error_code(), e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Build a collection from the data file and run one query against it.
fn execute_query(args: QueryArgs) -> Result<String, SuggestError> {
    let manager = SuggestionManager::new();
    manager.build_from_file(&args.name, &args.data)?;

    let results = manager.query(&args.name, &args.input)?;
    debug!(results = results.len(), "query resolved");

    if args.json {
        let lines: Result<Vec<String>, _> =
            results.iter().map(serde_json::to_string).collect();
        return Ok(lines?.join("\n"));
    }

    if results.is_empty() {
        return Ok(format!("No suggestions for '{}'", args.input));
    }

    let mut output = String::new();
    for (rank, view) in results.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({}) -> {} [full_keyword: {}, block_id: {}]\n",
            rank + 1,
            view.title,
            view.advertiser,
            view.url,
            view.full_keyword,
            view.block_id
        ));
    }
    Ok(output.trim_end().to_string())
}

/// Build the collection and report its stats without querying.
fn execute_validate(args: ValidateArgs) -> Result<String, SuggestError> {
    let manager = SuggestionManager::new();
    manager.build_from_file("validate", &args.data)?;

    let stats = manager.stats("validate")?;
    Ok(format!(
        "OK: {} records, {} keyword entries ({} distinct)",
        stats["records_count"], stats["keyword_entries_count"], stats["distinct_keywords_count"]
    ))
}

/// Map error categories to process exit codes.
fn get_exit_code(error: &SuggestError) -> i32 {
    match error {
        SuggestError::Io(_) => 2,
        SuggestError::Parse(_) | SuggestError::Validation(_) => 3,
        SuggestError::CollectionNotFound(_) => 4,
    }
}
