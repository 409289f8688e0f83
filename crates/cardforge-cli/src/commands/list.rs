//! List command implementation
//!
//! Prints the deck catalog with titles and network requirements.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use cardforge_catalog::{create, requires_network, BuildOptions, DECK_IDS};
use cardforge_deck::DeckSource;

use super::json_output::ListEntry;

/// Run the list command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: always 0
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries = catalog_entries()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Available decks:".cyan().bold());
    for entry in &entries {
        let network = if entry.network {
            " [network]".yellow().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", entry.deck.green(), network);
        println!("    {} {} (v{})", "Title:".dimmed(), entry.title, entry.version);
        println!("    {} {}", "About:".dimmed(), entry.description);
    }
    Ok(ExitCode::SUCCESS)
}

fn catalog_entries() -> Result<Vec<ListEntry>> {
    // Deck constructors only record their inputs, so a placeholder regions
    // path is enough to read metadata off every deck.
    let options = BuildOptions {
        regions_path: Some(PathBuf::from("regions.geojson")),
        ..BuildOptions::default()
    };
    let mut entries = Vec::with_capacity(DECK_IDS.len());
    for id in DECK_IDS {
        let deck = create(id, &options)?;
        let metadata = deck.metadata();
        entries.push(ListEntry {
            deck: id.to_string(),
            title: metadata.title.clone(),
            version: metadata.version.clone(),
            description: metadata.description.clone(),
            network: requires_network(id, &BuildOptions::default()),
        });
    }
    Ok(entries)
}
