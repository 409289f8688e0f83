//! Build-all command implementation
//!
//! Builds every deck in the catalog, continuing past per-deck failures.
//! Decks whose inputs are missing are skipped, as are network-dependent
//! decks when `--skip-network` is set.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;

use cardforge_catalog::{requires_network, BuildOptions, DECK_IDS};

use super::build::{build_deck, print_summary};
use super::json_output::{BuildAllOutput, BuildFailure, BuildOutput};

/// Run the build-all command
///
/// # Arguments
/// * `out_root` - Output root directory (default: current directory)
/// * `options` - Seed, regions path, image size, and flag fetching
/// * `skip_network` - Skip decks that would need network access
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every attempted deck built, 1 if any failed
pub fn run(
    out_root: Option<&str>,
    options: &BuildOptions,
    skip_network: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    let mut built = Vec::new();
    let mut failed = Vec::new();
    let mut skipped = Vec::new();

    for deck_id in DECK_IDS {
        if let Some(reason) = skip_reason(deck_id, options, skip_network) {
            if !json_output {
                println!("{} {} ({})", "Skipping:".yellow().bold(), deck_id, reason);
            }
            skipped.push(deck_id.to_string());
            continue;
        }

        if !json_output {
            println!("{} {}", "Building:".cyan().bold(), deck_id);
        }
        match build_deck(deck_id, out_root, options) {
            Ok(summary) => {
                if !json_output {
                    print_summary(&summary);
                }
                built.push(BuildOutput::from_summary(deck_id, &summary));
            }
            Err(e) => {
                if !json_output {
                    println!("  {} {:#}", "FAILED:".red().bold(), e);
                }
                failed.push(BuildFailure {
                    deck: deck_id.to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    let exit = if failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    };

    if json_output {
        let output = BuildAllOutput {
            built,
            failed,
            skipped,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(exit);
    }

    println!(
        "{} {} deck(s) built, {} failed, {} skipped in {} ms",
        if failed.is_empty() {
            "Done:".green().bold()
        } else {
            "Done with failures:".red().bold()
        },
        built.len(),
        failed.len(),
        skipped.len(),
        start.elapsed().as_millis()
    );
    Ok(exit)
}

fn skip_reason(
    deck_id: &str,
    options: &BuildOptions,
    skip_network: bool,
) -> Option<&'static str> {
    if deck_id == "world-regions" && options.regions_path.is_none() {
        return Some("no regions file, pass --regions to include it");
    }
    if skip_network && requires_network(deck_id, options) {
        return Some("needs network access");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_regions_skipped_without_path() {
        let options = BuildOptions::default();
        assert!(skip_reason("world-regions", &options, false).is_some());
        assert!(skip_reason("perfect-pitch", &options, false).is_none());
    }

    #[test]
    fn test_network_skip() {
        let options = BuildOptions {
            regions_path: Some(PathBuf::from("regions.geojson")),
            ..BuildOptions::default()
        };
        assert!(skip_reason("world-regions", &options, true).is_some());
        assert!(skip_reason("world-regions", &options, false).is_none());

        let offline = BuildOptions {
            fetch_flags: false,
            ..options
        };
        assert!(skip_reason("world-regions", &offline, true).is_none());
    }
}
