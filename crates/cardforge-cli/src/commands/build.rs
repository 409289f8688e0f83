//! Build command implementation
//!
//! Builds a single deck from the catalog and writes the `.apkg` file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use cardforge_catalog::{create, BuildOptions};
use cardforge_deck::{package_deck, BuildSummary};

use super::json_output::BuildOutput;

/// Run the build command
///
/// # Arguments
/// * `deck_id` - Catalog id of the deck to build
/// * `out_root` - Output root directory (default: current directory)
/// * `options` - Seed, regions path, image size, and flag fetching
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    deck_id: &str,
    out_root: Option<&str>,
    options: &BuildOptions,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    if !json_output {
        println!("{} {}", "Building:".cyan().bold(), deck_id);
    }

    let summary = build_deck(deck_id, out_root, options)?;

    if json_output {
        let output = BuildOutput::from_summary(deck_id, &summary);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    print_summary(&summary);
    println!(
        "{} {} in {} ms",
        "Done:".green().bold(),
        summary.output_path.display(),
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

/// Builds one deck, staging media in a temporary directory.
pub fn build_deck(
    deck_id: &str,
    out_root: Option<&str>,
    options: &BuildOptions,
) -> Result<BuildSummary> {
    let deck = create(deck_id, options)
        .with_context(|| format!("failed to set up deck: {}", deck_id))?;

    let out_root = PathBuf::from(out_root.unwrap_or("."));
    fs::create_dir_all(&out_root)
        .with_context(|| format!("failed to create output directory: {}", out_root.display()))?;
    let output_path = out_root.join(format!("{}.apkg", deck_id));

    // The package embeds copies of every media file, so staging lives in a
    // directory that vanishes when the build finishes.
    let media_dir = tempfile::tempdir().context("failed to create media staging directory")?;
    let summary = package_deck(deck.as_ref(), media_dir.path(), &output_path)
        .with_context(|| format!("failed to build deck: {}", deck_id))?;
    Ok(summary)
}

/// Prints a build summary in human-readable form.
pub fn print_summary(summary: &BuildSummary) {
    for warning in &summary.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    println!("{} {}", "Title:".dimmed(), summary.title);
    println!("{} {}", "Notes:".dimmed(), summary.note_count);
    println!("{} {}", "Media:".dimmed(), summary.media_count);
}

/// Resolves CLI flags into catalog build options.
pub fn resolve_options(
    seed: u64,
    regions: Option<&str>,
    size: u32,
    no_flags: bool,
) -> BuildOptions {
    BuildOptions {
        seed,
        regions_path: regions.map(Path::new).map(Path::to_path_buf),
        image_size: size,
        fetch_flags: !no_flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardforge_catalog::DEFAULT_SEED;

    #[test]
    fn test_resolve_options_defaults() {
        let options = resolve_options(DEFAULT_SEED, None, 640, false);
        assert_eq!(options.seed, 42);
        assert!(options.regions_path.is_none());
        assert_eq!(options.image_size, 640);
        assert!(options.fetch_flags);
    }

    #[test]
    fn test_resolve_options_no_flags() {
        let options = resolve_options(7, Some("world.geojson"), 320, true);
        assert_eq!(options.seed, 7);
        assert_eq!(
            options.regions_path.as_deref(),
            Some(Path::new("world.geojson"))
        );
        assert!(!options.fetch_flags);
    }

    #[test]
    fn test_build_writes_apkg() {
        let tmp = tempfile::tempdir().unwrap();
        let out_root = tmp.path().to_string_lossy().into_owned();
        let options = BuildOptions::default();
        let summary = build_deck("java-fundamentals", Some(&out_root), &options).unwrap();
        assert!(summary.output_path.exists());
        assert_eq!(summary.note_count, 30);
        assert_eq!(summary.media_count, 0);
    }

    #[test]
    fn test_unknown_deck_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let out_root = tmp.path().to_string_lossy().into_owned();
        let err = build_deck("no-such-deck", Some(&out_root), &BuildOptions::default());
        assert!(err.is_err());
    }
}
