//! CardForge CLI - Command-line interface for flashcard deck generation
//!
//! This binary provides commands for listing the deck catalog and building
//! decks into Anki-importable `.apkg` packages.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use cardforge_cli::commands;

/// CardForge - Flashcard Deck Generation
#[derive(Parser)]
#[command(name = "cardforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the decks in the catalog
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Build a single deck to an .apkg file
    Build {
        /// Deck id to build (see `cardforge list`)
        #[arg(short, long)]
        deck: String,

        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Shuffle seed for decks with a randomized initial order
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Path to a regions GeoJSON file (world-regions deck)
        #[arg(long)]
        regions: Option<String>,

        /// Region outline image size in pixels
        #[arg(long, default_value = "640")]
        size: u32,

        /// Skip downloading flag images (world-regions deck)
        #[arg(long)]
        no_flags: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Build every deck in the catalog
    BuildAll {
        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Shuffle seed for decks with a randomized initial order
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Path to a regions GeoJSON file (world-regions deck)
        #[arg(long)]
        regions: Option<String>,

        /// Region outline image size in pixels
        #[arg(long, default_value = "640")]
        size: u32,

        /// Skip downloading flag images (world-regions deck)
        #[arg(long)]
        no_flags: bool,

        /// Skip decks that need network access
        #[arg(long)]
        skip_network: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Build {
            deck,
            out_root,
            seed,
            regions,
            size,
            no_flags,
            json,
        } => {
            let options = commands::build::resolve_options(seed, regions.as_deref(), size, no_flags);
            commands::build::run(&deck, out_root.as_deref(), &options, json)
        }
        Commands::BuildAll {
            out_root,
            seed,
            regions,
            size,
            no_flags,
            skip_network,
            json,
        } => {
            let options = commands::build::resolve_options(seed, regions.as_deref(), size, no_flags);
            commands::build_all::run(out_root.as_deref(), &options, skip_network, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
