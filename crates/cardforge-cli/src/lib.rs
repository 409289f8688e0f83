//! CardForge CLI library.
//!
//! This crate provides the command implementations behind the `cardforge`
//! binary: listing the deck catalog and building decks to `.apkg` files.

pub mod commands;
