//! CLI command implementations

pub mod build;
pub mod build_all;
pub mod list;

mod json_output;
