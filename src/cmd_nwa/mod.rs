//! Subcommand modules for the `nwa` binary.

pub mod align;
pub mod rank;
