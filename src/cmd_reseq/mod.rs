//! Subcommand modules for the `reseq` binary.

pub mod assemble;
pub mod overlap;
pub mod seeds;
