//! Reassembly of a DNA sequence from overlapping fragments.
//!
//! Fragments are chained end-to-end by exact suffix/prefix overlaps. Every
//! ordered pair that overlaps is a candidate seed; each seed is grown by a
//! greedy, non-backtracking walk, and the first walk that consumes every
//! fragment is the answer.

pub mod assembler;
pub mod chain;
pub mod error;
pub mod fasta;
pub mod fragment;
pub mod overlap;
pub mod seed;

pub use assembler::{Assembler, Assembly, Attempt};
pub use chain::{find_chain, ChainOutcome};
pub use error::AssembleError;
pub use fasta::{read_fragments, write_contig, write_segment_list};
pub use fragment::{Availability, ChainState, Fragment, SEP};
pub use overlap::{overlap, overlap_len};
pub use seed::{seed_pairs, SeedPair};
