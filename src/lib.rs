//! # greedy-assembler
//!
//! A library for reconstructing a DNA sequence from short overlapping fragments.
//!
//! Sequencing breaks a genome into many short reads that overlap one another.
//! Greedy assembly rebuilds a contiguous sequence by repeatedly merging the two
//! fragments whose suffix/prefix overlap is longest, until no pair overlaps.
//! The result approximates the shortest common superstring of the reads.
//!
//! ## Features
//!
//! - **Validated fragments**: Sequences over G, A, C, T only, checked on construction
//! - **Exact overlaps**: Longest suffix/prefix match, directional
//! - **Deterministic merging**: Explicit tie-breaking between equally good merges
//! - **Step or run**: Merge one pair at a time or run to a fixed point
//! - **Loaders**: FASTA (plain or gzip) and one-sequence-per-line text
//!
//! ## Example
//!
//! ```rust
//! use greedy_assembler::{Assembler, Fragment};
//!
//! let fragments = vec![
//!     Fragment::new("AAGCT").unwrap(),
//!     Fragment::new("CTTAG").unwrap(),
//!     Fragment::new("TAGCC").unwrap(),
//! ];
//!
//! let mut assembler = Assembler::new(&fragments);
//! while assembler.assemble_once() {
//!     println!("{} fragments left", assembler.len());
//! }
//!
//! assert_eq!(assembler.fragments()[0].as_str(), "AAGCTTAGCC");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Fragment and nucleotide types
//! - [`assembly`]: Greedy assembler and merge selection
//! - [`parsing`]: Loaders for FASTA and text input
//! - [`cli`]: Command-line interface implementation

pub mod assembly;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::assembly::{Assembler, AssemblerConfig, MergeCandidate, TieBreak};
pub use crate::core::fragment::{Fragment, FragmentError};
pub use crate::core::types::Nucleotide;
pub use crate::parsing::ParseError;
