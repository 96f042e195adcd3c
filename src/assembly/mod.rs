//! Greedy overlap assembly.
//!
//! - [`Assembler`]: Owns the working set and performs merges
//! - [`select_best`]: Scores every ordered pair and picks the next merge
//! - [`TieBreak`]: How merges with equal overlap are ranked
//!
//! ## Algorithm
//!
//! Each step scores every ordered pair of distinct fragments by the length of
//! the suffix/prefix overlap between them, merges the best pair, and replaces
//! the two originals with the merge. Assembly stops when no pair overlaps by
//! at least the configured minimum. A step costs O(n² · L) for `n` fragments
//! of length `L`.
//!
//! ## Example
//!
//! ```rust
//! use greedy_assembler::{Assembler, Fragment};
//!
//! let fragments: Vec<Fragment> = ["AAGCT", "CTTAG", "TAGCC"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let mut assembler = Assembler::new(&fragments);
//! assembler.assemble_all();
//!
//! assert_eq!(assembler.fragments(), vec!["AAGCTTAGCC".parse::<Fragment>().unwrap()]);
//! ```

pub mod assembler;
pub mod selection;

pub use assembler::{Assembler, AssemblerConfig, DEFAULT_MIN_OVERLAP};
pub use selection::{select_best, MergeCandidate, TieBreak};
