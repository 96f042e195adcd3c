//! Core data types for fragment assembly.
//!
//! - [`Fragment`]: An immutable, validated DNA sequence with overlap and merge operations
//! - [`Nucleotide`]: The four-symbol alphabet a fragment is drawn from
//!
//! ## Overlaps
//!
//! Overlap is measured from the end of the left fragment to the start of the
//! right fragment and is therefore directional:
//!
//! | Left  | Right | Overlap | Merge      |
//! |-------|-------|---------|------------|
//! | CAA   | AAG   | 2       | CAAG       |
//! | AAG   | CAA   | 0       | AAGCAA     |
//! | AAGCT | CTTAG | 2       | AAGCTTAG   |

pub mod fragment;
pub mod types;

pub use fragment::{Fragment, FragmentError};
pub use types::Nucleotide;
