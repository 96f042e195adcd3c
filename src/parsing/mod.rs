//! Loaders that turn raw input into validated fragments.
//!
//! This module provides parsers for:
//!
//! - **FASTA files**: One fragment per record, plain or gzip/bgzip compressed
//! - **Line-oriented text**: One fragment per line, `#` comments allowed
//!
//! Every sequence is validated with [`Fragment::new`]. The first invalid
//! sequence aborts loading with [`ParseError::InvalidFragment`], naming the
//! 1-based record (FASTA) or line (text) it came from.
//!
//! ## Example
//!
//! ```rust
//! use greedy_assembler::parsing::lines::parse_lines_text;
//!
//! let fragments = parse_lines_text("# reads\nAAGCT\nCTTAG\n").unwrap();
//! assert_eq!(fragments.len(), 2);
//! ```
//!
//! [`Fragment::new`]: crate::core::fragment::Fragment::new

use thiserror::Error;

use crate::core::fragment::FragmentError;

pub mod fasta;
pub mod lines;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid fragment in record {record}: {source}")]
    InvalidFragment {
        record: usize,
        source: FragmentError,
    },

    #[error("Too many fragments: {0} exceeds maximum allowed (100000)")]
    TooManyFragments(usize),
}
