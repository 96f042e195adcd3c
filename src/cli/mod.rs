//! Command-line interface for greedy-assembler.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **assemble**: Greedily merge the fragments of a FASTA or text file
//! - **overlap**: Show the overlap and merge of two sequences
//!
//! ## Usage
//!
//! ```text
//! # Assemble reads from a FASTA file
//! greedy-assembler assemble reads.fa
//!
//! # One read per line, from stdin
//! printf 'AAGCT\nCTTAG\nTAGCC\n' | greedy-assembler assemble -
//!
//! # JSON output for scripting
//! greedy-assembler assemble reads.fa --format json
//!
//! # Inspect a single pair
//! greedy-assembler overlap AAGCT CTTAG
//! ```

use clap::{Parser, Subcommand};

pub mod assemble;
pub mod overlap;

#[derive(Parser)]
#[command(name = "greedy-assembler")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Assemble overlapping DNA fragments into contigs")]
#[command(
    long_about = "greedy-assembler reconstructs contiguous sequences from short overlapping fragments.\n\nAt every step it merges the two fragments with the longest suffix/prefix overlap, and stops when no pair overlaps any more:\n- Exact overlaps only (no mismatches)\n- Deterministic tie-breaking between equally good merges\n- FASTA (optionally gzipped) or one-sequence-per-line input"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble the fragments in a file
    Assemble(assemble::AssembleArgs),

    /// Compute the overlap and merge of two sequences
    Overlap(overlap::OverlapArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Fasta,
}

/// Render sequences as FASTA records wrapped at this many bases per line
pub const FASTA_LINE_WIDTH: usize = 60;

/// Write one FASTA record to stdout
pub(crate) fn print_fasta_record(name: &str, sequence: &str) {
    println!(">{name} length={}", sequence.len());
    for line in sequence.as_bytes().chunks(FASTA_LINE_WIDTH) {
        println!("{}", String::from_utf8_lossy(line));
    }
}
