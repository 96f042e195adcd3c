//! Overlap command - inspect how two sequences would merge.
//!
//! Overlap is directional, so both orientations are reported alongside the
//! left-to-right merge.

use anyhow::Context;
use clap::Args;

use crate::cli::{print_fasta_record, OutputFormat};
use crate::core::fragment::Fragment;

/// Arguments for the overlap command
#[derive(Args)]
pub struct OverlapArgs {
    /// Left sequence (its suffix is matched)
    #[arg(required = true)]
    pub left: String,

    /// Right sequence (its prefix is matched)
    #[arg(required = true)]
    pub right: String,
}

/// Overlaps and merge of one pair of fragments
struct OverlapResult {
    left: Fragment,
    right: Fragment,
    forward: usize,
    reverse: usize,
    merged: Fragment,
}

impl OverlapResult {
    fn compute(left: Fragment, right: Fragment) -> Self {
        let forward = left.overlap_with(&right);
        let reverse = right.overlap_with(&left);
        let merged = left.merged_with(&right);

        Self {
            left,
            right,
            forward,
            reverse,
            merged,
        }
    }
}

/// Execute overlap subcommand
///
/// # Errors
///
/// Returns an error if either sequence contains a symbol outside G, A, C, T.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: OverlapArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let left = Fragment::new(args.left.as_str()).context("Invalid left sequence")?;
    let right = Fragment::new(args.right.as_str()).context("Invalid right sequence")?;

    if verbose {
        eprintln!("Left: {} bp, right: {} bp", left.len(), right.len());
    }

    let result = OverlapResult::compute(left, right);

    match format {
        OutputFormat::Text => print_text_result(&result),
        OutputFormat::Json => print_json_result(&result)?,
        OutputFormat::Fasta => print_fasta_record("merged", result.merged.as_str()),
    }

    Ok(())
}

fn print_text_result(result: &OverlapResult) {
    println!("Overlap Results");
    println!("{}", "=".repeat(60));
    println!("  Left:  {} ({} bp)", result.left, result.left.len());
    println!("  Right: {} ({} bp)", result.right, result.right.len());
    println!("  Left -> Right overlap: {}", result.forward);
    println!("  Right -> Left overlap: {}", result.reverse);
    println!(
        "  Merged: {} ({} bp)",
        result.merged,
        result.merged.len()
    );
}

fn print_json_result(result: &OverlapResult) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "left": result.left,
        "right": result.right,
        "overlap": result.forward,
        "reverse_overlap": result.reverse,
        "merged": {
            "sequence": result.merged,
            "length": result.merged.len(),
        },
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
