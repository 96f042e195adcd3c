use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::assembly::{Assembler, AssemblerConfig, TieBreak, DEFAULT_MIN_OVERLAP};
use crate::cli::{print_fasta_record, OutputFormat};
use crate::core::fragment::Fragment;
use crate::parsing;

#[derive(Args)]
pub struct AssembleArgs {
    /// Input file (FASTA, gzipped FASTA, or one sequence per line)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected by default)
    #[arg(long)]
    pub input_format: Option<InputFormat>,

    /// Minimum overlap required to merge two fragments
    #[arg(
        long,
        default_value_t = DEFAULT_MIN_OVERLAP,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub min_overlap: usize,

    /// How to choose between merges with the same overlap
    #[arg(long, value_enum, default_value = "shortest-merge")]
    pub tie_break: TieBreakArg,

    /// Stop after this many merges instead of running to completion
    #[arg(long)]
    pub max_steps: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum InputFormat {
    Fasta,
    Lines,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum TieBreakArg {
    /// Prefer the shorter merged fragment, then the lexicographically smaller one
    #[default]
    ShortestMerge,
    /// Keep the first pair found with the largest overlap
    FirstFound,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::ShortestMerge => TieBreak::ShortestMerge,
            TieBreakArg::FirstFound => TieBreak::FirstFound,
        }
    }
}

/// Execute assemble subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or contains an invalid sequence.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AssembleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let fragments = parse_input(&args)?;

    if verbose {
        eprintln!("Loaded {} fragments from input", fragments.len());
    }

    let config = AssemblerConfig {
        min_overlap: args.min_overlap,
        tie_break: args.tie_break.into(),
    };

    if verbose {
        eprintln!(
            "Minimum overlap: {}, tie-break: {:?}",
            config.min_overlap, config.tie_break
        );
    }

    let mut assembler = Assembler::with_config(&fragments, config);
    let merges = match args.max_steps {
        Some(limit) => run_steps(&mut assembler, limit),
        None => assembler.assemble_all(),
    };
    let contigs = assembler.into_fragments();

    match format {
        OutputFormat::Text => print_text_results(fragments.len(), merges, &contigs),
        OutputFormat::Json => print_json_results(fragments.len(), merges, &contigs)?,
        OutputFormat::Fasta => print_fasta_results(&contigs),
    }

    Ok(())
}

/// Perform at most `limit` merges, returning how many happened
fn run_steps(assembler: &mut Assembler, limit: usize) -> usize {
    let mut merges = 0;
    while merges < limit && assembler.assemble_once() {
        merges += 1;
    }
    merges
}

fn parse_input(args: &AssembleArgs) -> anyhow::Result<Vec<Fragment>> {
    use std::io::{self, Read};

    // Handle stdin
    if args.input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;

        let format = args
            .input_format
            .unwrap_or_else(|| detect_text_format(&buffer));
        let fragments = match format {
            InputFormat::Fasta => parsing::fasta::parse_fasta_reader(buffer.as_bytes()),
            InputFormat::Lines => parsing::lines::parse_lines_text(&buffer),
        };
        return fragments.context("Failed to load fragments from stdin");
    }

    // Auto-detect or use specified format
    let format = args
        .input_format
        .unwrap_or_else(|| detect_format(&args.input));

    let fragments = match format {
        InputFormat::Fasta => parsing::fasta::parse_fasta_file(&args.input),
        InputFormat::Lines => parsing::lines::parse_lines_file(&args.input),
    };
    fragments.with_context(|| format!("Failed to load fragments from {}", args.input.display()))
}

/// Detect input format from file extension
fn detect_format(path: &Path) -> InputFormat {
    if parsing::fasta::is_fasta_file(path) {
        InputFormat::Fasta
    } else {
        InputFormat::Lines
    }
}

/// Detect input format from content (FASTA starts with a '>' header)
fn detect_text_format(text: &str) -> InputFormat {
    if text.trim_start().starts_with('>') {
        InputFormat::Fasta
    } else {
        InputFormat::Lines
    }
}

fn print_text_results(input_count: usize, merges: usize, contigs: &[Fragment]) {
    println!("Assembly Results");
    println!("{}", "=".repeat(60));
    println!("  Input fragments: {input_count}");
    println!("  Merges performed: {merges}");
    println!("  Resulting fragments: {}", contigs.len());

    if let Some(longest) = contigs.iter().map(Fragment::len).max() {
        println!("  Longest fragment: {longest} bp");
    }

    println!();
    for contig in contigs {
        println!("{contig}");
    }
}

fn print_json_results(
    input_count: usize,
    merges: usize,
    contigs: &[Fragment],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input_fragments": input_count,
        "merges": merges,
        "fragments": contigs
            .iter()
            .map(|c| {
                serde_json::json!({
                    "sequence": c,
                    "length": c.len(),
                    "md5": c.md5(),
                })
            })
            .collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_fasta_results(contigs: &[Fragment]) {
    for (i, contig) in contigs.iter().enumerate() {
        print_fasta_record(&format!("contig_{}", i + 1), contig.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frags(seqs: &[&str]) -> Vec<Fragment> {
        seqs.iter().map(|s| Fragment::new(*s).unwrap()).collect()
    }

    #[test]
    fn test_detect_format() {
        assert!(matches!(
            detect_format(Path::new("reads.fa.gz")),
            InputFormat::Fasta
        ));
        assert!(matches!(
            detect_format(Path::new("reads.txt")),
            InputFormat::Lines
        ));
    }

    #[test]
    fn test_detect_text_format() {
        assert!(matches!(
            detect_text_format("\n>read1\nACGT\n"),
            InputFormat::Fasta
        ));
        assert!(matches!(detect_text_format("ACGT\n"), InputFormat::Lines));
    }

    #[test]
    fn test_run_steps_stops_at_limit() {
        let mut assembler = Assembler::new(&frags(&["AAGCT", "CTTAG", "TAGCC"]));
        assert_eq!(run_steps(&mut assembler, 1), 1);
        assert_eq!(assembler.len(), 2);

        // Stops early when nothing is left to merge
        assert_eq!(run_steps(&mut assembler, 10), 1);
        assert_eq!(assembler.len(), 1);
    }

    #[test]
    fn test_tie_break_arg_conversion() {
        assert_eq!(TieBreak::from(TieBreakArg::FirstFound), TieBreak::FirstFound);
        assert_eq!(
            TieBreak::from(TieBreakArg::default()),
            TieBreak::ShortestMerge
        );
    }
}
