//! End-to-end assembly scenarios through the public library API.

use greedy_assembler::parsing::fasta::parse_fasta_reader;
use greedy_assembler::parsing::lines::parse_lines_text;
use greedy_assembler::{Assembler, AssemblerConfig, Fragment, FragmentError, TieBreak};

fn frags(seqs: &[&str]) -> Vec<Fragment> {
    seqs.iter().map(|s| Fragment::new(*s).unwrap()).collect()
}

/// Cut `genome` into reads of `read_len` starting every `step` bases
fn tile(genome: &str, read_len: usize, step: usize) -> Vec<Fragment> {
    let mut reads = Vec::new();
    let mut start = 0;
    loop {
        let end = (start + read_len).min(genome.len());
        reads.push(Fragment::new(&genome[start..end]).unwrap());
        if end == genome.len() {
            break;
        }
        start += step;
    }
    reads
}

#[test]
fn test_invalid_sequence_is_distinguishable() {
    let err = Fragment::new("GAXT").unwrap_err();
    assert!(matches!(err, FragmentError::InvalidSequence { .. }));
}

#[test]
fn test_three_fragment_chain_shrinks_one_per_step() {
    let mut assembler = Assembler::new(&frags(&["AAGCT", "CTTAG", "TAGCC"]));

    let mut sizes = vec![assembler.len()];
    while assembler.assemble_once() {
        sizes.push(assembler.len());
    }

    assert_eq!(sizes, vec![3, 2, 1]);
    assert_eq!(assembler.fragments(), frags(&["AAGCTTAGCC"]));
}

#[test]
fn test_tiled_genome_reassembles() {
    let genome = "ATGGCGTACGCTTAGCCGATCGTTAACGGCATCGATGCAGTCCTAGGACTTCAGGTACCATGA";
    let mut reads = tile(genome, 16, 5);
    reads.reverse();

    let mut assembler = Assembler::new(&reads);
    let merges = assembler.assemble_all();

    assert_eq!(merges, reads.len() - 1);
    assert_eq!(assembler.fragments(), frags(&[genome]));
}

#[test]
fn test_disconnected_islands_stay_separate() {
    // Two chains with no overlap between them
    let mut assembler = Assembler::new(&frags(&["AAAC", "AACGG", "TTTG", "TTGCC"]));
    assembler.assemble_all();

    let mut result: Vec<String> = assembler
        .fragments()
        .iter()
        .map(ToString::to_string)
        .collect();
    result.sort();
    assert_eq!(result, vec!["AAACGG", "TTTGCC"]);
}

#[test]
fn test_caller_collection_is_isolated() {
    let mut input = frags(&["AAGCT", "CTTAG", "TAGCC"]);
    let mut assembler = Assembler::new(&input);

    input[0] = Fragment::new("GGGGG").unwrap();
    input.truncate(1);

    assembler.assemble_all();
    assert_eq!(assembler.fragments(), frags(&["AAGCTTAGCC"]));
    assert_eq!(input, frags(&["GGGGG"]));
}

#[test]
fn test_terminal_state_is_fixed_point() {
    let mut assembler = Assembler::new(&frags(&["AAGCT", "CTTAG", "TAGCC", "GGGG"]));
    assembler.assemble_all();
    let settled = assembler.fragments();

    for _ in 0..3 {
        assert!(!assembler.assemble_once());
    }
    assert_eq!(assembler.fragments(), settled);
}

#[test]
fn test_tie_break_policies_are_deterministic() {
    let input = frags(&["ACGT", "GTAAAA", "GTC"]);

    for tie_break in [TieBreak::ShortestMerge, TieBreak::FirstFound] {
        let config = AssemblerConfig {
            tie_break,
            ..AssemblerConfig::default()
        };
        let runs: Vec<Vec<Fragment>> = (0..3)
            .map(|_| {
                let mut assembler = Assembler::with_config(&input, config.clone());
                assembler.assemble_all();
                assembler.into_fragments()
            })
            .collect();
        assert!(runs.windows(2).all(|w| w[0] == w[1]));
    }
}

#[test]
fn test_loaded_fasta_assembles() {
    let fasta: &[u8] = b">r1\nTAGCC\n>r2\naagct\n>r3\nCTT\nAG\n";
    let fragments = parse_fasta_reader(fasta).unwrap();

    let mut assembler = Assembler::new(&fragments);
    assembler.assemble_all();
    assert_eq!(assembler.fragments(), frags(&["AAGCTTAGCC"]));
}

#[test]
fn test_loaded_lines_assemble() {
    let fragments = parse_lines_text("# chain\nCAA\nAAG\n").unwrap();

    let mut assembler = Assembler::new(&fragments);
    assert!(assembler.assemble_once());
    assert_eq!(assembler.fragments(), frags(&["CAAG"]));
}
