//! Parser for FASTA files using noodles.
//!
//! Each record becomes one fragment. Multi-line records are joined, and
//! soft-masked (lowercase) bases are upper-cased before validation.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use tracing::warn;

use crate::core::fragment::Fragment;
use crate::parsing::ParseError;
use crate::utils::validation::check_fragment_limit;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a FASTA file into fragments, one per record.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFragment` if a record holds a symbol
/// outside G, A, C, T, `ParseError::InvalidFormat` if no sequences are found,
/// or `ParseError::TooManyFragments` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<Fragment>, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        parse_fasta_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_fasta_reader(BufReader::new(file))
    }
}

/// Parse FASTA records from any buffered reader.
///
/// Records with an empty sequence are skipped with a warning.
///
/// # Errors
///
/// See [`parse_fasta_file`].
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Vec<Fragment>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut fragments = Vec::new();

    for (i, result) in fasta_reader.records().enumerate() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Record numbers in errors are 1-based for user friendliness
        let record_num = i + 1;

        let sequence = record.sequence();
        if sequence.is_empty() {
            warn!(
                record = record_num,
                name = %String::from_utf8_lossy(record.name()),
                "Skipping FASTA record with empty sequence"
            );
            continue;
        }

        let uppercase: String = sequence
            .as_ref()
            .iter()
            .map(|b| char::from(b.to_ascii_uppercase()))
            .collect();

        let fragment = Fragment::new(uppercase).map_err(|source| ParseError::InvalidFragment {
            record: record_num,
            source,
        })?;

        // Check fragment limit for DOS protection
        if check_fragment_limit(fragments.len()).is_some() {
            return Err(ParseError::TooManyFragments(fragments.len()));
        }

        fragments.push(fragment);
    }

    if fragments.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(fragments)
}
