use std::path::Path;

use crate::core::fragment::Fragment;
use crate::parsing::ParseError;
use crate::utils::validation::{check_fragment_limit, is_blank_or_comment};

/// Parse a text file with one sequence per line
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_lines_file(path: &Path) -> Result<Vec<Fragment>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_lines_text(&content)
}

/// Parse text with one sequence per line.
///
/// Blank lines and lines starting with `#` are skipped. Surrounding whitespace
/// is trimmed but case is preserved, so lowercase bases are rejected.
///
/// # Errors
///
/// Returns `ParseError::InvalidFragment` for a line with a symbol outside
/// G, A, C, T, `ParseError::InvalidFormat` if no sequences are found, or
/// `ParseError::TooManyFragments` if the limit is exceeded.
pub fn parse_lines_text(text: &str) -> Result<Vec<Fragment>, ParseError> {
    let mut fragments = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if is_blank_or_comment(line) {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fragment = Fragment::new(line.trim()).map_err(|source| ParseError::InvalidFragment {
            record: line_num,
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
            "No sequences found in input".to_string(),
        ));
    }

    Ok(fragments)
}
