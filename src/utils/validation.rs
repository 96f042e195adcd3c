//! Centralized validation and helper functions.

/// Maximum number of fragments allowed in a single input (DOS protection).
///
/// Each assembly step scores every ordered pair, so the working set must stay
/// bounded.
pub const MAX_FRAGMENTS: usize = 100_000;

/// Check if adding another fragment would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new fragment.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```
/// use greedy_assembler::utils::validation::{check_fragment_limit, MAX_FRAGMENTS};
///
/// assert!(check_fragment_limit(0).is_none());
/// assert!(check_fragment_limit(MAX_FRAGMENTS).is_some());
/// ```
#[must_use]
pub fn check_fragment_limit(count: usize) -> Option<String> {
    if count >= MAX_FRAGMENTS {
        Some(format!(
            "Too many fragments: adding another would exceed maximum of {MAX_FRAGMENTS}"
        ))
    } else {
        None
    }
}

/// Whether a line of line-oriented input carries no sequence
#[must_use]
pub fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}
