use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Nucleotide;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    #[error("Invalid nucleotide sequence: '{symbol}' at position {position} is not one of G, A, C, T")]
    InvalidSequence { position: usize, symbol: char },
}

/// An immutable DNA fragment over the alphabet {G, A, C, T}
///
/// Equality is value equality on the sequence. Fragments produced by
/// [`Fragment::merged_with`] carry no reference to their parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fragment {
    sequence: String,
}

impl Fragment {
    /// Create a fragment from a sequence of nucleotides.
    ///
    /// The empty sequence is a valid, zero-length fragment.
    ///
    /// # Errors
    ///
    /// Returns `FragmentError::InvalidSequence` naming the first symbol that is
    /// not an uppercase G, A, C or T.
    pub fn new(sequence: impl Into<String>) -> Result<Self, FragmentError> {
        let sequence = sequence.into();

        for (position, symbol) in sequence.chars().enumerate() {
            if Nucleotide::try_from(symbol).is_err() {
                return Err(FragmentError::InvalidSequence { position, symbol });
            }
        }

        Ok(Self { sequence })
    }

    /// Number of nucleotides in this fragment
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The sequence exactly as it was constructed
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    pub fn nucleotides(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        // Validated at construction, so every byte maps to a nucleotide
        self.sequence.bytes().filter_map(Nucleotide::from_byte)
    }

    /// Lowercase hex MD5 of the sequence (SAM `M5` convention)
    #[must_use]
    pub fn md5(&self) -> String {
        format!("{:x}", md5::compute(self.sequence.as_bytes()))
    }

    /// Length of the longest suffix of `self` that is also a prefix of `other`.
    ///
    /// Returns 0 when no overlap of length one or more exists. The relation is
    /// directional: `CAA` overlaps `AAG` by 2, while `AAG` overlaps `CAA` by 0.
    /// The longest overlap always wins, so `CAA`/`AAG` is 2 even though a
    /// single `A` also matches.
    #[must_use]
    pub fn overlap_with(&self, other: &Fragment) -> usize {
        let left = self.sequence.as_bytes();
        let right = other.sequence.as_bytes();
        let max = left.len().min(right.len());

        (1..=max)
            .rev()
            .find(|&k| left[left.len() - k..] == right[..k])
            .unwrap_or(0)
    }

    /// Merge `other` onto the right end of `self`, overlapping them as much as
    /// possible. Neither input is modified.
    ///
    /// With no overlap the result is plain concatenation.
    #[must_use]
    pub fn merged_with(&self, other: &Fragment) -> Fragment {
        let overlap = self.overlap_with(other);

        let mut sequence = String::with_capacity(self.len() + other.len() - overlap);
        sequence.push_str(&self.sequence);
        sequence.push_str(&other.sequence[overlap..]);

        Fragment { sequence }
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sequence)
    }
}

impl std::str::FromStr for Fragment {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Fragment {
    type Error = FragmentError;

    fn try_from(sequence: String) -> Result<Self, Self::Error> {
        Self::new(sequence)
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.sequence
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.sequence
    }
}
