use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::assembly::assembler::AssemblerConfig;
use crate::core::fragment::Fragment;

/// How to choose between candidate merges that share the largest overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Prefer the shorter merged fragment, then the lexicographically smaller
    /// merged sequence, then the first pair in scan order
    #[default]
    ShortestMerge,
    /// Keep the first pair in scan order that reached the largest overlap
    FirstFound,
}

/// A merge selected from the working set, identified by position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeCandidate {
    /// Position of the fragment that ends up on the left of the merge
    pub left: usize,
    /// Position of the fragment that ends up on the right of the merge
    pub right: usize,
    /// Suffix/prefix overlap between the two fragments
    pub overlap: usize,
    /// Length of the fragment the merge would produce
    pub merged_len: usize,
}

impl MergeCandidate {
    fn new(fragments: &[Fragment], left: usize, right: usize, overlap: usize) -> Self {
        Self {
            left,
            right,
            overlap,
            merged_len: fragments[left].len() + fragments[right].len() - overlap,
        }
    }

    /// The merged sequence as bytes, without building the fragment
    fn merged_bytes<'a>(&self, fragments: &'a [Fragment]) -> impl Iterator<Item = u8> + 'a {
        let left = fragments[self.left].as_str();
        let right = &fragments[self.right].as_str()[self.overlap..];
        left.bytes().chain(right.bytes())
    }
}

impl TieBreak {
    /// Whether `candidate` should replace `current` as the best merge so far.
    ///
    /// A larger overlap always wins. Candidates are visited in scan order, so
    /// returning false on a full tie keeps the earlier pair.
    fn prefers(
        self,
        candidate: &MergeCandidate,
        current: &MergeCandidate,
        fragments: &[Fragment],
    ) -> bool {
        if candidate.overlap != current.overlap {
            return candidate.overlap > current.overlap;
        }

        match self {
            Self::FirstFound => false,
            Self::ShortestMerge => match candidate.merged_len.cmp(&current.merged_len) {
                std::cmp::Ordering::Less => true,
                std::cmp::Ordering::Greater => false,
                std::cmp::Ordering::Equal => candidate
                    .merged_bytes(fragments)
                    .lt(current.merged_bytes(fragments)),
            },
        }
    }
}

/// Find the best merge among all ordered pairs of distinct positions.
///
/// Both orientations of every pair are scored since overlap is directional.
/// Pairs whose overlap is below `config.min_overlap` (never less than 1) are
/// not eligible. Returns `None` when fewer than two fragments remain or no
/// pair is eligible.
#[must_use]
pub fn select_best(fragments: &[Fragment], config: &AssemblerConfig) -> Option<MergeCandidate> {
    let min_overlap = config.effective_min_overlap();
    let mut best: Option<MergeCandidate> = None;

    for (left, a) in fragments.iter().enumerate() {
        for (right, b) in fragments.iter().enumerate() {
            if left == right {
                continue;
            }

            let overlap = a.overlap_with(b);
            if overlap < min_overlap {
                continue;
            }

            let candidate = MergeCandidate::new(fragments, left, right, overlap);
            let better = match &best {
                None => true,
                Some(current) => config.tie_break.prefers(&candidate, current, fragments),
            };

            if better {
                trace!(
                    left,
                    right,
                    overlap,
                    merged_len = candidate.merged_len,
                    "New best merge candidate"
                );
                best = Some(candidate);
            }
        }
    }

    best
}
