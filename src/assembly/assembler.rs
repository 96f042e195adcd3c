use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::assembly::selection::{select_best, MergeCandidate, TieBreak};
use crate::core::fragment::Fragment;

/// Default minimum overlap a merge must have
pub const DEFAULT_MIN_OVERLAP: usize = 1;

/// Configuration for the assembler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblerConfig {
    /// Smallest overlap that allows two fragments to merge (values below 1 are treated as 1)
    pub min_overlap: usize,
    /// Rule for choosing between merges with equal overlap
    pub tie_break: TieBreak,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            min_overlap: DEFAULT_MIN_OVERLAP,
            tie_break: TieBreak::default(),
        }
    }
}

impl AssemblerConfig {
    /// Minimum overlap actually enforced; merging with no overlap is never allowed
    #[must_use]
    pub fn effective_min_overlap(&self) -> usize {
        self.min_overlap.max(1)
    }
}

/// Greedy overlap assembler
///
/// Owns a working set of fragments copied from the caller. Each step merges
/// the pair with the largest suffix/prefix overlap, so the working set shrinks
/// by one per successful step until no eligible pair remains.
#[derive(Debug, Clone)]
pub struct Assembler {
    fragments: Vec<Fragment>,
    config: AssemblerConfig,
}

impl Assembler {
    /// Create an assembler with default configuration.
    ///
    /// The fragments are copied; the caller's collection is never touched.
    #[must_use]
    pub fn new(fragments: &[Fragment]) -> Self {
        Self::with_config(fragments, AssemblerConfig::default())
    }

    /// Create an assembler with custom configuration
    #[must_use]
    pub fn with_config(fragments: &[Fragment], config: AssemblerConfig) -> Self {
        Self {
            fragments: fragments.to_vec(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// A copy of the current working set
    #[must_use]
    pub fn fragments(&self) -> Vec<Fragment> {
        self.fragments.clone()
    }

    /// Consume the assembler and return the working set
    #[must_use]
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    /// Number of fragments in the working set
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The merge the next call to [`Assembler::assemble_once`] would perform
    #[must_use]
    pub fn best_merge(&self) -> Option<MergeCandidate> {
        select_best(&self.fragments, &self.config)
    }

    /// Perform at most one merge, returning true iff a merge happened.
    ///
    /// The two merged fragments are removed by position, so duplicate-valued
    /// fragments elsewhere in the working set are never affected. The merged
    /// fragment is appended to the end of the working set.
    pub fn assemble_once(&mut self) -> bool {
        let Some(candidate) = self.best_merge() else {
            return false;
        };

        let merged = self.fragments[candidate.left].merged_with(&self.fragments[candidate.right]);

        debug!(
            left = candidate.left,
            right = candidate.right,
            overlap = candidate.overlap,
            merged_len = merged.len(),
            "Merging fragments"
        );

        // Remove the higher position first so the lower one stays valid
        let (high, low) = if candidate.left > candidate.right {
            (candidate.left, candidate.right)
        } else {
            (candidate.right, candidate.left)
        };
        self.fragments.remove(high);
        self.fragments.remove(low);
        self.fragments.push(merged);

        true
    }

    /// Merge until no eligible pair remains. Returns the number of merges.
    ///
    /// Once this returns, further calls to [`Assembler::assemble_once`] return
    /// false and leave the working set unchanged.
    pub fn assemble_all(&mut self) -> usize {
        let mut merges = 0;
        while self.assemble_once() {
            merges += 1;
        }

        info!(
            merges,
            remaining = self.fragments.len(),
            "Assembly complete"
        );

        merges
    }
}
