//! Algorithm catalog and contract metadata.
//!
//! ## Purpose
//!
//! This module names the ten sorting algorithms and exposes each one's
//! observable contract — stability, time complexity, and auxiliary space
//! — as queryable metadata. The contract is part of the API: callers
//! pick an algorithm *because* of these properties.
//!
//! ## Design notes
//!
//! * **Precomputed contracts**: Each variant maps to a constant
//!   [`SortContract`]; metadata queries are table lookups, never
//!   recomputed.
//! * **Growth classes**: Complexities are expressed as a closed enum of
//!   growth classes rather than strings, so callers can match on them.
//!
//! # Contract table
//!
//! | Algorithm | Best / Avg / Worst time | Space    | Stable |
//! |-----------|-------------------------|----------|--------|
//! | Bubble    | n / n^2 / n^2           | O(1)     | yes    |
//! | Selection | n^2 / n^2 / n^2         | O(1)     | no     |
//! | Insertion | n / n^2 / n^2           | O(1)     | yes    |
//! | Shell     | n log n / n log n / n^2 | O(1)     | no     |
//! | Merge     | n log n (all)           | O(n)     | yes    |
//! | Quick     | n log n / n log n / n^2 | O(log n) | no     |
//! | Heap      | n log n (all)           | O(1)     | no     |
//! | Counting  | n+k (all)               | O(k)     | yes    |
//! | Radix     | nk (all)                | O(n+k)   | yes    |
//! | Bucket    | n+k / n+k / n^2         | O(n)     | yes    |
//!
//! ## Invariants
//!
//! * Stability flags and growth classes agree with the implementations.
//!
//! ## Non-goals
//!
//! * This module does not dispatch or execute algorithms (the engine
//!   owns dispatch).

// ============================================================================
// Growth Classes
// ============================================================================

/// Asymptotic growth class of a time or space bound.
///
/// `k` is the key range (counting), digit count (radix), or bucket count
/// (bucket sort), depending on the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// O(1)
    Constant,
    /// O(log n)
    Logarithmic,
    /// O(n)
    Linear,
    /// O(n log n)
    Linearithmic,
    /// O(n^2)
    Quadratic,
    /// O(k)
    Keys,
    /// O(n + k)
    LinearPlusKeys,
    /// O(nk)
    LinearTimesDigits,
}

impl Growth {
    /// Conventional big-O notation for this growth class.
    pub fn notation(&self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n^2)",
            Self::Keys => "O(k)",
            Self::LinearPlusKeys => "O(n+k)",
            Self::LinearTimesDigits => "O(nk)",
        }
    }
}

/// Best, average, and worst-case time bounds of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComplexity {
    /// Best-case growth.
    pub best: Growth,
    /// Average-case growth.
    pub average: Growth,
    /// Worst-case growth.
    pub worst: Growth,
}

// ============================================================================
// Contracts
// ============================================================================

/// The observable contract of one sorting algorithm.
struct SortContract {
    /// Whether equal keys retain their relative input order.
    stable: bool,

    /// Time bounds.
    time: TimeComplexity,

    /// Auxiliary space bound.
    space: Growth,
}

const BUBBLE_CONTRACT: SortContract = SortContract {
    stable: true,
    time: TimeComplexity {
        best: Growth::Linear,
        average: Growth::Quadratic,
        worst: Growth::Quadratic,
    },
    space: Growth::Constant,
};

const SELECTION_CONTRACT: SortContract = SortContract {
    stable: false,
    time: TimeComplexity {
        best: Growth::Quadratic,
        average: Growth::Quadratic,
        worst: Growth::Quadratic,
    },
    space: Growth::Constant,
};

const INSERTION_CONTRACT: SortContract = SortContract {
    stable: true,
    time: TimeComplexity {
        best: Growth::Linear,
        average: Growth::Quadratic,
        worst: Growth::Quadratic,
    },
    space: Growth::Constant,
};

const SHELL_CONTRACT: SortContract = SortContract {
    stable: false,
    time: TimeComplexity {
        best: Growth::Linearithmic,
        average: Growth::Linearithmic,
        worst: Growth::Quadratic,
    },
    space: Growth::Constant,
};

const MERGE_CONTRACT: SortContract = SortContract {
    stable: true,
    time: TimeComplexity {
        best: Growth::Linearithmic,
        average: Growth::Linearithmic,
        worst: Growth::Linearithmic,
    },
    space: Growth::Linear,
};

const QUICK_CONTRACT: SortContract = SortContract {
    stable: false,
    time: TimeComplexity {
        best: Growth::Linearithmic,
        average: Growth::Linearithmic,
        worst: Growth::Quadratic,
    },
    space: Growth::Logarithmic,
};

const HEAP_CONTRACT: SortContract = SortContract {
    stable: false,
    time: TimeComplexity {
        best: Growth::Linearithmic,
        average: Growth::Linearithmic,
        worst: Growth::Linearithmic,
    },
    space: Growth::Constant,
};

const COUNTING_CONTRACT: SortContract = SortContract {
    stable: true,
    time: TimeComplexity {
        best: Growth::LinearPlusKeys,
        average: Growth::LinearPlusKeys,
        worst: Growth::LinearPlusKeys,
    },
    space: Growth::Keys,
};

const RADIX_CONTRACT: SortContract = SortContract {
    stable: true,
    time: TimeComplexity {
        best: Growth::LinearTimesDigits,
        average: Growth::LinearTimesDigits,
        worst: Growth::LinearTimesDigits,
    },
    space: Growth::LinearPlusKeys,
};

const BUCKET_CONTRACT: SortContract = SortContract {
    stable: true,
    time: TimeComplexity {
        best: Growth::LinearPlusKeys,
        average: Growth::LinearPlusKeys,
        worst: Growth::Quadratic,
    },
    space: Growth::Linear,
};

// ============================================================================
// Algorithm Catalog
// ============================================================================

/// The sorting algorithms implemented by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAlgorithm {
    /// Adjacent-swap passes with early exit.
    Bubble,

    /// Global minimum of the unsorted suffix each pass.
    Selection,

    /// Sorted-prefix growth by predecessor shifting.
    Insertion,

    /// Gapped insertion sort with halving gaps.
    Shell,

    /// Recursive halving with a stable merge.
    Merge,

    /// Lomuto partition around the last element - default.
    #[default]
    Quick,

    /// Max-heap selection from the root.
    Heap,

    /// Occurrence counting over an integer key range.
    Counting,

    /// Stable counting passes per decimal digit.
    Radix,

    /// Range-partitioned buckets, insertion-sorted and concatenated.
    Bucket,
}

impl SortAlgorithm {
    fn contract(&self) -> &'static SortContract {
        match self {
            Self::Bubble => &BUBBLE_CONTRACT,
            Self::Selection => &SELECTION_CONTRACT,
            Self::Insertion => &INSERTION_CONTRACT,
            Self::Shell => &SHELL_CONTRACT,
            Self::Merge => &MERGE_CONTRACT,
            Self::Quick => &QUICK_CONTRACT,
            Self::Heap => &HEAP_CONTRACT,
            Self::Counting => &COUNTING_CONTRACT,
            Self::Radix => &RADIX_CONTRACT,
            Self::Bucket => &BUCKET_CONTRACT,
        }
    }

    /// Human-readable algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Shell => "shell",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Bucket => "bucket",
        }
    }

    /// Whether equal keys retain their relative input order.
    pub fn is_stable(&self) -> bool {
        self.contract().stable
    }

    /// Best, average, and worst-case time bounds.
    pub fn time_complexity(&self) -> TimeComplexity {
        self.contract().time
    }

    /// Auxiliary space bound.
    pub fn space_complexity(&self) -> Growth {
        self.contract().space
    }
}
