//! Quadratic-family comparison sorts.
//!
//! ## Purpose
//!
//! This module implements the four in-place comparison sorts with O(1)
//! auxiliary space and simple loop structure: bubble, selection,
//! insertion, and shell sort.
//!
//! ## Design notes
//!
//! * **In-place**: Elements are only repositioned, never copied out.
//! * **Early exit**: Bubble sort stops after the first pass that performs
//!   no swap.
//! * **Gap sequence**: Shell sort halves the gap each round (n/2, n/4,
//!   ..., 1), running a gapped insertion sort per gap.
//!
//! ## Key concepts
//!
//! * **Stability**: Bubble and insertion sort are stable (strict
//!   comparisons never reorder equal elements); selection and shell sort
//!   are not.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input.
//! * Empty and single-element slices return immediately.
//!
//! ## Non-goals
//!
//! * This module does not implement the recursive or keyed sorts.

// ============================================================================
// Bubble Sort
// ============================================================================

/// Bubble sort: repeatedly compares adjacent elements and swaps them
/// until the slice is ordered, stopping early when a full pass makes no
/// swap.
///
/// Time: best O(n), average O(n^2), worst O(n^2). Space: O(1). Stable.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    if n <= 1 {
        return;
    }

    // step through the slice for multiple passes until sorted
    for step in 0..n - 1 {
        let mut swapped = false;

        for j in 0..n - step - 1 {
            // swap so the smaller element ends up on the left
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }

        // the slice is already sorted if nothing was swapped
        if !swapped {
            break;
        }
    }
}

// ============================================================================
// Selection Sort
// ============================================================================

/// Selection sort: selects the smallest element of the unsorted suffix
/// each pass and moves it to the front of that suffix.
///
/// Time: O(n^2) in all cases. Space: O(1). Not stable.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    if n <= 1 {
        return;
    }

    for step in 0..n - 1 {
        let mut min_index = step;

        // find the smallest element of the unsorted suffix
        for j in step + 1..n {
            if items[j] < items[min_index] {
                min_index = j;
            }
        }

        items.swap(step, min_index);
    }
}

// ============================================================================
// Insertion Sort
// ============================================================================

/// Insertion sort: grows a sorted prefix by shifting each new element's
/// strictly-greater predecessors right until its slot is found.
///
/// Time: best O(n), average O(n^2), worst O(n^2). Space: O(1). Stable.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for step in 1..items.len() {
        let mut j = step;

        // shift predecessors right while strictly greater than the key
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

// ============================================================================
// Shell Sort
// ============================================================================

/// Shell sort: gapped insertion sort with the gap sequence n/2, n/4,
/// ..., 1, sorting far-apart elements first and shrinking the interval.
///
/// Time: best O(n log n), average O(n log n), worst O(n^2). Space: O(1).
/// Not stable.
pub fn shell_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();

    // start with a big gap, then halve it every round
    let mut gap = n / 2;
    while gap > 0 {
        // gapped insertion sort for this gap size
        for i in gap..n {
            let mut j = i;

            // shift earlier gap-sorted elements up until the slot for
            // items[i] is found
            while j >= gap && items[j - gap] > items[j] {
                items.swap(j - gap, j);
                j -= gap;
            }
        }

        gap /= 2;
    }
}
