//! Step events and the resumable run contract shared by every algorithm.
//!
//! A run is a pull-based state machine: each call to [`Iterator::next`]
//! performs exactly one observable mutation (or examination) of the borrowed
//! sequence and describes it as a [`StepEvent`]. `None` means the run is done,
//! and every later call returns `None` as well.

use std::iter::FusedIterator;

/// How a touched position should be highlighted by a renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    Active,
    Comparison,
    Written,
    Counted,
    Placed,
    Final,
    Examined,
    Found,
    Pivot,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepKind {
    /// Two positions exchanged their values.
    Swap { a: usize, b: usize },
    /// Merge sort wrote `value` into position `index`.
    Write { index: usize, value: i32 },
    /// Radix histogram bucket `digit` was incremented for the element at `index`.
    Count { index: usize, digit: usize },
    /// Radix prefix sum updated for bucket `digit`.
    Prefix { digit: usize },
    /// Radix element at `index` was placed into output slot `slot`.
    Buffer { index: usize, slot: usize },
    /// Radix output buffer copied back into position `index`.
    CopyBack { index: usize },
    /// Quick sort moved the pivot into its final slot.
    PivotPlaced { index: usize },
    Examine { index: usize },
    Found { index: usize },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StepEvent {
    pub kind: StepKind,
    pub marks: Vec<(usize, Role)>,
}

impl StepEvent {
    pub fn new(kind: StepKind, marks: Vec<(usize, Role)>) -> Self {
        Self { kind, marks }
    }

    pub fn role_at(&self, index: usize) -> Option<Role> {
        self.marks
            .iter()
            .find(|(idx, _)| *idx == index)
            .map(|(_, role)| *role)
    }
}

/// A resumable execution of one algorithm over one borrowed sequence.
///
/// Runs are single-consumer; abandoning one is just dropping it.
pub trait Run: FusedIterator<Item = StepEvent> {
    /// The sequence as it stands between two steps.
    fn values(&self) -> &[i32];

    fn is_done(&self) -> bool;

    /// Search result, for runs that search. Sorting runs return `None`.
    fn found(&self) -> Option<usize> {
        None
    }
}

/// Drives a run to exhaustion and returns how many steps it emitted.
pub fn drain<R: Run + ?Sized>(run: &mut R) -> usize {
    let mut steps = 0;
    while run.next().is_some() {
        steps += 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_lookup_finds_marked_positions() {
        let event = StepEvent::new(
            StepKind::Swap { a: 2, b: 3 },
            vec![(2, Role::Active), (3, Role::Comparison)],
        );
        assert_eq!(event.role_at(2), Some(Role::Active));
        assert_eq!(event.role_at(3), Some(Role::Comparison));
        assert_eq!(event.role_at(4), None);
    }

    fn assert_fused<R: Run>(mut run: R) {
        while run.next().is_some() {}
        assert!(run.is_done());
        for _ in 0..3 {
            assert!(run.next().is_none());
        }
    }

    #[test]
    fn runs_stay_done_after_exhaustion() {
        use crate::searching_algorithms::LinearSearch;
        use crate::sorting_algorithms::{BubbleSort, MergeSort, QuickSort, RadixSort};

        let input = [5, 3, 8, 3, 1];
        assert_fused(BubbleSort::new(&mut input.clone()));
        assert_fused(MergeSort::new(&mut input.clone()));
        assert_fused(QuickSort::new(&mut input.clone()));
        assert_fused(RadixSort::new(&mut input.clone()).unwrap());
        assert_fused(LinearSearch::new(&input, 8));
        assert_fused(LinearSearch::new(&input, 4));
    }
}
