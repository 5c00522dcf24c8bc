use std::iter::FusedIterator;

use crate::step::{Role, Run, StepEvent, StepKind};

/// Conventional "absent" index for callers that want a plain integer.
pub const NOT_FOUND: isize = -1;

/// Index of the first element equal to `target`, scanning left to right.
pub fn linear_search(values: &[i32], target: i32) -> Option<usize> {
    values.iter().position(|v| *v == target)
}

/// Like [`linear_search`], but reports a miss as [`NOT_FOUND`].
pub fn search_index(values: &[i32], target: i32) -> isize {
    linear_search(values, target).map_or(NOT_FOUND, |idx| idx as isize)
}

/// Resumable linear search. Emits one step per examined position and a final
/// `Found` step on a match. Never mutates the sequence.
pub struct LinearSearch<'a> {
    values: &'a [i32],
    target: i32,
    next_index: usize,
    found: Option<usize>,
    reported: bool,
    done: bool,
}

impl<'a> LinearSearch<'a> {
    pub fn new(values: &'a [i32], target: i32) -> Self {
        LinearSearch {
            values,
            target,
            next_index: 0,
            found: None,
            reported: false,
            done: values.is_empty(),
        }
    }

    pub fn target(&self) -> i32 {
        self.target
    }
}

impl Iterator for LinearSearch<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        if let Some(index) = self.found {
            if !self.reported {
                self.reported = true;
                return Some(StepEvent::new(
                    StepKind::Found { index },
                    vec![(index, Role::Found)],
                ));
            }
            self.done = true;
            return None;
        }
        if self.next_index >= self.values.len() {
            self.done = true;
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;
        if self.values[index] == self.target {
            self.found = Some(index);
        }
        Some(StepEvent::new(
            StepKind::Examine { index },
            vec![(index, Role::Examined)],
        ))
    }
}

impl FusedIterator for LinearSearch<'_> {}

impl Run for LinearSearch<'_> {
    fn values(&self) -> &[i32] {
        self.values
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn found(&self) -> Option<usize> {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::drain;

    #[test]
    fn finds_first_occurrence() {
        let values = [4, 2, 7, 1, 9];
        assert_eq!(linear_search(&values, 7), Some(2));
        assert_eq!(linear_search(&values, 6), None);
        assert_eq!(search_index(&values, 6), NOT_FOUND);
        assert_eq!(linear_search(&[1, 5, 5], 5), Some(1));
    }

    #[test]
    fn run_examines_up_to_the_match_then_reports_found() {
        let values = [4, 2, 7, 1, 9];
        let mut run = LinearSearch::new(&values, 7);
        let steps: Vec<StepEvent> = run.by_ref().collect();
        let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Examine { index: 0 },
                StepKind::Examine { index: 1 },
                StepKind::Examine { index: 2 },
                StepKind::Found { index: 2 },
            ]
        );
        assert_eq!(run.found(), Some(2));
        assert!(run.is_done());
    }

    #[test]
    fn run_miss_examines_everything() {
        let values = [4, 2, 7, 1, 9];
        let mut run = LinearSearch::new(&values, 6);
        assert_eq!(drain(&mut run), values.len());
        assert_eq!(run.found(), None);
    }
}
