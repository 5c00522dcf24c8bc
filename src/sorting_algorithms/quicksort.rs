use log::debug;

use std::iter::FusedIterator;

use crate::step::{Role, Run, StepEvent, StepKind};

/// In-place quick sort using a Lomuto partition around the last element.
pub fn quick_sort(values: &mut [i32]) {
    if values.len() > 1 {
        let high = values.len() - 1;
        quick_sort_helper(values, 0, high);
    }
}

fn quick_sort_helper(values: &mut [i32], mut low: usize, mut high: usize) {
    // recurse into the smaller side and loop on the larger one so the
    // stack stays O(log n) even on sorted input
    while low < high {
        let pi = partition(values, low, high);
        if pi - low < high - pi {
            if pi > low {
                quick_sort_helper(values, low, pi - 1);
            }
            low = pi + 1;
        } else {
            if pi < high {
                quick_sort_helper(values, pi + 1, high);
            }
            high = pi - 1;
        }
    }
}

/// Partition `values[low..=high]` and return the final index of the pivot.
fn partition(values: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = values[high];
    let mut store = low;
    for j in low..high {
        if values[j] <= pivot {
            values.swap(store, j);
            store += 1;
        }
    }
    values.swap(store, high);
    store
}

struct Partition {
    low: usize,
    high: usize,
    pivot: i32,
    /// Next slot for an element `<= pivot`.
    store: usize,
    j: usize,
}

/// Resumable quick sort emitting one step per partition swap and one for
/// each pivot placement.
pub struct QuickSort<'a> {
    values: &'a mut [i32],
    ranges: Vec<(usize, usize)>,
    active: Option<Partition>,
    done: bool,
}

impl<'a> QuickSort<'a> {
    pub fn new(values: &'a mut [i32]) -> Self {
        let len = values.len();
        let done = len < 2;
        let ranges = if done { Vec::new() } else { vec![(0, len - 1)] };
        QuickSort {
            values,
            ranges,
            active: None,
            done,
        }
    }
}

impl Iterator for QuickSort<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        loop {
            if let Some(p) = &mut self.active {
                while p.j < p.high {
                    let j = p.j;
                    p.j += 1;
                    if self.values[j] <= p.pivot {
                        let i = p.store;
                        p.store += 1;
                        self.values.swap(i, j);
                        return Some(StepEvent::new(
                            StepKind::Swap { a: i, b: j },
                            vec![(i, Role::Active), (j, Role::Comparison)],
                        ));
                    }
                }

                let (low, high, store) = (p.low, p.high, p.store);
                self.active = None;
                self.values.swap(store, high);
                // left range is handled before right, as in the recursive form
                if store + 1 < high {
                    self.ranges.push((store + 1, high));
                }
                if store > low + 1 {
                    self.ranges.push((low, store - 1));
                }
                return Some(StepEvent::new(
                    StepKind::PivotPlaced { index: store },
                    vec![(store, Role::Pivot), (high, Role::Comparison)],
                ));
            }

            match self.ranges.pop() {
                None => {
                    self.done = true;
                    return None;
                }
                Some((low, high)) => {
                    debug!("partitioning [{}, {}]", low, high);
                    self.active = Some(Partition {
                        low,
                        high,
                        pivot: self.values[high],
                        store: low,
                        j: low,
                    });
                }
            }
        }
    }
}

impl FusedIterator for QuickSort<'_> {}

impl Run for QuickSort<'_> {
    fn values(&self) -> &[i32] {
        &*self.values
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::drain;

    #[test]
    fn sorts_example_with_duplicates() {
        let mut values = vec![5, 3, 8, 3, 1];
        quick_sort(&mut values);
        assert_eq!(values, vec![1, 3, 3, 5, 8]);
    }

    #[test]
    fn sorted_input_does_not_blow_the_stack() {
        let mut values: Vec<i32> = (0..10_000).collect();
        quick_sort(&mut values);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn partition_steps_end_with_pivot_placement() {
        let mut values = vec![3, 1, 2];
        let mut run = QuickSort::new(&mut values);
        let steps: Vec<StepEvent> = run.by_ref().collect();
        // pivot 2: 3 stays, 1 swaps into slot 0, pivot lands at 1
        assert_eq!(steps[0].kind, StepKind::Swap { a: 0, b: 1 });
        assert_eq!(steps[1].kind, StepKind::PivotPlaced { index: 1 });
        assert_eq!(steps[1].role_at(1), Some(Role::Pivot));
        assert_eq!(steps.len(), 2);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn all_equal_values_terminate() {
        let mut values = vec![4; 50];
        let mut run = QuickSort::new(&mut values);
        assert!(drain(&mut run) > 0);
        assert!(run.is_done());
        assert_eq!(values, vec![4; 50]);
    }
}
