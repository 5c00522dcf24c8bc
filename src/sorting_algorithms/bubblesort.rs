use std::iter::FusedIterator;

use crate::step::{Role, Run, StepEvent, StepKind};

/// Sorts `values` in place with bubble sort, stopping early after a pass
/// without swaps.
pub fn bubble_sort(values: &mut [i32]) {
    let n = values.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Resumable bubble sort emitting one step per swap.
pub struct BubbleSort<'a> {
    values: &'a mut [i32],
    pass: usize,
    j: usize,
    swapped: bool,
    done: bool,
}

impl<'a> BubbleSort<'a> {
    pub fn new(values: &'a mut [i32]) -> Self {
        let done = values.len() < 2;
        BubbleSort {
            values,
            pass: 0,
            j: 0,
            swapped: false,
            done,
        }
    }
}

impl Iterator for BubbleSort<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        let n = self.values.len();
        loop {
            // the last `pass` elements are already in place
            if self.j + self.pass + 1 < n {
                let j = self.j;
                self.j += 1;
                if self.values[j] > self.values[j + 1] {
                    self.values.swap(j, j + 1);
                    self.swapped = true;
                    return Some(StepEvent::new(
                        StepKind::Swap { a: j, b: j + 1 },
                        vec![(j, Role::Active), (j + 1, Role::Comparison)],
                    ));
                }
            } else {
                if !self.swapped || self.pass + 2 >= n {
                    self.done = true;
                    return None;
                }
                self.pass += 1;
                self.j = 0;
                self.swapped = false;
            }
        }
    }
}

impl FusedIterator for BubbleSort<'_> {}

impl Run for BubbleSort<'_> {
    fn values(&self) -> &[i32] {
        &*self.values
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
