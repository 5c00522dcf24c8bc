use log::debug;

use std::iter::FusedIterator;

use crate::step::{Role, Run, StepEvent, StepKind};

/// Top-down merge sort. Stable, always O(n log n), O(n) scratch per merge.
pub fn merge_sort(values: &mut [i32]) {
    merge_sort_by_key(values, |v| *v);
}

/// Merge sort on an arbitrary key, used to observe stability among equal keys.
pub fn merge_sort_by_key<T, K, F>(values: &mut [T], key: F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    let len = values.len();
    top_down_split_merge(values, 0, len, &key);
}

fn top_down_split_merge<T, K, F>(values: &mut [T], begin: usize, end: usize, key: &F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    if end - begin <= 1 {
        return;
    }
    // odd ranges give the extra element to the left half
    let middle = begin + (end - begin + 1) / 2;
    top_down_split_merge(values, begin, middle, key);
    top_down_split_merge(values, middle, end, key);
    top_down_merge(values, begin, middle, end, key);
}

fn top_down_merge<T, K, F>(values: &mut [T], begin: usize, middle: usize, end: usize, key: &F)
where
    T: Copy,
    K: Ord,
    F: Fn(&T) -> K,
{
    let left = values[begin..middle].to_vec();
    let right = values[middle..end].to_vec();
    let (mut i, mut j) = (0, 0);
    for slot in values[begin..end].iter_mut() {
        // ties take the left element
        if j >= right.len() || (i < left.len() && key(&left[i]) <= key(&right[j])) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

enum Task {
    Split { begin: usize, end: usize },
    Merge { begin: usize, middle: usize, end: usize },
}

struct Merging {
    left: Vec<i32>,
    right: Vec<i32>,
    i: usize,
    j: usize,
    k: usize,
}

/// Resumable merge sort emitting one step per write into the merged range.
///
/// The recursion is kept as an explicit task stack, so writes happen in the
/// same order as in [`merge_sort`].
pub struct MergeSort<'a> {
    values: &'a mut [i32],
    tasks: Vec<Task>,
    merging: Option<Merging>,
    done: bool,
}

impl<'a> MergeSort<'a> {
    pub fn new(values: &'a mut [i32]) -> Self {
        let len = values.len();
        let done = len < 2;
        let tasks = if done {
            Vec::new()
        } else {
            vec![Task::Split { begin: 0, end: len }]
        };
        MergeSort {
            values,
            tasks,
            merging: None,
            done,
        }
    }
}

impl Iterator for MergeSort<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        loop {
            if let Some(m) = &mut self.merging {
                if m.i < m.left.len() || m.j < m.right.len() {
                    let take_left =
                        m.j >= m.right.len() || (m.i < m.left.len() && m.left[m.i] <= m.right[m.j]);
                    let value = if take_left {
                        m.i += 1;
                        m.left[m.i - 1]
                    } else {
                        m.j += 1;
                        m.right[m.j - 1]
                    };
                    let index = m.k;
                    m.k += 1;
                    self.values[index] = value;
                    return Some(StepEvent::new(
                        StepKind::Write { index, value },
                        vec![(index, Role::Written)],
                    ));
                }
                self.merging = None;
            }

            match self.tasks.pop() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Task::Split { begin, end }) => {
                    if end - begin > 1 {
                        let middle = begin + (end - begin + 1) / 2;
                        self.tasks.push(Task::Merge { begin, middle, end });
                        self.tasks.push(Task::Split { begin: middle, end });
                        self.tasks.push(Task::Split { begin, end: middle });
                    }
                }
                Some(Task::Merge { begin, middle, end }) => {
                    debug!("merging [{}, {}) and [{}, {})", begin, middle, middle, end);
                    self.merging = Some(Merging {
                        left: self.values[begin..middle].to_vec(),
                        right: self.values[middle..end].to_vec(),
                        i: 0,
                        j: 0,
                        k: begin,
                    });
                }
            }
        }
    }
}

impl FusedIterator for MergeSort<'_> {}

impl Run for MergeSort<'_> {
    fn values(&self) -> &[i32] {
        &*self.values
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
