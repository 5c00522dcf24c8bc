//! LSD radix sort in base 10, one stable counting-sort pass per decimal place.

use log::debug;

use crate::error::{Error, Result};
use std::iter::FusedIterator;

use crate::step::{Role, Run, StepEvent, StepKind};

const BASE: usize = 10;

/// Sorts non-negative values in place. Fails before touching the slice if
/// any value is negative.
pub fn radix_sort(values: &mut [i32]) -> Result<()> {
    check_non_negative(values)?;
    radix_sort_by_key(values, |v| *v as u32);
    Ok(())
}

/// Radix sort on an unsigned key, used to observe stability among equal keys.
pub fn radix_sort_by_key<T, F>(values: &mut [T], key: F)
where
    T: Copy,
    F: Fn(&T) -> u32,
{
    let max = values.iter().map(&key).max().unwrap_or(0) as u64;
    let mut place: u64 = 1;
    while max / place > 0 {
        counting_sort(values, place, &key);
        place *= BASE as u64;
    }
}

fn check_non_negative(values: &[i32]) -> Result<()> {
    match values.iter().position(|v| *v < 0) {
        Some(index) => Err(Error::NegativeValue {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

fn digit(key: u32, place: u64) -> usize {
    ((key as u64 / place) % BASE as u64) as usize
}

fn counting_sort<T, F>(values: &mut [T], place: u64, key: &F)
where
    T: Copy,
    F: Fn(&T) -> u32,
{
    let mut count = [0usize; BASE];
    for v in values.iter() {
        count[digit(key(v), place)] += 1;
    }
    for d in 1..BASE {
        count[d] += count[d - 1];
    }
    let mut output = values.to_vec();
    // scanning from the end keeps equal digits in input order
    for v in values.iter().rev() {
        let d = digit(key(v), place);
        output[count[d] - 1] = *v;
        count[d] -= 1;
    }
    values.copy_from_slice(&output);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Count { i: usize },
    Prefix { digit: usize },
    Buffer { remaining: usize },
    CopyBack { i: usize },
}

/// Resumable radix sort. Every histogram increment, prefix-sum update,
/// buffer placement and copy-back is a separate step.
pub struct RadixSort<'a> {
    values: &'a mut [i32],
    output: Vec<i32>,
    count: [usize; BASE],
    max: u64,
    place: u64,
    phase: Phase,
    done: bool,
}

impl<'a> RadixSort<'a> {
    pub fn new(values: &'a mut [i32]) -> Result<Self> {
        check_non_negative(values)?;
        let max = values.iter().copied().max().unwrap_or(0) as u64;
        debug!("radix sort over {} values, max {}", values.len(), max);
        let output = vec![0; values.len()];
        Ok(RadixSort {
            values,
            output,
            count: [0; BASE],
            max,
            place: 1,
            phase: Phase::Count { i: 0 },
            done: max == 0,
        })
    }

    /// The decimal place of the pass in progress (1, 10, 100, ...).
    pub fn place(&self) -> u64 {
        self.place
    }
}

impl Iterator for RadixSort<'_> {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        let n = self.values.len();
        loop {
            match self.phase {
                Phase::Count { i } if i < n => {
                    let d = digit(self.values[i] as u32, self.place);
                    self.count[d] += 1;
                    self.phase = Phase::Count { i: i + 1 };
                    return Some(StepEvent::new(
                        StepKind::Count { index: i, digit: d },
                        vec![(i, Role::Counted)],
                    ));
                }
                Phase::Count { .. } => self.phase = Phase::Prefix { digit: 1 },
                Phase::Prefix { digit } if digit < BASE => {
                    self.count[digit] += self.count[digit - 1];
                    self.phase = Phase::Prefix { digit: digit + 1 };
                    return Some(StepEvent::new(StepKind::Prefix { digit }, Vec::new()));
                }
                Phase::Prefix { .. } => self.phase = Phase::Buffer { remaining: n },
                Phase::Buffer { remaining } if remaining > 0 => {
                    let i = remaining - 1;
                    let d = digit(self.values[i] as u32, self.place);
                    let slot = self.count[d] - 1;
                    self.output[slot] = self.values[i];
                    self.count[d] -= 1;
                    self.phase = Phase::Buffer { remaining: i };
                    return Some(StepEvent::new(
                        StepKind::Buffer { index: i, slot },
                        vec![(i, Role::Placed)],
                    ));
                }
                Phase::Buffer { .. } => self.phase = Phase::CopyBack { i: 0 },
                Phase::CopyBack { i } if i < n => {
                    self.values[i] = self.output[i];
                    self.phase = Phase::CopyBack { i: i + 1 };
                    return Some(StepEvent::new(
                        StepKind::CopyBack { index: i },
                        vec![(i, Role::Final)],
                    ));
                }
                Phase::CopyBack { .. } => {
                    self.place *= BASE as u64;
                    if self.max / self.place == 0 {
                        self.done = true;
                        return None;
                    }
                    debug!("radix pass for place {}", self.place);
                    self.count = [0; BASE];
                    self.phase = Phase::Count { i: 0 };
                }
            }
        }
    }
}

impl FusedIterator for RadixSort<'_> {}

impl Run for RadixSort<'_> {
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
    fn sorts_classic_example() {
        let mut values = vec![170, 45, 75, 90, 802, 24, 2, 66];
        radix_sort(&mut values).unwrap();
        assert_eq!(values, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn rejects_negative_values_untouched() {
        let mut values = vec![3, -1, 2];
        match radix_sort(&mut values) {
            Err(Error::NegativeValue { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, -1);
            }
            other => panic!("expected NegativeValue, got {:?}", other),
        }
        assert_eq!(values, vec![3, -1, 2]);
        assert!(RadixSort::new(&mut values).is_err());
    }

    #[test]
    fn step_count_matches_passes() {
        // two digits -> two passes of n counts, 9 prefix updates, n placements, n copies
        let mut values = vec![31, 12, 7, 45];
        let n = values.len();
        let mut run = RadixSort::new(&mut values).unwrap();
        let steps = drain(&mut run);
        assert_eq!(steps, 2 * (3 * n + 9));
        assert_eq!(values, vec![7, 12, 31, 45]);
    }

    #[test]
    fn copy_back_steps_are_marked_final() {
        let mut values = vec![3, 1, 2];
        let run = RadixSort::new(&mut values).unwrap();
        let steps: Vec<StepEvent> = run.collect();
        let copies: Vec<&StepEvent> = steps
            .iter()
            .filter(|s| matches!(s.kind, StepKind::CopyBack { .. }))
            .collect();
        assert_eq!(copies.len(), 3);
        assert!(copies.iter().all(|s| s.marks[0].1 == Role::Final));
    }

    #[test]
    fn zeros_and_empty_need_no_pass() {
        let mut zeros = vec![0, 0, 0];
        assert_eq!(drain(&mut RadixSort::new(&mut zeros).unwrap()), 0);
        let mut empty: Vec<i32> = Vec::new();
        assert!(RadixSort::new(&mut empty).unwrap().is_done());
        radix_sort(&mut empty).unwrap();
    }

    #[test]
    fn handles_largest_i32() {
        let mut values = vec![i32::MAX, 0, 1_000_000_000, 7];
        radix_sort(&mut values).unwrap();
        assert_eq!(values, vec![0, 7, 1_000_000_000, i32::MAX]);
    }

    #[test]
    fn keeps_equal_digits_in_input_order() {
        let mut pairs = vec![(21u32, 'a'), (11, 'b'), (21, 'c'), (11, 'd')];
        radix_sort_by_key(&mut pairs, |p| p.0);
        assert_eq!(pairs, vec![(11, 'b'), (11, 'd'), (21, 'a'), (21, 'c')]);
    }
}
