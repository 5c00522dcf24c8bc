use log::debug;

use crate::error::{Error, Result};
use crate::searching_algorithms::{linear_search, LinearSearch};
use crate::sorting_algorithms::{
    bubble_sort, merge_sort, quick_sort, radix_sort, BubbleSort, MergeSort, QuickSort, RadixSort,
};
use crate::step::Run;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    Bubble,
    Merge,
    Quick,
    Radix,
    Linear,
}

/// Result of a batch invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Sorted,
    Searched(Option<usize>),
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Radix,
        Algorithm::Linear,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Linear => "Linear Search",
        }
    }

    /// Key that selects this algorithm in the visualizer.
    pub fn key(&self) -> char {
        match self {
            Algorithm::Bubble => 'b',
            Algorithm::Merge => 'm',
            Algorithm::Quick => 'q',
            Algorithm::Radix => 'd',
            Algorithm::Linear => 'l',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|algo| algo.key() == key)
    }

    pub fn is_search(&self) -> bool {
        matches!(self, Algorithm::Linear)
    }

    /// Starts a stepping run over `values`. Linear search requires a target.
    pub fn begin_run<'a>(
        self,
        values: &'a mut [i32],
        target: Option<i32>,
    ) -> Result<Box<dyn Run + 'a>> {
        debug!("beginning {} run over {} values", self.name(), values.len());
        let run: Box<dyn Run + 'a> = match self {
            Algorithm::Bubble => Box::new(BubbleSort::new(values)),
            Algorithm::Merge => Box::new(MergeSort::new(values)),
            Algorithm::Quick => Box::new(QuickSort::new(values)),
            Algorithm::Radix => Box::new(RadixSort::new(values)?),
            Algorithm::Linear => {
                let target = target.ok_or(Error::MissingTarget)?;
                Box::new(LinearSearch::new(values, target))
            }
        };
        Ok(run)
    }

    /// Runs the batch form to completion.
    pub fn execute(self, values: &mut [i32], target: Option<i32>) -> Result<Outcome> {
        match self {
            Algorithm::Bubble => bubble_sort(values),
            Algorithm::Merge => merge_sort(values),
            Algorithm::Quick => quick_sort(values),
            Algorithm::Radix => radix_sort(values)?,
            Algorithm::Linear => {
                let target = target.ok_or(Error::MissingTarget)?;
                return Ok(Outcome::Searched(linear_search(values, target)));
            }
        }
        Ok(Outcome::Sorted)
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        let cleaned = input.trim().to_lowercase().replace(['-', '_', ' '], "");
        match cleaned.as_str() {
            "b" | "bubble" | "bubblesort" => Ok(Algorithm::Bubble),
            "m" | "merge" | "mergesort" => Ok(Algorithm::Merge),
            "q" | "quick" | "quicksort" => Ok(Algorithm::Quick),
            "d" | "radix" | "radixsort" => Ok(Algorithm::Radix),
            "l" | "linear" | "linearsearch" => Ok(Algorithm::Linear),
            _ => Err(Error::UnknownAlgorithm(input.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::drain;

    #[test]
    fn parses_names_and_keys() {
        assert_eq!("Merge Sort".parse::<Algorithm>().unwrap(), Algorithm::Merge);
        assert_eq!("radix_sort".parse::<Algorithm>().unwrap(), Algorithm::Radix);
        assert_eq!(Algorithm::from_key('Q'), Some(Algorithm::Quick));
        assert_eq!(Algorithm::from_key('x'), None);
        assert!(matches!(
            "heap".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn linear_run_without_target_is_rejected() {
        let mut values = vec![1, 2, 3];
        assert!(matches!(
            Algorithm::Linear.begin_run(&mut values, None),
            Err(Error::MissingTarget)
        ));
        assert!(matches!(
            Algorithm::Linear.execute(&mut values, None),
            Err(Error::MissingTarget)
        ));
    }

    #[test]
    fn empty_input_sorts_with_zero_steps() {
        for algo in Algorithm::ALL.into_iter().filter(|a| !a.is_search()) {
            let mut values: Vec<i32> = Vec::new();
            let mut run = algo.begin_run(&mut values, None).unwrap();
            assert_eq!(drain(run.as_mut()), 0, "{}", algo);
            assert!(run.is_done());
        }
    }

    #[test]
    fn search_outcome_reports_index() {
        let mut values = vec![4, 2, 7, 1, 9];
        assert_eq!(
            Algorithm::Linear.execute(&mut values, Some(7)).unwrap(),
            Outcome::Searched(Some(2))
        );
    }
}
