//! Classic array algorithms (bubble, merge, quick and radix sort plus linear
//! search) with resumable, step-by-step runs for visualization.
//!
//! Every algorithm has a batch form that runs to completion and a run form
//! that yields one [`StepEvent`] per observable mutation:
//!
//! ```
//! use sort_visualizer::{Algorithm, Run};
//!
//! let mut values = vec![5, 3, 8, 3, 1];
//! let mut run = Algorithm::Merge.begin_run(&mut values, None).unwrap();
//! let mut steps = 0;
//! while let Some(step) = run.next() {
//!     steps += 1;
//!     println!("{:?} -> {:?}", step.kind, run.values());
//! }
//! assert!(run.is_done());
//! drop(run);
//! assert_eq!(steps, 12);
//! assert_eq!(values, vec![1, 3, 3, 5, 8]);
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod input;
pub mod searching_algorithms;
pub mod sorting_algorithms;
pub mod step;
pub mod visualizer;

pub use algorithm::{Algorithm, Outcome};
pub use error::{Error, Result};
pub use searching_algorithms::{linear_search, search_index, LinearSearch, NOT_FOUND};
pub use sorting_algorithms::{
    bubble_sort, merge_sort, merge_sort_by_key, quick_sort, radix_sort, radix_sort_by_key,
    BubbleSort, MergeSort, QuickSort, RadixSort, SortGraph,
};
pub use step::{drain, Role, Run, StepEvent, StepKind};
