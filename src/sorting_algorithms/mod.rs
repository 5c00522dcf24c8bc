pub mod bubblesort;
pub mod mergesort;
pub mod quicksort;
pub mod radixsort;
pub mod sorting_graph;

pub use bubblesort::{bubble_sort, BubbleSort};
pub use mergesort::{merge_sort, merge_sort_by_key, MergeSort};
pub use quicksort::{quick_sort, QuickSort};
pub use radixsort::{radix_sort, radix_sort_by_key, RadixSort};
pub use sorting_graph::SortGraph;
