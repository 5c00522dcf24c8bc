pub mod linear_search;

pub use linear_search::{linear_search, search_index, LinearSearch, NOT_FOUND};
