pub mod closest_pair;
pub mod date;
pub mod logger;
pub mod max_subarray;
pub mod merge_sort;

pub use closest_pair::*;
pub use date::*;
pub use logger::*;
pub use max_subarray::*;
pub use merge_sort::*;
