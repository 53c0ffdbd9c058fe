pub mod analysis;
pub mod quote;

pub use analysis::*;
pub use quote::*;
