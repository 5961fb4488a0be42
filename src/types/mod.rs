//! Core type definitions for contentcmp

mod error;
mod verdict;

pub use error::CompareError;
pub use verdict::{Difference, Side, Verdict};
