//! User-facing output

mod report;

pub use report::describe_difference;
