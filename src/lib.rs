//! # contentcmp - Byte-for-byte content comparison
//!
//! Tells whether two files or two readers hold exactly the same bytes.
//! No diff is produced: the answer is a [`Verdict`], identical or different,
//! plus where the first difference was seen.
//!
//! ```
//! use contentcmp::diff::compare_readers;
//!
//! let verdict = compare_readers(&b"abc"[..], &b"abd"[..])?;
//! assert!(verdict.is_different());
//! # Ok::<(), contentcmp::CompareError>(())
//! ```

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use diff::{compare_files, compare_readers, compare_seekable, CHUNK_SIZE};
pub use types::{CompareError, Difference, Side, Verdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
