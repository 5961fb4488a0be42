//! Comparison engine - Streams and files

mod file;
mod stream;

pub use file::{compare_files, compare_seekable};
pub(crate) use file::open_for_read;
pub use stream::{compare_readers, CHUNK_SIZE};
