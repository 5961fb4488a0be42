//! File comparison with a length fast path

use super::compare_readers;
use crate::types::{CompareError, Difference, Side, Verdict};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Compare the contents of two files
///
/// Comparison happens in two tiers:
///
/// 1. **Length**: both files are measured by seeking to the end. Different
///    lengths mean different files and no content is read.
/// 2. **Content**: both files are rewound to offset zero and handed to
///    [`compare_readers`].
///
/// Both handles are owned by this call and closed on every return path,
/// including when only the first file could be opened.
///
/// # Arguments
/// * `left` - Path of the first file
/// * `right` - Path of the second file
///
/// # Returns
/// * `Ok(Verdict)` - Whether the files are identical
/// * `Err(CompareError)` - Open, seek or read failure
///
/// # Example
/// ```no_run
/// use contentcmp::diff::compare_files;
///
/// let verdict = compare_files("build/old.bin", "build/new.bin")?;
/// if verdict.is_different() {
///     println!("rebuild needed");
/// }
/// # Ok::<(), contentcmp::CompareError>(())
/// ```
pub fn compare_files(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
) -> Result<Verdict, CompareError> {
    let left = left.as_ref();
    let right = right.as_ref();

    let left_file = open_for_read(left)?;
    let right_file = open_for_read(right)?;

    compare_open(left_file, Some(left), right_file, Some(right))
}

/// Compare two seekable sources, checking their lengths first
///
/// Same two tiers as [`compare_files`], for sources that are already open.
/// Comparison always starts at offset zero, whatever the current position
/// of either source.
///
/// # Example
/// ```
/// use contentcmp::diff::compare_seekable;
/// use contentcmp::Difference;
/// use std::io::Cursor;
///
/// let verdict = compare_seekable(Cursor::new(b"abc"), Cursor::new(b"abcd"))?;
/// assert_eq!(verdict.difference(), Some(Difference::Size { left: 3, right: 4 }));
/// # Ok::<(), contentcmp::CompareError>(())
/// ```
pub fn compare_seekable<L, R>(left: L, right: R) -> Result<Verdict, CompareError>
where
    L: Read + Seek,
    R: Read + Seek,
{
    compare_open(left, None, right, None)
}

fn compare_open<L, R>(
    mut left: L,
    left_path: Option<&Path>,
    mut right: R,
    right_path: Option<&Path>,
) -> Result<Verdict, CompareError>
where
    L: Read + Seek,
    R: Read + Seek,
{
    // ═══════════════════════════════════════════════════════════
    // TIER 1: Length (no content read)
    // ═══════════════════════════════════════════════════════════
    let left_len = seek(&mut left, Side::Left, left_path, SeekFrom::End(0))?;
    let right_len = seek(&mut right, Side::Right, right_path, SeekFrom::End(0))?;

    if left_len != right_len {
        debug!(
            left = ?left_path,
            right = ?right_path,
            left_len,
            right_len,
            "lengths differ, skipping content comparison"
        );
        return Ok(Verdict::Different(Difference::Size {
            left: left_len,
            right: right_len,
        }));
    }

    // ═══════════════════════════════════════════════════════════
    // TIER 2: Content
    // ═══════════════════════════════════════════════════════════
    seek(&mut left, Side::Left, left_path, SeekFrom::Start(0))?;
    seek(&mut right, Side::Right, right_path, SeekFrom::Start(0))?;

    compare_readers(&mut left, &mut right)
}

/// Open a file for reading, tagging failures with the path
pub(crate) fn open_for_read(path: &Path) -> Result<File, CompareError> {
    File::open(path).map_err(|source| CompareError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn seek<S: Seek>(
    source: &mut S,
    side: Side,
    path: Option<&Path>,
    pos: SeekFrom,
) -> Result<u64, CompareError> {
    source.seek(pos).map_err(|err| CompareError::Seek {
        side,
        path: path.map(Path::to_path_buf),
        source: err,
    })
}
