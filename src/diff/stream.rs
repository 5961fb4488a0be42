//! Lockstep chunked comparison of two readers

use crate::types::{CompareError, Difference, Side, Verdict};
use std::io::{self, ErrorKind, Read};
use tracing::{debug, trace};

/// Number of bytes read from each source per iteration
pub const CHUNK_SIZE: usize = 4096;

/// Compare the contents of two readers byte for byte
///
/// Both sources are read front to back exactly once, one chunk of
/// [`CHUNK_SIZE`] bytes at a time, left before right. Memory use is two
/// chunk buffers no matter how long the sources are, so unbounded and
/// non-seekable streams work as well as files.
///
/// The loop stops at the first iteration where the sources disagree:
///
/// 1. **Count mismatch**: one source filled its chunk and the other did not,
///    or both ran short at different lengths → `Different`
/// 2. **Byte mismatch** within the bytes read → `Different`
/// 3. **Both short, same bytes**: both sources ended together → `Identical`
///
/// Reaching end of input is never an error. Any other read failure aborts
/// the comparison with [`CompareError::Read`] naming the failing side.
///
/// # Arguments
/// * `left` - First source (read first in every iteration)
/// * `right` - Second source
///
/// # Returns
/// * `Ok(Verdict)` - Whether the sources are identical
/// * `Err(CompareError)` - A read failed
///
/// # Example
/// ```
/// use contentcmp::diff::compare_readers;
///
/// let verdict = compare_readers(&b"hello"[..], &b"hello"[..])?;
/// assert!(verdict.is_identical());
/// # Ok::<(), contentcmp::CompareError>(())
/// ```
pub fn compare_readers<L: Read, R: Read>(
    mut left: L,
    mut right: R,
) -> Result<Verdict, CompareError> {
    let mut left_buf = vec![0u8; CHUNK_SIZE];
    let mut right_buf = vec![0u8; CHUNK_SIZE];
    let mut offset: u64 = 0;

    loop {
        let left_len = read_chunk(&mut left, &mut left_buf).map_err(|source| {
            CompareError::Read {
                side: Side::Left,
                source,
            }
        })?;
        let right_len = read_chunk(&mut right, &mut right_buf).map_err(|source| {
            CompareError::Read {
                side: Side::Right,
                source,
            }
        })?;

        let left_short = left_len < CHUNK_SIZE;
        let right_short = right_len < CHUNK_SIZE;
        trace!(offset, left_len, right_len, "compared chunk lengths");

        if left_short != right_short || left_len != right_len {
            let common = left_len.min(right_len);
            let difference = match first_mismatch(&left_buf[..common], &right_buf[..common]) {
                Some(index) => Difference::Content {
                    offset: offset + index as u64,
                },
                None => Difference::Truncated {
                    offset: offset + common as u64,
                    shorter: if left_len < right_len {
                        Side::Left
                    } else {
                        Side::Right
                    },
                },
            };
            debug!(?difference, "sources differ in length");
            return Ok(Verdict::Different(difference));
        }

        if let Some(index) = first_mismatch(&left_buf[..left_len], &right_buf[..left_len]) {
            let difference = Difference::Content {
                offset: offset + index as u64,
            };
            debug!(?difference, "sources differ in content");
            return Ok(Verdict::Different(difference));
        }

        if left_short {
            debug!(total = offset + left_len as u64, "sources are identical");
            return Ok(Verdict::Identical);
        }

        offset += left_len as u64;
    }
}

/// Fill `buf` from `reader`, stopping early only at end of input
///
/// Returns the number of bytes read; anything less than `buf.len()` means
/// the source is exhausted. Interrupted reads are retried.
fn read_chunk<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Index of the first differing byte of two equal-length slices
fn first_mismatch(a: &[u8], b: &[u8]) -> Option<usize> {
    if a == b {
        return None;
    }
    a.iter().zip(b).position(|(x, y)| x != y)
}
