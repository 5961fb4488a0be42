//! Human-readable verdict lines

use crate::config::Input;
use crate::types::{Difference, Side};
use indicatif::HumanBytes;

/// Describe a difference the way `cmp` does
///
/// Content offsets are printed 1-based; a truncation reports how many bytes
/// matched before the shorter side ran out.
pub fn describe_difference(left: &Input, right: &Input, difference: Difference) -> String {
    match difference {
        Difference::Size {
            left: left_len,
            right: right_len,
        } => format!(
            "{} {} differ: size {} vs {}",
            left,
            right,
            HumanBytes(left_len),
            HumanBytes(right_len)
        ),
        Difference::Content { offset } => {
            format!("{} {} differ: byte {}", left, right, offset + 1)
        }
        Difference::Truncated { offset, shorter } => {
            let shorter = match shorter {
                Side::Left => left,
                Side::Right => right,
            };
            if offset == 0 {
                format!("EOF on {} which is empty", shorter)
            } else {
                format!("EOF on {} after byte {}", shorter, offset)
            }
        }
    }
}
