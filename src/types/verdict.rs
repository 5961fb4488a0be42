//! Verdict - Outcome of a successful comparison

use std::fmt;

/// Which of the two sources an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// First source (`source1`)
    Left,

    /// Second source (`source2`)
    Right,
}

impl Side {
    /// The opposite side
    ///
    /// Comparison is symmetric: swapping the arguments of a comparison swaps
    /// every `Side` in its verdict or error and changes nothing else.
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Why two sources were declared different
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    /// Total lengths differ (seekable fast path, no content read)
    Size { left: u64, right: u64 },

    /// First differing byte, counted from the start of the comparison
    Content { offset: u64 },

    /// One source ended at `offset` while the other still had bytes
    Truncated { offset: u64, shorter: Side },
}

impl Difference {
    /// Swap left and right, as if the sources had been passed the other way round
    ///
    /// `compare(b, a)` yields `compare(a, b)` mirrored, which lets callers
    /// that normalise argument order map a difference back to their own view.
    pub fn mirrored(self) -> Self {
        match self {
            Difference::Size { left, right } => Difference::Size {
                left: right,
                right: left,
            },
            Difference::Content { offset } => Difference::Content { offset },
            Difference::Truncated { offset, shorter } => Difference::Truncated {
                offset,
                shorter: shorter.other(),
            },
        }
    }
}

/// Result of comparing two sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Byte-for-byte identical
    Identical,

    /// Contents differ
    Different(Difference),
}

impl Verdict {
    /// Check if the sources differ
    pub fn is_different(&self) -> bool {
        matches!(self, Verdict::Different(_))
    }

    /// Check if the sources are identical
    pub fn is_identical(&self) -> bool {
        matches!(self, Verdict::Identical)
    }

    /// The difference, if any
    pub fn difference(&self) -> Option<Difference> {
        match self {
            Verdict::Identical => None,
            Verdict::Different(diff) => Some(*diff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_predicates() {
        assert!(Verdict::Identical.is_identical());
        assert!(!Verdict::Identical.is_different());
        assert_eq!(Verdict::Identical.difference(), None);

        let verdict = Verdict::Different(Difference::Content { offset: 7 });
        assert!(verdict.is_different());
        assert!(!verdict.is_identical());
        assert_eq!(verdict.difference(), Some(Difference::Content { offset: 7 }));
    }

    #[test]
    fn test_mirrored_swaps_sides() {
        assert_eq!(
            Difference::Size { left: 1, right: 2 }.mirrored(),
            Difference::Size { left: 2, right: 1 }
        );
        assert_eq!(
            Difference::Truncated {
                offset: 3,
                shorter: Side::Left
            }
            .mirrored(),
            Difference::Truncated {
                offset: 3,
                shorter: Side::Right
            }
        );
        assert_eq!(
            Difference::Content { offset: 9 }.mirrored(),
            Difference::Content { offset: 9 }
        );
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
        assert_eq!(Side::Left.other(), Side::Right);
    }
}
