use crate::charinfo::CodePoint;
use serde::Serialize;
use std::fmt;

/// Inclusive run of consecutive code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodePointRange {
    pub start: CodePoint,
    pub end: CodePoint,
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Merge characters into maximal runs of consecutive code points.
///
/// Input order and duplicates do not matter.
pub fn merge<I>(chars: I) -> Vec<CodePointRange>
where
    I: IntoIterator<Item = char>,
{
    let mut codes: Vec<u32> = chars.into_iter().map(u32::from).collect();
    codes.sort_unstable();
    codes.dedup();

    let mut ranges = Vec::new();
    let mut iter = codes.into_iter();
    let Some(first) = iter.next() else {
        return ranges;
    };

    let (mut start, mut end) = (first, first);
    for code in iter {
        if code == end + 1 {
            end = code;
        } else {
            ranges.push(CodePointRange {
                start: CodePoint(start),
                end: CodePoint(end),
            });
            start = code;
            end = code;
        }
    }
    ranges.push(CodePointRange {
        start: CodePoint(start),
        end: CodePoint(end),
    });
    ranges
}
