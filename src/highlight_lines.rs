//! Line-range specifications
//!
//! Parses human-authored strings like `"1"`, `"1-4"` or `"1-3,5,7-8"`
//! into the set of 1-based line numbers that should be emphasized.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::CodeError;

/// Parsed set of 1-based line numbers to highlight
///
/// Entries keep the order they were written in. Duplicates and
/// out-of-order entries are kept as-is. A range whose start is past its
/// end (`"5-2"`) contributes no lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSpec {
    ranges: Vec<RangeInclusive<usize>>,
}

impl HighlightSpec {
    /// A spec that highlights nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list of lines and inclusive ranges
    ///
    /// Returns `None` if any component is malformed; there are no
    /// partial results.
    pub fn parse(input: &str) -> Option<Self> {
        let mut ranges = Vec::new();

        for raw_component in input.split(',') {
            let component: String = raw_component.chars().filter(|c| !c.is_whitespace()).collect();
            let parts: Vec<&str> = component.split('-').collect();

            match parts.as_slice() {
                [line] => {
                    let line = line.parse::<usize>().ok()?;
                    ranges.push(line..=line);
                }
                [start, end] => {
                    let start = start.parse::<usize>().ok()?;
                    let end = end.parse::<usize>().ok()?;
                    ranges.push(start..=end);
                }
                _ => return None,
            }
        }

        Some(Self { ranges })
    }

    /// Check whether a 1-based line number is highlighted
    pub fn contains(&self, line: usize) -> bool {
        self.ranges.iter().any(|range| range.contains(&line))
    }

    /// Iterate over the expanded line numbers in written order
    pub fn lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges.iter().flat_map(|range| range.clone())
    }

    /// Check if no line is highlighted
    pub fn is_empty(&self) -> bool {
        self.ranges.iter().all(|range| range.is_empty())
    }
}

impl FromStr for HighlightSpec {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CodeError::InvalidHighlightLines(s.to_string()))
    }
}

impl fmt::Display for HighlightSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}-{}", range.start(), range.end())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lines(input: &str) -> Option<Vec<usize>> {
        HighlightSpec::parse(input).map(|spec| spec.lines().collect())
    }

    #[test]
    fn test_single_line() {
        assert_eq!(lines("1"), Some(vec![1]));
    }

    #[test]
    fn test_range() {
        assert_eq!(lines("1-4"), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_mixed() {
        assert_eq!(lines("1-3,5,7-8"), Some(vec![1, 2, 3, 5, 7, 8]));
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(lines(" 1 - 3 , 5 "), Some(vec![1, 2, 3, 5]));
        assert_eq!(lines("2,\t4"), Some(vec![2, 4]));
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        assert_eq!(lines("5,1-2,2"), Some(vec![5, 1, 2, 2]));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert_eq!(lines("5-2"), Some(vec![]));
        assert_eq!(lines("5-2,7"), Some(vec![7]));
        assert!(HighlightSpec::parse("5-2").unwrap().is_empty());
    }

    #[test]
    fn test_malformed() {
        assert_eq!(lines("1-2-3"), None);
        assert_eq!(lines("a-b"), None);
        assert_eq!(lines("a"), None);
        assert_eq!(lines(""), None);
        assert_eq!(lines("1,"), None);
        assert_eq!(lines("-3"), None);
        assert_eq!(lines("3-"), None);
        assert_eq!(lines("1,2,x"), None);
    }

    #[test]
    fn test_contains() {
        let spec = HighlightSpec::parse("2,4-6").unwrap();
        assert!(!spec.contains(1));
        assert!(spec.contains(2));
        assert!(!spec.contains(3));
        assert!(spec.contains(5));
        assert!(!spec.contains(7));
        assert!(!HighlightSpec::empty().contains(1));
    }

    #[test]
    fn test_from_str_error() {
        let err = "1-x".parse::<HighlightSpec>().unwrap_err();
        assert!(matches!(err, CodeError::InvalidHighlightLines(ref s) if s == "1-x"));
    }

    #[test]
    fn test_display() {
        let spec = HighlightSpec::parse("1-3, 5,7-8").unwrap();
        assert_eq!(spec.to_string(), "1-3,5,7-8");
    }

    proptest! {
        #[test]
        fn prop_ranges_expand_in_order(pairs in proptest::collection::vec((0usize..50, 0usize..50), 1..8)) {
            let input = pairs
                .iter()
                .map(|(a, b)| format!("{}-{}", a, b))
                .collect::<Vec<_>>()
                .join(",");
            let expected: Vec<usize> = pairs.iter().flat_map(|&(a, b)| a..=b).collect();
            prop_assert_eq!(lines(&input), Some(expected));
        }

        #[test]
        fn prop_three_part_components_fail(a in 0usize..100, b in 0usize..100, c in 0usize..100) {
            let input = format!("{}-{}-{}", a, b, c);
            prop_assert_eq!(lines(&input), None);
        }
    }
}
