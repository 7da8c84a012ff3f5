//! FEEL ranges (intervals over any orderable value)

use crate::{Value, compare_values};
use std::cmp::Ordering;
use std::fmt;

/// An open or closed interval
///
/// A `Null` bound leaves that side unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct FeelRange {
    pub start: Value,
    pub start_included: bool,
    pub end: Value,
    pub end_included: bool,
}

impl FeelRange {
    pub fn new(start: Value, start_included: bool, end: Value, end_included: bool) -> Self {
        Self {
            start,
            start_included,
            end,
            end_included,
        }
    }

    /// `[start..end]`
    pub fn closed(start: Value, end: Value) -> Self {
        Self::new(start, true, end, true)
    }

    /// Boundary test of a point
    ///
    /// `None` when the point cannot be ordered against a bound.
    pub fn contains(&self, point: &Value) -> Option<bool> {
        if point.is_null() {
            return None;
        }
        let above_start = match &self.start {
            Value::Null => true,
            start => match compare_values(point, start)? {
                Ordering::Greater => true,
                Ordering::Equal => self.start_included,
                Ordering::Less => false,
            },
        };
        let below_end = match &self.end {
            Value::Null => true,
            end => match compare_values(point, end)? {
                Ordering::Less => true,
                Ordering::Equal => self.end_included,
                Ordering::Greater => false,
            },
        };
        Some(above_start && below_end)
    }

    /// Integer points of a range with integral bounds, ascending
    pub fn integer_points(&self) -> Option<Vec<Value>> {
        let mut start = self.start.as_integer()?;
        let mut end = self.end.as_integer()?;
        if !self.start_included {
            start += 1;
        }
        if !self.end_included {
            end -= 1;
        }
        Some((start..=end).map(|i| Value::number(i as f64)).collect())
    }
}

impl fmt::Display for FeelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}..{}{}",
            if self.start_included { '[' } else { '(' },
            self.start,
            self.end,
            if self.end_included { ']' } else { ')' }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn range(lo: f64, lo_incl: bool, hi: f64, hi_incl: bool) -> FeelRange {
        FeelRange::new(Value::number(lo), lo_incl, Value::number(hi), hi_incl)
    }

    #[rstest]
    #[case(1.0, true, true)]
    #[case(1.0, false, false)]
    #[case(3.0, true, true)]
    #[case(3.0, false, true)]
    #[case(0.0, true, false)]
    fn test_lower_bound(#[case] point: f64, #[case] included: bool, #[case] expected: bool) {
        let r = range(1.0, included, 5.0, true);
        assert_eq!(r.contains(&Value::number(point)), Some(expected));
    }

    #[test]
    fn test_incomparable_point() {
        let r = range(1.0, true, 5.0, true);
        assert_eq!(r.contains(&Value::string("3")), None);
        assert_eq!(r.contains(&Value::Null), None);
    }

    #[test]
    fn test_unbounded_side() {
        let r = FeelRange::new(Value::Null, false, Value::number(10.0), false);
        assert_eq!(r.contains(&Value::number(-1e9)), Some(true));
        assert_eq!(r.contains(&Value::number(10.0)), Some(false));
    }

    #[test]
    fn test_integer_points() {
        let points = range(1.0, false, 4.0, true).integer_points().unwrap();
        assert_eq!(points, vec![Value::number(2.0), Value::number(3.0), Value::number(4.0)]);
        assert!(range(1.5, true, 4.0, true).integer_points().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(range(1.0, true, 5.0, false).to_string(), "[1..5)");
    }
}
