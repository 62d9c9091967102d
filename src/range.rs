use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    RANGE_SEPARATOR,
    error::{CalendricalError, Param},
};

/// A closed interval `[min, max]`.
/// The lower endpoint must be less than or equal to the upper endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    min: T,
    max: T,
}

/// Error type for range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Lower endpoint is greater than the upper endpoint.
    #[error("Invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: String, max: String },

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl From<RangeError> for CalendricalError {
    fn from(err: RangeError) -> Self {
        Self::invalid_argument(Param::Range, err.to_string())
    }
}

impl<T: Copy + Ord + fmt::Display> Range<T> {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if min > max.
    pub fn new(min: T, max: T) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }
}

impl<T: Copy + Ord> Range<T> {
    /// Creates a range whose endpoints are already known to be ordered.
    pub(crate) const fn new_unchecked(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Creates the range `[value, value]`
    pub const fn singleton(value: T) -> Self {
        Self { min: value, max: value }
    }

    /// Returns the lower endpoint
    pub const fn min(&self) -> T {
        self.min
    }

    /// Returns the upper endpoint
    pub const fn max(&self) -> T {
        self.max
    }

    /// Returns both endpoints as a tuple
    pub const fn endpoints(&self) -> (T, T) {
        (self.min, self.max)
    }

    /// Checks if the range contains a given value
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks if this range is contained within another range
    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.min <= self.min && self.max <= other.max
    }

    /// Checks if this range contains another range
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Returns the common part of two ranges, if any
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if self.overlaps(other) {
            Some(Self {
                min: self.min.max(other.min),
                max: self.max.min(other.max),
            })
        } else {
            None
        }
    }
}

impl Range<i32> {
    /// The range of all 32-bit signed integers
    pub const MAXIMAL32: Self = Self::new_unchecked(i32::MIN, i32::MAX);

    /// Number of integers within the range
    pub const fn count(&self) -> i64 {
        self.max as i64 - self.min as i64 + 1
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{RANGE_SEPARATOR}{}", self.min, self.max)
    }
}

impl<T> FromStr for Range<T>
where
    T: Copy + Ord + fmt::Display + FromStr,
    T::Err: fmt::Display,
{
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (min_str, max_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let parse = |part: &str| {
                    part.trim()
                        .parse::<T>()
                        .map_err(|e| RangeError::InvalidFormat(format!("{part}: {e}")))
                };

                Self::new(parse(min_str)?, parse(max_str)?)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl<T: fmt::Display> Serialize for Range<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, T> Deserialize<'de> for Range<T>
where
    T: Copy + Ord + fmt::Display + FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::range;

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            min:            i32,
            max:            i32,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                min:            1,
                max:            9999,
                should_succeed: true,
                description:    "valid range (min < max)",
            },
            TestCase {
                min:            10,
                max:            -10,
                should_succeed: false,
                description:    "invalid range (min > max)",
            },
            TestCase {
                min:            0,
                max:            0,
                should_succeed: true,
                description:    "singleton (min == max)",
            },
        ];

        for case in &cases {
            let result = Range::new(case.min, case.max);

            if case.should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(result.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_contains() {
        let r = range(-5, 5);
        assert!(r.contains(-5));
        assert!(r.contains(0));
        assert!(r.contains(5));
        assert!(!r.contains(6));
        assert!(!r.contains(-6));
    }

    #[test]
    fn test_subset_superset() {
        struct TestCase {
            inner:       (i32, i32),
            outer:       (i32, i32),
            is_subset:   bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                inner:       (1, 9999),
                outer:       (-999_998, 999_999),
                is_subset:   true,
                description: "strictly inside",
            },
            TestCase {
                inner:       (1, 10),
                outer:       (1, 10),
                is_subset:   true,
                description: "identical ranges",
            },
            TestCase {
                inner:       (0, 10),
                outer:       (1, 10),
                is_subset:   false,
                description: "lower endpoint outside",
            },
            TestCase {
                inner:       (1, 11),
                outer:       (1, 10),
                is_subset:   false,
                description: "upper endpoint outside",
            },
        ];

        for case in &cases {
            let inner = range(case.inner.0, case.inner.1);
            let outer = range(case.outer.0, case.outer.1);
            assert_eq!(inner.is_subset_of(&outer), case.is_subset, "Failed for: {}", case.description);
            assert_eq!(outer.is_superset_of(&inner), case.is_subset, "Failed for: {}", case.description);
        }
    }

    #[test]
    fn test_overlaps_and_intersect() {
        let a = range(1, 10);
        let b = range(5, 20);
        let c = range(11, 20);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.intersect(&b), Some(range(5, 10)));
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_endpoints_and_count() {
        let r = range(-9998, 9999);
        assert_eq!(r.endpoints(), (-9998, 9999));
        assert_eq!(r.count(), 19_998);
        assert_eq!(Range::singleton(7).count(), 1);
        assert_eq!(Range::MAXIMAL32.count(), 1_i64 << 32);
    }

    #[test]
    fn test_parse_range() {
        let r: Range<i32> = "1..=9999".parse().expect("failed to parse range");
        assert_eq!(r, range(1, 9999));

        let r: Range<i32> = " -9998 ..= 9999 ".parse().expect("failed to parse range with spaces");
        assert_eq!(r, range(-9998, 9999));

        assert!("1-9999".parse::<Range<i32>>().is_err());
        assert!("1..=2..=3".parse::<Range<i32>>().is_err());
        assert!("a..=3".parse::<Range<i32>>().is_err());
        assert!(matches!(
            "9..=3".parse::<Range<i32>>(),
            Err(RangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(range(-9998, 9999).to_string(), "-9998..=9999");
    }

    #[test]
    fn test_serde() {
        let r = range(1, 9999);
        let json = serde_json::to_string(&r).expect("failed to serialize range");
        assert_eq!(json, "\"1..=9999\"");

        let back: Range<i32> = serde_json::from_str(&json).expect("failed to deserialize range");
        assert_eq!(back, r);

        assert!(serde_json::from_str::<Range<i32>>("\"10..=1\"").is_err());
    }

    #[test]
    fn test_range_error_converts_to_invalid_argument() {
        let err: CalendricalError = RangeError::InvalidFormat("x".to_owned()).into();
        assert!(err.is_invalid_argument());
        assert_eq!(err.param(), Some(Param::Range));
    }
}
