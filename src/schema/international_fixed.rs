use super::{
    CalendricalAdjustments, CalendricalFamily, CalendricalSchema,
    gregorian::{gregorian_start_of_year, gregorian_year, is_gregorian_leap_year},
};

const DAYS_IN_MONTH: i32 = 28;
/// Month holding the leap day
const LEAP_MONTH: i32 = 6;
/// Zero-based day of the year of the leap day, June 29th
const LEAP_DAY_INDEX: i32 = LEAP_MONTH * DAYS_IN_MONTH;

/// The International Fixed calendar: thirteen months of 28 days. A leap day
/// closes June in leap years and a year day closes December every year.
/// Leap years follow the Gregorian rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InternationalFixedSchema;

impl CalendricalSchema for InternationalFixedSchema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Solar
    }

    fn periodic_adjustments(&self) -> CalendricalAdjustments {
        CalendricalAdjustments::Days
    }

    fn min_days_in_year(&self) -> i32 {
        365
    }

    fn min_days_in_month(&self) -> i32 {
        DAYS_IN_MONTH
    }

    fn months_in_year(&self) -> Option<i32> {
        Some(13)
    }

    fn is_leap_year(&self, y: i32) -> bool {
        is_gregorian_leap_year(y)
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == LEAP_MONTH && d == 29
    }

    fn is_supplementary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        d == 29 && (m == LEAP_MONTH || m == 13)
    }

    fn count_months_in_year(&self, _y: i32) -> i32 {
        13
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        365 + i32::from(is_gregorian_leap_year(y))
    }

    fn count_days_in_year_before_month(&self, y: i32, m: i32) -> i32 {
        let before = DAYS_IN_MONTH * (m - 1);
        if m > LEAP_MONTH && is_gregorian_leap_year(y) { before + 1 } else { before }
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        if m == 13 || (m == LEAP_MONTH && is_gregorian_leap_year(y)) {
            DAYS_IN_MONTH + 1
        } else {
            DAYS_IN_MONTH
        }
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        gregorian_start_of_year(y)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        gregorian_year(days_since_epoch)
    }

    fn get_month(&self, y: i32, doy: i32) -> (i32, i32) {
        let mut d0 = doy - 1;
        if is_gregorian_leap_year(y) {
            if d0 == LEAP_DAY_INDEX {
                return (LEAP_MONTH, 29);
            }
            if d0 > LEAP_DAY_INDEX {
                d0 -= 1;
            }
        }
        let m = (d0 / DAYS_IN_MONTH + 1).min(13);
        (m, d0 - DAYS_IN_MONTH * (m - 1) + 1)
    }

    fn get_end_of_year_parts(&self, _y: i32) -> (i32, i32) {
        (13, 29)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_month_lengths_consistent, assert_round_trip};

    #[test]
    fn test_day_infos() {
        struct TestCase {
            parts:         (i32, i32, i32),
            day_of_year:   i32,
            intercalary:   bool,
            supplementary: bool,
        }

        let cases = [
            TestCase {
                parts:         (3, 6, 28),
                day_of_year:   168,
                intercalary:   false,
                supplementary: false,
            },
            TestCase {
                parts:         (3, 13, 29),
                day_of_year:   365,
                intercalary:   false,
                supplementary: true,
            },
            TestCase {
                parts:         (4, 6, 29),
                day_of_year:   169,
                intercalary:   true,
                supplementary: true,
            },
            TestCase {
                parts:         (4, 7, 28),
                day_of_year:   197,
                intercalary:   false,
                supplementary: false,
            },
            TestCase {
                parts:         (4, 13, 29),
                day_of_year:   366,
                intercalary:   false,
                supplementary: true,
            },
        ];

        let sch = InternationalFixedSchema;
        for case in &cases {
            let (y, m, d) = case.parts;
            assert_eq!(sch.get_day_of_year(y, m, d), case.day_of_year, "day of year of {:?}", case.parts);
            assert_eq!(sch.get_month(y, case.day_of_year), (m, d), "month of {:?}", case.parts);
            assert_eq!(sch.is_intercalary_day(y, m, d), case.intercalary, "intercalary {:?}", case.parts);
            assert_eq!(sch.is_supplementary_day(y, m, d), case.supplementary, "supplementary {:?}", case.parts);
        }
    }

    #[test]
    fn test_year_lengths() {
        let sch = InternationalFixedSchema;
        assert_eq!(sch.count_days_in_year(4), 366);
        assert_eq!(sch.count_days_in_year(400), 366);
        assert_eq!(sch.count_days_in_year(100), 365);
        assert_eq!(sch.count_days_in_year_before_month(4, 13), 337);
        assert_eq!(sch.count_days_in_year_before_month(3, 13), 336);
    }

    #[test]
    fn test_laws() {
        assert_month_lengths_consistent(&InternationalFixedSchema, -400..=400);
        assert_round_trip(&InternationalFixedSchema, -400..=400);
    }
}
