use super::{CalendricalAdjustments, CalendricalFamily, CalendricalSchema};

/// Days in a 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEAR_CYCLE: i32 = 146_097;
/// Days in a regular 100-year Gregorian cycle
pub(crate) const DAYS_PER_100_YEAR_CYCLE: i32 = 36_524;
/// Days in a regular 4-year cycle
pub(crate) const DAYS_PER_4_YEAR_CYCLE: i32 = 1461;

const DAYS_IN_MONTH_COMMON: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const DAYS_IN_YEAR_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in January and a common February
const DAYS_BEFORE_MARCH: i32 = 59;

pub(crate) const fn is_gregorian_leap_year(y: i32) -> bool {
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

/// Days from January 1st, 1 CE to January 1st of the year `y`
pub(crate) const fn gregorian_start_of_year(y: i32) -> i32 {
    let y0 = y - 1;
    365 * y0 + y0.div_euclid(4) - y0.div_euclid(100) + y0.div_euclid(400)
}

/// Inverse of `gregorian_start_of_year`
pub(crate) const fn gregorian_year(days_since_epoch: i32) -> i32 {
    let n400 = days_since_epoch.div_euclid(DAYS_PER_400_YEAR_CYCLE);
    let d1 = days_since_epoch.rem_euclid(DAYS_PER_400_YEAR_CYCLE);
    let n100 = d1 / DAYS_PER_100_YEAR_CYCLE;
    let d2 = d1 % DAYS_PER_100_YEAR_CYCLE;
    let n4 = d2 / DAYS_PER_4_YEAR_CYCLE;
    let n1 = (d2 % DAYS_PER_4_YEAR_CYCLE) / 365;
    let y = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // December 31st of a leap year ends a cycle
    if n100 == 4 || n1 == 4 { y } else { y + 1 }
}

/// The proleptic Gregorian schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianSchema;

impl CalendricalSchema for GregorianSchema {
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
        28
    }

    fn months_in_year(&self) -> Option<i32> {
        Some(12)
    }

    fn is_leap_year(&self, y: i32) -> bool {
        is_gregorian_leap_year(y)
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 2 && d == 29
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, _y: i32) -> i32 {
        12
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        if is_gregorian_leap_year(y) { 366 } else { 365 }
    }

    fn count_days_in_year_before_month(&self, y: i32, m: i32) -> i32 {
        days_in_year_before_month_julian_or_gregorian(is_gregorian_leap_year(y), m)
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        days_in_month_julian_or_gregorian(is_gregorian_leap_year(y), m)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        gregorian_start_of_year(y)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        gregorian_year(days_since_epoch)
    }

    fn get_month(&self, y: i32, doy: i32) -> (i32, i32) {
        get_julian_or_gregorian_month(is_gregorian_leap_year(y), doy)
    }

    fn get_end_of_year_parts(&self, _y: i32) -> (i32, i32) {
        (12, 31)
    }
}

pub(crate) const fn days_in_month_julian_or_gregorian(leap: bool, m: i32) -> i32 {
    if m == 2 && leap { 29 } else { DAYS_IN_MONTH_COMMON[(m - 1) as usize] }
}

pub(crate) const fn days_in_year_before_month_julian_or_gregorian(leap: bool, m: i32) -> i32 {
    let before = DAYS_IN_YEAR_BEFORE_MONTH[(m - 1) as usize];
    if m > 2 && leap { before + 1 } else { before }
}

/// Month and day of a day of the year, in closed form.
/// Shifting the days after February as if it had 30 days makes the month
/// lengths fit the `(12 * x + 373) / 367` progression.
pub(crate) const fn get_julian_or_gregorian_month(leap: bool, doy: i32) -> (i32, i32) {
    let d0 = doy - 1;
    let correction = if d0 < DAYS_BEFORE_MARCH + leap as i32 {
        0
    } else if leap {
        1
    } else {
        2
    };
    let m = (12 * (d0 + correction) + 373) / 367;
    (m, doy - days_in_year_before_month_julian_or_gregorian(leap, m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_month_lengths_consistent, assert_round_trip};

    #[test]
    fn test_leap_years() {
        struct TestCase {
            year:        i32,
            leap:        bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                leap:        true,
                description: "divisible by 4",
            },
            TestCase {
                year:        1900,
                leap:        false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                leap:        true,
                description: "divisible by 400",
            },
            TestCase {
                year:        0,
                leap:        true,
                description: "year zero",
            },
            TestCase {
                year:        -4,
                leap:        true,
                description: "negative year divisible by 4",
            },
            TestCase {
                year:        -100,
                leap:        false,
                description: "negative century",
            },
        ];

        for case in &cases {
            assert_eq!(GregorianSchema.is_leap_year(case.year), case.leap, "Failed for: {}", case.description);
        }
    }

    #[test]
    fn test_start_of_year() {
        let sch = GregorianSchema;
        assert_eq!(sch.get_start_of_year(1), 0);
        assert_eq!(sch.get_start_of_year(2), 365);
        assert_eq!(sch.get_start_of_year(2001), 730_485);
        assert_eq!(sch.get_start_of_year(0), -366);
        assert_eq!(sch.get_start_of_year(401), DAYS_PER_400_YEAR_CYCLE);
    }

    #[test]
    fn test_date_parts() {
        let sch = GregorianSchema;
        assert_eq!(sch.get_date_parts(0), (1, 1, 1));
        assert_eq!(sch.get_date_parts(-1), (0, 12, 31));
        assert_eq!(sch.get_date_parts(730_485), (2001, 1, 1));
        assert_eq!(sch.get_date_parts(730_484), (2000, 12, 31));
        // Leap day of 2000 is day 60 of the year.
        assert_eq!(sch.count_days_since_epoch(2000, 2, 29), 730_485 - 366 + 59);
    }

    #[test]
    fn test_get_month() {
        let sch = GregorianSchema;
        assert_eq!(sch.get_month(2023, 59), (2, 28));
        assert_eq!(sch.get_month(2023, 60), (3, 1));
        assert_eq!(sch.get_month(2024, 60), (2, 29));
        assert_eq!(sch.get_month(2024, 61), (3, 1));
        assert_eq!(sch.get_month(2024, 366), (12, 31));
    }

    #[test]
    fn test_laws() {
        assert_month_lengths_consistent(&GregorianSchema, -800..=800);
        assert_round_trip(&GregorianSchema, -800..=800);
    }
}
