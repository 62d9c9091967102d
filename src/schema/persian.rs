use super::{CalendricalAdjustments, CalendricalFamily, CalendricalSchema};

/// Days in a 2820-year cycle
const DAYS_PER_2820_YEAR_CYCLE: i64 = 1_029_983;
/// Years are counted from 474 within each 2820-year cycle
const CYCLE_BASE_YEAR: i32 = 474;
/// Days from the epoch to the first day of the year 475
const START_OF_YEAR_475: i64 = 173_125;

const DAYS_IN_YEAR_BEFORE_MONTH: [i32; 12] = [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Splits a year into its cycle number and its rank within the cycle (474..=3293)
const fn split_year(y: i32) -> (i64, i64) {
    let y0 = y as i64 - CYCLE_BASE_YEAR as i64;
    (y0.div_euclid(2820), y0.rem_euclid(2820) + CYCLE_BASE_YEAR as i64)
}

const fn is_persian_leap_year(y: i32) -> bool {
    let (_, year) = split_year(y);
    ((year + 38) * 31).rem_euclid(128) < 31
}

/// The arithmetical Persian schema, built on a 2820-year cycle of 683
/// leap years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Persian2820Schema;

impl CalendricalSchema for Persian2820Schema {
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
        29
    }

    fn months_in_year(&self) -> Option<i32> {
        Some(12)
    }

    fn is_leap_year(&self, y: i32) -> bool {
        is_persian_leap_year(y)
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        m == 12 && d == 30
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, _y: i32) -> i32 {
        12
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        365 + i32::from(is_persian_leap_year(y))
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        DAYS_IN_YEAR_BEFORE_MONTH[(m - 1) as usize]
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        match m {
            1..=6 => 31,
            7..=11 => 30,
            _ => 29 + i32::from(is_persian_leap_year(y)),
        }
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        let (cycle, year) = split_year(y);
        (DAYS_PER_2820_YEAR_CYCLE * cycle + 365 * (year - 1) + (31 * year - 5).div_euclid(128)) as i32
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        let d0 = i64::from(days_since_epoch) - START_OF_YEAR_475;
        let cycle = d0.div_euclid(DAYS_PER_2820_YEAR_CYCLE);
        let d1 = d0.rem_euclid(DAYS_PER_2820_YEAR_CYCLE);
        // The last day of a cycle closes the 2820th year
        let rank = if d1 == DAYS_PER_2820_YEAR_CYCLE - 1 { 2820 } else { (128 * d1 + 46_878).div_euclid(46_751) };
        (i64::from(CYCLE_BASE_YEAR) + 2820 * cycle + rank) as i32
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        let d0 = doy - 1;
        let m = if d0 < 186 { d0 / 31 + 1 } else { (d0 - 186) / 30 + 7 };
        (m, doy - DAYS_IN_YEAR_BEFORE_MONTH[(m - 1) as usize])
    }

    fn get_end_of_year_parts(&self, y: i32) -> (i32, i32) {
        (12, 29 + i32::from(is_persian_leap_year(y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        day_number::CalendarEpoch,
        test_utils::{assert_month_lengths_consistent, assert_round_trip},
    };

    #[test]
    fn test_rata_die_samples() {
        struct TestCase {
            rata_die:    i32,
            parts:       (i32, i32, i32),
            description: &'static str,
        }

        let cases = [
            TestCase {
                rata_die:    226_529,
                parts:       (-1, 12, 29),
                description: "last day of year -1",
            },
            TestCase {
                rata_die:    226_895,
                parts:       (0, 12, 30),
                description: "year zero is leap",
            },
            TestCase {
                rata_die:    226_896,
                parts:       (1, 1, 1),
                description: "epoch",
            },
            TestCase {
                rata_die:    400_020,
                parts:       (474, 12, 30),
                description: "end of a cycle base year",
            },
            TestCase {
                rata_die:    400_021,
                parts:       (475, 1, 1),
                description: "start of the cycle",
            },
            TestCase {
                rata_die:    1_430_003,
                parts:       (3294, 12, 30),
                description: "last day of a 2820-year cycle",
            },
            TestCase {
                rata_die:    1_430_004,
                parts:       (3295, 1, 1),
                description: "first day of the next cycle",
            },
            TestCase {
                rata_die:    -214_193,
                parts:       (-1207, 5, 1),
                description: "appendix C",
            },
            TestCase {
                rata_die:    210_155,
                parts:       (-45, 2, 30),
                description: "appendix C",
            },
            TestCase {
                rata_die:    744_313,
                parts:       (1417, 8, 19),
                description: "appendix C",
            },
        ];

        let offset = 1 + CalendarEpoch::PERSIAN.days_since_zero();
        for case in &cases {
            let (y, m, d) = case.parts;
            let days = case.rata_die - offset;
            assert_eq!(Persian2820Schema.count_days_since_epoch(y, m, d), days, "Failed for: {}", case.description);
            assert_eq!(Persian2820Schema.get_date_parts(days), case.parts, "Failed for: {}", case.description);
        }
    }

    #[test]
    fn test_leap_years() {
        let sch = Persian2820Schema;
        assert!(sch.is_leap_year(0));
        assert!(!sch.is_leap_year(1));
        assert!(sch.is_leap_year(4));
        assert!(!sch.is_leap_year(475));
        assert_eq!(sch.get_start_of_year(4), 1095);
        assert_eq!(sch.get_start_of_year(0), -366);
        assert!(sch.is_intercalary_day(4, 12, 30));
    }

    #[test]
    fn test_laws() {
        assert_month_lengths_consistent(&Persian2820Schema, -3000..=3400);
        assert_round_trip(&Persian2820Schema, 3280..=3300);
        assert_round_trip(&Persian2820Schema, -10..=10);
    }
}
