//! Helpers shared by the unit tests.

use std::ops::RangeInclusive;

use crate::{
    range::Range,
    schema::{CalendricalPartsFactory, CalendricalSchema},
};

pub fn range(min: i32, max: i32) -> Range<i32> {
    Range::new(min, max).expect("failed to create range")
}

/// Checks that the month lengths of every year add up, that the
/// "before month" counts chain, and that the declared minimums hold.
pub fn assert_month_lengths_consistent<S: CalendricalSchema + ?Sized>(sch: &S, years: RangeInclusive<i32>) {
    let mut common_len = None;
    let mut leap_len = None;
    for y in years {
        let months = sch.count_months_in_year(y);
        let mut sum = 0;
        for m in 1..=months {
            let len = sch.count_days_in_month(y, m);
            assert!(len >= sch.min_days_in_month(), "month {y}-{m} is too short");
            assert_eq!(sch.count_days_in_year_before_month(y, m), sum, "days before {y}-{m}");
            assert_eq!(
                sch.get_end_of_month(y, m) - sch.get_start_of_month(y, m) + 1,
                len,
                "bounds of {y}-{m}"
            );
            sum += len;
        }
        let days = sch.count_days_in_year(y);
        assert_eq!(sum, days, "sum of the months of {y}");
        assert!(days >= sch.min_days_in_year(), "year {y} is too short");
        assert_eq!(sch.get_start_of_year(y + 1) - sch.get_start_of_year(y), days, "length of {y}");

        let (m, d) = sch.get_end_of_year_parts(y);
        assert_eq!(sch.get_day_of_year(y, m, d), days, "end of year {y}");

        if sch.is_leap_year(y) {
            leap_len = Some(days);
        } else {
            common_len = Some(days);
        }
    }
    if let (Some(common), Some(leap)) = (common_len, leap_len) {
        assert!(leap > common, "leap years must be longer");
    }
}

/// Checks the conversions between day counts, date parts and ordinal parts
/// for every day of the given years.
pub fn assert_round_trip<S: CalendricalSchema + ?Sized>(sch: &S, years: RangeInclusive<i32>) {
    let (first, last) = (*years.start(), *years.end());
    let mut expected = sch.get_start_of_year(first);
    for y in first..=last {
        let mut doy = 0;
        for m in 1..=sch.count_months_in_year(y) {
            for d in 1..=sch.count_days_in_month(y, m) {
                doy += 1;
                assert_eq!(sch.count_days_since_epoch(y, m, d), expected, "days of {y}-{m}-{d}");
                assert_eq!(sch.count_days_since_epoch_ordinal(y, doy), expected, "days of {y}-{doy}");
                assert_eq!(sch.get_date_parts(expected), (y, m, d), "parts of day {expected}");
                assert_eq!(sch.get_ordinal_parts(expected), (y, doy), "ordinal parts of day {expected}");
                assert_eq!(sch.get_month(y, doy), (m, d), "month of {y}-{doy}");

                let ymd = sch.date_parts(expected);
                let ydoy = sch.ordinal_parts(expected);
                assert_eq!(sch.ordinal_parts_of(ymd), ydoy);
                assert_eq!(sch.date_parts_of(ydoy), ymd);
                expected += 1;
            }
        }
    }
}
