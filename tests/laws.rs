//! Round-trip and arithmetic laws, checked over every shipped schema.

use std::sync::Arc;

use calendrical::{
    CalendricalPartsFactory, CalendricalSchema, Range,
    arithmetic::arithmetic_for,
    schema::{
        Coptic12Schema, Coptic13Schema, Egyptian12Schema, Egyptian13Schema, FrenchRepublican12Schema,
        FrenchRepublican13Schema, GregorianSchema, InternationalFixedSchema, JulianSchema, LunisolarSchema,
        Persian2820Schema,
    },
};

const YEARS: std::ops::RangeInclusive<i32> = -5..=5;

fn schemas() -> Vec<Arc<dyn CalendricalSchema>> {
    vec![
        Arc::new(GregorianSchema),
        Arc::new(JulianSchema),
        Arc::new(Coptic12Schema),
        Arc::new(Coptic13Schema),
        Arc::new(Egyptian12Schema),
        Arc::new(Egyptian13Schema),
        Arc::new(FrenchRepublican12Schema),
        Arc::new(FrenchRepublican13Schema),
        Arc::new(InternationalFixedSchema),
        Arc::new(LunisolarSchema),
        Arc::new(Persian2820Schema),
    ]
}

#[test]
fn test_year_and_month_lengths() {
    for sch in schemas() {
        let mut common = None;
        let mut leap = None;
        for y in YEARS {
            let months = sch.count_months_in_year(y);
            let total: i32 = (1..=months).map(|m| sch.count_days_in_month(y, m)).sum();
            assert_eq!(total, sch.count_days_in_year(y), "{sch:?} year {y}");
            assert!(total >= sch.min_days_in_year(), "{sch:?} year {y}");

            for m in 1..months {
                assert_eq!(
                    sch.count_days_in_year_before_month(y, m) + sch.count_days_in_month(y, m),
                    sch.count_days_in_year_before_month(y, m + 1),
                    "{sch:?} month {y}-{m}"
                );
            }

            if sch.is_leap_year(y) {
                leap = Some(total);
            } else {
                common = Some(total);
            }
        }
        if let (Some(common), Some(leap)) = (common, leap) {
            assert!(leap > common, "{sch:?}");
        }
    }
}

#[test]
fn test_round_trip_at_supported_year_limits() {
    for sch in schemas() {
        let years = sch.supported_years();
        let (min, max) = (years.min(), years.max());
        let first = sch.get_start_of_year(min);
        let last = sch.get_end_of_year(max);
        let near_start = first..=sch.get_end_of_year(min);
        let near_end = sch.get_start_of_year(max)..=last;
        for days in near_start.chain(near_end) {
            let (y, m, d) = sch.get_date_parts(days);
            assert!(years.contains(y), "{sch:?} day {days} in year {y}");
            assert_eq!(sch.count_days_since_epoch(y, m, d), days, "{sch:?} ({y}, {m}, {d})");

            let (y, doy) = sch.get_ordinal_parts(days);
            assert_eq!(sch.count_days_since_epoch_ordinal(y, doy), days, "{sch:?} ({y}, {doy})");
        }
        assert_eq!(sch.get_date_parts(first), (min, 1, 1), "{sch:?}");
        assert_eq!(sch.get_ordinal_parts(last), (max, sch.count_days_in_year(max)), "{sch:?}");
    }
}

#[test]
fn test_round_trip() {
    for sch in schemas() {
        let first = sch.get_start_of_year(*YEARS.start());
        let last = sch.get_end_of_year(*YEARS.end());
        for days in first..=last {
            let (y, m, d) = sch.get_date_parts(days);
            assert_eq!(sch.count_days_since_epoch(y, m, d), days, "{sch:?} ({y}, {m}, {d})");

            let (y, doy) = sch.get_ordinal_parts(days);
            assert_eq!(sch.count_days_since_epoch_ordinal(y, doy), days, "{sch:?} ({y}, {doy})");

            let ymd = sch.date_parts(days);
            assert_eq!(sch.date_parts_of(sch.ordinal_parts_of(ymd)), ymd, "{sch:?} {ymd}");
        }
        assert_eq!(sch.count_days_since_epoch(1, 1, 1), 0, "{sch:?}");
    }
}

#[test]
fn test_consecutive_days() {
    for sch in schemas() {
        let arithmetic =
            arithmetic_for(sch.clone(), Range::new(-10, 10).expect("failed to create range")).expect("failed to create arithmetic");
        let first = sch.get_start_of_year(*YEARS.start());
        let last = sch.get_end_of_year(*YEARS.end());
        for days in first..last {
            let date = sch.date_parts(days);
            let after = sch.date_parts(days + 1);
            assert_eq!(arithmetic.next_day(date).expect("failed to get next day"), after, "{sch:?} {date}");
            assert_eq!(arithmetic.add_days(date, 1).expect("failed to add days"), after, "{sch:?} {date}");
            assert_eq!(arithmetic.previous_day(after).expect("failed to get previous day"), date, "{sch:?} {after}");
            assert_eq!(arithmetic.count_days_between(date, after), 1, "{sch:?} {date}");

            let date = sch.ordinal_parts(days);
            let after = sch.ordinal_parts(days + 1);
            assert_eq!(arithmetic.next_day_ordinal(date).expect("failed to get next day"), after, "{sch:?} {date}");
            assert_eq!(arithmetic.count_days_between_ordinal(date, after), 1, "{sch:?} {date}");
        }
    }
}

#[test]
fn test_add_days_is_invertible() {
    for sch in schemas() {
        let arithmetic =
            arithmetic_for(sch.clone(), Range::new(-10, 10).expect("failed to create range")).expect("failed to create arithmetic");
        for y in YEARS {
            for (m, d) in [(1, 1), (2, 15), (sch.count_months_in_year(y), 1)] {
                let date = sch.start_of_month_parts(y, m);
                let date = arithmetic.add_days(date, d - 1).expect("failed to add days");
                for n in [-400, -59, -30, -7, -1, 0, 1, 7, 30, 59, 400] {
                    let shifted = arithmetic.add_days(date, n).expect("failed to add days");
                    assert_eq!(arithmetic.add_days(shifted, -n).expect("failed to add days"), date, "{sch:?} {date} {n}");
                    assert_eq!(arithmetic.count_days_between(date, shifted), n, "{sch:?} {date} {n}");
                }
            }
        }
    }
}

#[test]
fn test_overflow_at_supported_years() {
    for sch in schemas() {
        let arithmetic =
            arithmetic_for(sch.clone(), Range::new(1, 2).expect("failed to create range")).expect("failed to create arithmetic");
        let first = sch.start_of_year_parts(1);
        let last = sch.end_of_year_parts(2);
        assert!(arithmetic.previous_day(first).expect_err("expected overflow").is_overflow(), "{sch:?}");
        assert!(arithmetic.next_day(last).expect_err("expected overflow").is_overflow(), "{sch:?}");
        assert!(arithmetic.add_days(first, 800).expect_err("expected overflow").is_overflow(), "{sch:?}");
        assert!(arithmetic.add_days(last, i32::MIN).expect_err("expected overflow").is_overflow(), "{sch:?}");
    }
}
