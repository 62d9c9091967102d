use super::{
    CalendricalAdjustments, CalendricalFamily, CalendricalSchema,
    gregorian::{
        DAYS_PER_4_YEAR_CYCLE, days_in_month_julian_or_gregorian, days_in_year_before_month_julian_or_gregorian,
        get_julian_or_gregorian_month,
    },
};

pub(crate) const fn is_julian_leap_year(y: i32) -> bool {
    y.rem_euclid(4) == 0
}

/// The proleptic Julian schema. Year zero is a leap year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JulianSchema;

impl CalendricalSchema for JulianSchema {
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
        is_julian_leap_year(y)
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
        if is_julian_leap_year(y) { 366 } else { 365 }
    }

    fn count_days_in_year_before_month(&self, y: i32, m: i32) -> i32 {
        days_in_year_before_month_julian_or_gregorian(is_julian_leap_year(y), m)
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        days_in_month_julian_or_gregorian(is_julian_leap_year(y), m)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        let y0 = y - 1;
        365 * y0 + y0.div_euclid(4)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        // 1464 = 1461 + 3 shifts the leap day to the end of the 4-year cycle
        (4 * i64::from(days_since_epoch) + 1464).div_euclid(i64::from(DAYS_PER_4_YEAR_CYCLE)) as i32
    }

    fn get_month(&self, y: i32, doy: i32) -> (i32, i32) {
        get_julian_or_gregorian_month(is_julian_leap_year(y), doy)
    }

    fn get_end_of_year_parts(&self, _y: i32) -> (i32, i32) {
        (12, 31)
    }
}
