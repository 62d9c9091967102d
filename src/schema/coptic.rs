use super::{
    CalendricalAdjustments, CalendricalFamily, CalendricalSchema,
    epagomenal::{self, thirteen, twelve},
};

/// Leap years are the years preceding a Julian leap year
const fn is_coptic_leap_year(y: i32) -> bool {
    y.rem_euclid(4) == 3
}

const fn coptic_start_of_year(y: i32) -> i32 {
    365 * (y - 1) + y.div_euclid(4)
}

fn coptic_year(days_since_epoch: i32) -> i32 {
    (4 * i64::from(days_since_epoch) + 1463).div_euclid(1461) as i32
}

/// The Coptic schema with the five or six epagomenal days appended to the
/// twelfth month, which thus has 35 or 36 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coptic12Schema;

/// The Coptic schema with the epagomenal days in a virtual thirteenth month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coptic13Schema;

impl CalendricalSchema for Coptic12Schema {
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
        30
    }

    fn months_in_year(&self) -> Option<i32> {
        Some(twelve::MONTHS_IN_YEAR)
    }

    fn is_leap_year(&self, y: i32) -> bool {
        is_coptic_leap_year(y)
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        twelve::is_intercalary_day(m, d)
    }

    fn is_supplementary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        twelve::is_supplementary_day(m, d)
    }

    fn epagomenal_number(&self, _y: i32, m: i32, d: i32) -> Option<i32> {
        twelve::epagomenal_number(m, d)
    }

    fn count_months_in_year(&self, _y: i32) -> i32 {
        twelve::MONTHS_IN_YEAR
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        365 + i32::from(is_coptic_leap_year(y))
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        epagomenal::count_days_in_year_before_month(m)
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        twelve::count_days_in_month(is_coptic_leap_year(y), m)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        coptic_start_of_year(y)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        coptic_year(days_since_epoch)
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        twelve::get_month(doy)
    }

    fn get_end_of_year_parts(&self, y: i32) -> (i32, i32) {
        twelve::get_end_of_year_parts(is_coptic_leap_year(y))
    }
}

impl CalendricalSchema for Coptic13Schema {
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
        5
    }

    fn months_in_year(&self) -> Option<i32> {
        Some(thirteen::MONTHS_IN_YEAR)
    }

    fn is_leap_year(&self, y: i32) -> bool {
        is_coptic_leap_year(y)
    }

    fn is_intercalary_day(&self, _y: i32, m: i32, d: i32) -> bool {
        thirteen::is_intercalary_day(m, d)
    }

    fn is_supplementary_day(&self, _y: i32, m: i32, _d: i32) -> bool {
        thirteen::is_supplementary_day(m)
    }

    fn epagomenal_number(&self, _y: i32, m: i32, d: i32) -> Option<i32> {
        thirteen::epagomenal_number(m, d)
    }

    fn count_months_in_year(&self, _y: i32) -> i32 {
        thirteen::MONTHS_IN_YEAR
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        365 + i32::from(is_coptic_leap_year(y))
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        epagomenal::count_days_in_year_before_month(m)
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        thirteen::count_days_in_month(is_coptic_leap_year(y), m)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        coptic_start_of_year(y)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        coptic_year(days_since_epoch)
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        thirteen::get_month(doy)
    }

    fn get_end_of_year_parts(&self, y: i32) -> (i32, i32) {
        thirteen::get_end_of_year_parts(is_coptic_leap_year(y))
    }
}
