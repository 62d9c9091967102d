use super::{
    CalendricalAdjustments, CalendricalFamily, CalendricalSchema,
    epagomenal::{self, thirteen, twelve},
};

/// Days in a 4000-year cycle of the Romme rule
pub const DAYS_PER_4000_YEAR_CYCLE: i32 = 1_460_969;

/// The Romme rule: Gregorian leap years, except the multiples of 4000.
const fn is_french_leap_year(y: i32) -> bool {
    y % 4 == 0 && (y % 100 != 0 || (y % 400 == 0 && y % 4000 != 0))
}

const fn french_start_of_year(y: i32) -> i32 {
    let y0 = y - 1;
    365 * y0 + y0.div_euclid(4) - y0.div_euclid(100) + y0.div_euclid(400) - y0.div_euclid(4000)
}

fn french_year(days_since_epoch: i32) -> i32 {
    // The mean-year estimate is off by at most one year.
    let y = (4000 * i64::from(days_since_epoch)).div_euclid(i64::from(DAYS_PER_4000_YEAR_CYCLE)) as i32 + 1;
    if days_since_epoch < french_start_of_year(y) {
        y - 1
    } else if days_since_epoch >= french_start_of_year(y + 1) {
        y + 1
    } else {
        y
    }
}

/// The French Republican schema with the sansculottides appended to the
/// twelfth month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrenchRepublican12Schema;

/// The French Republican schema with the sansculottides in a virtual
/// thirteenth month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrenchRepublican13Schema;

impl CalendricalSchema for FrenchRepublican12Schema {
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
        is_french_leap_year(y)
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
        365 + i32::from(is_french_leap_year(y))
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        epagomenal::count_days_in_year_before_month(m)
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        twelve::count_days_in_month(is_french_leap_year(y), m)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        french_start_of_year(y)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        french_year(days_since_epoch)
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        twelve::get_month(doy)
    }

    fn get_end_of_year_parts(&self, y: i32) -> (i32, i32) {
        twelve::get_end_of_year_parts(is_french_leap_year(y))
    }
}

impl CalendricalSchema for FrenchRepublican13Schema {
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
        is_french_leap_year(y)
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
        365 + i32::from(is_french_leap_year(y))
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        epagomenal::count_days_in_year_before_month(m)
    }

    fn count_days_in_month(&self, y: i32, m: i32) -> i32 {
        thirteen::count_days_in_month(is_french_leap_year(y), m)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        french_start_of_year(y)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        french_year(days_since_epoch)
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        thirteen::get_month(doy)
    }

    fn get_end_of_year_parts(&self, y: i32) -> (i32, i32) {
        thirteen::get_end_of_year_parts(is_french_leap_year(y))
    }
}
