use super::{
    CalendricalAdjustments, CalendricalFamily, CalendricalSchema,
    epagomenal::{self, thirteen, twelve},
};

const DAYS_IN_YEAR: i32 = 365;

/// The Egyptian schema (annus vagus, no leap years) with the five
/// epagomenal days appended to the twelfth month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Egyptian12Schema;

/// The Egyptian schema with the epagomenal days in a virtual thirteenth month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Egyptian13Schema;

impl CalendricalSchema for Egyptian12Schema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::AnnusVagus
    }

    fn periodic_adjustments(&self) -> CalendricalAdjustments {
        CalendricalAdjustments::None
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        30
    }

    fn months_in_year(&self) -> Option<i32> {
        Some(twelve::MONTHS_IN_YEAR)
    }

    fn is_leap_year(&self, _y: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
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

    fn count_days_in_year(&self, _y: i32) -> i32 {
        DAYS_IN_YEAR
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        epagomenal::count_days_in_year_before_month(m)
    }

    fn count_days_in_month(&self, _y: i32, m: i32) -> i32 {
        twelve::count_days_in_month(false, m)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        DAYS_IN_YEAR * (y - 1)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        days_since_epoch.div_euclid(DAYS_IN_YEAR) + 1
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        twelve::get_month(doy)
    }

    fn get_end_of_year_parts(&self, _y: i32) -> (i32, i32) {
        twelve::get_end_of_year_parts(false)
    }
}

impl CalendricalSchema for Egyptian13Schema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::AnnusVagus
    }

    fn periodic_adjustments(&self) -> CalendricalAdjustments {
        CalendricalAdjustments::None
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        5
    }

    fn months_in_year(&self) -> Option<i32> {
        Some(thirteen::MONTHS_IN_YEAR)
    }

    fn is_leap_year(&self, _y: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
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

    fn count_days_in_year(&self, _y: i32) -> i32 {
        DAYS_IN_YEAR
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        epagomenal::count_days_in_year_before_month(m)
    }

    fn count_days_in_month(&self, _y: i32, m: i32) -> i32 {
        thirteen::count_days_in_month(false, m)
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        DAYS_IN_YEAR * (y - 1)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        days_since_epoch.div_euclid(DAYS_IN_YEAR) + 1
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        thirteen::get_month(doy)
    }

    fn get_end_of_year_parts(&self, _y: i32) -> (i32, i32) {
        thirteen::get_end_of_year_parts(false)
    }
}
