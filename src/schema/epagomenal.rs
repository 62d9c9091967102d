//! Month layouts shared by the schemas with twelve 30-day months followed
//! by a block of five or six epagomenal days.
//!
//! `twelve` appends the epagomenal days to the twelfth month, `thirteen`
//! gathers them in a virtual thirteenth month. Day-of-year numbering is the
//! same in both layouts.

const DAYS_IN_REGULAR_MONTH: i32 = 30;
const DAYS_BEFORE_EPAGOMENAL: i32 = 360;

pub(crate) mod twelve {
    use super::{DAYS_BEFORE_EPAGOMENAL, DAYS_IN_REGULAR_MONTH};

    pub(crate) const MONTHS_IN_YEAR: i32 = 12;

    pub(crate) const fn count_days_in_month(leap: bool, m: i32) -> i32 {
        if m == MONTHS_IN_YEAR { 35 + leap as i32 } else { DAYS_IN_REGULAR_MONTH }
    }

    pub(crate) const fn get_month(doy: i32) -> (i32, i32) {
        let m = if doy > DAYS_BEFORE_EPAGOMENAL {
            MONTHS_IN_YEAR
        } else {
            (doy - 1) / DAYS_IN_REGULAR_MONTH + 1
        };
        (m, doy - DAYS_IN_REGULAR_MONTH * (m - 1))
    }

    pub(crate) const fn is_intercalary_day(m: i32, d: i32) -> bool {
        m == MONTHS_IN_YEAR && d == 36
    }

    pub(crate) const fn is_supplementary_day(m: i32, d: i32) -> bool {
        m == MONTHS_IN_YEAR && d > DAYS_IN_REGULAR_MONTH
    }

    pub(crate) const fn epagomenal_number(m: i32, d: i32) -> Option<i32> {
        if is_supplementary_day(m, d) { Some(d - DAYS_IN_REGULAR_MONTH) } else { None }
    }

    pub(crate) const fn get_end_of_year_parts(leap: bool) -> (i32, i32) {
        (MONTHS_IN_YEAR, 35 + leap as i32)
    }
}

pub(crate) mod thirteen {
    use super::DAYS_IN_REGULAR_MONTH;

    pub(crate) const MONTHS_IN_YEAR: i32 = 13;

    pub(crate) const fn count_days_in_month(leap: bool, m: i32) -> i32 {
        if m == MONTHS_IN_YEAR { 5 + leap as i32 } else { DAYS_IN_REGULAR_MONTH }
    }

    pub(crate) const fn get_month(doy: i32) -> (i32, i32) {
        let m = (doy - 1) / DAYS_IN_REGULAR_MONTH + 1;
        (m, doy - DAYS_IN_REGULAR_MONTH * (m - 1))
    }

    pub(crate) const fn is_intercalary_day(m: i32, d: i32) -> bool {
        m == MONTHS_IN_YEAR && d == 6
    }

    pub(crate) const fn is_supplementary_day(m: i32) -> bool {
        m == MONTHS_IN_YEAR
    }

    pub(crate) const fn epagomenal_number(m: i32, d: i32) -> Option<i32> {
        if is_supplementary_day(m) { Some(d) } else { None }
    }

    pub(crate) const fn get_end_of_year_parts(leap: bool) -> (i32, i32) {
        (MONTHS_IN_YEAR, 5 + leap as i32)
    }
}

/// Days in the months before `m`, identical for both layouts
pub(crate) const fn count_days_in_year_before_month(m: i32) -> i32 {
    DAYS_IN_REGULAR_MONTH * (m - 1)
}
