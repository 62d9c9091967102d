use super::{CalendricalAdjustments, CalendricalFamily, CalendricalSchema};

const DAYS_IN_COMMON_YEAR: i32 = 354;
const DAYS_IN_LEAP_MONTH: i32 = 30;
/// Days in four consecutive years, one of them leap
const DAYS_PER_4_YEAR_CYCLE: i64 = 4 * 354 + 30;
/// Days in a pair of full and hollow months
const DAYS_PER_MONTH_PAIR: i32 = 59;

const fn is_lunisolar_leap_year(y: i32) -> bool {
    y.rem_euclid(4) == 0
}

const fn lunisolar_start_of_year(y: i32) -> i32 {
    let y0 = y - 1;
    DAYS_IN_COMMON_YEAR * y0 + DAYS_IN_LEAP_MONTH * y0.div_euclid(4)
}

/// A simple arithmetical lunisolar schema.
///
/// Twelve months alternating between 30 and 29 days make a common year of
/// 354 days. Every fourth year gets a thirteenth, intercalary month of 30
/// days. Its purpose is to exercise the code paths of schemas whose number
/// of months varies from year to year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LunisolarSchema;

impl CalendricalSchema for LunisolarSchema {
    fn family(&self) -> CalendricalFamily {
        CalendricalFamily::Lunisolar
    }

    fn periodic_adjustments(&self) -> CalendricalAdjustments {
        CalendricalAdjustments::Months
    }

    fn min_days_in_year(&self) -> i32 {
        DAYS_IN_COMMON_YEAR
    }

    fn min_days_in_month(&self) -> i32 {
        29
    }

    fn is_leap_year(&self, y: i32) -> bool {
        is_lunisolar_leap_year(y)
    }

    fn is_intercalary_month(&self, _y: i32, m: i32) -> bool {
        m == 13
    }

    fn is_intercalary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn is_supplementary_day(&self, _y: i32, _m: i32, _d: i32) -> bool {
        false
    }

    fn count_months_in_year(&self, y: i32) -> i32 {
        if is_lunisolar_leap_year(y) { 13 } else { 12 }
    }

    fn count_days_in_year(&self, y: i32) -> i32 {
        if is_lunisolar_leap_year(y) {
            DAYS_IN_COMMON_YEAR + DAYS_IN_LEAP_MONTH
        } else {
            DAYS_IN_COMMON_YEAR
        }
    }

    fn count_days_in_year_before_month(&self, _y: i32, m: i32) -> i32 {
        29 * (m - 1) + m / 2
    }

    fn count_days_in_month(&self, _y: i32, m: i32) -> i32 {
        if m == 13 || m % 2 == 1 { 30 } else { 29 }
    }

    fn get_start_of_year(&self, y: i32) -> i32 {
        lunisolar_start_of_year(y)
    }

    fn get_year(&self, days_since_epoch: i32) -> i32 {
        // The mean-year estimate is off by at most one year.
        let y = (4 * i64::from(days_since_epoch)).div_euclid(DAYS_PER_4_YEAR_CYCLE) as i32 + 1;
        if days_since_epoch < lunisolar_start_of_year(y) {
            y - 1
        } else if days_since_epoch >= lunisolar_start_of_year(y + 1) {
            y + 1
        } else {
            y
        }
    }

    fn get_month(&self, _y: i32, doy: i32) -> (i32, i32) {
        let d0 = doy - 1;
        if d0 >= DAYS_IN_COMMON_YEAR {
            return (13, d0 - DAYS_IN_COMMON_YEAR + 1);
        }
        let pair = d0 / DAYS_PER_MONTH_PAIR;
        let rest = d0 % DAYS_PER_MONTH_PAIR;
        if rest < 30 { (2 * pair + 1, rest + 1) } else { (2 * pair + 2, rest - 29) }
    }

    fn get_end_of_year_parts(&self, y: i32) -> (i32, i32) {
        if is_lunisolar_leap_year(y) { (13, 30) } else { (12, 29) }
    }
}
