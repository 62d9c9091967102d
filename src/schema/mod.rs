//! Calendrical schemas.
//!
//! A schema is a pure rule set mapping `(year, month, day)` and
//! `(year, day of year)` onto a count of days since its epoch, and back.
//! Years may be zero or negative. The first day of year 1 is always day 0.
//!
//! Schema methods perform no validation: callers are expected to have
//! checked the year against `supported_years` and the month and day with a
//! pre-validator. Within `supported_years` no method overflows an `i32`.

mod coptic;
mod egyptian;
mod epagomenal;
mod french_republican;
mod gregorian;
mod international_fixed;
mod julian;
mod lunisolar;
mod persian;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use coptic::{Coptic12Schema, Coptic13Schema};
pub use egyptian::{Egyptian12Schema, Egyptian13Schema};
pub use french_republican::{FrenchRepublican12Schema, FrenchRepublican13Schema};
pub use gregorian::GregorianSchema;
pub use international_fixed::InternationalFixedSchema;
pub use julian::JulianSchema;
pub use lunisolar::LunisolarSchema;
pub use persian::Persian2820Schema;

use crate::{
    DEFAULT_MAX_SUPPORTED_YEAR, DEFAULT_MIN_SUPPORTED_YEAR, LUNAR_MIN_DAYS_IN_MONTH, LUNAR_MIN_DAYS_IN_YEAR,
    LUNISOLAR_MIN_DAYS_IN_YEAR, SOLAR_MIN_DAYS_IN_YEAR, SOLAR12_MIN_DAYS_IN_MONTH, SOLAR12_MONTHS_IN_YEAR,
    SOLAR13_MIN_DAYS_IN_MONTH, SOLAR13_MONTHS_IN_YEAR,
    parts::{Yedoy, Yemoda},
    prelude::*,
    range::Range,
};

/// Years supported by a schema unless it says otherwise
pub const DEFAULT_SUPPORTED_YEARS: Range<i32> =
    Range::new_unchecked(DEFAULT_MIN_SUPPORTED_YEAR, DEFAULT_MAX_SUPPORTED_YEAR);

/// Astronomical basis of a calendar. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum CalendricalFamily {
    Other,
    Solar,
    Lunar,
    Lunisolar,
    /// Wandering year of exactly 365 days
    AnnusVagus,
}

/// How a calendar is computed. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum CalendricalAlgorithm {
    Unknown,
    Arithmetical,
    Astronomical,
}

/// What a calendar inserts periodically to stay in sync with the sky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum CalendricalAdjustments {
    None,
    Days,
    Months,
    DaysAndMonths,
}

/// Shape of a schema, used to pick a specialized pre-validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum CalendricalProfile {
    Other,
    /// Twelve months, at least 365 days per year and 28 days per month
    Solar12,
    /// Thirteen months, at least 365 days per year and 5 days per month
    Solar13,
    /// Twelve months, at least 354 days per year and 29 days per month
    Lunar,
    /// Variable month count, at least 353 days per year and 29 days per month
    Lunisolar,
}

/// The calendrical kernel of a calendar system.
///
/// Implementors supply the primitives. Everything else has a default
/// derived from them, and overrides must stay consistent with it.
pub trait CalendricalSchema: Send + Sync + fmt::Debug {
    fn family(&self) -> CalendricalFamily;

    fn algorithm(&self) -> CalendricalAlgorithm {
        CalendricalAlgorithm::Arithmetical
    }

    fn periodic_adjustments(&self) -> CalendricalAdjustments;

    /// Fewest days in any year
    fn min_days_in_year(&self) -> i32;

    /// Fewest days in any month
    fn min_days_in_month(&self) -> i32;

    /// Years for which every method is guaranteed not to overflow
    fn supported_years(&self) -> Range<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    /// Years for which the year, month and day infos and the counting methods
    /// are guaranteed not to overflow. Always a superset of `supported_years`.
    fn supported_years_core(&self) -> Range<i32> {
        Range::MAXIMAL32
    }

    /// Number of months in every year, for schemas where that number is fixed
    fn months_in_year(&self) -> Option<i32> {
        None
    }

    fn is_regular(&self) -> bool {
        self.months_in_year().is_some()
    }

    fn profile(&self) -> CalendricalProfile {
        let min_year = self.min_days_in_year();
        let min_month = self.min_days_in_month();
        match self.months_in_year() {
            Some(SOLAR12_MONTHS_IN_YEAR)
                if min_year >= SOLAR_MIN_DAYS_IN_YEAR && min_month >= SOLAR12_MIN_DAYS_IN_MONTH =>
            {
                CalendricalProfile::Solar12
            },
            Some(SOLAR13_MONTHS_IN_YEAR)
                if min_year >= SOLAR_MIN_DAYS_IN_YEAR && min_month >= SOLAR13_MIN_DAYS_IN_MONTH =>
            {
                CalendricalProfile::Solar13
            },
            Some(SOLAR12_MONTHS_IN_YEAR)
                if (LUNAR_MIN_DAYS_IN_YEAR..SOLAR_MIN_DAYS_IN_YEAR).contains(&min_year)
                    && min_month >= LUNAR_MIN_DAYS_IN_MONTH =>
            {
                CalendricalProfile::Lunar
            },
            None if min_year >= LUNISOLAR_MIN_DAYS_IN_YEAR && min_month >= LUNAR_MIN_DAYS_IN_MONTH => {
                CalendricalProfile::Lunisolar
            },
            _ => CalendricalProfile::Other,
        }
    }

    // Year, month or day infos.

    fn is_leap_year(&self, y: i32) -> bool;

    fn is_intercalary_month(&self, _y: i32, _m: i32) -> bool {
        false
    }

    fn is_intercalary_day(&self, y: i32, m: i32, d: i32) -> bool;

    /// Whether the day lies outside the regular month grid (epagomenal days, blank days)
    fn is_supplementary_day(&self, y: i32, m: i32, d: i32) -> bool;

    /// Rank of the day within the epagomenal block, if it is an epagomenal day
    fn epagomenal_number(&self, _y: i32, _m: i32, _d: i32) -> Option<i32> {
        None
    }

    // Counting months and days within a year or a month.

    fn count_months_in_year(&self, y: i32) -> i32;

    fn count_days_in_year(&self, y: i32) -> i32;

    /// Sum of the lengths of the months before `m`
    fn count_days_in_year_before_month(&self, y: i32, m: i32) -> i32;

    fn count_days_in_month(&self, y: i32, m: i32) -> i32;

    // Conversions.

    /// Days from the epoch to the first day of the year `y`
    fn get_start_of_year(&self, y: i32) -> i32;

    /// Year containing the day `days_since_epoch`
    fn get_year(&self, days_since_epoch: i32) -> i32;

    /// Splits a day of the year into `(month, day)`
    fn get_month(&self, y: i32, doy: i32) -> (i32, i32);

    fn count_days_since_epoch(&self, y: i32, m: i32, d: i32) -> i32 {
        self.get_start_of_year(y) + self.count_days_in_year_before_month(y, m) + d - 1
    }

    fn count_days_since_epoch_ordinal(&self, y: i32, doy: i32) -> i32 {
        self.get_start_of_year(y) + doy - 1
    }

    /// Inverse of `count_days_since_epoch`
    fn get_date_parts(&self, days_since_epoch: i32) -> (i32, i32, i32) {
        let (y, doy) = self.get_ordinal_parts(days_since_epoch);
        let (m, d) = self.get_month(y, doy);
        (y, m, d)
    }

    /// Inverse of `count_days_since_epoch_ordinal`
    fn get_ordinal_parts(&self, days_since_epoch: i32) -> (i32, i32) {
        let y = self.get_year(days_since_epoch);
        (y, 1 + days_since_epoch - self.get_start_of_year(y))
    }

    fn get_day_of_year(&self, y: i32, m: i32, d: i32) -> i32 {
        self.count_days_in_year_before_month(y, m) + d
    }

    // Dates in a given year or month.

    /// `(month, day)` of the last day of the year `y`
    fn get_end_of_year_parts(&self, y: i32) -> (i32, i32) {
        let m = self.count_months_in_year(y);
        (m, self.count_days_in_month(y, m))
    }

    fn get_end_of_year(&self, y: i32) -> i32 {
        self.get_start_of_year(y) + self.count_days_in_year(y) - 1
    }

    fn get_start_of_month(&self, y: i32, m: i32) -> i32 {
        self.get_start_of_year(y) + self.count_days_in_year_before_month(y, m)
    }

    fn get_end_of_month(&self, y: i32, m: i32) -> i32 {
        self.get_start_of_month(y, m) + self.count_days_in_month(y, m) - 1
    }
}

/// Counting and parts queries derived from the kernel.
///
/// Blanket-implemented for every schema, so these cannot drift from the
/// primitives. Years must be within the representable range of the packed
/// parts types.
pub trait CalendricalPartsFactory: CalendricalSchema {
    fn count_days_in_year_after_month(&self, y: i32, m: i32) -> i32 {
        self.count_days_in_year(y) - self.count_days_in_year_before_month(y, m) - self.count_days_in_month(y, m)
    }

    fn count_days_in_year_before(&self, y: i32, m: i32, d: i32) -> i32 {
        self.get_day_of_year(y, m, d) - 1
    }

    fn count_days_in_year_after(&self, y: i32, m: i32, d: i32) -> i32 {
        self.count_days_in_year(y) - self.get_day_of_year(y, m, d)
    }

    fn count_days_in_year_before_ordinal(&self, _y: i32, doy: i32) -> i32 {
        doy - 1
    }

    fn count_days_in_year_after_ordinal(&self, y: i32, doy: i32) -> i32 {
        self.count_days_in_year(y) - doy
    }

    fn count_days_in_month_before(&self, _y: i32, _m: i32, d: i32) -> i32 {
        d - 1
    }

    fn count_days_in_month_after(&self, y: i32, m: i32, d: i32) -> i32 {
        self.count_days_in_month(y, m) - d
    }

    /// Days elapsed in the year before the day `days_since_epoch`
    fn count_days_in_year_before_days(&self, days_since_epoch: i32) -> i32 {
        let y = self.get_year(days_since_epoch);
        days_since_epoch - self.get_start_of_year(y)
    }

    /// Days remaining in the year after the day `days_since_epoch`
    fn count_days_in_year_after_days(&self, days_since_epoch: i32) -> i32 {
        let y = self.get_year(days_since_epoch);
        self.get_end_of_year(y) - days_since_epoch
    }

    fn date_parts(&self, days_since_epoch: i32) -> Yemoda {
        let (y, m, d) = self.get_date_parts(days_since_epoch);
        Yemoda::new_unchecked(y, m, d)
    }

    fn ordinal_parts(&self, days_since_epoch: i32) -> Yedoy {
        let (y, doy) = self.get_ordinal_parts(days_since_epoch);
        Yedoy::new_unchecked(y, doy)
    }

    /// Converts date parts to ordinal parts without going through the epoch
    fn ordinal_parts_of(&self, ymd: Yemoda) -> Yedoy {
        let (y, m, d) = ymd.deconstruct();
        Yedoy::new_unchecked(y, self.get_day_of_year(y, m, d))
    }

    /// Converts ordinal parts to date parts without going through the epoch
    fn date_parts_of(&self, ydoy: Yedoy) -> Yemoda {
        let (y, doy) = ydoy.deconstruct();
        let (m, d) = self.get_month(y, doy);
        Yemoda::new_unchecked(y, m, d)
    }

    fn start_of_year_parts(&self, y: i32) -> Yemoda {
        Yemoda::at_start_of_year(y)
    }

    fn end_of_year_parts(&self, y: i32) -> Yemoda {
        let (m, d) = self.get_end_of_year_parts(y);
        Yemoda::new_unchecked(y, m, d)
    }

    fn start_of_month_parts(&self, y: i32, m: i32) -> Yemoda {
        Yemoda::new_unchecked(y, m, 1)
    }

    fn end_of_month_parts(&self, y: i32, m: i32) -> Yemoda {
        Yemoda::new_unchecked(y, m, self.count_days_in_month(y, m))
    }

    fn start_of_year_ordinal_parts(&self, y: i32) -> Yedoy {
        Yedoy::at_start_of_year(y)
    }

    fn end_of_year_ordinal_parts(&self, y: i32) -> Yedoy {
        Yedoy::new_unchecked(y, self.count_days_in_year(y))
    }

    fn start_of_month_ordinal_parts(&self, y: i32, m: i32) -> Yedoy {
        Yedoy::new_unchecked(y, self.count_days_in_year_before_month(y, m) + 1)
    }

    fn end_of_month_ordinal_parts(&self, y: i32, m: i32) -> Yedoy {
        Yedoy::new_unchecked(
            y,
            self.count_days_in_year_before_month(y, m) + self.count_days_in_month(y, m),
        )
    }

    /// First and last date parts of a range of years
    fn min_max_date_parts(&self, years: Range<i32>) -> (Yemoda, Yemoda) {
        (self.start_of_year_parts(years.min()), self.end_of_year_parts(years.max()))
    }

    /// First and last ordinal parts of a range of years
    fn min_max_ordinal_parts(&self, years: Range<i32>) -> (Yedoy, Yedoy) {
        (
            self.start_of_year_ordinal_parts(years.min()),
            self.end_of_year_ordinal_parts(years.max()),
        )
    }

    /// Days since the epoch of the first and last days of a range of years
    fn domain(&self, years: Range<i32>) -> Range<i32> {
        Range::new_unchecked(self.get_start_of_year(years.min()), self.get_end_of_year(years.max()))
    }
}

impl<S: CalendricalSchema + ?Sized> CalendricalPartsFactory for S {}
