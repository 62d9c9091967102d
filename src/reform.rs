//! The switch from the Julian to the Gregorian calendar.
//!
//! A reform is given by the last day counted in the Julian calendar and the
//! first day counted in the Gregorian calendar. The two are consecutive days:
//! the calendar dates jump, the day numbers do not.

use std::sync::Arc;

use crate::{
    STANDARD_MAX_YEAR,
    day_number::{CalendarEpoch, DayNumber},
    error::{CalendricalError, Param, Result},
    parts::Yemoda,
    schema::{CalendricalPartsFactory, CalendricalSchema, GregorianSchema, JulianSchema},
    scope::{BoundedBelowScope, CalendricalScope, MinMaxYearScope},
};

/// A switch from the Julian to the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianReform {
    last_julian_date:     Yemoda,
    first_gregorian_date: Yemoda,
    switchover:           DayNumber,
}

impl GregorianReform {
    /// Thursday, October 4th, 1582 (Julian) followed by Friday, October 15th,
    /// 1582 (Gregorian)
    pub const OFFICIAL: Self = Self {
        last_julian_date:     Yemoda::new_unchecked(1582, 10, 4),
        first_gregorian_date: Yemoda::new_unchecked(1582, 10, 15),
        switchover:           DayNumber::from_days_since_zero(577_735),
    };

    /// Reform whose last Julian date is `y-m-d`.
    ///
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the date is invalid or
    /// precedes the official reform, or `CalendricalError::Overflow` if the
    /// following day is past the year 9999 of the Gregorian calendar.
    pub fn from_last_julian_date(y: i32, m: i32, d: i32) -> Result<Self> {
        let last_julian_date = validated_parts(JulianSchema, CalendarEpoch::JULIAN, y, m, d)?;
        if last_julian_date < Self::OFFICIAL.last_julian_date {
            return Err(CalendricalError::out_of_range(Param::Year, y));
        }
        let switchover = day_number_on(&JulianSchema, CalendarEpoch::JULIAN, last_julian_date)?.next_day()?;
        let first_gregorian_date = parts_on(&GregorianSchema, CalendarEpoch::GREGORIAN, switchover)?;
        if first_gregorian_date.year() > STANDARD_MAX_YEAR {
            return Err(CalendricalError::Overflow("first Gregorian date"));
        }
        Ok(Self::new(last_julian_date, first_gregorian_date, switchover))
    }

    /// Reform whose first Gregorian date is `y-m-d`.
    ///
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the date is invalid or
    /// precedes the official reform.
    pub fn from_first_gregorian_date(y: i32, m: i32, d: i32) -> Result<Self> {
        let first_gregorian_date = validated_parts(GregorianSchema, CalendarEpoch::GREGORIAN, y, m, d)?;
        if first_gregorian_date < Self::OFFICIAL.first_gregorian_date {
            return Err(CalendricalError::out_of_range(Param::Year, y));
        }
        let switchover = day_number_on(&GregorianSchema, CalendarEpoch::GREGORIAN, first_gregorian_date)?;
        let last_julian_date = parts_on(&JulianSchema, CalendarEpoch::JULIAN, switchover.previous_day()?)?;
        Ok(Self::new(last_julian_date, first_gregorian_date, switchover))
    }

    fn new(last_julian_date: Yemoda, first_gregorian_date: Yemoda, switchover: DayNumber) -> Self {
        tracing::debug!(%last_julian_date, %first_gregorian_date, %switchover, "created Gregorian reform");
        Self {
            last_julian_date,
            first_gregorian_date,
            switchover,
        }
    }

    pub const fn last_julian_date(&self) -> Yemoda {
        self.last_julian_date
    }

    pub const fn first_gregorian_date(&self) -> Yemoda {
        self.first_gregorian_date
    }

    /// Day number of the first Gregorian date
    pub const fn switchover(&self) -> DayNumber {
        self.switchover
    }

    /// Number of days the Julian calendar has counted in excess of the
    /// Gregorian one at the switchover, 10 for the official reform.
    ///
    /// This is the Julian day number of the parts of the first Gregorian date
    /// minus the switchover.
    pub const fn secular_shift(&self) -> i32 {
        let (y, m, _) = self.first_gregorian_date.deconstruct();
        let c = y / 100;
        // The Julian epoch falls two days before the Gregorian one.
        let shift = c - c / 4 - 2;
        // The Julian leap day of a common Gregorian century year comes at the end of February.
        if m <= 2 && y % 100 == 0 && c % 4 != 0 { shift - 1 } else { shift }
    }

    /// Gregorian scope starting on the first Gregorian date
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the scope cannot be built.
    pub fn gregorian_scope(&self) -> Result<BoundedBelowScope> {
        BoundedBelowScope::new(
            Arc::new(GregorianSchema),
            CalendarEpoch::GREGORIAN,
            self.first_gregorian_date,
            STANDARD_MAX_YEAR,
        )
    }
}

impl Default for GregorianReform {
    fn default() -> Self {
        Self::OFFICIAL
    }
}

fn validated_parts<S>(schema: S, epoch: DayNumber, y: i32, m: i32, d: i32) -> Result<Yemoda>
where
    S: CalendricalSchema + 'static,
{
    MinMaxYearScope::standard(Arc::new(schema), epoch)?.validate_year_month_day(y, m, d)?;
    Ok(Yemoda::new_unchecked(y, m, d))
}

fn day_number_on(schema: &dyn CalendricalSchema, epoch: DayNumber, ymd: Yemoda) -> Result<DayNumber> {
    let (y, m, d) = ymd.deconstruct();
    epoch.checked_add_days(schema.count_days_since_epoch(y, m, d))
}

fn parts_on(schema: &dyn CalendricalSchema, epoch: DayNumber, day_number: DayNumber) -> Result<Yemoda> {
    Ok(schema.date_parts(day_number.checked_days_since(epoch)?))
}
