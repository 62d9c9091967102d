//! Calendar math: adding years and months to dates, and counting them.
//!
//! Adding months or years may land on a day missing from the target month
//! (January 31st plus one month), or on a month missing from the target year
//! (the leap month of a lunisolar calendar). `AddAdjustment` decides what
//! happens then. Counting is defined in terms of adding: the count is the
//! largest number of units that can be added to the start without going past
//! the end.

use std::{cmp::Ordering, fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    SOLAR12_MONTHS_IN_YEAR, SOLAR13_MONTHS_IN_YEAR,
    calendar::{Calendar, CalendarCore, CalendarDate, CalendarId, CalendarMonth, OrdinalDate},
    error::{CalendricalError, Param, Result},
    parts::{Yedoy, Yemo, Yemoda},
    prelude::*,
    schema::CalendricalPartsFactory,
};

/// How to resolve a day (or month) that does not exist in the target period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum AddAdjustment {
    /// Use the last day of the target month (or year).
    #[default]
    EndOfMonth,
    /// Use the first day following the target month (or year).
    StartOfNextMonth,
    /// Carry the extra days over into the following month (or year).
    Exact,
}

/// Number of units between `start` and `end`: the count `n` furthest from
/// zero such that `add(n)` exists and does not pass `end`. The search starts
/// from `estimate`, which is usually exact.
fn count_toward_start<T: Ord>(start: T, end: T, estimate: i32, add: impl Fn(i32) -> Result<T>) -> i32 {
    let step = match start.cmp(&end) {
        Ordering::Less => 1,
        Ordering::Greater => -1,
        Ordering::Equal => return 0,
    };
    let within = |n: i32| {
        add(n).is_ok_and(|reached| match step {
            1 => reached <= end,
            _ => reached >= end,
        })
    };
    let mut count = estimate;
    while count != 0 && !within(count) {
        count -= step;
    }
    // Carried-over days can leave room for one more unit.
    while within(count + step) {
        count += step;
    }
    count
}

/// Year, month and day arithmetic bound to a calendar.
///
/// The public methods check that their operands belong to the calendar, then
/// defer to the `_core` methods, which assume it.
pub trait CalendarMath: Send + Sync + fmt::Debug {
    fn calendar_id(&self) -> CalendarId;

    fn add_adjustment(&self) -> AddAdjustment;

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_years_core(&self, date: CalendarDate, years: i32) -> Result<CalendarDate>;

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_months_core(&self, date: CalendarDate, months: i32) -> Result<CalendarDate>;

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_years_ordinal_core(&self, date: OrdinalDate, years: i32) -> Result<OrdinalDate>;

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_years_to_month_core(&self, month: CalendarMonth, years: i32) -> Result<CalendarMonth>;

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_months_to_month_core(&self, month: CalendarMonth, months: i32) -> Result<CalendarMonth>;

    /// Exact number of months from `start` to `end`
    fn count_months_between_months_core(&self, start: CalendarMonth, end: CalendarMonth) -> i32;

    fn count_years_between_core(&self, start: CalendarDate, end: CalendarDate) -> i32 {
        count_toward_start(start.parts(), end.parts(), end.year() - start.year(), |years| {
            self.add_years_core(start, years).map(CalendarDate::parts)
        })
    }

    fn count_months_between_core(&self, start: CalendarDate, end: CalendarDate) -> i32 {
        let estimate = self.count_months_between_months_core(start.calendar_month(), end.calendar_month());
        count_toward_start(start.parts(), end.parts(), estimate, |months| {
            self.add_months_core(start, months).map(CalendarDate::parts)
        })
    }

    fn count_years_between_ordinal_core(&self, start: OrdinalDate, end: OrdinalDate) -> i32 {
        count_toward_start(start.parts(), end.parts(), end.year() - start.year(), |years| {
            self.add_years_ordinal_core(start, years).map(OrdinalDate::parts)
        })
    }

    fn count_years_between_months_core(&self, start: CalendarMonth, end: CalendarMonth) -> i32 {
        count_toward_start(start.parts(), end.parts(), end.year() - start.year(), |years| {
            self.add_years_to_month_core(start, years).map(CalendarMonth::parts)
        })
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if `id` is not the id of this calendar.
    fn check_calendar(&self, id: CalendarId, param: Param) -> Result<()> {
        if id != self.calendar_id() {
            return Err(CalendricalError::invalid_argument(
                param,
                format!("belongs to calendar {id}, expected {}", self.calendar_id()),
            ));
        }
        Ok(())
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another
    /// calendar, or `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_years(&self, date: CalendarDate, years: i32) -> Result<CalendarDate> {
        self.check_calendar(date.calendar_id(), Param::Date)?;
        self.add_years_core(date, years)
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another
    /// calendar, or `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_months(&self, date: CalendarDate, months: i32) -> Result<CalendarDate> {
        self.check_calendar(date.calendar_id(), Param::Date)?;
        self.add_months_core(date, months)
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if a date belongs to another calendar.
    fn count_years_between(&self, start: CalendarDate, end: CalendarDate) -> Result<i32> {
        self.check_calendar(start.calendar_id(), Param::Start)?;
        self.check_calendar(end.calendar_id(), Param::End)?;
        Ok(self.count_years_between_core(start, end))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if a date belongs to another calendar.
    fn count_months_between(&self, start: CalendarDate, end: CalendarDate) -> Result<i32> {
        self.check_calendar(start.calendar_id(), Param::Start)?;
        self.check_calendar(end.calendar_id(), Param::End)?;
        Ok(self.count_months_between_core(start, end))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another
    /// calendar, or `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_years_ordinal(&self, date: OrdinalDate, years: i32) -> Result<OrdinalDate> {
        self.check_calendar(date.calendar_id(), Param::Date)?;
        self.add_years_ordinal_core(date, years)
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if a date belongs to another calendar.
    fn count_years_between_ordinal(&self, start: OrdinalDate, end: OrdinalDate) -> Result<i32> {
        self.check_calendar(start.calendar_id(), Param::Start)?;
        self.check_calendar(end.calendar_id(), Param::End)?;
        Ok(self.count_years_between_ordinal_core(start, end))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the month belongs to another
    /// calendar, or `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_years_to_month(&self, month: CalendarMonth, years: i32) -> Result<CalendarMonth> {
        self.check_calendar(month.calendar_id(), Param::Month)?;
        self.add_years_to_month_core(month, years)
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the month belongs to another
    /// calendar, or `CalendricalError::Overflow` if the result is outside the calendar.
    fn add_months_to_month(&self, month: CalendarMonth, months: i32) -> Result<CalendarMonth> {
        self.check_calendar(month.calendar_id(), Param::Month)?;
        self.add_months_to_month_core(month, months)
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if a month belongs to another calendar.
    fn count_years_between_months(&self, start: CalendarMonth, end: CalendarMonth) -> Result<i32> {
        self.check_calendar(start.calendar_id(), Param::Start)?;
        self.check_calendar(end.calendar_id(), Param::End)?;
        Ok(self.count_years_between_months_core(start, end))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if a month belongs to another calendar.
    fn count_months_between_months(&self, start: CalendarMonth, end: CalendarMonth) -> Result<i32> {
        self.check_calendar(start.calendar_id(), Param::Start)?;
        self.check_calendar(end.calendar_id(), Param::End)?;
        Ok(self.count_months_between_months_core(start, end))
    }
}

/// The calendar a math object is bound to, plus its adjustment policy.
#[derive(Debug, Clone)]
struct MathCore {
    calendar:   CalendarCore,
    adjustment: AddAdjustment,
}

impl MathCore {
    fn shift_year(&self, y: i32, years: i32, op: &'static str) -> Result<i32> {
        y.checked_add(years)
            .filter(|&y| self.calendar.scope.supported_years().contains(y))
            .ok_or(CalendricalError::Overflow(op))
    }

    fn date(&self, ymd: Yemoda) -> Result<CalendarDate> {
        self.calendar.check_date_bounds(ymd)?;
        Ok(CalendarDate::new_unchecked(ymd, self.calendar.id))
    }

    fn ordinal(&self, ydoy: Yedoy) -> Result<OrdinalDate> {
        self.calendar.check_ordinal_bounds(ydoy)?;
        Ok(OrdinalDate::new_unchecked(ydoy, self.calendar.id))
    }

    fn month(&self, ym: Yemo) -> Result<CalendarMonth> {
        self.calendar.check_month_bounds(ym)?;
        Ok(CalendarMonth::new_unchecked(ym, self.calendar.id))
    }

    /// Day `d` of the month `ym`, where `d` may be past its end
    fn resolve_day(&self, ym: Yemo, d: i32) -> Result<Yemoda> {
        let schema = &self.calendar.schema;
        let (y, m) = ym.deconstruct();
        let days_in_month = schema.count_days_in_month(y, m);
        if d <= days_in_month {
            return Ok(ym.day_parts(d));
        }
        let end_of_month = schema.end_of_month_parts(y, m);
        match self.adjustment {
            AddAdjustment::EndOfMonth => Ok(end_of_month),
            AddAdjustment::StartOfNextMonth => self.calendar.arithmetic.next_day(end_of_month),
            AddAdjustment::Exact => self.calendar.arithmetic.add_days(end_of_month, d - days_in_month),
        }
    }

    /// Day `d` of a month missing from the year `y`
    fn resolve_missing_month(&self, y: i32, d: i32) -> Result<Yemoda> {
        let end_of_year = self.calendar.schema.end_of_year_parts(y);
        match self.adjustment {
            AddAdjustment::EndOfMonth => Ok(end_of_year),
            AddAdjustment::StartOfNextMonth => self.calendar.arithmetic.next_day(end_of_year),
            AddAdjustment::Exact => self.calendar.arithmetic.add_days(end_of_year, d),
        }
    }

    fn add_years(&self, date: CalendarDate, years: i32) -> Result<CalendarDate> {
        let (y, m, d) = date.parts().deconstruct();
        let y = self.shift_year(y, years, "add_years")?;
        let ymd = if m > self.calendar.schema.count_months_in_year(y) {
            self.resolve_missing_month(y, d)?
        } else {
            self.resolve_day(Yemo::new_unchecked(y, m), d)?
        };
        self.date(ymd)
    }

    fn add_years_ordinal(&self, date: OrdinalDate, years: i32) -> Result<OrdinalDate> {
        let (y, doy) = date.parts().deconstruct();
        let y = self.shift_year(y, years, "add_years")?;
        let days_in_year = self.calendar.schema.count_days_in_year(y);
        let ydoy = if doy <= days_in_year {
            Yedoy::new_unchecked(y, doy)
        } else {
            let end_of_year = Yedoy::new_unchecked(y, days_in_year);
            let arithmetic = &self.calendar.arithmetic;
            match self.adjustment {
                AddAdjustment::EndOfMonth => end_of_year,
                AddAdjustment::StartOfNextMonth => arithmetic.next_day_ordinal(end_of_year)?,
                AddAdjustment::Exact => arithmetic.add_days_ordinal(end_of_year, doy - days_in_year)?,
            }
        };
        self.ordinal(ydoy)
    }

    fn add_years_to_month(&self, month: CalendarMonth, years: i32) -> Result<CalendarMonth> {
        let (y, m) = month.parts().deconstruct();
        let y = self.shift_year(y, years, "add_years")?;
        let months_in_year = self.calendar.schema.count_months_in_year(y);
        if m <= months_in_year {
            return self.month(Yemo::new_unchecked(y, m));
        }
        let ym = match self.adjustment {
            AddAdjustment::EndOfMonth => Yemo::new_unchecked(y, months_in_year),
            AddAdjustment::StartOfNextMonth => Yemo::new_unchecked(self.shift_year(y, 1, "add_years")?, 1),
            AddAdjustment::Exact => Yemo::new_unchecked(self.shift_year(y, 1, "add_years")?, m - months_in_year),
        };
        self.month(ym)
    }

    /// Shifts a month by a number of months, year by year.
    fn shift_month(&self, ym: Yemo, months: i32) -> Result<Yemo> {
        let schema = &self.calendar.schema;
        let (mut y, mut m) = ym.deconstruct();
        let mut months = months;
        if months >= 0 {
            loop {
                let remaining = schema.count_months_in_year(y) - m;
                if months <= remaining {
                    return Ok(Yemo::new_unchecked(y, m + months));
                }
                months -= remaining + 1;
                y = self.shift_year(y, 1, "add_months")?;
                m = 1;
            }
        }
        loop {
            if m + months > 0 {
                return Ok(Yemo::new_unchecked(y, m + months));
            }
            months += m;
            y = self.shift_year(y, -1, "add_months")?;
            m = schema.count_months_in_year(y);
        }
    }

    fn count_months_between(&self, start: Yemo, end: Yemo) -> i32 {
        if start > end {
            return -self.count_months_between(end, start);
        }
        let schema = &self.calendar.schema;
        let (y0, m0) = start.deconstruct();
        let (y1, m1) = end.deconstruct();
        if y0 == y1 {
            return m1 - m0;
        }
        let full_years: i32 = (y0 + 1..y1).map(|y| schema.count_months_in_year(y)).sum();
        schema.count_months_in_year(y0) - m0 + full_years + m1
    }

    /// Shifts a month of a regular calendar using a linear month index.
    fn shift_regular_month(&self, ym: Yemo, months: i32, months_in_year: i32) -> Result<Yemo> {
        let (y, m) = ym.deconstruct();
        let n = i64::from(months_in_year);
        let index = i64::from(y) * n + i64::from(m - 1) + i64::from(months);
        let y = i32::try_from(index.div_euclid(n))
            .ok()
            .filter(|&y| self.calendar.scope.supported_years().contains(y))
            .ok_or(CalendricalError::Overflow("add_months"))?;
        // Always within 1..=months_in_year.
        let m = index.rem_euclid(n) as i32 + 1;
        Ok(Yemo::new_unchecked(y, m))
    }

    fn add_months_regular(&self, date: CalendarDate, months: i32, months_in_year: i32) -> Result<CalendarDate> {
        let ym = self.shift_regular_month(date.parts().yemo(), months, months_in_year)?;
        let ymd = self.resolve_day(ym, date.day())?;
        self.date(ymd)
    }

    fn add_months_to_month_regular(&self, month: CalendarMonth, months: i32, months_in_year: i32) -> Result<CalendarMonth> {
        let ym = self.shift_regular_month(month.parts(), months, months_in_year)?;
        self.month(ym)
    }
}

const fn count_months_between_regular(start: Yemo, end: Yemo, months_in_year: i32) -> i32 {
    (end.year() - start.year()) * months_in_year + end.month() - start.month()
}

/// Number of months of a regular calendar, optionally required to be `expected`
fn require_regular(calendar: &Calendar, expected: Option<i32>) -> Result<i32> {
    match calendar.schema().months_in_year() {
        Some(n) if expected.is_none_or(|expected| expected == n) => Ok(n),
        _ => Err(CalendricalError::invalid_argument(
            Param::Schema,
            format!("calendar {} does not have the expected fixed number of months", calendar.key()),
        )),
    }
}

macro_rules! math_core_accessors {
    () => {
        fn calendar_id(&self) -> CalendarId {
            self.core.calendar.id
        }

        fn add_adjustment(&self) -> AddAdjustment {
            self.core.adjustment
        }

        fn add_years_core(&self, date: CalendarDate, years: i32) -> Result<CalendarDate> {
            self.core.add_years(date, years)
        }

        fn add_years_ordinal_core(&self, date: OrdinalDate, years: i32) -> Result<OrdinalDate> {
            self.core.add_years_ordinal(date, years)
        }
    };
}

/// Calendar math for any schema, stepping through the months year by year.
#[derive(Debug, Clone)]
pub struct DefaultMath {
    core: MathCore,
}

impl DefaultMath {
    pub fn new(calendar: &Calendar, adjustment: AddAdjustment) -> Self {
        Self::from_core(calendar.core().clone(), adjustment)
    }

    pub(crate) const fn from_core(calendar: CalendarCore, adjustment: AddAdjustment) -> Self {
        Self {
            core: MathCore { calendar, adjustment },
        }
    }
}

impl CalendarMath for DefaultMath {
    math_core_accessors!();

    fn add_months_core(&self, date: CalendarDate, months: i32) -> Result<CalendarDate> {
        let ym = self.core.shift_month(date.parts().yemo(), months)?;
        let ymd = self.core.resolve_day(ym, date.day())?;
        self.core.date(ymd)
    }

    fn add_years_to_month_core(&self, month: CalendarMonth, years: i32) -> Result<CalendarMonth> {
        self.core.add_years_to_month(month, years)
    }

    fn add_months_to_month_core(&self, month: CalendarMonth, months: i32) -> Result<CalendarMonth> {
        let ym = self.core.shift_month(month.parts(), months)?;
        self.core.month(ym)
    }

    fn count_months_between_months_core(&self, start: CalendarMonth, end: CalendarMonth) -> i32 {
        self.core.count_months_between(start.parts(), end.parts())
    }
}

/// Calendar math for regular schemas whose number of months is only known
/// at runtime.
#[derive(Debug, Clone)]
pub struct RegularMath {
    core:           MathCore,
    months_in_year: i32,
}

impl RegularMath {
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the schema of the calendar is not regular.
    pub fn new(calendar: &Calendar, adjustment: AddAdjustment) -> Result<Self> {
        let months_in_year = require_regular(calendar, None)?;
        Ok(Self::from_core(calendar.core().clone(), adjustment, months_in_year))
    }

    pub(crate) const fn from_core(calendar: CalendarCore, adjustment: AddAdjustment, months_in_year: i32) -> Self {
        Self {
            core: MathCore { calendar, adjustment },
            months_in_year,
        }
    }
}

impl CalendarMath for RegularMath {
    math_core_accessors!();

    fn add_months_core(&self, date: CalendarDate, months: i32) -> Result<CalendarDate> {
        self.core.add_months_regular(date, months, self.months_in_year)
    }

    fn add_years_to_month_core(&self, month: CalendarMonth, years: i32) -> Result<CalendarMonth> {
        let y = self.core.shift_year(month.year(), years, "add_years")?;
        self.core.month(Yemo::new_unchecked(y, month.month()))
    }

    fn add_months_to_month_core(&self, month: CalendarMonth, months: i32) -> Result<CalendarMonth> {
        self.core.add_months_to_month_regular(month, months, self.months_in_year)
    }

    fn count_months_between_months_core(&self, start: CalendarMonth, end: CalendarMonth) -> i32 {
        count_months_between_regular(start.parts(), end.parts(), self.months_in_year)
    }
}

/// Calendar math for regular schemas with `MONTHS_IN_YEAR` months.
#[derive(Debug, Clone)]
pub struct FixedRegularMath<const MONTHS_IN_YEAR: i32> {
    core: MathCore,
}

/// Calendar math for regular schemas with twelve months
pub type Regular12Math = FixedRegularMath<SOLAR12_MONTHS_IN_YEAR>;
/// Calendar math for regular schemas with thirteen months
pub type Regular13Math = FixedRegularMath<SOLAR13_MONTHS_IN_YEAR>;

impl<const MONTHS_IN_YEAR: i32> FixedRegularMath<MONTHS_IN_YEAR> {
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the schema of the calendar
    /// does not have exactly `MONTHS_IN_YEAR` months.
    pub fn new(calendar: &Calendar, adjustment: AddAdjustment) -> Result<Self> {
        require_regular(calendar, Some(MONTHS_IN_YEAR))?;
        Ok(Self::from_core(calendar.core().clone(), adjustment))
    }

    pub(crate) const fn from_core(calendar: CalendarCore, adjustment: AddAdjustment) -> Self {
        Self {
            core: MathCore { calendar, adjustment },
        }
    }
}

impl<const MONTHS_IN_YEAR: i32> CalendarMath for FixedRegularMath<MONTHS_IN_YEAR> {
    math_core_accessors!();

    fn add_months_core(&self, date: CalendarDate, months: i32) -> Result<CalendarDate> {
        self.core.add_months_regular(date, months, MONTHS_IN_YEAR)
    }

    fn add_years_to_month_core(&self, month: CalendarMonth, years: i32) -> Result<CalendarMonth> {
        let y = self.core.shift_year(month.year(), years, "add_years")?;
        self.core.month(Yemo::new_unchecked(y, month.month()))
    }

    fn add_months_to_month_core(&self, month: CalendarMonth, months: i32) -> Result<CalendarMonth> {
        self.core.add_months_to_month_regular(month, months, MONTHS_IN_YEAR)
    }

    fn count_months_between_months_core(&self, start: CalendarMonth, end: CalendarMonth) -> i32 {
        count_months_between_regular(start.parts(), end.parts(), MONTHS_IN_YEAR)
    }
}

/// Picks the calendar math matching the shape of the schema.
pub(crate) fn math_for(calendar: CalendarCore, adjustment: AddAdjustment) -> Arc<dyn CalendarMath> {
    let math: Arc<dyn CalendarMath> = match calendar.schema.months_in_year() {
        Some(SOLAR12_MONTHS_IN_YEAR) => Arc::new(Regular12Math::from_core(calendar, adjustment)),
        Some(SOLAR13_MONTHS_IN_YEAR) => Arc::new(Regular13Math::from_core(calendar, adjustment)),
        Some(n) => Arc::new(RegularMath::from_core(calendar, adjustment, n)),
        None => Arc::new(DefaultMath::from_core(calendar, adjustment)),
    };
    tracing::debug!(%adjustment, ?math, "selected calendar math");
    math
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::CalendarConfig,
        day_number::DayZero,
        schema::{GregorianSchema, InternationalFixedSchema, LunisolarSchema},
    };

    fn gregorian() -> Calendar {
        Calendar::new(&CalendarConfig::new("Gregorian"), Arc::new(GregorianSchema), DayZero::NEW_STYLE)
            .expect("failed to create calendar")
    }

    fn lunisolar() -> Calendar {
        Calendar::new(&CalendarConfig::new("Lunisolar"), Arc::new(LunisolarSchema), DayZero::NEW_STYLE)
            .expect("failed to create calendar")
    }

    #[test]
    fn test_math_selection() {
        let cal = gregorian();
        assert!(format!("{:?}", cal.math()).starts_with("FixedRegularMath"));
        assert_eq!(cal.math().calendar_id(), cal.id());
        assert_eq!(cal.math().add_adjustment(), AddAdjustment::EndOfMonth);

        let cal = lunisolar();
        assert!(format!("{:?}", cal.math()).starts_with("DefaultMath"));
    }

    #[test]
    fn test_add_months_and_years_adjustments() {
        struct TestCase {
            adjustment:  AddAdjustment,
            date:        (i32, i32, i32),
            months:      i32,
            years:       i32,
            expected:    (i32, i32, i32),
            description: &'static str,
        }

        let cal = gregorian();
        let test_cases = [
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                date:        (2023, 1, 31),
                months:      1,
                years:       0,
                expected:    (2023, 2, 28),
                description: "end of month clamps to the last day",
            },
            TestCase {
                adjustment:  AddAdjustment::StartOfNextMonth,
                date:        (2023, 1, 31),
                months:      1,
                years:       0,
                expected:    (2023, 3, 1),
                description: "start of next month moves to the first day after",
            },
            TestCase {
                adjustment:  AddAdjustment::Exact,
                date:        (2023, 1, 31),
                months:      1,
                years:       0,
                expected:    (2023, 3, 3),
                description: "exact carries the missing days over",
            },
            TestCase {
                adjustment:  AddAdjustment::Exact,
                date:        (2024, 1, 31),
                months:      1,
                years:       0,
                expected:    (2024, 3, 2),
                description: "exact in a leap year",
            },
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                date:        (2023, 3, 31),
                months:      -1,
                years:       0,
                expected:    (2023, 2, 28),
                description: "backward month clamps too",
            },
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                date:        (2023, 11, 15),
                months:      14,
                years:       0,
                expected:    (2025, 1, 15),
                description: "months across years",
            },
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                date:        (2024, 2, 29),
                months:      0,
                years:       1,
                expected:    (2025, 2, 28),
                description: "leap day plus one year, end of month",
            },
            TestCase {
                adjustment:  AddAdjustment::StartOfNextMonth,
                date:        (2024, 2, 29),
                months:      0,
                years:       1,
                expected:    (2025, 3, 1),
                description: "leap day plus one year, start of next month",
            },
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                date:        (2024, 2, 29),
                months:      0,
                years:       4,
                expected:    (2028, 2, 29),
                description: "leap day plus four years",
            },
        ];

        for test in test_cases {
            cal.set_add_adjustment(test.adjustment);
            let (y, m, d) = test.date;
            let date = cal.date(y, m, d).expect("failed to create date");
            let result = if test.years == 0 {
                cal.add_months(date, test.months)
            } else {
                cal.add_years(date, test.years)
            }
            .expect("failed to add");
            assert_eq!(result.parts().deconstruct(), test.expected, "{}", test.description);
        }
    }

    #[test]
    fn test_missing_leap_month() {
        let cal = lunisolar();
        let date = cal.date(4, 13, 30).expect("failed to create date");
        let month = date.calendar_month();

        for (adjustment, expected_date, expected_month) in [
            (AddAdjustment::EndOfMonth, (5, 12, 29), (5, 12)),
            (AddAdjustment::StartOfNextMonth, (6, 1, 1), (6, 1)),
            (AddAdjustment::Exact, (6, 1, 30), (6, 1)),
        ] {
            cal.set_add_adjustment(adjustment);
            let result = cal.add_years(date, 1).expect("failed to add years");
            assert_eq!(result.parts().deconstruct(), expected_date, "{adjustment}");
            let result = cal.math().add_years_to_month(month, 1).expect("failed to add years");
            assert_eq!(result.parts().deconstruct(), expected_month, "{adjustment}");
        }

        let math = cal.math();
        let result = math.add_months_to_month(month, 1).expect("failed to add months");
        assert_eq!(result.parts().deconstruct(), (5, 1));
        let result = math.add_months_to_month(result, -1).expect("failed to add months");
        assert_eq!(result, month);

        let start = cal.calendar_month(4, 1).expect("failed to create month");
        let end = cal.calendar_month(5, 1).expect("failed to create month");
        assert_eq!(math.count_months_between_months(start, end).expect("failed to count"), 13);
        assert_eq!(math.count_months_between_months(end, start).expect("failed to count"), -13);
        let start = cal.calendar_month(3, 1).expect("failed to create month");
        assert_eq!(math.count_months_between_months(start, end).expect("failed to count"), 25);
    }

    #[test]
    fn test_default_math_matches_regular_math() {
        let cal = gregorian();
        let default = DefaultMath::new(&cal, AddAdjustment::EndOfMonth);
        let regular = Regular12Math::new(&cal, AddAdjustment::EndOfMonth).expect("failed to create math");

        for (y, m, d) in [(2000, 1, 31), (2023, 6, 15), (2024, 12, 31)] {
            let date = cal.date(y, m, d).expect("failed to create date");
            for months in -30..=30 {
                assert_eq!(
                    default.add_months(date, months).expect("failed to add months"),
                    regular.add_months(date, months).expect("failed to add months"),
                    "{date} + {months} months"
                );
            }
            let end = cal.date(2030, 2, 1).expect("failed to create date");
            assert_eq!(
                default.count_months_between(date, end).expect("failed to count"),
                regular.count_months_between(date, end).expect("failed to count"),
            );
        }
    }

    #[test]
    fn test_counts_floor_toward_start() {
        struct TestCase {
            adjustment:  AddAdjustment,
            start:       (i32, i32, i32),
            end:         (i32, i32, i32),
            months:      i32,
            years:       i32,
            description: &'static str,
        }

        let cal = gregorian();
        let test_cases = [
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                start:       (2023, 1, 31),
                end:         (2023, 2, 28),
                months:      1,
                years:       0,
                description: "clamped month counts as a full month",
            },
            TestCase {
                adjustment:  AddAdjustment::StartOfNextMonth,
                start:       (2023, 1, 31),
                end:         (2023, 2, 28),
                months:      0,
                years:       0,
                description: "adding one month goes past the end",
            },
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                start:       (2023, 3, 15),
                end:         (2023, 2, 20),
                months:      0,
                years:       0,
                description: "less than a month backward",
            },
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                start:       (2023, 3, 15),
                end:         (2023, 2, 15),
                months:      -1,
                years:       0,
                description: "exactly one month backward",
            },
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                start:       (2024, 2, 29),
                end:         (2025, 2, 28),
                months:      12,
                years:       1,
                description: "leap day to the end of february",
            },
            TestCase {
                adjustment:  AddAdjustment::StartOfNextMonth,
                start:       (2024, 2, 29),
                end:         (2025, 2, 28),
                months:      11,
                years:       0,
                description: "leap day to the end of february, start of next month",
            },
            TestCase {
                adjustment:  AddAdjustment::Exact,
                start:       (2023, 1, 31),
                end:         (2023, 3, 1),
                months:      0,
                years:       0,
                description: "carried days pass the end",
            },
            TestCase {
                adjustment:  AddAdjustment::Exact,
                start:       (2023, 1, 31),
                end:         (2023, 3, 3),
                months:      1,
                years:       0,
                description: "carried days reach the end",
            },
            TestCase {
                adjustment:  AddAdjustment::Exact,
                start:       (2023, 3, 31),
                end:         (2023, 3, 2),
                months:      -1,
                years:       0,
                description: "carried days leave room for one more month backward",
            },
            TestCase {
                adjustment:  AddAdjustment::EndOfMonth,
                start:       (2020, 6, 10),
                end:         (2023, 6, 9),
                months:      35,
                years:       2,
                description: "one day short of three years",
            },
        ];

        for test in test_cases {
            cal.set_add_adjustment(test.adjustment);
            let (y, m, d) = test.start;
            let start = cal.date(y, m, d).expect("failed to create date");
            let (y, m, d) = test.end;
            let end = cal.date(y, m, d).expect("failed to create date");
            let months = cal.count_months_between(start, end).expect("failed to count months");
            assert_eq!(months, test.months, "{}", test.description);
            let years = cal.count_years_between(start, end).expect("failed to count years");
            assert_eq!(years, test.years, "{}", test.description);
        }
    }

    fn assert_largest_count(
        start: CalendarDate,
        end: CalendarDate,
        count: i32,
        add: impl Fn(i32) -> Result<CalendarDate>,
        unit: &str,
    ) {
        let (start, end) = (start.parts(), end.parts());
        let reached = add(count).expect("failed to add").parts();
        let step = if start <= end { 1 } else { -1 };
        let passes = |reached: Yemoda| if step > 0 { reached > end } else { reached < end };
        assert!(!passes(reached), "{start} + {count} {unit} = {reached} passes {end}");
        let next = add(count + step).map(CalendarDate::parts);
        assert!(
            next.is_err() || next.is_ok_and(passes),
            "{start} + {} {unit} does not pass {end}",
            count + step
        );
    }

    #[test]
    fn test_counts_are_the_largest_not_passing_the_end() {
        let cal = gregorian();
        let first_end = cal.date(2022, 11, 1).expect("failed to create date");
        let starts = [(2023, 1, 31), (2023, 3, 31), (2023, 5, 30), (2023, 12, 31), (2024, 2, 29)];

        for adjustment in [AddAdjustment::EndOfMonth, AddAdjustment::StartOfNextMonth, AddAdjustment::Exact] {
            cal.set_add_adjustment(adjustment);
            let math = cal.math();
            for (y, m, d) in starts {
                let start = cal.date(y, m, d).expect("failed to create date");
                for offset in 0..900 {
                    let end = cal.add_days(first_end, offset).expect("failed to add days");
                    let months = math.count_months_between(start, end).expect("failed to count months");
                    assert_largest_count(start, end, months, |n| math.add_months(start, n), "months");
                    let years = math.count_years_between(start, end).expect("failed to count years");
                    assert_largest_count(start, end, years, |n| math.add_years(start, n), "years");
                }
            }
        }
    }

    #[test]
    fn test_add_years_ordinal() {
        let cal = gregorian();
        let date = cal.ordinal_date(2024, 366).expect("failed to create date");
        for (adjustment, expected) in [
            (AddAdjustment::EndOfMonth, (2025, 365)),
            (AddAdjustment::StartOfNextMonth, (2026, 1)),
            (AddAdjustment::Exact, (2026, 1)),
        ] {
            cal.set_add_adjustment(adjustment);
            let math = cal.math();
            let result = math.add_years_ordinal(date, 1).expect("failed to add years");
            assert_eq!(result.parts().deconstruct(), expected, "{adjustment}");
        }

        let start = cal.ordinal_date(2020, 60).expect("failed to create date");
        let end = cal.ordinal_date(2023, 59).expect("failed to create date");
        assert_eq!(cal.math().count_years_between_ordinal(start, end).expect("failed to count"), 2);
    }

    #[test]
    fn test_overflow() {
        let cal = gregorian();
        let last = cal.date(9999, 12, 15).expect("failed to create date");
        let err = cal.add_months(last, 1).expect_err("expected overflow");
        assert!(err.is_overflow());
        let err = cal.add_years(last, 1).expect_err("expected overflow");
        assert!(err.is_overflow());

        let first = cal.date(1, 1, 1).expect("failed to create date");
        let err = cal.add_years(first, -1).expect_err("expected overflow");
        assert!(err.is_overflow());
        let err = cal.add_months(first, i32::MIN).expect_err("expected overflow");
        assert!(err.is_overflow());

        cal.set_add_adjustment(AddAdjustment::StartOfNextMonth);
        let date = cal.date(9999, 10, 31).expect("failed to create date");
        let result = cal.add_months(date, 1).expect("failed to add months");
        assert_eq!(result.parts().deconstruct(), (9999, 12, 1));
    }

    #[test]
    fn test_rejects_foreign_operands() {
        let cal = gregorian();
        let other = gregorian();
        assert_ne!(cal.id(), other.id());

        let date = other.date(2000, 1, 1).expect("failed to create date");
        let own = cal.date(2000, 1, 1).expect("failed to create date");
        let math = cal.math();

        let err = math.add_months(date, 1).expect_err("expected error");
        assert!(err.is_invalid_argument());
        assert_eq!(err.param(), Some(Param::Date));

        let err = math.count_months_between(own, date).expect_err("expected error");
        assert_eq!(err.param(), Some(Param::End));
        let err = math.count_years_between(date, own).expect_err("expected error");
        assert_eq!(err.param(), Some(Param::Start));

        let err = math.add_years_to_month(date.calendar_month(), 1).expect_err("expected error");
        assert_eq!(err.param(), Some(Param::Month));
    }

    #[test]
    fn test_regular_math_requires_matching_schema() {
        let ifc = Calendar::new(
            &CalendarConfig::new("International Fixed"),
            Arc::new(InternationalFixedSchema),
            DayZero::NEW_STYLE,
        )
        .expect("failed to create calendar");

        let err = Regular12Math::new(&ifc, AddAdjustment::EndOfMonth).expect_err("expected error");
        assert!(err.is_invalid_argument());
        assert_eq!(err.param(), Some(Param::Schema));
        assert!(Regular13Math::new(&ifc, AddAdjustment::EndOfMonth).is_ok());
        assert!(RegularMath::new(&ifc, AddAdjustment::EndOfMonth).is_ok());

        let err = RegularMath::new(&lunisolar(), AddAdjustment::EndOfMonth).expect_err("expected error");
        assert_eq!(err.param(), Some(Param::Schema));
    }

    #[test]
    fn test_set_math() {
        let cal = gregorian();
        let other = gregorian();

        let err = cal
            .set_math(Arc::new(DefaultMath::new(&other, AddAdjustment::Exact)))
            .expect_err("expected error");
        assert!(err.is_invalid_argument());
        assert_eq!(err.param(), Some(Param::Math));
        assert_eq!(cal.math().add_adjustment(), AddAdjustment::EndOfMonth);

        cal.set_math(Arc::new(DefaultMath::new(&cal, AddAdjustment::Exact)))
            .expect("failed to set math");
        assert!(format!("{:?}", cal.math()).starts_with("DefaultMath"));
        let date = cal.date(2023, 1, 31).expect("failed to create date");
        let result = cal.add_months(date, 1).expect("failed to add months");
        assert_eq!(result.parts().deconstruct(), (2023, 3, 3));
    }
}
