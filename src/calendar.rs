//! Calendars and the dates they produce.
//!
//! A calendar binds a schema, an epoch and a scope, and picks the arithmetic
//! engine and the calendar math for them. Every date carries the id of the
//! calendar that produced it, and binary operations refuse dates from another
//! calendar.

use std::{
    cmp::Ordering,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{self, AtomicU32},
    },
};

use crate::{
    MIN_MIN_DAYS_IN_MONTH, STANDARD_MIN_YEAR,
    arithmetic::{CalendricalArithmetic, arithmetic_for},
    config::CalendarConfig,
    day_number::{DayNumber, DayOfWeek},
    error::{CalendricalError, Param, Result},
    math::{AddAdjustment, CalendarMath, math_for},
    parts::{Yedoy, Yemo, Yemoda},
    prelude::*,
    range::Range,
    schema::{CalendricalAdjustments, CalendricalAlgorithm, CalendricalFamily, CalendricalPartsFactory, CalendricalSchema},
    scope::{CalendricalScope, MinMaxYearScope},
};

static NEXT_CALENDAR_ID: AtomicU32 = AtomicU32::new(0);

/// Identifier of a calendar, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "#{}", _0)]
pub struct CalendarId(u32);

impl CalendarId {
    fn next() -> Result<Self> {
        NEXT_CALENDAR_ID
            .fetch_update(atomic::Ordering::Relaxed, atomic::Ordering::Relaxed, |id| id.checked_add(1))
            .map(Self)
            .map_err(|_| CalendricalError::Overflow("calendar id"))
    }
}

/// A date given by its year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", parts)]
pub struct CalendarDate {
    parts: Yemoda,
    id:    CalendarId,
}

impl CalendarDate {
    pub(crate) const fn new_unchecked(parts: Yemoda, id: CalendarId) -> Self {
        Self { parts, id }
    }

    pub const fn parts(self) -> Yemoda {
        self.parts
    }

    pub const fn calendar_id(self) -> CalendarId {
        self.id
    }

    pub const fn year(self) -> i32 {
        self.parts.year()
    }

    pub const fn month(self) -> i32 {
        self.parts.month()
    }

    pub const fn day(self) -> i32 {
        self.parts.day()
    }

    /// The month this date belongs to
    pub const fn calendar_month(self) -> CalendarMonth {
        CalendarMonth::new_unchecked(self.parts.yemo(), self.id)
    }
}

/// A date given by its year and day of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", parts)]
pub struct OrdinalDate {
    parts: Yedoy,
    id:    CalendarId,
}

impl OrdinalDate {
    pub(crate) const fn new_unchecked(parts: Yedoy, id: CalendarId) -> Self {
        Self { parts, id }
    }

    pub const fn parts(self) -> Yedoy {
        self.parts
    }

    pub const fn calendar_id(self) -> CalendarId {
        self.id
    }

    pub const fn year(self) -> i32 {
        self.parts.year()
    }

    pub const fn day_of_year(self) -> i32 {
        self.parts.day_of_year()
    }
}

/// A month given by its year and month of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", parts)]
pub struct CalendarMonth {
    parts: Yemo,
    id:    CalendarId,
}

impl CalendarMonth {
    pub(crate) const fn new_unchecked(parts: Yemo, id: CalendarId) -> Self {
        Self { parts, id }
    }

    pub const fn parts(self) -> Yemo {
        self.parts
    }

    pub const fn calendar_id(self) -> CalendarId {
        self.id
    }

    pub const fn year(self) -> i32 {
        self.parts.year()
    }

    pub const fn month(self) -> i32 {
        self.parts.month()
    }
}

/// The parts of a calendar shared with its calendar math.
#[derive(Debug, Clone)]
pub(crate) struct CalendarCore {
    pub(crate) id:         CalendarId,
    pub(crate) schema:     Arc<dyn CalendricalSchema>,
    pub(crate) scope:      Arc<dyn CalendricalScope>,
    pub(crate) arithmetic: Arc<dyn CalendricalArithmetic>,
}

impl CalendarCore {
    fn check_calendar(&self, id: CalendarId, param: Param) -> Result<()> {
        if id != self.id {
            return Err(CalendricalError::invalid_argument(
                param,
                format!("belongs to calendar {id}, expected {}", self.id),
            ));
        }
        Ok(())
    }

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the date parts fall outside the scope.
    pub(crate) fn check_date_bounds(&self, ymd: Yemoda) -> Result<()> {
        let (min, max) = self.scope.min_max_date_parts();
        if ymd < min || ymd > max {
            return Err(CalendricalError::Overflow("date"));
        }
        Ok(())
    }

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the ordinal parts fall outside the scope.
    pub(crate) fn check_ordinal_bounds(&self, ydoy: Yedoy) -> Result<()> {
        let (min, max) = self.scope.min_max_ordinal_parts();
        if ydoy < min || ydoy > max {
            return Err(CalendricalError::Overflow("ordinal date"));
        }
        Ok(())
    }

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the month falls outside the scope.
    pub(crate) fn check_month_bounds(&self, ym: Yemo) -> Result<()> {
        let (min, max) = self.scope.min_max_date_parts();
        if ym < min.yemo() || ym > max.yemo() {
            return Err(CalendricalError::Overflow("month"));
        }
        Ok(())
    }

    fn date(&self, ymd: Yemoda) -> CalendarDate {
        CalendarDate::new_unchecked(ymd, self.id)
    }

    fn ordinal(&self, ydoy: Yedoy) -> OrdinalDate {
        OrdinalDate::new_unchecked(ydoy, self.id)
    }
}

/// A calendar: a schema anchored to an epoch and restricted to a scope.
#[derive(Debug)]
pub struct Calendar {
    key:       String,
    proleptic: bool,
    core:      CalendarCore,
    math:      RwLock<Arc<dyn CalendarMath>>,
}

impl Calendar {
    /// Creates a calendar covering the years 1 to 9999, or -9998 to 9999 if
    /// the configuration asks for a proleptic calendar.
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the configuration is
    /// invalid, if the schema has months shorter than `MIN_MIN_DAYS_IN_MONTH`
    /// days, or if it does not support the years of the calendar.
    pub fn new(config: &CalendarConfig, schema: Arc<dyn CalendricalSchema>, epoch: DayNumber) -> Result<Self> {
        config.validate()?;
        let scope = if config.proleptic() {
            MinMaxYearScope::proleptic(schema, epoch)?
        } else {
            MinMaxYearScope::standard(schema, epoch)?
        };
        Self::with_scope(config, Arc::new(scope))
    }

    /// Creates a calendar over an existing scope. The proleptic flag of the
    /// configuration is ignored: the scope decides.
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the configuration is
    /// invalid, or if the schema has months shorter than `MIN_MIN_DAYS_IN_MONTH` days.
    pub fn with_scope(config: &CalendarConfig, scope: Arc<dyn CalendricalScope>) -> Result<Self> {
        config.validate()?;
        let schema = scope.schema().clone();
        check_month_length(schema.as_ref())?;

        let arithmetic = arithmetic_for(schema.clone(), scope.supported_years())?;
        let core = CalendarCore {
            id: CalendarId::next()?,
            schema,
            scope,
            arithmetic,
        };
        let math = math_for(core.clone(), config.add_adjustment());
        let proleptic = core.scope.supported_years().min() < STANDARD_MIN_YEAR;

        tracing::debug!(
            key = config.key(),
            id = %core.id,
            epoch = %core.scope.epoch(),
            years = %core.scope.supported_years(),
            proleptic,
            "created calendar"
        );
        Ok(Self {
            key: config.key().to_owned(),
            proleptic,
            core,
            math: RwLock::new(math),
        })
    }

    pub(crate) const fn core(&self) -> &CalendarCore {
        &self.core
    }

    pub const fn id(&self) -> CalendarId {
        self.core.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn schema(&self) -> &Arc<dyn CalendricalSchema> {
        &self.core.schema
    }

    pub fn scope(&self) -> &Arc<dyn CalendricalScope> {
        &self.core.scope
    }

    pub fn epoch(&self) -> DayNumber {
        self.core.scope.epoch()
    }

    /// Whether the calendar supports years before 1
    pub const fn is_proleptic(&self) -> bool {
        self.proleptic
    }

    pub fn family(&self) -> CalendricalFamily {
        self.core.schema.family()
    }

    pub fn algorithm(&self) -> CalendricalAlgorithm {
        self.core.schema.algorithm()
    }

    pub fn periodic_adjustments(&self) -> CalendricalAdjustments {
        self.core.schema.periodic_adjustments()
    }

    pub fn supported_years(&self) -> Range<i32> {
        self.core.scope.supported_years()
    }

    /// Day numbers of the first and last days of the calendar
    pub fn domain(&self) -> Range<DayNumber> {
        self.core.scope.domain()
    }

    // Calendar math.

    /// The calendar math currently in use
    pub fn math(&self) -> Arc<dyn CalendarMath> {
        self.math.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replaces the calendar math.
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the math is bound to another calendar.
    pub fn set_math(&self, math: Arc<dyn CalendarMath>) -> Result<()> {
        self.core.check_calendar(math.calendar_id(), Param::Math)?;
        tracing::debug!(id = %self.core.id, adjustment = %math.add_adjustment(), "replaced calendar math");
        *self.math.write().unwrap_or_else(PoisonError::into_inner) = math;
        Ok(())
    }

    /// Replaces the calendar math by the default one for this calendar, with
    /// another adjustment policy.
    pub fn set_add_adjustment(&self, adjustment: AddAdjustment) {
        let math = math_for(self.core.clone(), adjustment);
        tracing::debug!(id = %self.core.id, %adjustment, "replaced calendar math");
        *self.math.write().unwrap_or_else(PoisonError::into_inner) = math;
    }

    // Factories.

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the invalid component.
    pub fn date(&self, y: i32, m: i32, d: i32) -> Result<CalendarDate> {
        self.core.scope.validate_year_month_day(y, m, d)?;
        Ok(self.core.date(Yemoda::new_unchecked(y, m, d)))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the invalid component.
    pub fn ordinal_date(&self, y: i32, doy: i32) -> Result<OrdinalDate> {
        self.core.scope.validate_ordinal(y, doy)?;
        Ok(self.core.ordinal(Yedoy::new_unchecked(y, doy)))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the invalid component.
    pub fn calendar_month(&self, y: i32, m: i32) -> Result<CalendarMonth> {
        self.core.scope.validate_year_month(y, m)?;
        Ok(CalendarMonth::new_unchecked(Yemo::new_unchecked(y, m), self.core.id))
    }

    // Conversions.

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the day number is outside the calendar.
    pub fn date_from_day_number(&self, day_number: DayNumber) -> Result<CalendarDate> {
        let days = self.days_since_epoch(day_number)?;
        Ok(self.core.date(self.core.schema.date_parts(days)))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the day number is outside the calendar.
    pub fn ordinal_date_from_day_number(&self, day_number: DayNumber) -> Result<OrdinalDate> {
        let days = self.days_since_epoch(day_number)?;
        Ok(self.core.ordinal(self.core.schema.ordinal_parts(days)))
    }

    fn days_since_epoch(&self, day_number: DayNumber) -> Result<i32> {
        self.core.scope.validate_day_number(day_number)?;
        day_number.checked_days_since(self.epoch())
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another calendar.
    pub fn day_number(&self, date: CalendarDate) -> Result<DayNumber> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        let (y, m, d) = date.parts().deconstruct();
        self.epoch().checked_add_days(self.core.schema.count_days_since_epoch(y, m, d))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another calendar.
    pub fn day_number_ordinal(&self, date: OrdinalDate) -> Result<DayNumber> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        let (y, doy) = date.parts().deconstruct();
        self.epoch().checked_add_days(self.core.schema.count_days_since_epoch_ordinal(y, doy))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another calendar.
    pub fn day_of_week(&self, date: CalendarDate) -> Result<DayOfWeek> {
        Ok(self.day_number(date)?.day_of_week())
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another calendar.
    pub fn to_ordinal_date(&self, date: CalendarDate) -> Result<OrdinalDate> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        Ok(self.core.ordinal(self.core.schema.ordinal_parts_of(date.parts())))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another calendar.
    pub fn to_calendar_date(&self, date: OrdinalDate) -> Result<CalendarDate> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        Ok(self.core.date(self.core.schema.date_parts_of(date.parts())))
    }

    // Year, month and day infos.

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the year is outside the calendar.
    pub fn is_leap_year(&self, y: i32) -> Result<bool> {
        self.core.scope.validate_year(y)?;
        Ok(self.core.schema.is_leap_year(y))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another calendar.
    pub fn is_intercalary_day(&self, date: CalendarDate) -> Result<bool> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        let (y, m, d) = date.parts().deconstruct();
        Ok(self.core.schema.is_intercalary_day(y, m, d))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another calendar.
    pub fn is_supplementary_day(&self, date: CalendarDate) -> Result<bool> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        let (y, m, d) = date.parts().deconstruct();
        Ok(self.core.schema.is_supplementary_day(y, m, d))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the year is outside the calendar.
    pub fn count_months_in_year(&self, y: i32) -> Result<i32> {
        self.core.scope.validate_year(y)?;
        Ok(self.core.schema.count_months_in_year(y))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the year is outside the calendar.
    pub fn count_days_in_year(&self, y: i32) -> Result<i32> {
        self.core.scope.validate_year(y)?;
        Ok(self.core.schema.count_days_in_year(y))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the invalid component.
    pub fn count_days_in_month(&self, y: i32, m: i32) -> Result<i32> {
        self.core.scope.validate_year(y)?;
        self.core.scope.pre_validator().validate_month(y, m)?;
        Ok(self.core.schema.count_days_in_month(y, m))
    }

    // Dates in a given year or month.

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the year is outside the
    /// calendar, or `CalendricalError::Overflow` if the year is within the
    /// calendar but its first day precedes the first day of the calendar.
    pub fn start_of_year(&self, y: i32) -> Result<CalendarDate> {
        self.core.scope.validate_year(y)?;
        let ymd = self.core.schema.start_of_year_parts(y);
        self.core.check_date_bounds(ymd)?;
        Ok(self.core.date(ymd))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the year is outside the calendar.
    pub fn end_of_year(&self, y: i32) -> Result<CalendarDate> {
        self.core.scope.validate_year(y)?;
        Ok(self.core.date(self.core.schema.end_of_year_parts(y)))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the invalid component, or
    /// `CalendricalError::Overflow` if the month is within the calendar but
    /// its first day precedes the first day of the calendar.
    pub fn start_of_month(&self, y: i32, m: i32) -> Result<CalendarDate> {
        self.core.scope.validate_year_month(y, m)?;
        let ymd = self.core.schema.start_of_month_parts(y, m);
        self.core.check_date_bounds(ymd)?;
        Ok(self.core.date(ymd))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the invalid component.
    pub fn end_of_month(&self, y: i32, m: i32) -> Result<CalendarDate> {
        self.core.scope.validate_year_month(y, m)?;
        Ok(self.core.date(self.core.schema.end_of_month_parts(y, m)))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the year is outside the
    /// calendar, or `CalendricalError::Overflow` if the year is within the
    /// calendar but its first day precedes the first day of the calendar.
    pub fn start_of_year_ordinal(&self, y: i32) -> Result<OrdinalDate> {
        self.core.scope.validate_year(y)?;
        let ydoy = self.core.schema.start_of_year_ordinal_parts(y);
        self.core.check_ordinal_bounds(ydoy)?;
        Ok(self.core.ordinal(ydoy))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the year is outside the calendar.
    pub fn end_of_year_ordinal(&self, y: i32) -> Result<OrdinalDate> {
        self.core.scope.validate_year(y)?;
        Ok(self.core.ordinal(self.core.schema.end_of_year_ordinal_parts(y)))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the invalid component, or
    /// `CalendricalError::Overflow` if the month is within the calendar but
    /// its first day precedes the first day of the calendar.
    pub fn start_of_month_ordinal(&self, y: i32, m: i32) -> Result<OrdinalDate> {
        self.core.scope.validate_year_month(y, m)?;
        let ydoy = self.core.schema.start_of_month_ordinal_parts(y, m);
        self.core.check_ordinal_bounds(ydoy)?;
        Ok(self.core.ordinal(ydoy))
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the invalid component.
    pub fn end_of_month_ordinal(&self, y: i32, m: i32) -> Result<OrdinalDate> {
        self.core.scope.validate_year_month(y, m)?;
        Ok(self.core.ordinal(self.core.schema.end_of_month_ordinal_parts(y, m)))
    }

    /// Every day of the year `y` within the calendar, in order
    ///
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the year is outside the calendar.
    pub fn days_in_year(&self, y: i32) -> Result<impl Iterator<Item = CalendarDate> + '_> {
        self.core.scope.validate_year(y)?;
        let schema = &self.core.schema;
        Ok(self.days_between(schema.get_start_of_year(y), schema.get_end_of_year(y)))
    }

    /// Every day of the month `(y, m)` within the calendar, in order
    ///
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the invalid component.
    pub fn days_in_month(&self, y: i32, m: i32) -> Result<impl Iterator<Item = CalendarDate> + '_> {
        self.core.scope.validate_year_month(y, m)?;
        let schema = &self.core.schema;
        Ok(self.days_between(schema.get_start_of_month(y, m), schema.get_end_of_month(y, m)))
    }

    fn days_between(&self, first: i32, last: i32) -> impl Iterator<Item = CalendarDate> + '_ {
        let first = first.max(self.core.scope.days_since_epoch_range().min());
        (first..=last).map(move |days| self.core.date(self.core.schema.date_parts(days)))
    }

    // Day arithmetic.

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another
    /// calendar, or `CalendricalError::Overflow` if the result is outside the calendar.
    pub fn add_days(&self, date: CalendarDate, days: i32) -> Result<CalendarDate> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        let ymd = self.core.arithmetic.add_days(date.parts(), days)?;
        self.core.check_date_bounds(ymd)?;
        Ok(self.core.date(ymd))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another
    /// calendar, or `CalendricalError::Overflow` at the end of the calendar.
    pub fn next_day(&self, date: CalendarDate) -> Result<CalendarDate> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        Ok(self.core.date(self.core.arithmetic.next_day(date.parts())?))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another
    /// calendar, or `CalendricalError::Overflow` at the start of the calendar.
    pub fn previous_day(&self, date: CalendarDate) -> Result<CalendarDate> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        let ymd = self.core.arithmetic.previous_day(date.parts())?;
        self.core.check_date_bounds(ymd)?;
        Ok(self.core.date(ymd))
    }

    /// Signed number of days from `start` to `end`
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if a date belongs to another calendar.
    pub fn count_days_between(&self, start: CalendarDate, end: CalendarDate) -> Result<i32> {
        self.core.check_calendar(start.calendar_id(), Param::Start)?;
        self.core.check_calendar(end.calendar_id(), Param::End)?;
        Ok(self.core.arithmetic.count_days_between(start.parts(), end.parts()))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if a date belongs to another calendar.
    pub fn compare(&self, left: CalendarDate, right: CalendarDate) -> Result<Ordering> {
        self.core.check_calendar(left.calendar_id(), Param::Start)?;
        self.core.check_calendar(right.calendar_id(), Param::End)?;
        Ok(left.parts().cmp(&right.parts()))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another
    /// calendar, or `CalendricalError::Overflow` if the result is outside the calendar.
    pub fn add_days_ordinal(&self, date: OrdinalDate, days: i32) -> Result<OrdinalDate> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        let ydoy = self.core.arithmetic.add_days_ordinal(date.parts(), days)?;
        self.core.check_ordinal_bounds(ydoy)?;
        Ok(self.core.ordinal(ydoy))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another
    /// calendar, or `CalendricalError::Overflow` at the end of the calendar.
    pub fn next_day_ordinal(&self, date: OrdinalDate) -> Result<OrdinalDate> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        Ok(self.core.ordinal(self.core.arithmetic.next_day_ordinal(date.parts())?))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the date belongs to another
    /// calendar, or `CalendricalError::Overflow` at the start of the calendar.
    pub fn previous_day_ordinal(&self, date: OrdinalDate) -> Result<OrdinalDate> {
        self.core.check_calendar(date.calendar_id(), Param::Date)?;
        let ydoy = self.core.arithmetic.previous_day_ordinal(date.parts())?;
        self.core.check_ordinal_bounds(ydoy)?;
        Ok(self.core.ordinal(ydoy))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if a date belongs to another calendar.
    pub fn count_days_between_ordinal(&self, start: OrdinalDate, end: OrdinalDate) -> Result<i32> {
        self.core.check_calendar(start.calendar_id(), Param::Start)?;
        self.core.check_calendar(end.calendar_id(), Param::End)?;
        Ok(self.core.arithmetic.count_days_between_ordinal(start.parts(), end.parts()))
    }

    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if a date belongs to another calendar.
    pub fn compare_ordinal(&self, left: OrdinalDate, right: OrdinalDate) -> Result<Ordering> {
        self.core.check_calendar(left.calendar_id(), Param::Start)?;
        self.core.check_calendar(right.calendar_id(), Param::End)?;
        Ok(left.parts().cmp(&right.parts()))
    }

    // Shortcuts to the calendar math.

    /// # Errors
    /// See `CalendarMath::add_years`.
    pub fn add_years(&self, date: CalendarDate, years: i32) -> Result<CalendarDate> {
        self.math().add_years(date, years)
    }

    /// # Errors
    /// See `CalendarMath::add_months`.
    pub fn add_months(&self, date: CalendarDate, months: i32) -> Result<CalendarDate> {
        self.math().add_months(date, months)
    }

    /// # Errors
    /// See `CalendarMath::count_years_between`.
    pub fn count_years_between(&self, start: CalendarDate, end: CalendarDate) -> Result<i32> {
        self.math().count_years_between(start, end)
    }

    /// # Errors
    /// See `CalendarMath::count_months_between`.
    pub fn count_months_between(&self, start: CalendarDate, end: CalendarDate) -> Result<i32> {
        self.math().count_months_between(start, end)
    }
}

fn check_month_length(schema: &dyn CalendricalSchema) -> Result<()> {
    if schema.min_days_in_month() < MIN_MIN_DAYS_IN_MONTH {
        return Err(CalendricalError::invalid_argument(
            Param::Schema,
            format!(
                "months must have at least {MIN_MIN_DAYS_IN_MONTH} days, found {}",
                schema.min_days_in_month()
            ),
        ));
    }
    Ok(())
}
