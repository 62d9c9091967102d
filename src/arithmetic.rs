//! Day arithmetic on date parts and ordinal parts.
//!
//! The default engine always goes through the count of days since the
//! epoch. The fast engines stay within the current month (or year) when they
//! can, and only cross into a neighbouring one when the step is no longer
//! than the shortest month of the schema.

use std::{fmt, sync::Arc};

use crate::{
    MIN_MIN_DAYS_IN_MONTH, SOLAR12_MONTHS_IN_YEAR, SOLAR13_MONTHS_IN_YEAR,
    error::{CalendricalError, Param, Result},
    parts::{REPRESENTABLE_YEARS, Yedoy, Yemoda},
    range::Range,
    schema::{CalendricalPartsFactory, CalendricalSchema},
};

/// Day arithmetic for a schema restricted to a range of years.
///
/// Every result stays within the supported years; anything beyond fails with
/// `CalendricalError::Overflow`. Inputs are assumed valid.
pub trait CalendricalArithmetic: Send + Sync + fmt::Debug {
    fn supported_years(&self) -> Range<i32>;

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is outside the supported years.
    fn add_days(&self, ymd: Yemoda, days: i32) -> Result<Yemoda>;

    /// # Errors
    /// Returns `CalendricalError::Overflow` at the end of the supported years.
    fn next_day(&self, ymd: Yemoda) -> Result<Yemoda>;

    /// # Errors
    /// Returns `CalendricalError::Overflow` at the start of the supported years.
    fn previous_day(&self, ymd: Yemoda) -> Result<Yemoda>;

    /// Signed number of days from `start` to `end`
    fn count_days_between(&self, start: Yemoda, end: Yemoda) -> i32;

    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is outside the supported years.
    fn add_days_ordinal(&self, ydoy: Yedoy, days: i32) -> Result<Yedoy>;

    /// # Errors
    /// Returns `CalendricalError::Overflow` at the end of the supported years.
    fn next_day_ordinal(&self, ydoy: Yedoy) -> Result<Yedoy>;

    /// # Errors
    /// Returns `CalendricalError::Overflow` at the start of the supported years.
    fn previous_day_ordinal(&self, ydoy: Yedoy) -> Result<Yedoy>;

    /// Signed number of days from `start` to `end`
    fn count_days_between_ordinal(&self, start: Yedoy, end: Yedoy) -> i32;
}

/// State shared by every engine: the schema and the years it is bound to.
#[derive(Debug, Clone)]
struct EngineCore {
    schema: Arc<dyn CalendricalSchema>,
    years:  Range<i32>,
    /// Days since the epoch of the first and last supported days
    domain: Range<i32>,
}

impl EngineCore {
    fn new(schema: Arc<dyn CalendricalSchema>, years: Range<i32>) -> Result<Self> {
        if !years.is_subset_of(&schema.supported_years()) || !years.is_subset_of(&REPRESENTABLE_YEARS) {
            return Err(CalendricalError::invalid_argument(
                Param::SupportedYears,
                format!("{years} is not within the years supported by the schema"),
            ));
        }
        let domain = schema.domain(years);
        Ok(Self { schema, years, domain })
    }

    fn check_year(&self, y: i32, op: &'static str) -> Result<()> {
        if !self.years.contains(y) {
            return Err(CalendricalError::Overflow(op));
        }
        Ok(())
    }

    fn shift(&self, days_since_epoch: i32, days: i32, op: &'static str) -> Result<i32> {
        days_since_epoch
            .checked_add(days)
            .filter(|&target| self.domain.contains(target))
            .ok_or(CalendricalError::Overflow(op))
    }

    fn add_days_via_epoch(&self, ymd: Yemoda, days: i32) -> Result<Yemoda> {
        let (y, m, d) = ymd.deconstruct();
        let target = self.shift(self.schema.count_days_since_epoch(y, m, d), days, "add_days")?;
        Ok(self.schema.date_parts(target))
    }

    fn add_days_ordinal_via_epoch(&self, ydoy: Yedoy, days: i32) -> Result<Yedoy> {
        let (y, doy) = ydoy.deconstruct();
        let target = self.shift(self.schema.count_days_since_epoch_ordinal(y, doy), days, "add_days")?;
        Ok(self.schema.ordinal_parts(target))
    }

    fn count_days_between_via_epoch(&self, start: Yemoda, end: Yemoda) -> i32 {
        let (y0, m0, d0) = start.deconstruct();
        let (y1, m1, d1) = end.deconstruct();
        self.schema.count_days_since_epoch(y1, m1, d1) - self.schema.count_days_since_epoch(y0, m0, d0)
    }

    fn count_days_between_ordinal_via_epoch(&self, start: Yedoy, end: Yedoy) -> i32 {
        let (y0, doy0) = start.deconstruct();
        let (y1, doy1) = end.deconstruct();
        self.schema.count_days_since_epoch_ordinal(y1, doy1) - self.schema.count_days_since_epoch_ordinal(y0, doy0)
    }
}

/// Engine working with any schema: every operation is a round trip through
/// the count of days since the epoch.
#[derive(Debug, Clone)]
pub struct DefaultArithmetic {
    core: EngineCore,
}

impl DefaultArithmetic {
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if `years` is not within the
    /// years supported by the schema.
    pub fn new(schema: Arc<dyn CalendricalSchema>, years: Range<i32>) -> Result<Self> {
        Ok(Self {
            core: EngineCore::new(schema, years)?,
        })
    }
}

impl CalendricalArithmetic for DefaultArithmetic {
    fn supported_years(&self) -> Range<i32> {
        self.core.years
    }

    fn add_days(&self, ymd: Yemoda, days: i32) -> Result<Yemoda> {
        self.core.add_days_via_epoch(ymd, days)
    }

    fn next_day(&self, ymd: Yemoda) -> Result<Yemoda> {
        self.core.add_days_via_epoch(ymd, 1)
    }

    fn previous_day(&self, ymd: Yemoda) -> Result<Yemoda> {
        self.core.add_days_via_epoch(ymd, -1)
    }

    fn count_days_between(&self, start: Yemoda, end: Yemoda) -> i32 {
        self.core.count_days_between_via_epoch(start, end)
    }

    fn add_days_ordinal(&self, ydoy: Yedoy, days: i32) -> Result<Yedoy> {
        self.core.add_days_ordinal_via_epoch(ydoy, days)
    }

    fn next_day_ordinal(&self, ydoy: Yedoy) -> Result<Yedoy> {
        self.core.add_days_ordinal_via_epoch(ydoy, 1)
    }

    fn previous_day_ordinal(&self, ydoy: Yedoy) -> Result<Yedoy> {
        self.core.add_days_ordinal_via_epoch(ydoy, -1)
    }

    fn count_days_between_ordinal(&self, start: Yedoy, end: Yedoy) -> i32 {
        self.core.count_days_between_ordinal_via_epoch(start, end)
    }
}

/// Marker for a fast engine that asks the schema for the number of months.
pub const VARIABLE_MONTHS_IN_YEAR: i32 = 0;

/// Fast engine for schemas whose months all have at least
/// `MIN_MIN_DAYS_IN_MONTH` days.
///
/// `MONTHS_IN_YEAR` is the fixed number of months of a regular schema, or
/// `VARIABLE_MONTHS_IN_YEAR` to let the schema decide year by year.
#[derive(Debug, Clone)]
pub struct FastArithmetic<const MONTHS_IN_YEAR: i32> {
    core:              EngineCore,
    min_days_in_month: i32,
    min_days_in_year:  i32,
}

/// Fast engine for schemas with a varying number of months, or a fixed number
/// other than twelve or thirteen
pub type PlainFastArithmetic = FastArithmetic<VARIABLE_MONTHS_IN_YEAR>;
/// Fast engine for regular schemas with twelve months
pub type Regular12Arithmetic = FastArithmetic<SOLAR12_MONTHS_IN_YEAR>;
/// Fast engine for regular schemas with thirteen months
pub type Regular13Arithmetic = FastArithmetic<SOLAR13_MONTHS_IN_YEAR>;

impl<const MONTHS_IN_YEAR: i32> FastArithmetic<MONTHS_IN_YEAR> {
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the schema has a month
    /// shorter than `MIN_MIN_DAYS_IN_MONTH` days, if its number of months does
    /// not match `MONTHS_IN_YEAR`, or if `years` is not supported.
    pub fn new(schema: Arc<dyn CalendricalSchema>, years: Range<i32>) -> Result<Self> {
        let min_days_in_month = schema.min_days_in_month();
        if min_days_in_month < MIN_MIN_DAYS_IN_MONTH {
            return Err(CalendricalError::invalid_argument(
                Param::Schema,
                format!("months must have at least {MIN_MIN_DAYS_IN_MONTH} days, found {min_days_in_month}"),
            ));
        }
        if MONTHS_IN_YEAR != VARIABLE_MONTHS_IN_YEAR && schema.months_in_year() != Some(MONTHS_IN_YEAR) {
            return Err(CalendricalError::invalid_argument(
                Param::Schema,
                format!("expected a regular schema with {MONTHS_IN_YEAR} months"),
            ));
        }
        let min_days_in_year = schema.min_days_in_year();
        Ok(Self {
            core: EngineCore::new(schema, years)?,
            min_days_in_month,
            min_days_in_year,
        })
    }

    #[inline]
    fn count_months_in_year(&self, y: i32) -> i32 {
        if MONTHS_IN_YEAR == VARIABLE_MONTHS_IN_YEAR {
            self.core.schema.count_months_in_year(y)
        } else {
            MONTHS_IN_YEAR
        }
    }

    fn is_within_month(&self, y: i32, m: i32, d: i32) -> bool {
        d <= self.min_days_in_month || d <= self.core.schema.count_days_in_month(y, m)
    }

    fn is_within_year(&self, y: i32, doy: i32) -> bool {
        doy <= self.min_days_in_year || doy <= self.core.schema.count_days_in_year(y)
    }
}

impl<const MONTHS_IN_YEAR: i32> CalendricalArithmetic for FastArithmetic<MONTHS_IN_YEAR> {
    fn supported_years(&self) -> Range<i32> {
        self.core.years
    }

    fn add_days(&self, ymd: Yemoda, days: i32) -> Result<Yemoda> {
        if days.unsigned_abs() > self.min_days_in_month.unsigned_abs() {
            tracing::trace!(days, "add_days goes through the epoch");
            return self.core.add_days_via_epoch(ymd, days);
        }

        let sch = &self.core.schema;
        let (y, m, d) = ymd.deconstruct();
        // At most one month boundary is crossed.
        let dom = d + days;
        if dom < 1 {
            if m > 1 {
                return Ok(Yemoda::new_unchecked(y, m - 1, dom + sch.count_days_in_month(y, m - 1)));
            }
            self.core.check_year(y - 1, "add_days")?;
            let last = self.count_months_in_year(y - 1);
            return Ok(Yemoda::new_unchecked(y - 1, last, dom + sch.count_days_in_month(y - 1, last)));
        }
        if self.is_within_month(y, m, dom) {
            return Ok(Yemoda::new_unchecked(y, m, dom));
        }
        let dom = dom - sch.count_days_in_month(y, m);
        if m < self.count_months_in_year(y) {
            return Ok(Yemoda::new_unchecked(y, m + 1, dom));
        }
        self.core.check_year(y + 1, "add_days")?;
        Ok(Yemoda::new_unchecked(y + 1, 1, dom))
    }

    fn next_day(&self, ymd: Yemoda) -> Result<Yemoda> {
        let (y, m, d) = ymd.deconstruct();
        if self.is_within_month(y, m, d + 1) {
            Ok(Yemoda::new_unchecked(y, m, d + 1))
        } else if m < self.count_months_in_year(y) {
            Ok(Yemoda::new_unchecked(y, m + 1, 1))
        } else {
            self.core.check_year(y + 1, "next_day")?;
            Ok(Yemoda::at_start_of_year(y + 1))
        }
    }

    fn previous_day(&self, ymd: Yemoda) -> Result<Yemoda> {
        let (y, m, d) = ymd.deconstruct();
        if d > 1 {
            Ok(Yemoda::new_unchecked(y, m, d - 1))
        } else if m > 1 {
            Ok(self.core.schema.end_of_month_parts(y, m - 1))
        } else {
            self.core.check_year(y - 1, "previous_day")?;
            Ok(self.core.schema.end_of_year_parts(y - 1))
        }
    }

    fn count_days_between(&self, start: Yemoda, end: Yemoda) -> i32 {
        if start.yemo() == end.yemo() {
            return end.day() - start.day();
        }
        let (y0, m0, d0) = start.deconstruct();
        let (y1, m1, d1) = end.deconstruct();
        if y0 == y1 {
            let sch = &self.core.schema;
            return sch.get_day_of_year(y1, m1, d1) - sch.get_day_of_year(y0, m0, d0);
        }
        self.core.count_days_between_via_epoch(start, end)
    }

    fn add_days_ordinal(&self, ydoy: Yedoy, days: i32) -> Result<Yedoy> {
        if days.unsigned_abs() > self.min_days_in_year.unsigned_abs() {
            tracing::trace!(days, "add_days_ordinal goes through the epoch");
            return self.core.add_days_ordinal_via_epoch(ydoy, days);
        }

        let sch = &self.core.schema;
        let (y, doy) = ydoy.deconstruct();
        // At most one year boundary is crossed.
        let target = doy + days;
        if target < 1 {
            self.core.check_year(y - 1, "add_days")?;
            return Ok(Yedoy::new_unchecked(y - 1, target + sch.count_days_in_year(y - 1)));
        }
        if self.is_within_year(y, target) {
            return Ok(Yedoy::new_unchecked(y, target));
        }
        self.core.check_year(y + 1, "add_days")?;
        Ok(Yedoy::new_unchecked(y + 1, target - sch.count_days_in_year(y)))
    }

    fn next_day_ordinal(&self, ydoy: Yedoy) -> Result<Yedoy> {
        let (y, doy) = ydoy.deconstruct();
        if self.is_within_year(y, doy + 1) {
            return Ok(Yedoy::new_unchecked(y, doy + 1));
        }
        self.core.check_year(y + 1, "next_day")?;
        Ok(Yedoy::at_start_of_year(y + 1))
    }

    fn previous_day_ordinal(&self, ydoy: Yedoy) -> Result<Yedoy> {
        let (y, doy) = ydoy.deconstruct();
        if doy > 1 {
            return Ok(Yedoy::new_unchecked(y, doy - 1));
        }
        self.core.check_year(y - 1, "previous_day")?;
        Ok(self.core.schema.end_of_year_ordinal_parts(y - 1))
    }

    fn count_days_between_ordinal(&self, start: Yedoy, end: Yedoy) -> i32 {
        if start.year() == end.year() {
            return end.day_of_year() - start.day_of_year();
        }
        self.core.count_days_between_ordinal_via_epoch(start, end)
    }
}

/// Picks the fastest engine able to handle the schema.
///
/// # Errors
/// Returns `CalendricalError::InvalidArgument` if `years` is not within the
/// years supported by the schema.
pub fn arithmetic_for(schema: Arc<dyn CalendricalSchema>, years: Range<i32>) -> Result<Arc<dyn CalendricalArithmetic>> {
    let arithmetic: Arc<dyn CalendricalArithmetic> = if schema.min_days_in_month() < MIN_MIN_DAYS_IN_MONTH {
        Arc::new(DefaultArithmetic::new(schema, years)?)
    } else {
        match schema.months_in_year() {
            Some(SOLAR12_MONTHS_IN_YEAR) => Arc::new(Regular12Arithmetic::new(schema, years)?),
            Some(SOLAR13_MONTHS_IN_YEAR) => Arc::new(Regular13Arithmetic::new(schema, years)?),
            _ => Arc::new(PlainFastArithmetic::new(schema, years)?),
        }
    };
    tracing::debug!(%years, ?arithmetic, "selected arithmetic engine");
    Ok(arithmetic)
}
