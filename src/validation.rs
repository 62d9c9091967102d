//! Pre-validation of month, day and day-of-year components.
//!
//! A pre-validator assumes the year is already known to be valid and only
//! checks the shape of the remaining components. The schema's guaranteed
//! minimums are tested first so that the common case never reaches the
//! (possibly expensive) exact counts.

use std::{fmt, sync::Arc};

use crate::{
    LUNAR_MIN_DAYS_IN_MONTH, LUNAR_MIN_DAYS_IN_YEAR, LUNISOLAR_MIN_DAYS_IN_YEAR, SOLAR_MIN_DAYS_IN_YEAR,
    SOLAR12_MIN_DAYS_IN_MONTH, SOLAR12_MONTHS_IN_YEAR, SOLAR13_MIN_DAYS_IN_MONTH, SOLAR13_MONTHS_IN_YEAR,
    error::{CalendricalError, Param, Result},
    schema::{CalendricalProfile, CalendricalSchema},
};

/// Schema-aware range checks for month, day and day-of-year components.
pub trait CalendricalPreValidator: Send + Sync + fmt::Debug {
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming `month` if `m` is not a month of `y`.
    fn validate_month(&self, y: i32, m: i32) -> Result<()>;

    /// Validates the month first, then the day.
    ///
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming `month` or `day`.
    fn validate_month_day(&self, y: i32, m: i32, d: i32) -> Result<()>;

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming `dayOfYear`.
    fn validate_day_of_year(&self, y: i32, doy: i32) -> Result<()>;
}

fn month_out_of_range(m: i32) -> CalendricalError {
    CalendricalError::out_of_range(Param::Month, m)
}

fn day_out_of_range(d: i32) -> CalendricalError {
    CalendricalError::out_of_range(Param::Day, d)
}

fn day_of_year_out_of_range(doy: i32) -> CalendricalError {
    CalendricalError::out_of_range(Param::DayOfYear, doy)
}

/// Pre-validator working with any schema.
#[derive(Debug, Clone)]
pub struct DefaultPreValidator {
    schema:            Arc<dyn CalendricalSchema>,
    min_days_in_month: i32,
    min_days_in_year:  i32,
}

impl DefaultPreValidator {
    pub fn new(schema: Arc<dyn CalendricalSchema>) -> Self {
        let min_days_in_month = schema.min_days_in_month();
        let min_days_in_year = schema.min_days_in_year();
        Self {
            schema,
            min_days_in_month,
            min_days_in_year,
        }
    }
}

impl CalendricalPreValidator for DefaultPreValidator {
    fn validate_month(&self, y: i32, m: i32) -> Result<()> {
        if m < 1 || m > self.schema.count_months_in_year(y) {
            return Err(month_out_of_range(m));
        }
        Ok(())
    }

    fn validate_month_day(&self, y: i32, m: i32, d: i32) -> Result<()> {
        self.validate_month(y, m)?;
        if d < 1 || (d > self.min_days_in_month && d > self.schema.count_days_in_month(y, m)) {
            return Err(day_out_of_range(d));
        }
        Ok(())
    }

    fn validate_day_of_year(&self, y: i32, doy: i32) -> Result<()> {
        if doy < 1 || (doy > self.min_days_in_year && doy > self.schema.count_days_in_year(y)) {
            return Err(day_of_year_out_of_range(doy));
        }
        Ok(())
    }
}

/// Pre-validator for schemas with a fixed number of months, whose shape is
/// known at compile time.
#[derive(Debug, Clone)]
pub struct RegularPreValidator<const MONTHS: i32, const MIN_DAYS_IN_MONTH: i32, const MIN_DAYS_IN_YEAR: i32> {
    schema: Arc<dyn CalendricalSchema>,
}

/// Twelve months of at least 28 days
pub type Solar12PreValidator =
    RegularPreValidator<SOLAR12_MONTHS_IN_YEAR, SOLAR12_MIN_DAYS_IN_MONTH, SOLAR_MIN_DAYS_IN_YEAR>;
/// Thirteen months, the shortest one having at least 5 days
pub type Solar13PreValidator =
    RegularPreValidator<SOLAR13_MONTHS_IN_YEAR, SOLAR13_MIN_DAYS_IN_MONTH, SOLAR_MIN_DAYS_IN_YEAR>;
/// Twelve months of at least 29 days
pub type LunarPreValidator =
    RegularPreValidator<SOLAR12_MONTHS_IN_YEAR, LUNAR_MIN_DAYS_IN_MONTH, LUNAR_MIN_DAYS_IN_YEAR>;

impl<const MONTHS: i32, const MIN_DAYS_IN_MONTH: i32, const MIN_DAYS_IN_YEAR: i32>
    RegularPreValidator<MONTHS, MIN_DAYS_IN_MONTH, MIN_DAYS_IN_YEAR>
{
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the schema does not have
    /// exactly `MONTHS` months or goes below one of the minimums.
    pub fn new(schema: Arc<dyn CalendricalSchema>) -> Result<Self> {
        if schema.months_in_year() != Some(MONTHS)
            || schema.min_days_in_month() < MIN_DAYS_IN_MONTH
            || schema.min_days_in_year() < MIN_DAYS_IN_YEAR
        {
            return Err(CalendricalError::invalid_argument(
                Param::Schema,
                format!("expected {MONTHS} months of at least {MIN_DAYS_IN_MONTH} days, found {schema:?}"),
            ));
        }
        Ok(Self { schema })
    }
}

impl<const MONTHS: i32, const MIN_DAYS_IN_MONTH: i32, const MIN_DAYS_IN_YEAR: i32> CalendricalPreValidator
    for RegularPreValidator<MONTHS, MIN_DAYS_IN_MONTH, MIN_DAYS_IN_YEAR>
{
    fn validate_month(&self, _y: i32, m: i32) -> Result<()> {
        if m < 1 || m > MONTHS {
            return Err(month_out_of_range(m));
        }
        Ok(())
    }

    fn validate_month_day(&self, y: i32, m: i32, d: i32) -> Result<()> {
        if m < 1 || m > MONTHS {
            return Err(month_out_of_range(m));
        }
        if d < 1 || (d > MIN_DAYS_IN_MONTH && d > self.schema.count_days_in_month(y, m)) {
            return Err(day_out_of_range(d));
        }
        Ok(())
    }

    fn validate_day_of_year(&self, y: i32, doy: i32) -> Result<()> {
        if doy < 1 || (doy > MIN_DAYS_IN_YEAR && doy > self.schema.count_days_in_year(y)) {
            return Err(day_of_year_out_of_range(doy));
        }
        Ok(())
    }
}

/// Pre-validator for lunisolar schemas, whose number of months varies.
#[derive(Debug, Clone)]
pub struct LunisolarPreValidator {
    schema: Arc<dyn CalendricalSchema>,
}

impl LunisolarPreValidator {
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the schema profile is not lunisolar.
    pub fn new(schema: Arc<dyn CalendricalSchema>) -> Result<Self> {
        if schema.profile() != CalendricalProfile::Lunisolar {
            return Err(CalendricalError::invalid_argument(
                Param::Schema,
                format!("expected a lunisolar profile, found {}", schema.profile()),
            ));
        }
        Ok(Self { schema })
    }
}

impl CalendricalPreValidator for LunisolarPreValidator {
    fn validate_month(&self, y: i32, m: i32) -> Result<()> {
        if m < 1 || m > self.schema.count_months_in_year(y) {
            return Err(month_out_of_range(m));
        }
        Ok(())
    }

    fn validate_month_day(&self, y: i32, m: i32, d: i32) -> Result<()> {
        self.validate_month(y, m)?;
        if d < 1 || (d > LUNAR_MIN_DAYS_IN_MONTH && d > self.schema.count_days_in_month(y, m)) {
            return Err(day_out_of_range(d));
        }
        Ok(())
    }

    fn validate_day_of_year(&self, y: i32, doy: i32) -> Result<()> {
        if doy < 1 || (doy > LUNISOLAR_MIN_DAYS_IN_YEAR && doy > self.schema.count_days_in_year(y)) {
            return Err(day_of_year_out_of_range(doy));
        }
        Ok(())
    }
}

/// Picks the pre-validator matching the profile of a schema.
pub fn pre_validator_for(schema: Arc<dyn CalendricalSchema>) -> Result<Arc<dyn CalendricalPreValidator>> {
    let profile = schema.profile();
    let validator: Arc<dyn CalendricalPreValidator> = match profile {
        CalendricalProfile::Solar12 => Arc::new(Solar12PreValidator::new(schema)?),
        CalendricalProfile::Solar13 => Arc::new(Solar13PreValidator::new(schema)?),
        CalendricalProfile::Lunar => Arc::new(LunarPreValidator::new(schema)?),
        CalendricalProfile::Lunisolar => Arc::new(LunisolarPreValidator::new(schema)?),
        CalendricalProfile::Other => Arc::new(DefaultPreValidator::new(schema)),
    };
    tracing::debug!(%profile, ?validator, "selected pre-validator");
    Ok(validator)
}
