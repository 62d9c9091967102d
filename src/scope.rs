//! Scopes bind a schema and an epoch to a range of years.
//!
//! Unlike a pre-validator, a scope checks the year too, so every date that
//! passes its validation can be converted without overflow.

use std::{fmt, sync::Arc};

use crate::{
    PROLEPTIC_MIN_YEAR, STANDARD_MAX_YEAR, STANDARD_MIN_YEAR,
    day_number::DayNumber,
    error::{CalendricalError, Param, Result},
    parts::{REPRESENTABLE_YEARS, Yedoy, Yemoda},
    range::Range,
    schema::{CalendricalPartsFactory, CalendricalSchema},
    validation::{CalendricalPreValidator, pre_validator_for},
};

/// A schema restricted to a range of years and anchored to an epoch.
pub trait CalendricalScope: Send + Sync + fmt::Debug {
    fn schema(&self) -> &Arc<dyn CalendricalSchema>;

    fn pre_validator(&self) -> &Arc<dyn CalendricalPreValidator>;

    /// Day number of the first day of year 1
    fn epoch(&self) -> DayNumber;

    fn supported_years(&self) -> Range<i32>;

    /// Day numbers of the first and last days within the scope
    fn domain(&self) -> Range<DayNumber>;

    /// Days since the epoch of the first and last days within the scope
    fn days_since_epoch_range(&self) -> Range<i32>;

    /// Date parts of the first and last days within the scope
    fn min_max_date_parts(&self) -> (Yemoda, Yemoda);

    /// Ordinal parts of the first and last days within the scope
    fn min_max_ordinal_parts(&self) -> (Yedoy, Yedoy);

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming `year`.
    fn validate_year(&self, y: i32) -> Result<()> {
        if !self.supported_years().contains(y) {
            return Err(CalendricalError::out_of_range(Param::Year, y));
        }
        Ok(())
    }

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming `year` or `month`.
    fn validate_year_month(&self, y: i32, m: i32) -> Result<()>;

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming `year`, `month` or `day`.
    fn validate_year_month_day(&self, y: i32, m: i32, d: i32) -> Result<()>;

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming `year` or `dayOfYear`.
    fn validate_ordinal(&self, y: i32, doy: i32) -> Result<()>;

    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming `dayNumber`.
    fn validate_day_number(&self, day_number: DayNumber) -> Result<()> {
        if !self.domain().contains(day_number) {
            return Err(CalendricalError::out_of_range(Param::DayNumber, day_number.days_since_zero()));
        }
        Ok(())
    }

    /// Checks the result of an operation, as opposed to an input.
    ///
    /// # Errors
    /// Returns `CalendricalError::Overflow` if the day falls outside the scope.
    fn check_overflow(&self, days_since_epoch: i32) -> Result<()> {
        if !self.days_since_epoch_range().contains(days_since_epoch) {
            return Err(CalendricalError::Overflow("days since epoch"));
        }
        Ok(())
    }
}

/// What every scope computes once at construction.
#[derive(Debug, Clone)]
struct ScopeBounds {
    schema:          Arc<dyn CalendricalSchema>,
    pre_validator:   Arc<dyn CalendricalPreValidator>,
    epoch:           DayNumber,
    years:           Range<i32>,
    days:            Range<i32>,
    domain:          Range<DayNumber>,
    min_max_parts:   (Yemoda, Yemoda),
    min_max_ordinal: (Yedoy, Yedoy),
}

impl ScopeBounds {
    /// `(m, d)` is the first day of the first year.
    fn new(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber, years: Range<i32>, (m, d): (i32, i32)) -> Result<Self> {
        if !years.is_subset_of(&schema.supported_years()) {
            return Err(CalendricalError::invalid_argument(
                Param::SupportedYears,
                format!("{years} is not within {}", schema.supported_years()),
            ));
        }
        if !years.is_subset_of(&REPRESENTABLE_YEARS) {
            return Err(CalendricalError::invalid_argument(
                Param::SupportedYears,
                format!("{years} is not within {REPRESENTABLE_YEARS}"),
            ));
        }

        let pre_validator = pre_validator_for(schema.clone())?;
        let (y, max_year) = years.endpoints();
        pre_validator.validate_month_day(y, m, d)?;

        let min = Yemoda::new_unchecked(y, m, d);
        let max = schema.end_of_year_parts(max_year);
        let days = Range::new_unchecked(
            schema.count_days_since_epoch(y, m, d),
            schema.get_end_of_year(max_year),
        );
        let domain = Range::new_unchecked(
            epoch.checked_add_days(days.min())?,
            epoch.checked_add_days(days.max())?,
        );

        Ok(Self {
            min_max_parts: (min, max),
            min_max_ordinal: (schema.ordinal_parts_of(min), schema.end_of_year_ordinal_parts(max_year)),
            schema,
            pre_validator,
            epoch,
            years,
            days,
            domain,
        })
    }
}

macro_rules! delegate_bounds {
    () => {
        fn schema(&self) -> &Arc<dyn CalendricalSchema> {
            &self.bounds.schema
        }

        fn pre_validator(&self) -> &Arc<dyn CalendricalPreValidator> {
            &self.bounds.pre_validator
        }

        fn epoch(&self) -> DayNumber {
            self.bounds.epoch
        }

        fn supported_years(&self) -> Range<i32> {
            self.bounds.years
        }

        fn domain(&self) -> Range<DayNumber> {
            self.bounds.domain
        }

        fn days_since_epoch_range(&self) -> Range<i32> {
            self.bounds.days
        }

        fn min_max_date_parts(&self) -> (Yemoda, Yemoda) {
            self.bounds.min_max_parts
        }

        fn min_max_ordinal_parts(&self) -> (Yedoy, Yedoy) {
            self.bounds.min_max_ordinal
        }
    };
}

/// Scope made of complete years.
#[derive(Debug, Clone)]
pub struct MinMaxYearScope {
    bounds: ScopeBounds,
}

impl MinMaxYearScope {
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if `years` is not within
    /// the years supported by the schema and by the date parts.
    pub fn new(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber, years: Range<i32>) -> Result<Self> {
        let bounds = ScopeBounds::new(schema, epoch, years, (1, 1))?;
        tracing::debug!(%years, %epoch, "created min-max year scope");
        Ok(Self { bounds })
    }

    /// Scope from `min_year` to the last year supported by the schema
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if `min_year` is not supported.
    pub fn with_min_year(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber, min_year: i32) -> Result<Self> {
        let years = Range::new(min_year, schema.supported_years().max())?;
        Self::new(schema, epoch, years)
    }

    /// Scope from the first year supported by the schema to `max_year`
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if `max_year` is not supported.
    pub fn with_max_year(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber, max_year: i32) -> Result<Self> {
        let years = Range::new(schema.supported_years().min(), max_year)?;
        Self::new(schema, epoch, years)
    }

    /// Years 1 to 9999
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the schema does not support these years.
    pub fn standard(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber) -> Result<Self> {
        Self::new(schema, epoch, Range::new_unchecked(STANDARD_MIN_YEAR, STANDARD_MAX_YEAR))
    }

    /// Years -9998 to 9999
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the schema does not support these years.
    pub fn proleptic(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber) -> Result<Self> {
        Self::new(schema, epoch, Range::new_unchecked(PROLEPTIC_MIN_YEAR, STANDARD_MAX_YEAR))
    }
}

impl CalendricalScope for MinMaxYearScope {
    delegate_bounds!();

    fn validate_year_month(&self, y: i32, m: i32) -> Result<()> {
        self.validate_year(y)?;
        self.bounds.pre_validator.validate_month(y, m)
    }

    fn validate_year_month_day(&self, y: i32, m: i32, d: i32) -> Result<()> {
        self.validate_year(y)?;
        self.bounds.pre_validator.validate_month_day(y, m, d)
    }

    fn validate_ordinal(&self, y: i32, doy: i32) -> Result<()> {
        self.validate_year(y)?;
        self.bounds.pre_validator.validate_day_of_year(y, doy)
    }
}

/// Scope starting on a given day, not necessarily the first of a year, and
/// ending with a complete year.
#[derive(Debug, Clone)]
pub struct BoundedBelowScope {
    bounds: ScopeBounds,
}

impl BoundedBelowScope {
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the years are not
    /// supported, or `CalendricalError::OutOfRange` if the first day is not a
    /// valid date.
    pub fn new(schema: Arc<dyn CalendricalSchema>, epoch: DayNumber, min: Yemoda, max_year: i32) -> Result<Self> {
        let years = Range::new(min.year(), max_year)?;
        let bounds = ScopeBounds::new(schema, epoch, years, (min.month(), min.day()))?;
        tracing::debug!(%min, max_year, %epoch, "created bounded below scope");
        Ok(Self { bounds })
    }

    fn min_date(&self) -> Yemoda {
        self.bounds.min_max_parts.0
    }
}

impl CalendricalScope for BoundedBelowScope {
    delegate_bounds!();

    fn validate_year_month(&self, y: i32, m: i32) -> Result<()> {
        self.validate_year(y)?;
        self.bounds.pre_validator.validate_month(y, m)?;
        let min = self.min_date();
        if y == min.year() && m < min.month() {
            return Err(CalendricalError::out_of_range(Param::Month, m));
        }
        Ok(())
    }

    fn validate_year_month_day(&self, y: i32, m: i32, d: i32) -> Result<()> {
        self.validate_year(y)?;
        self.bounds.pre_validator.validate_month_day(y, m, d)?;
        let min = self.min_date();
        if y == min.year() {
            if m < min.month() {
                return Err(CalendricalError::out_of_range(Param::Month, m));
            }
            if m == min.month() && d < min.day() {
                return Err(CalendricalError::out_of_range(Param::Day, d));
            }
        }
        Ok(())
    }

    fn validate_ordinal(&self, y: i32, doy: i32) -> Result<()> {
        self.validate_year(y)?;
        self.bounds.pre_validator.validate_day_of_year(y, doy)?;
        let min = self.bounds.min_max_ordinal.0;
        if y == min.year() && doy < min.day_of_year() {
            return Err(CalendricalError::out_of_range(Param::DayOfYear, doy));
        }
        Ok(())
    }
}
