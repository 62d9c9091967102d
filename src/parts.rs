//! Packed date components.
//!
//! `Yemoda` (year, month, day), `Yedoy` (year, day of year) and `Yemo` (year,
//! month) each fit in a single `i32`. The year occupies the high bits so that
//! the natural integer order matches the chronological order.
//!
//! Well-formedness is schema-dependent: the checked constructors only verify
//! that the components fit the packed layout. Schema validation happens in
//! the pre-validators and scopes before a value reaches these constructors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    MAX_DAY, MAX_DAY_OF_YEAR, MAX_MONTH, MAX_REPRESENTABLE_YEAR, MIN_REPRESENTABLE_YEAR,
    error::{CalendricalError, Param, Result},
    range::Range,
};

const YEAR_SHIFT: u32 = 10;
const MONTH_SHIFT: u32 = 6;
const MONTH_MASK: i32 = 0xF;
const DAY_MASK: i32 = 0x3F;
const DAY_OF_YEAR_MASK: i32 = 0x3FF;
const YEMO_YEAR_SHIFT: u32 = 4;

/// Years representable by the packed types
pub const REPRESENTABLE_YEARS: Range<i32> = Range::new_unchecked(MIN_REPRESENTABLE_YEAR, MAX_REPRESENTABLE_YEAR);

fn check_year(y: i32) -> Result<()> {
    if !REPRESENTABLE_YEARS.contains(y) {
        return Err(CalendricalError::out_of_range(Param::Year, y));
    }
    Ok(())
}

fn check_month(m: i32) -> Result<()> {
    if !(1..=MAX_MONTH).contains(&m) {
        return Err(CalendricalError::out_of_range(Param::Month, m));
    }
    Ok(())
}

/// Date parts: year, month and day packed into an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32, i32)", into = "(i32, i32, i32)")]
pub struct Yemoda(i32);

impl Yemoda {
    /// Smallest value: first day of the first month of the earliest representable year
    pub const MIN: Self = Self::new_unchecked(MIN_REPRESENTABLE_YEAR, 1, 1);
    /// Largest value
    pub const MAX: Self = Self::new_unchecked(MAX_REPRESENTABLE_YEAR, MAX_MONTH, MAX_DAY);

    /// Creates date parts, checking only that each component fits the packed layout.
    ///
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the first component that does not fit.
    pub fn new(y: i32, m: i32, d: i32) -> Result<Self> {
        check_year(y)?;
        check_month(m)?;
        if !(1..=MAX_DAY).contains(&d) {
            return Err(CalendricalError::out_of_range(Param::Day, d));
        }
        Ok(Self::new_unchecked(y, m, d))
    }

    /// Packs already validated components.
    pub(crate) const fn new_unchecked(y: i32, m: i32, d: i32) -> Self {
        debug_assert!(y >= MIN_REPRESENTABLE_YEAR && y <= MAX_REPRESENTABLE_YEAR);
        debug_assert!(m >= 1 && m <= MAX_MONTH);
        debug_assert!(d >= 1 && d <= MAX_DAY);
        Self((y << YEAR_SHIFT) | ((m - 1) << MONTH_SHIFT) | (d - 1))
    }

    /// First day of the first month of `y`
    pub(crate) const fn at_start_of_year(y: i32) -> Self {
        Self::new_unchecked(y, 1, 1)
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.0 >> YEAR_SHIFT
    }

    #[inline]
    pub const fn month(self) -> i32 {
        ((self.0 >> MONTH_SHIFT) & MONTH_MASK) + 1
    }

    #[inline]
    pub const fn day(self) -> i32 {
        (self.0 & DAY_MASK) + 1
    }

    /// Returns `(year, month, day)`
    pub const fn deconstruct(self) -> (i32, i32, i32) {
        (self.year(), self.month(), self.day())
    }

    /// The month these parts belong to
    pub const fn yemo(self) -> Yemo {
        Yemo::new_unchecked(self.year(), self.month())
    }
}

impl TryFrom<(i32, i32, i32)> for Yemoda {
    type Error = CalendricalError;

    fn try_from((y, m, d): (i32, i32, i32)) -> Result<Self> {
        Self::new(y, m, d)
    }
}

impl From<Yemoda> for (i32, i32, i32) {
    fn from(parts: Yemoda) -> Self {
        parts.deconstruct()
    }
}

impl fmt::Display for Yemoda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// Ordinal parts: year and day of the year packed into an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Yedoy(i32);

impl Yedoy {
    pub const MIN: Self = Self::new_unchecked(MIN_REPRESENTABLE_YEAR, 1);
    pub const MAX: Self = Self::new_unchecked(MAX_REPRESENTABLE_YEAR, MAX_DAY_OF_YEAR);

    /// Creates ordinal parts, checking only that each component fits the packed layout.
    ///
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the first component that does not fit.
    pub fn new(y: i32, doy: i32) -> Result<Self> {
        check_year(y)?;
        if !(1..=MAX_DAY_OF_YEAR).contains(&doy) {
            return Err(CalendricalError::out_of_range(Param::DayOfYear, doy));
        }
        Ok(Self::new_unchecked(y, doy))
    }

    pub(crate) const fn new_unchecked(y: i32, doy: i32) -> Self {
        debug_assert!(y >= MIN_REPRESENTABLE_YEAR && y <= MAX_REPRESENTABLE_YEAR);
        debug_assert!(doy >= 1 && doy <= MAX_DAY_OF_YEAR);
        Self((y << YEAR_SHIFT) | (doy - 1))
    }

    pub(crate) const fn at_start_of_year(y: i32) -> Self {
        Self::new_unchecked(y, 1)
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.0 >> YEAR_SHIFT
    }

    #[inline]
    pub const fn day_of_year(self) -> i32 {
        (self.0 & DAY_OF_YEAR_MASK) + 1
    }

    /// Returns `(year, day_of_year)`
    pub const fn deconstruct(self) -> (i32, i32) {
        (self.year(), self.day_of_year())
    }
}

impl TryFrom<(i32, i32)> for Yedoy {
    type Error = CalendricalError;

    fn try_from((y, doy): (i32, i32)) -> Result<Self> {
        Self::new(y, doy)
    }
}

impl From<Yedoy> for (i32, i32) {
    fn from(parts: Yedoy) -> Self {
        parts.deconstruct()
    }
}

impl fmt::Display for Yedoy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:03}", self.year(), self.day_of_year())
    }
}

/// Month parts: year and month packed into an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Yemo(i32);

impl Yemo {
    /// Creates month parts, checking only that each component fits the packed layout.
    ///
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` naming the first component that does not fit.
    pub fn new(y: i32, m: i32) -> Result<Self> {
        check_year(y)?;
        check_month(m)?;
        Ok(Self::new_unchecked(y, m))
    }

    pub(crate) const fn new_unchecked(y: i32, m: i32) -> Self {
        debug_assert!(y >= MIN_REPRESENTABLE_YEAR && y <= MAX_REPRESENTABLE_YEAR);
        debug_assert!(m >= 1 && m <= MAX_MONTH);
        Self((y << YEMO_YEAR_SHIFT) | (m - 1))
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.0 >> YEMO_YEAR_SHIFT
    }

    #[inline]
    pub const fn month(self) -> i32 {
        (self.0 & MONTH_MASK) + 1
    }

    /// Returns `(year, month)`
    pub const fn deconstruct(self) -> (i32, i32) {
        (self.year(), self.month())
    }

    /// Date parts for day `d` of this month
    pub(crate) const fn day_parts(self, d: i32) -> Yemoda {
        Yemoda::new_unchecked(self.year(), self.month(), d)
    }
}

impl TryFrom<(i32, i32)> for Yemo {
    type Error = CalendricalError;

    fn try_from((y, m): (i32, i32)) -> Result<Self> {
        Self::new(y, m)
    }
}

impl From<Yemo> for (i32, i32) {
    fn from(parts: Yemo) -> Self {
        parts.deconstruct()
    }
}

impl fmt::Display for Yemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
