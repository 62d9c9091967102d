use serde::{Deserialize, Serialize};

use crate::{
    DAYS_IN_WEEK,
    error::{CalendricalError, Param, Result},
    prelude::*,
};

/// Day of the week, numbered the ISO way (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl DayOfWeek {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a day of the week from its ISO number (1..=7)
    ///
    /// # Errors
    /// Returns `CalendricalError::OutOfRange` if the value is not within 1..=7.
    pub fn from_iso_weekday(value: i32) -> Result<Self> {
        if !(1..=DAYS_IN_WEEK).contains(&value) {
            return Err(CalendricalError::out_of_range(Param::DayOfWeek, value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// ISO number of the day (Monday = 1, Sunday = 7)
    pub const fn to_iso_weekday(self) -> i32 {
        self as i32
    }

    /// Returns the day `n` days after this one (n may be negative)
    pub const fn plus_days(self, n: i32) -> Self {
        let index = (self as i32 - 1 + n.rem_euclid(DAYS_IN_WEEK)).rem_euclid(DAYS_IN_WEEK);
        Self::ALL[index as usize]
    }
}

/// A count of consecutive days since Monday, January 1st, 1 CE (proleptic Gregorian).
///
/// Day numbers are the calendar-independent glue between schemas: every
/// calendar maps its own "days since epoch" onto this line by adding its epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(transparent)]
pub struct DayNumber(i32);

impl DayNumber {
    /// Monday, January 1st, 1 CE (Gregorian)
    pub const ZERO: Self = Self(0);
    /// Earliest representable day number
    pub const MIN: Self = Self(i32::MIN);
    /// Latest representable day number
    pub const MAX: Self = Self(i32::MAX);

    pub const fn from_days_since_zero(days: i32) -> Self {
        Self(days)
    }

    /// Number of days since `DayNumber::ZERO`
    #[inline]
    pub const fn days_since_zero(self) -> i32 {
        self.0
    }

    /// Day of the week; day zero is a Monday
    pub const fn day_of_week(self) -> DayOfWeek {
        DayOfWeek::ALL[self.0.rem_euclid(DAYS_IN_WEEK) as usize]
    }

    /// Returns the day number `days` days later.
    ///
    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is not representable.
    pub fn checked_add_days(self, days: i32) -> Result<Self> {
        self.0
            .checked_add(days)
            .map(Self)
            .ok_or(CalendricalError::Overflow("day number"))
    }

    /// Signed number of days from `other` to `self`.
    ///
    /// # Errors
    /// Returns `CalendricalError::Overflow` if the difference does not fit in an `i32`.
    pub fn checked_days_since(self, other: Self) -> Result<i32> {
        self.0
            .checked_sub(other.0)
            .ok_or(CalendricalError::Overflow("day number difference"))
    }

    /// # Errors
    /// Returns `CalendricalError::Overflow` at `DayNumber::MAX`.
    pub fn next_day(self) -> Result<Self> {
        self.checked_add_days(1)
    }

    /// # Errors
    /// Returns `CalendricalError::Overflow` at `DayNumber::MIN`.
    pub fn previous_day(self) -> Result<Self> {
        self.checked_add_days(-1)
    }

    /// The nearest day on or before this one that falls on `day_of_week`
    ///
    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is not representable.
    pub fn previous_or_same(self, day_of_week: DayOfWeek) -> Result<Self> {
        let delta = (self.day_of_week().to_iso_weekday() - day_of_week.to_iso_weekday()).rem_euclid(DAYS_IN_WEEK);
        self.checked_add_days(-delta)
    }

    /// The nearest day on or after this one that falls on `day_of_week`
    ///
    /// # Errors
    /// Returns `CalendricalError::Overflow` if the result is not representable.
    pub fn next_or_same(self, day_of_week: DayOfWeek) -> Result<Self> {
        let delta = (day_of_week.to_iso_weekday() - self.day_of_week().to_iso_weekday()).rem_euclid(DAYS_IN_WEEK);
        self.checked_add_days(delta)
    }
}

/// The two conventional origins of day numbers.
#[derive(Debug, Clone, Copy)]
pub struct DayZero;

impl DayZero {
    /// Monday, January 1st, 1 CE (Gregorian)
    pub const NEW_STYLE: DayNumber = DayNumber::ZERO;
    /// Saturday, January 1st, 1 CE (Julian)
    pub const OLD_STYLE: DayNumber = DayNumber(-2);
}

/// Well-known epochs, expressed as day numbers.
#[derive(Debug, Clone, Copy)]
pub struct CalendarEpoch;

impl CalendarEpoch {
    /// Gregorian January 1st, 1 CE
    pub const GREGORIAN: DayNumber = DayZero::NEW_STYLE;
    /// Julian January 1st, 1 CE (Gregorian December 30th, 0)
    pub const JULIAN: DayNumber = DayZero::OLD_STYLE;
    /// Julian August 29th, 284 CE
    pub const COPTIC: DayNumber = DayNumber(103_604);
    /// Julian August 29th, 8 CE
    pub const ETHIOPIC: DayNumber = DayNumber(2_795);
    /// Julian February 26th, 747 BCE (era of Nabonassar)
    pub const EGYPTIAN: DayNumber = DayNumber(-272_788);
    /// Gregorian September 22nd, 1792
    pub const FRENCH_REPUBLICAN: DayNumber = DayNumber(654_414);
    /// Julian March 19th, 622 CE
    pub const PERSIAN: DayNumber = DayNumber(226_895);
    /// Julian June 16th, 632 CE
    pub const ZOROASTRIAN: DayNumber = DayNumber(230_637);
}
