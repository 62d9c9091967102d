//! A calendrical computation kernel.
//!
//! A schema is the arithmetic of a calendar: it maps `(year, month, day)` and
//! `(year, day of year)` to a count of days since its epoch, and back. On top
//! of the schemas sit pre-validators (cheap range checks on months and days),
//! arithmetic engines (adding and counting days), scopes (a schema anchored to
//! an epoch and restricted to a range of years) and calendars, which hand out
//! dates and carry the calendar math used to add months and years.
//!
//! ```
//! use std::sync::Arc;
//!
//! use calendrical::{Calendar, CalendarConfig, DayZero, schema::GregorianSchema};
//!
//! let calendar = Calendar::new(&CalendarConfig::new("Gregorian"), Arc::new(GregorianSchema), DayZero::NEW_STYLE)?;
//! let date = calendar.date(2024, 1, 31)?;
//! let next = calendar.add_months(date, 1)?;
//! assert_eq!(next.to_string(), "2024-02-29");
//! # Ok::<(), calendrical::CalendricalError>(())
//! ```

mod consts;
mod prelude;

pub mod arithmetic;
pub mod calendar;
pub mod config;
pub mod day_number;
pub mod error;
pub mod math;
pub mod parts;
pub mod range;
pub mod reform;
pub mod schema;
pub mod scope;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use calendar::{Calendar, CalendarDate, CalendarId, CalendarMonth, OrdinalDate};
pub use config::CalendarConfig;
pub use consts::*;
pub use day_number::{CalendarEpoch, DayNumber, DayOfWeek, DayZero};
pub use error::{CalendricalError, Param, Result};
pub use math::{AddAdjustment, CalendarMath};
pub use parts::{REPRESENTABLE_YEARS, Yedoy, Yemo, Yemoda};
pub use range::{Range, RangeError};
pub use reform::GregorianReform;
pub use schema::{CalendricalPartsFactory, CalendricalSchema};
pub use scope::{BoundedBelowScope, CalendricalScope, MinMaxYearScope};
