/// Earliest year representable by the packed date types (`-2^21`)
pub const MIN_REPRESENTABLE_YEAR: i32 = -(1 << 21);
/// Latest year representable by the packed date types (`2^21 - 1`)
pub const MAX_REPRESENTABLE_YEAR: i32 = (1 << 21) - 1;

/// Largest month number a packed date can hold
pub const MAX_MONTH: i32 = 16;
/// Largest day of the month a packed date can hold
pub const MAX_DAY: i32 = 64;
/// Largest day of the year a packed ordinal date can hold
pub const MAX_DAY_OF_YEAR: i32 = 1024;

/// First month of a year
pub const MIN_MONTH: i32 = 1;
/// First day of a month
pub const MIN_DAY: i32 = 1;
/// First day of a year
pub const MIN_DAY_OF_YEAR: i32 = 1;

/// Default earliest year supported by a schema
pub const DEFAULT_MIN_SUPPORTED_YEAR: i32 = -999_998;
/// Default latest year supported by a schema
pub const DEFAULT_MAX_SUPPORTED_YEAR: i32 = 999_999;

/// Earliest year of a standard (non-proleptic) calendar
pub const STANDARD_MIN_YEAR: i32 = 1;
/// Earliest year of a proleptic calendar
pub const PROLEPTIC_MIN_YEAR: i32 = -9998;
/// Latest year of both standard and proleptic calendars
pub const STANDARD_MAX_YEAR: i32 = 9999;

/// Months shorter than this disable the fast arithmetic engine.
/// Calendars refuse schemas that fall below it.
pub const MIN_MIN_DAYS_IN_MONTH: i32 = 7;

/// Number of days in a week
pub const DAYS_IN_WEEK: i32 = 7;

/// Number of months in a solar year with twelve months
pub const SOLAR12_MONTHS_IN_YEAR: i32 = 12;
/// Number of months in a solar year with thirteen months
pub const SOLAR13_MONTHS_IN_YEAR: i32 = 13;
/// Fewest days in a solar year
pub const SOLAR_MIN_DAYS_IN_YEAR: i32 = 365;
/// Fewest days in a month of a twelve-month solar year
pub const SOLAR12_MIN_DAYS_IN_MONTH: i32 = 28;
/// Fewest days in a month of a thirteen-month solar year (virtual month included)
pub const SOLAR13_MIN_DAYS_IN_MONTH: i32 = 5;
/// Fewest days in a lunar year
pub const LUNAR_MIN_DAYS_IN_YEAR: i32 = 354;
/// Fewest days in a lunisolar year
pub const LUNISOLAR_MIN_DAYS_IN_YEAR: i32 = 353;
/// Fewest days in a month of a lunar or lunisolar year
pub const LUNAR_MIN_DAYS_IN_MONTH: i32 = 29;

/// Range separator used by `Range` display and parsing
pub const RANGE_SEPARATOR: &str = "..=";
