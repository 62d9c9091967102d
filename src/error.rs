use crate::prelude::*;

/// Name of the argument an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Param {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "dayOfYear")]
    DayOfYear,
    #[display(fmt = "dayOfWeek")]
    DayOfWeek,
    #[display(fmt = "dayNumber")]
    DayNumber,
    #[display(fmt = "daysSinceEpoch")]
    DaysSinceEpoch,
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "years")]
    Years,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "minYear")]
    MinYear,
    #[display(fmt = "maxYear")]
    MaxYear,
    #[display(fmt = "supportedYears")]
    SupportedYears,
    #[display(fmt = "range")]
    Range,
    #[display(fmt = "schema")]
    Schema,
    #[display(fmt = "key")]
    Key,
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
    #[display(fmt = "math")]
    Math,
    #[display(fmt = "other")]
    Other,
}

/// Errors raised by the calendrical kernel.
///
/// Every failure falls into one of three kinds: a component out of range, an
/// operation whose result is not representable, or an invalid argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendricalError {
    /// A component (year, month, day, ...) is outside its valid range.
    #[error("The value of {param} was out of range: {value}")]
    OutOfRange { param: Param, value: i64 },

    /// The inputs were valid but the result of the operation is not representable.
    #[error("The operation would overflow the range of supported values: {0}")]
    Overflow(&'static str),

    /// Configuration error or operands that do not belong together.
    #[error("Invalid argument {param}: {reason}")]
    InvalidArgument { param: Param, reason: String },
}

impl CalendricalError {
    pub fn out_of_range(param: Param, value: impl Into<i64>) -> Self {
        Self::OutOfRange {
            param,
            value: value.into(),
        }
    }

    pub fn invalid_argument(param: Param, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, if any.
    pub const fn param(&self) -> Option<Param> {
        match self {
            Self::OutOfRange { param, .. } | Self::InvalidArgument { param, .. } => Some(*param),
            Self::Overflow(_) => None,
        }
    }

    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }

    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result type used throughout the crate.
pub type Result<T, E = CalendricalError> = std::result::Result<T, E>;
