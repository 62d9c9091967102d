use serde::{Deserialize, Serialize};

use crate::{
    error::{CalendricalError, Param, Result},
    math::AddAdjustment,
};

/// Settings of a calendar that do not belong to its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Unique name of the calendar.
    key:            String,
    /// Whether years before 1 are supported (down to -9998).
    #[serde(default)]
    proleptic:      bool,
    /// How calendar math resolves days missing from the target month.
    #[serde(default)]
    add_adjustment: AddAdjustment,
}

impl CalendarConfig {
    /// Creates a new configuration with the given key.
    ///
    /// Defaults: `proleptic = false`, `add_adjustment = EndOfMonth`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key:            key.into(),
            proleptic:      false,
            add_adjustment: AddAdjustment::default(),
        }
    }

    /// Sets whether the calendar supports years before 1.
    #[must_use]
    pub const fn with_proleptic(mut self, proleptic: bool) -> Self {
        self.proleptic = proleptic;
        self
    }

    /// Sets the ambiguity resolution used by calendar math.
    #[must_use]
    pub const fn with_add_adjustment(mut self, add_adjustment: AddAdjustment) -> Self {
        self.add_adjustment = add_adjustment;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn proleptic(&self) -> bool {
        self.proleptic
    }

    pub const fn add_adjustment(&self) -> AddAdjustment {
        self.add_adjustment
    }

    /// Validates this configuration.
    ///
    /// # Errors
    /// Returns `CalendricalError::InvalidArgument` if the key is blank.
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(CalendricalError::invalid_argument(Param::Key, "must not be blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = CalendarConfig::new("Gregorian");
        assert_eq!(cfg.key(), "Gregorian");
        assert!(!cfg.proleptic());
        assert_eq!(cfg.add_adjustment(), AddAdjustment::EndOfMonth);
        cfg.validate().expect("failed to validate config");
    }

    #[test]
    fn test_builder_chaining() {
        let cfg = CalendarConfig::new("Julian")
            .with_proleptic(true)
            .with_add_adjustment(AddAdjustment::Exact);
        assert!(cfg.proleptic());
        assert_eq!(cfg.add_adjustment(), AddAdjustment::Exact);
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        for key in ["", "   "] {
            let err = CalendarConfig::new(key).validate().expect_err("expected error");
            assert!(err.is_invalid_argument());
            assert_eq!(err.param(), Some(Param::Key));
        }
    }

    #[test]
    fn test_serde() {
        let cfg: CalendarConfig = serde_json::from_str(r#"{"key":"Coptic"}"#).expect("failed to deserialize config");
        assert_eq!(cfg, CalendarConfig::new("Coptic"));

        let cfg: CalendarConfig =
            serde_json::from_str(r#"{"key":"Coptic","proleptic":true,"add_adjustment":"StartOfNextMonth"}"#)
                .expect("failed to deserialize config");
        assert!(cfg.proleptic());
        assert_eq!(cfg.add_adjustment(), AddAdjustment::StartOfNextMonth);

        let json = serde_json::to_string(&cfg).expect("failed to serialize config");
        assert_eq!(json, r#"{"key":"Coptic","proleptic":true,"add_adjustment":"StartOfNextMonth"}"#);
    }
}
