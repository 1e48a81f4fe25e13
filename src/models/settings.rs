use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORK_HOURS: f64 = 7.0;
pub const DEFAULT_DRIVER_PERCENT: f64 = 100.0;
pub const DEFAULT_PASSENGER_PERCENT: f64 = 90.0;

pub const MIN_WORK_HOURS: f64 = 1.0;
pub const MAX_WORK_HOURS: f64 = 10.0;
pub const MAX_COMPENSATION_PERCENT: f64 = 200.0;

/// Per-user settings document.
///
/// Every field has a serde default, so a stored document that lacks fields
/// (or was written by an older version) is completed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Daily contracted hours.
    pub default_work_hours: f64,
    pub driver_compensation_percent: f64,
    pub passenger_compensation_percent: f64,
    pub language: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            default_work_hours: DEFAULT_WORK_HOURS,
            driver_compensation_percent: DEFAULT_DRIVER_PERCENT,
            passenger_compensation_percent: DEFAULT_PASSENGER_PERCENT,
            language: "en".to_string(),
            display_name: None,
            email: None,
            company_name: None,
            company_address: None,
        }
    }
}

impl UserSettings {
    /// Parse a stored document, falling back to defaults field by field and,
    /// when the document is not an object at all, entirely.
    pub fn from_document(doc: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(doc) {
            Ok(serde_json::Value::Object(map)) => {
                let mut merged = serde_json::to_value(UserSettings::default())
                    .ok()
                    .and_then(|v| v.as_object().cloned())
                    .unwrap_or_default();

                let defaults = merged.clone();
                for (k, v) in map {
                    // a wrongly typed field keeps its default
                    if let Some(default_value) = defaults.get(&k)
                        && same_shape(default_value, &v)
                    {
                        merged.insert(k, v);
                    }
                }

                let settings: UserSettings = serde_json::from_value(serde_json::Value::Object(merged))
                    .unwrap_or_else(|e| {
                        tracing::warn!(error = %e, "settings document rejected, using defaults");
                        UserSettings::default()
                    });
                settings.with_ranges_defaulted()
            }
            _ => {
                tracing::warn!("settings document is not a JSON object, using defaults");
                UserSettings::default()
            }
        }
    }

    /// Numbers outside their valid range are replaced by the default.
    fn with_ranges_defaulted(mut self) -> Self {
        if !(MIN_WORK_HOURS..=MAX_WORK_HOURS).contains(&self.default_work_hours) {
            tracing::warn!(
                value = self.default_work_hours,
                "stored work hours out of range, using default"
            );
            self.default_work_hours = DEFAULT_WORK_HOURS;
        }
        for (name, value, default) in [
            (
                "driver",
                &mut self.driver_compensation_percent,
                DEFAULT_DRIVER_PERCENT,
            ),
            (
                "passenger",
                &mut self.passenger_compensation_percent,
                DEFAULT_PASSENGER_PERCENT,
            ),
        ] {
            if !(0.0..=MAX_COMPENSATION_PERCENT).contains(value) {
                tracing::warn!(
                    value = *value,
                    "stored {name} percent out of range, using default"
                );
                *value = default;
            }
        }
        self
    }

    pub fn to_document(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_WORK_HOURS..=MAX_WORK_HOURS).contains(&self.default_work_hours) {
            return Err(AppError::InvalidSetting(format!(
                "default work hours must be between {MIN_WORK_HOURS} and {MAX_WORK_HOURS} (got {})",
                self.default_work_hours
            )));
        }

        for (name, value) in [
            ("driver", self.driver_compensation_percent),
            ("passenger", self.passenger_compensation_percent),
        ] {
            if !(0.0..=MAX_COMPENSATION_PERCENT).contains(&value) {
                return Err(AppError::InvalidSetting(format!(
                    "{name} compensation percent must be between 0 and {MAX_COMPENSATION_PERCENT} (got {value})"
                )));
            }
        }

        Ok(())
    }

    pub fn driver_factor(&self) -> f64 {
        self.driver_compensation_percent / 100.0
    }

    pub fn passenger_factor(&self) -> f64 {
        self.passenger_compensation_percent / 100.0
    }
}

/// Nullable string fields accept both null and strings.
fn same_shape(default_value: &serde_json::Value, v: &serde_json::Value) -> bool {
    use serde_json::Value;
    match (default_value, v) {
        (Value::Number(_), Value::Number(_)) => true,
        (Value::String(_), Value::String(_)) => true,
        (Value::Null, Value::Null | Value::String(_)) => true,
        _ => false,
    }
}
