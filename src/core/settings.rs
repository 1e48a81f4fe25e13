use crate::errors::AppResult;
use crate::models::settings::UserSettings;
use crate::store::Storage;

/// Requested changes to a user's settings; `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub default_work_hours: Option<f64>,
    pub driver_compensation_percent: Option<f64>,
    pub passenger_compensation_percent: Option<f64>,
    pub language: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.default_work_hours.is_none()
            && self.driver_compensation_percent.is_none()
            && self.passenger_compensation_percent.is_none()
            && self.language.is_none()
            && self.display_name.is_none()
            && self.email.is_none()
            && self.company_name.is_none()
            && self.company_address.is_none()
    }
}

pub struct SettingsLogic;

impl SettingsLogic {
    pub fn show(storage: &Storage, user_id: &str) -> AppResult<UserSettings> {
        storage.settings.load_settings(user_id)
    }

    /// Merge `update` into the stored settings, validate, and save.
    pub fn update(storage: &Storage, user_id: &str, update: &SettingsUpdate) -> AppResult<UserSettings> {
        let mut s = storage.settings.load_settings(user_id)?;

        if let Some(v) = update.default_work_hours {
            s.default_work_hours = v;
        }
        if let Some(v) = update.driver_compensation_percent {
            s.driver_compensation_percent = v;
        }
        if let Some(v) = update.passenger_compensation_percent {
            s.passenger_compensation_percent = v;
        }
        if let Some(v) = &update.language {
            s.language = v.clone();
        }
        // an empty string clears an optional field
        for (target, value) in [
            (&mut s.display_name, &update.display_name),
            (&mut s.email, &update.email),
            (&mut s.company_name, &update.company_name),
            (&mut s.company_address, &update.company_address),
        ] {
            if let Some(v) = value {
                *target = Some(v.trim().to_string()).filter(|v| !v.is_empty());
            }
        }

        s.validate()?;
        storage.settings.save_settings(user_id, &s)?;
        Ok(s)
    }
}
