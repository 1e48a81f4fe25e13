use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{SettingsLogic, SettingsUpdate};
use crate::errors::AppResult;
use crate::models::settings::UserSettings;
use crate::store::Storage;
use crate::ui::messages::{header, success};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{hours2decimal, percent};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        show,
        work_hours,
        driver_percent,
        passenger_percent,
        language,
        name,
        email,
        company,
        address,
    } = cmd
    {
        let storage = Storage::open(cfg)?;

        let update = SettingsUpdate {
            default_work_hours: *work_hours,
            driver_compensation_percent: *driver_percent,
            passenger_compensation_percent: *passenger_percent,
            language: language.clone(),
            display_name: name.clone(),
            email: email.clone(),
            company_name: company.clone(),
            company_address: address.clone(),
        };

        let settings = if update.is_empty() {
            SettingsLogic::show(&storage, &cfg.user)?
        } else {
            let saved = SettingsLogic::update(&storage, &cfg.user, &update)?;
            success(format!("Settings saved for {}.", cfg.user));
            saved
        };

        if *show || update.is_empty() {
            print_settings(&cfg.user, &settings);
        }
    }

    Ok(())
}

fn print_settings(user: &str, s: &UserSettings) {
    header(format!("Settings of {}", user));

    let optional = |v: &Option<String>| colorize_optional(v.as_deref().unwrap_or(""));

    println!("{:<24} {} h", "Daily work hours", hours2decimal(s.default_work_hours));
    println!("{:<24} {}", "Driver compensation", percent(s.driver_compensation_percent));
    println!("{:<24} {}", "Passenger compensation", percent(s.passenger_compensation_percent));
    println!("{:<24} {}", "Language", s.language);
    println!("{:<24} {}", "Display name", optional(&s.display_name));
    println!("{:<24} {}", "Email", optional(&s.email));
    println!("{:<24} {}", "Company", optional(&s.company_name));
    println!("{:<24} {}", "Company address", optional(&s.company_address));
}
