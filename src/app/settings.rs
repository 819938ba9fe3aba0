use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::domain::localtime::DEFAULT_ZONE;
use crate::domain::thresholds::Thresholds;

/// Consultation settings remembered between runs: where you golf and what
/// weather you will put up with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSettings {
    pub location: String,
    pub min_temp: f32,
    pub max_wind: f32,
    pub max_rain: f32,
    pub zone: String,
    pub days: u8,
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        Self {
            location: cli.default_location(),
            min_temp: cli.min_temp,
            max_wind: cli.max_wind,
            max_rain: cli.max_rain,
            zone: cli.zone.name().to_string(),
            days: cli.days,
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_temperature_f: self.min_temp,
            max_wind_mph: self.max_wind,
            max_precip_probability: self.max_rain,
        }
    }

    /// A corrupt saved zone falls back to the default rather than failing
    /// the launch; the settings file is a convenience, not an input.
    #[must_use]
    pub fn zone(&self) -> Tz {
        self.zone.parse::<Tz>().unwrap_or(DEFAULT_ZONE)
    }
}

/// Loads saved settings and applies CLI precedence: any value given
/// explicitly on the command line overrides the saved one.
pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    let mut settings = RuntimeSettings::from_cli_defaults(cli);
    if !enable_disk {
        return (settings, None);
    }

    let Some(path) = settings_path() else {
        return (settings, None);
    };

    if let Ok(content) = fs::read_to_string(&path)
        && let Ok(saved) = serde_json::from_str::<RuntimeSettings>(&content)
    {
        settings = saved;
    }

    apply_cli_overrides(&mut settings, cli);
    (settings, Some(path))
}

/// Explicit CLI values win over saved ones, field by field. A flag left at
/// its default means "use whatever was saved".
fn apply_cli_overrides(settings: &mut RuntimeSettings, cli: &Cli) {
    if let Some(location) = &cli.location {
        settings.location = location.clone();
    }
    if cli.min_temp != 50.0 {
        settings.min_temp = cli.min_temp;
    }
    if cli.max_wind != 15.0 {
        settings.max_wind = cli.max_wind;
    }
    if cli.max_rain != 20.0 {
        settings.max_rain = cli.max_rain;
    }
    if cli.zone.name() != DEFAULT_ZONE.name() {
        settings.zone = cli.zone.name().to_string();
    }
    if cli.days != 4 {
        settings.days = cli.days;
    }
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("FAIRWAY_TUI_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("fairway-tui")
            .join("settings.json"),
    )
}
