use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::Parser;

use crate::domain::thresholds::Thresholds;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "fairway-tui",
    version,
    about = "Terminal dashboard that finds golf-able daylight hours in the forecast"
)]
pub struct Cli {
    /// City name or "lat,lon" passed to the forecast provider (default: Denver)
    pub location: Option<String>,

    /// Coldest golf-able temperature (°F)
    #[arg(long, default_value_t = 50.0)]
    pub min_temp: f32,

    /// Strongest golf-able wind (mph)
    #[arg(long, default_value_t = 15.0)]
    pub max_wind: f32,

    /// Highest golf-able precipitation probability (%)
    #[arg(long, default_value_t = 20.0)]
    pub max_rain: f32,

    /// Civil zone for daylight windows (tzdb name)
    #[arg(long, default_value = "US/Mountain", value_parser = parse_zone)]
    pub zone: Tz,

    /// Forecast horizon in days
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub days: u8,

    /// Consult a specific date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Tomorrow.io API key (falls back to $TOMORROW_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the forecast endpoint (testing)
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Print the consultation to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Neither read nor write the saved settings file
    #[arg(long)]
    pub no_saved_settings: bool,
}

impl Cli {
    #[must_use]
    pub fn default_location(&self) -> String {
        self.location.clone().unwrap_or_else(|| "Denver".to_string())
    }

    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_temperature_f: self.min_temp,
            max_wind_mph: self.max_wind,
            max_precip_probability: self.max_rain,
        }
    }

    pub fn resolved_api_key(&self) -> anyhow::Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        std::env::var("TOMORROW_API_KEY")
            .map_err(|_| anyhow::anyhow!("no API key: pass --api-key or set TOMORROW_API_KEY"))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=100.0).contains(&self.max_rain) {
            anyhow::bail!("--max-rain must be within 0..=100");
        }
        if self.max_wind < 0.0 {
            anyhow::bail!("--max-wind must be non-negative");
        }
        Ok(())
    }
}

fn parse_zone(value: &str) -> Result<Tz, String> {
    value
        .parse::<Tz>()
        .map_err(|_| format!("unknown time zone {value:?}"))
}
