use super::weather::WeatherSample;

/// User-chosen golf-ability policy. All comparisons are inclusive: a sample
/// sitting exactly on a threshold still qualifies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub min_temperature_f: f32,
    pub max_wind_mph: f32,
    pub max_precip_probability: f32,
}

impl Thresholds {
    #[must_use]
    pub fn passes(&self, sample: &WeatherSample) -> bool {
        sample.temperature_f >= self.min_temperature_f
            && sample.wind_speed_mph <= self.max_wind_mph
            && sample.precip_probability <= self.max_precip_probability
    }
}
