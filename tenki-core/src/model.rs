use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units::icon_url;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Temperature {
    pub current_c: f64,
    pub feels_like_c: f64,
    pub min_c: f64,
    pub max_c: f64,
}

/// Weather condition as reported by the provider, description already localized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub code: u32,
    pub group: String,
    pub description: String,
    pub icon: String,
}

impl Condition {
    pub fn icon_url(&self) -> Option<String> {
        (!self.icon.is_empty()).then(|| icon_url(&self.icon))
    }
}

/// Current conditions for one location, normalized from a single provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location_name: String,
    pub observation_time: DateTime<Utc>,
    pub temperature: Temperature,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub condition: Option<Condition>,
}
