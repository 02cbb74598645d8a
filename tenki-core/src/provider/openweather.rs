use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    config::{Config, EndpointConfig},
    error::WeatherError,
    model::{Condition, Temperature, WeatherReport},
    prefecture::resolve_city,
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: Option<String>,
    endpoint: EndpointConfig,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: Option<String>, endpoint: EndpointConfig) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            endpoint,
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key().map(str::to_owned), config.endpoint.clone())
    }

    async fn fetch_current(&self, prefecture: &str) -> Result<WeatherReport, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let city = resolve_city(prefecture);
        let query = format!("{city},{}", self.endpoint.country);
        let url = format!("{}/weather", self.endpoint.base_url.trim_end_matches('/'));

        debug!(prefecture, city, country = %self.endpoint.country, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", api_key),
                ("units", self.endpoint.units.as_str()),
                ("lang", self.endpoint.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                // The request URL carries `appid`; it must not reach logs or error chains.
                let e = e.without_url();
                warn!(error = %e, city, "request to OpenWeather failed");
                WeatherError::Transport(e)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| WeatherError::Transport(e.without_url()))?;

        if !status.is_success() {
            let parsed: OwErrorResponse =
                serde_json::from_str(&body).map_err(WeatherError::Decode)?;

            let message = parsed
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

            warn!(status = status.as_u16(), %message, city, "OpenWeather rejected request");

            return Err(WeatherError::Provider { status: status.as_u16(), message });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, city, "unparseable OpenWeather response");
            WeatherError::Decode(e)
        })?;

        Ok(parsed.into_report())
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, prefecture: &str) -> Result<WeatherReport, WeatherError> {
        self.fetch_current(prefecture).await
    }
}

// Every field is optional and numeric fields are read as floats: the response
// is taken as-is, without presence checks, and `null` counts as absent.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    pressure: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWeather {
    id: Option<f64>,
    main: Option<String>,
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwCurrentResponse {
    name: Option<String>,
    dt: Option<f64>,
    main: Option<OwMain>,
    weather: Option<Vec<OwWeather>>,
    wind: Option<OwWind>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwErrorResponse {
    message: Option<String>,
}

impl OwCurrentResponse {
    fn into_report(self) -> WeatherReport {
        let observation_time =
            self.dt.and_then(|ts| unix_to_utc(ts as i64)).unwrap_or_else(Utc::now);

        let condition = self.weather.unwrap_or_default().into_iter().next().map(|w| Condition {
            code: w.id.map(|id| id as u32).unwrap_or(0),
            group: w.main.unwrap_or_default(),
            description: w.description.unwrap_or_default(),
            icon: w.icon.unwrap_or_default(),
        });

        let main = self.main.unwrap_or_default();

        WeatherReport {
            location_name: self.name.unwrap_or_default(),
            observation_time,
            temperature: Temperature {
                current_c: main.temp.unwrap_or(0.0),
                feels_like_c: main.feels_like.unwrap_or(0.0),
                min_c: main.temp_min.unwrap_or(0.0),
                max_c: main.temp_max.unwrap_or(0.0),
            },
            // `as` saturates, so out-of-range values clamp instead of wrapping.
            humidity_pct: main.humidity.map(|h| h.round() as u8).unwrap_or(0),
            pressure_hpa: main.pressure.map(|p| p.round() as u32).unwrap_or(0),
            wind_speed_mps: self.wind.and_then(|w| w.speed).unwrap_or(0.0),
            condition,
        }
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}
