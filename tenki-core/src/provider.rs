use crate::{Config, WeatherError, WeatherReport, provider::openweather::OpenWeatherClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current weather for a prefecture name (or any free-form city name).
    async fn current_weather(&self, prefecture: &str) -> Result<WeatherReport, WeatherError>;
}

#[async_trait]
impl<T: WeatherProvider + ?Sized> WeatherProvider for Box<T> {
    async fn current_weather(&self, prefecture: &str) -> Result<WeatherReport, WeatherError> {
        (**self).current_weather(prefecture).await
    }
}

/// Construct the provider described by `config`.
///
/// A missing API key is not an error here; it surfaces from the first fetch so
/// the caller sees it as an ordinary weather failure.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherClient::from_config(config))
}

/// Fetch current weather for `prefecture` with a one-off client.
pub async fn fetch_weather(config: &Config, prefecture: &str) -> Result<WeatherReport, WeatherError> {
    OpenWeatherClient::from_config(config).current_weather(prefecture).await
}
