use thiserror::Error;

/// Shown when the form is submitted without a prefecture.
pub const SELECTION_REQUIRED_MESSAGE: &str = "都道府県を選択してください";

/// Everything that can go wrong between form submission and a rendered report.
///
/// The `Display` text is what the user sees; nothing else is surfaced.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key in the environment or the config file. Never retried.
    #[error("OpenWeatherMap API key is not configured")]
    MissingApiKey,

    /// Keep in sync with `SELECTION_REQUIRED_MESSAGE`.
    #[error("都道府県を選択してください")]
    SelectionRequired,

    /// The provider answered with a non-success status.
    #[error("Weather API Error: {message}")]
    Provider { status: u16, message: String },

    #[error("Failed to fetch weather data")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to fetch weather data")]
    Decode(#[source] serde_json::Error),
}

impl WeatherError {
    /// Configuration errors need the user to fix something before retrying helps.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, WeatherError::MissingApiKey | WeatherError::SelectionRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_embeds_message() {
        let err = WeatherError::Provider { status: 404, message: "city not found".into() };
        assert_eq!(err.to_string(), "Weather API Error: city not found");
        assert!(err.is_retryable());
    }

    #[test]
    fn configuration_errors_are_not_retryable() {
        assert!(!WeatherError::MissingApiKey.is_retryable());
        assert!(!WeatherError::SelectionRequired.is_retryable());
        assert_eq!(WeatherError::SelectionRequired.to_string(), SELECTION_REQUIRED_MESSAGE);
    }

    #[test]
    fn decode_error_is_generic() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WeatherError::Decode(source);
        assert_eq!(err.to_string(), "Failed to fetch weather data");
        assert!(std::error::Error::source(&err).is_some());
    }
}
