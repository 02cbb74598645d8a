//! Form-submission handling: validate the `prefecture` field, fetch once, and
//! fold the result into something the presentation layer can render directly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{WeatherError, WeatherProvider, WeatherReport};

/// The submitted form. `prefecture` is absent when the field was never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormInput {
    pub prefecture: Option<String>,
}

impl FormInput {
    pub fn new(prefecture: impl Into<String>) -> Self {
        Self { prefecture: Some(prefecture.into()) }
    }

    /// The selected prefecture, or `None` when nothing meaningful was chosen.
    pub fn selected(&self) -> Option<&str> {
        self.prefecture.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionOutcome {
    Weather {
        #[serde(rename = "weatherData")]
        weather_data: WeatherReport,
        prefecture: String,
    },
    Error {
        error: String,
    },
}

/// Run the weather lookup for one form submission.
///
/// Errors are returned typed so callers can tell configuration problems from
/// transient ones; [`handle_submission`] flattens them into a message.
pub async fn submit(
    form: &FormInput,
    provider: &dyn WeatherProvider,
) -> Result<(String, WeatherReport), WeatherError> {
    let prefecture = form.selected().ok_or(WeatherError::SelectionRequired)?;

    debug!(prefecture, "handling weather form submission");

    let report = provider.current_weather(prefecture).await?;
    Ok((prefecture.to_string(), report))
}

pub async fn handle_submission(form: &FormInput, provider: &dyn WeatherProvider) -> ActionOutcome {
    match submit(form, provider).await {
        Ok((prefecture, weather_data)) => ActionOutcome::Weather { weather_data, prefecture },
        Err(err) => ActionOutcome::Error { error: err.to_string() },
    }
}
